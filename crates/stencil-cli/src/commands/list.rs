use console::style;
use miette::{miette, IntoDiagnostic, Result};

use stencil_core::config::{load_config, storage_root};
use stencil_core::global::{APP_FOLDER, TEMPLATES_FOLDER};
use stencil_core::{global_template_dir, list_templates, FsFolder, TemplateKind};

pub fn run(kind: Option<String>, json: bool) -> Result<()> {
    let kind = match kind.as_deref() {
        Some(tag) => Some(TemplateKind::from_tag(tag).ok_or_else(|| {
            miette!("unknown template kind '{tag}'; expected document, spreadsheet, or presentation")
        })?),
        None => None,
    };

    let config = load_config()?;
    let store_root = storage_root(config.as_ref())?;
    let root = FsFolder::new(&store_root);
    let folder = global_template_dir(&root)?;

    let templates = list_templates(folder.as_ref(), kind)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&templates).into_diagnostic()?
        );
        return Ok(());
    }

    if templates.is_empty() {
        println!(
            "No global templates. Copy .docx/.xlsx/.pptx files into '{}' to publish them.",
            style(store_root.join(APP_FOLDER).join(TEMPLATES_FOLDER).display()).cyan()
        );
        return Ok(());
    }

    println!(
        "{} ({} template{})\n",
        style("Global templates").bold(),
        templates.len(),
        if templates.len() == 1 { "" } else { "s" }
    );

    for template in &templates {
        let kind = if template.kind.is_empty() {
            "unrecognized"
        } else {
            template.kind.as_str()
        };
        println!("{} [{kind}]", style(&template.name).green().bold());
        println!("  {} {}", style("id:").dim(), template.id);
        println!();
    }

    Ok(())
}
