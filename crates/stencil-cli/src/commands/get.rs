use console::style;
use miette::Result;

use stencil_core::config::{load_config, storage_root};
use stencil_core::{global_template_dir, list_templates, template_by_id, FsFolder, StencilError};

pub fn run(id: u64, output: Option<String>) -> Result<()> {
    let config = load_config()?;
    let root = FsFolder::new(storage_root(config.as_ref())?);
    let folder = global_template_dir(&root)?;

    let content = match template_by_id(folder.as_ref(), id)? {
        Some(content) => content,
        None => {
            println!("{} No template with id {id}", style("✗").red().bold());
            std::process::exit(1);
        }
    };

    // Default the output path to the stored name.
    let stored_name = list_templates(folder.as_ref(), None)?
        .into_iter()
        .find(|t| t.id == id)
        .map(|t| t.name);
    let target = output
        .or(stored_name)
        .unwrap_or_else(|| format!("template-{id}"));

    std::fs::write(&target, &content).map_err(|e| StencilError::Io {
        context: format!("writing {target}"),
        source: e,
    })?;

    println!(
        "{} Wrote {} byte(s) to {}",
        style("✓").green().bold(),
        content.len(),
        style(&target).cyan()
    );
    Ok(())
}
