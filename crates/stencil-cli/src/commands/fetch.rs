use console::style;
use miette::Result;

use stencil_core::assets::load_builtin;
use stencil_core::config::{assets_dir, load_config, validate_locale};
use stencil_core::StencilError;

use crate::commands::effective_locale;

pub fn run(name: String, locale: Option<String>, output: Option<String>) -> Result<()> {
    if let Some(code) = &locale {
        validate_locale(code)?;
    }

    let config = load_config()?;
    let assets = assets_dir(config.as_ref())?;
    let locale = effective_locale(locale, config.as_ref());

    let content = load_builtin(&assets, &name, &locale)?;

    let target = output.unwrap_or_else(|| name.clone());
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
