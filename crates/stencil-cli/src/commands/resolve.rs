use miette::Result;

use stencil_core::assets::template_path;
use stencil_core::config::{assets_dir, load_config, validate_locale};

use crate::commands::effective_locale;

pub fn run(ext: String, locale: Option<String>) -> Result<()> {
    if let Some(code) = &locale {
        validate_locale(code)?;
    }

    let config = load_config()?;
    let assets = assets_dir(config.as_ref())?;
    let locale = effective_locale(locale, config.as_ref());

    let ext = if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    };

    println!("{}", template_path(&assets, &locale, &ext).display());
    Ok(())
}
