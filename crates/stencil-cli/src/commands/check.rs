use std::path::PathBuf;

use console::style;
use miette::Result;

use stencil_core::audit::audit_assets;
use stencil_core::config::{assets_dir, load_config};

pub fn run(path: Option<String>) -> Result<()> {
    let config = load_config()?;
    let assets = match path {
        Some(p) => PathBuf::from(p),
        None => assets_dir(config.as_ref())?,
    };

    println!(
        "{} {}",
        style("Checking assets at").bold(),
        style(assets.display()).cyan()
    );

    let report = audit_assets(&assets)?;

    println!("  Locales: {}", report.locales);

    if !report.warnings.is_empty() {
        println!("\n{}", style("Warnings:").yellow().bold());
        for w in &report.warnings {
            println!("  {} {}", style("⚠").yellow(), w);
        }
    }

    if !report.errors.is_empty() {
        println!("\n{}", style("Errors:").red().bold());
        for e in &report.errors {
            println!("  {} {}", style("✗").red(), e);
        }
        println!(
            "\n{} Asset tree has {} error(s)",
            style("✗").red().bold(),
            report.errors.len()
        );
        std::process::exit(1);
    }

    println!("\n{} Asset tree is complete!", style("✓").green().bold());
    Ok(())
}
