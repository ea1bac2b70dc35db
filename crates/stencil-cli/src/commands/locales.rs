use console::style;
use miette::Result;

use stencil_core::locale::{known_locales, FALLBACK_DIR};

pub fn run() -> Result<()> {
    println!("{}\n", style("Supported locales").bold());

    for (code, dir) in known_locales() {
        println!("  {} {}", style(format!("{code:<6}")).cyan(), dir);
    }

    println!(
        "\nUnknown codes resolve to {}.",
        style(FALLBACK_DIR).cyan()
    );
    Ok(())
}
