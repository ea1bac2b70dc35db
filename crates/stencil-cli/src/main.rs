mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Resolve { ext, locale } => commands::resolve::run(ext, locale),
        Commands::Fetch {
            name,
            locale,
            output,
        } => commands::fetch::run(name, locale, output),
        Commands::List { kind, json } => commands::list::run(kind, json),
        Commands::Get { id, output } => commands::get::run(id, output),
        Commands::Check { path } => commands::check::run(path),
        Commands::Locales => commands::locales::run(),
    }
}
