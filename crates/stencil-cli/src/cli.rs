use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stencil",
    about = "Inspect and serve office document templates",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved path of a built-in template
    Resolve {
        /// File extension (e.g. docx or .docx)
        ext: String,

        /// Locale code (default: config, then environment)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Write a built-in template to a file
    Fetch {
        /// Document name; its extension selects the template
        name: String,

        /// Locale code (default: config, then environment)
        #[arg(short, long)]
        locale: Option<String>,

        /// Output path (default: the document name in the current directory)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List global templates from the template store
    List {
        /// Restrict to one kind: document, spreadsheet, or presentation
        #[arg(short, long)]
        kind: Option<String>,

        /// Emit JSON instead of styled text
        #[arg(long)]
        json: bool,
    },

    /// Fetch a global template by id
    Get {
        /// Template id as shown by `stencil list`
        id: u64,

        /// Output path (default: the stored template name)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Audit the built-in asset tree
    Check {
        /// Assets directory to audit (default: the configured one)
        path: Option<String>,
    },

    /// Print the locale table
    Locales,
}
