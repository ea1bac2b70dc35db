use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StencilError {
    #[error("Built-in template not found at {path}")]
    #[diagnostic(help("Ensure the locale asset tree is installed under the assets directory"))]
    AssetNotFound { path: PathBuf },

    #[error("Assets directory not found: {path}")]
    #[diagnostic(help("Set STENCIL_ASSETS_DIR or assets_dir in the stencil config"))]
    AssetsDirMissing { path: PathBuf },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse stencil config")]
    #[diagnostic(help("Check the TOML syntax in your config.toml file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid locale code '{value}': {reason}")]
    #[diagnostic(help("Locale codes look like 'en', 'de_DE', or 'pt_BR'"))]
    InvalidLocale { value: String, reason: String },

    #[error("No storage folder named '{name}'")]
    FolderNotFound { name: String },

    #[error("Storage error: {context}")]
    Storage { context: String },

    #[error("Glob pattern error: {pattern}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Unable to determine a {purpose} directory")]
    #[diagnostic(help(
        "Set STENCIL_ASSETS_DIR / STENCIL_STORAGE_ROOT or add the path to the stencil config"
    ))]
    NoBaseDir { purpose: &'static str },
}

pub type Result<T> = std::result::Result<T, StencilError>;
