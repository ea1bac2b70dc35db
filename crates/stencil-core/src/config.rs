use std::path::PathBuf;

use regex_lite::Regex;
use serde::Deserialize;

use crate::error::{Result, StencilError};

/// Environment override for the built-in assets directory.
pub const ASSETS_DIR_ENV: &str = "STENCIL_ASSETS_DIR";

/// Environment override for the storage root holding global templates.
pub const STORAGE_ROOT_ENV: &str = "STENCIL_STORAGE_ROOT";

/// Operator configuration loaded from `<config-dir>/stencil/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct StencilConfig {
    /// Directory holding the built-in locale asset tree.
    pub assets_dir: Option<PathBuf>,

    /// Storage root under which the global template folder is created.
    pub storage_root: Option<PathBuf>,

    /// Locale used when the caller does not supply one.
    pub locale: Option<String>,
}

impl StencilConfig {
    /// Validate field shapes that deserialization cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(locale) = &self.locale {
            validate_locale(locale)?;
        }
        Ok(())
    }
}

/// Check that a locale code has the `xx` or `xx_YY` shape.
///
/// Only the shape is checked; unknown-but-well-formed codes are accepted
/// and resolve through the fallback at lookup time.
pub fn validate_locale(value: &str) -> Result<()> {
    let shape = Regex::new(r"^[a-z]{2,3}(_[A-Z]{2})?$").expect("valid regex");
    if shape.is_match(value) {
        Ok(())
    } else {
        Err(StencilError::InvalidLocale {
            value: value.to_string(),
            reason: "expected a lowercase language code with optional uppercase region".into(),
        })
    }
}

/// Path to the user config file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stencil").join("config.toml"))
}

/// Load the operator configuration.
///
/// Returns `Ok(None)` if the config file does not exist.
/// Returns `Err` if the file exists but cannot be read, parsed, or
/// validated.
pub fn load_config() -> Result<Option<StencilConfig>> {
    let path = match config_path() {
        Some(p) => p,
        None => return Ok(None),
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| StencilError::Io {
        context: format!("reading config {}", path.display()),
        source: e,
    })?;

    let config: StencilConfig =
        toml::from_str(&content).map_err(|e| StencilError::ConfigParse { source: e })?;

    config.validate()?;

    Ok(Some(config))
}

/// Resolve the assets directory.
///
/// Checks `STENCIL_ASSETS_DIR` first, then the config value, then the
/// platform data directory.
pub fn assets_dir(config: Option<&StencilConfig>) -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ASSETS_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.and_then(|c| c.assets_dir.clone()) {
        return Ok(dir);
    }
    dirs::data_dir()
        .map(|d| d.join("stencil").join("assets"))
        .ok_or(StencilError::NoBaseDir { purpose: "assets" })
}

/// Resolve the storage root for global templates.
///
/// Same precedence as [`assets_dir`]; the default is the platform data
/// directory itself, inside which the application folder is created on
/// first use.
pub fn storage_root(config: Option<&StencilConfig>) -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(STORAGE_ROOT_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.and_then(|c| c.storage_root.clone()) {
        return Ok(dir);
    }
    dirs::data_dir().ok_or(StencilError::NoBaseDir { purpose: "storage" })
}
