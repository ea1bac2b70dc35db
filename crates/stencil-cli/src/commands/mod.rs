pub mod check;
pub mod fetch;
pub mod get;
pub mod list;
pub mod locales;
pub mod resolve;

use stencil_core::config::StencilConfig;
use stencil_core::locale::system_locale;

/// Locale for a command: explicit flag, then config, then the process
/// environment, then "en".
pub fn effective_locale(flag: Option<String>, config: Option<&StencilConfig>) -> String {
    flag.or_else(|| config.and_then(|c| c.locale.clone()))
        .or_else(system_locale)
        .unwrap_or_else(|| "en".to_string())
}
