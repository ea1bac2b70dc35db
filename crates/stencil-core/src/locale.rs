/// Mapping from short locale codes to canonical asset directory names.
///
/// Lookup is exact; a combined code without its own row does not fall back
/// to its base language ("de_AT" resolves to the default, not to "de-DE").
const LOCALE_DIRS: &[(&str, &str)] = &[
    ("az", "az-Latn-AZ"),
    ("bg", "bg-BG"),
    ("cs", "cs-CZ"),
    ("de", "de-DE"),
    ("de_DE", "de-DE"),
    ("el", "el-GR"),
    ("en", "en-US"),
    ("en_GB", "en-GB"),
    ("es", "es-ES"),
    ("fr", "fr-FR"),
    ("it", "it-IT"),
    ("ja", "ja-JP"),
    ("ko", "ko-KR"),
    ("lv", "lv-LV"),
    ("nl", "nl-NL"),
    ("pl", "pl-PL"),
    ("pt_BR", "pt-BR"),
    ("pt_PT", "pt-PT"),
    ("ru", "ru-RU"),
    ("sk", "sk-SK"),
    ("sv", "sv-SE"),
    ("uk", "uk-UA"),
    ("vi", "vi-VN"),
    ("zh_CN", "zh-CN"),
];

/// Directory used for every locale code without a table entry.
///
/// Must match the "en" row of the table.
pub const FALLBACK_DIR: &str = "en-US";

/// Canonical asset directory for a locale code, falling back to
/// [`FALLBACK_DIR`] when the code is unknown. Total function.
pub fn asset_dir(locale: &str) -> &'static str {
    LOCALE_DIRS
        .iter()
        .find(|&&(code, _)| code == locale)
        .map(|&(_, dir)| dir)
        .unwrap_or(FALLBACK_DIR)
}

/// All (code, directory) rows of the locale table, in table order.
pub fn known_locales() -> impl Iterator<Item = (&'static str, &'static str)> {
    LOCALE_DIRS.iter().copied()
}

/// Unique canonical directory names, sorted. Shorter than the table since
/// several codes share a directory.
pub fn canonical_dirs() -> Vec<&'static str> {
    let mut dirs: Vec<_> = LOCALE_DIRS.iter().map(|&(_, dir)| dir).collect();
    dirs.sort_unstable();
    dirs.dedup();
    dirs
}

/// Best-effort locale of the current process environment.
///
/// Reads `LC_ALL`, `LC_MESSAGES`, then `LANG`, and strips any encoding or
/// modifier suffix ("de_DE.UTF-8" yields "de_DE"). Returns `None` when no
/// variable carries a usable code. An embedding application passes its own
/// locale instead of calling this.
pub fn system_locale() -> Option<String> {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Some(code) = std::env::var(var).ok().as_deref().and_then(normalize) {
            return Some(code);
        }
    }
    None
}

/// Strip encoding/modifier suffixes and reject the POSIX placeholders.
fn normalize(raw: &str) -> Option<String> {
    let code = raw.split(['.', '@']).next().unwrap_or("").trim();
    if code.is_empty() || code == "C" || code == "POSIX" {
        return None;
    }
    Some(code.to_string())
}
