use std::path::{Path, PathBuf};

use crate::error::{Result, StencilError};
use crate::format::file_extension;
use crate::locale::asset_dir;

/// Base name of every built-in template file.
pub const TEMPLATE_BASENAME: &str = "new";

/// Path of the built-in template for `locale` with the given dotted
/// extension: `<assets_dir>/<canonical-dir>/new<ext>`.
///
/// Pure path assembly; the file is not required to exist and unknown
/// locales resolve through the fallback directory.
pub fn template_path(assets_dir: &Path, locale: &str, ext: &str) -> PathBuf {
    assets_dir
        .join(asset_dir(locale))
        .join(format!("{TEMPLATE_BASENAME}{ext}"))
}

/// Read the built-in template matching the extension of `name`, localized
/// for `locale`.
///
/// The extension is derived from `name` lowercased. A missing template
/// file is `AssetNotFound`; other read failures propagate as `Io`.
pub fn load_builtin(assets_dir: &Path, name: &str, locale: &str) -> Result<Vec<u8>> {
    let ext = file_extension(name);
    let path = template_path(assets_dir, locale, &ext);

    if !path.exists() {
        return Err(StencilError::AssetNotFound { path });
    }

    std::fs::read(&path).map_err(|e| StencilError::Io {
        context: format!("reading built-in template {}", path.display()),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_for_known_locale() {
        let path = template_path(Path::new("/srv/assets"), "de_DE", ".docx");
        assert_eq!(path, PathBuf::from("/srv/assets/de-DE/new.docx"));
    }

    #[test]
    fn path_for_unknown_locale_uses_fallback_dir() {
        let path = template_path(Path::new("/srv/assets"), "xx", ".xlsx");
        assert_eq!(path, PathBuf::from("/srv/assets/en-US/new.xlsx"));
    }

    #[test]
    fn path_for_every_known_locale_ends_in_mapped_dir() {
        for (code, dir) in crate::locale::known_locales() {
            let path = template_path(Path::new("assets"), code, ".pptx");
            assert!(path.ends_with(format!("{dir}/new.pptx")), "locale {code}");
        }
    }

    #[test]
    fn load_builtin_reads_bytes_for_locale() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("pt-BR");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("new.docx"), b"pt-br bytes").unwrap();

        let content = load_builtin(root.path(), "carta.docx", "pt_BR").unwrap();
        assert_eq!(content, b"pt-br bytes");
    }

    #[test]
    fn load_builtin_lowercases_extension_from_name() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("en-US");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("new.xlsx"), b"sheet").unwrap();

        let content = load_builtin(root.path(), "Budget.XLSX", "en").unwrap();
        assert_eq!(content, b"sheet");
    }

    #[test]
    fn load_builtin_missing_file_is_asset_not_found() {
        let root = tempfile::tempdir().unwrap();
        let result = load_builtin(root.path(), "deck.pptx", "en");
        assert!(matches!(
            result,
            Err(StencilError::AssetNotFound { ref path }) if path.ends_with("en-US/new.pptx")
        ));
    }
}
