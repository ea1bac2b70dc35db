/// Canonical OOXML mimetypes for the supported template formats.
pub mod mime {
    pub const DOCUMENT: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
    pub const SPREADSHEET: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation";
}

/// The three supported template formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Document,
    Spreadsheet,
    Presentation,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Document,
        TemplateKind::Spreadsheet,
        TemplateKind::Presentation,
    ];

    /// Canonical mimetype of this kind.
    pub fn mime(self) -> &'static str {
        match self {
            TemplateKind::Document => mime::DOCUMENT,
            TemplateKind::Spreadsheet => mime::SPREADSHEET,
            TemplateKind::Presentation => mime::PRESENTATION,
        }
    }

    /// Lowercase tag used in listings and client payloads.
    pub fn tag(self) -> &'static str {
        match self {
            TemplateKind::Document => "document",
            TemplateKind::Spreadsheet => "spreadsheet",
            TemplateKind::Presentation => "presentation",
        }
    }

    /// File extension of this kind, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            TemplateKind::Document => "docx",
            TemplateKind::Spreadsheet => "xlsx",
            TemplateKind::Presentation => "pptx",
        }
    }

    /// Kind for a mimetype; `None` for anything unrecognized.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        TemplateKind::ALL.into_iter().find(|k| k.mime() == mime_type)
    }

    /// Kind for a tag string; `None` for anything unrecognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        TemplateKind::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Kind for a file extension (without dot), case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        TemplateKind::ALL.into_iter().find(|k| k.extension() == ext)
    }
}

/// Tag string for a mimetype; empty for anything unrecognized.
///
/// The empty string is the sentinel clients receive for templates stored
/// with a foreign mimetype; it is not an error.
pub fn tag_for_mime(mime_type: &str) -> &'static str {
    TemplateKind::from_mime(mime_type)
        .map(TemplateKind::tag)
        .unwrap_or("")
}

/// Lowercase extension of `name` including the leading dot; empty when the
/// name has none.
pub fn file_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => format!(".{}", ext.to_ascii_lowercase()),
        None => String::new(),
    }
}

/// True when `name` carries one of the supported template extensions.
pub fn is_template_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| TemplateKind::from_extension(ext).is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Kind lookups ────────────────────────────────────────────────────

    #[test]
    fn mime_and_tag_are_inverses_over_all_kinds() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_mime(kind.mime()), Some(kind));
            assert_eq!(TemplateKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn spreadsheet_mime_maps_both_ways() {
        let mime_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
        assert_eq!(tag_for_mime(mime_type), "spreadsheet");
        assert_eq!(
            TemplateKind::from_tag("spreadsheet").map(TemplateKind::mime),
            Some(mime_type)
        );
    }

    #[test]
    fn unknown_mime_yields_empty_tag() {
        assert_eq!(tag_for_mime("application/pdf"), "");
        assert_eq!(tag_for_mime(""), "");
        assert!(TemplateKind::from_mime("text/plain").is_none());
    }

    #[test]
    fn unknown_tag_yields_none() {
        assert!(TemplateKind::from_tag("drawing").is_none());
        assert!(TemplateKind::from_tag("").is_none());
        // Tags are exact, not case-insensitive.
        assert!(TemplateKind::from_tag("Document").is_none());
    }

    // ── Extensions ──────────────────────────────────────────────────────

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(
            TemplateKind::from_extension("DOCX"),
            Some(TemplateKind::Document)
        );
        assert_eq!(
            TemplateKind::from_extension("Xlsx"),
            Some(TemplateKind::Spreadsheet)
        );
    }

    #[test]
    fn template_file_gate_accepts_only_supported_extensions() {
        assert!(is_template_file("letter.docx"));
        assert!(is_template_file("BUDGET.XLSX"));
        assert!(is_template_file("deck.pptx"));

        assert!(!is_template_file("letter.pdf"));
        assert!(!is_template_file("letter.doc"));
        assert!(!is_template_file("docx"));
        assert!(!is_template_file(""));
    }

    #[test]
    fn file_extension_is_lowercased_and_dotted() {
        assert_eq!(file_extension("Report.DOCX"), ".docx");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("noext"), "");
    }
}
