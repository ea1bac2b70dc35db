use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::format::{tag_for_mime, TemplateKind};
use crate::store::StorageFolder;

/// Application folder created inside the host storage root.
pub const APP_FOLDER: &str = "stencil";

/// Subfolder of [`APP_FOLDER`] holding uploaded global templates.
pub const TEMPLATES_FOLDER: &str = "templates";

/// A global template as returned by a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub id: u64,
    pub name: String,
    /// Lowercase kind tag; empty when the stored mimetype is not one of
    /// the supported formats.
    #[serde(rename = "type")]
    pub kind: String,
}

fn ensure_child(folder: &dyn StorageFolder, name: &str) -> Result<Box<dyn StorageFolder>> {
    if folder.folder_exists(name)? {
        folder.folder(name)
    } else {
        folder.create_folder(name)
    }
}

/// Resolve the global template folder under the host storage root,
/// creating `stencil/templates` on first use.
pub fn global_template_dir(root: &dyn StorageFolder) -> Result<Box<dyn StorageFolder>> {
    let app = ensure_child(root, APP_FOLDER)?;
    ensure_child(app.as_ref(), TEMPLATES_FOLDER)
}

/// List global templates, optionally restricted to one kind.
///
/// With a kind the storage's mimetype search is used; otherwise the full
/// directory listing. Storage failures propagate to the caller.
pub fn list_templates(
    folder: &dyn StorageFolder,
    kind: Option<TemplateKind>,
) -> Result<Vec<TemplateDescriptor>> {
    let items = match kind {
        Some(kind) => folder.search_by_mime(kind.mime())?,
        None => folder.list()?,
    };

    Ok(items
        .iter()
        .map(|item| TemplateDescriptor {
            id: item.id(),
            name: item.name().to_string(),
            kind: tag_for_mime(item.mime_type()).to_string(),
        })
        .collect())
}

/// Fetch a global template's content by id.
///
/// A failed or empty lookup is logged and yields `Ok(None)`. Reading the
/// content of a found item can still fail, and that failure propagates.
pub fn template_by_id(folder: &dyn StorageFolder, id: u64) -> Result<Option<Vec<u8>>> {
    let items = match folder.by_id(id) {
        Ok(items) => items,
        Err(e) => {
            warn!(id, error = %e, "global template lookup failed");
            return Ok(None);
        }
    };

    let item = match items.first() {
        Some(item) => item,
        None => {
            info!(id, "global template not found");
            return Ok(None);
        }
    };

    item.content().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StencilError;
    use crate::format::mime;
    use crate::store::{FsFolder, StorageItem};

    // In-memory folder for exercising the listing and lookup paths
    // without touching the filesystem.
    struct MemFolder {
        items: Vec<MemItem>,
        fail_lookups: bool,
    }

    #[derive(Clone)]
    struct MemItem {
        id: u64,
        name: &'static str,
        mime: &'static str,
        content: std::result::Result<&'static [u8], ()>,
    }

    impl StorageItem for MemItem {
        fn id(&self) -> u64 {
            self.id
        }
        fn name(&self) -> &str {
            self.name
        }
        fn mime_type(&self) -> &str {
            self.mime
        }
        fn content(&self) -> Result<Vec<u8>> {
            match self.content {
                Ok(bytes) => Ok(bytes.to_vec()),
                Err(()) => Err(StencilError::Storage {
                    context: format!("content unavailable for {}", self.name),
                }),
            }
        }
    }

    impl StorageFolder for MemFolder {
        fn folder_exists(&self, _name: &str) -> Result<bool> {
            Ok(false)
        }
        fn folder(&self, name: &str) -> Result<Box<dyn StorageFolder>> {
            Err(StencilError::FolderNotFound {
                name: name.to_string(),
            })
        }
        fn create_folder(&self, name: &str) -> Result<Box<dyn StorageFolder>> {
            Err(StencilError::Storage {
                context: format!("cannot create {name}"),
            })
        }
        fn list(&self) -> Result<Vec<Box<dyn StorageItem>>> {
            if self.fail_lookups {
                return Err(StencilError::Storage {
                    context: "listing failed".into(),
                });
            }
            Ok(self
                .items
                .iter()
                .cloned()
                .map(|i| Box::new(i) as Box<dyn StorageItem>)
                .collect())
        }
        fn search_by_mime(&self, mime_type: &str) -> Result<Vec<Box<dyn StorageItem>>> {
            if self.fail_lookups {
                return Err(StencilError::Storage {
                    context: "search failed".into(),
                });
            }
            Ok(self
                .items
                .iter()
                .filter(|i| i.mime == mime_type)
                .cloned()
                .map(|i| Box::new(i) as Box<dyn StorageItem>)
                .collect())
        }
        fn by_id(&self, id: u64) -> Result<Vec<Box<dyn StorageItem>>> {
            if self.fail_lookups {
                return Err(StencilError::Storage {
                    context: "id lookup failed".into(),
                });
            }
            Ok(self
                .items
                .iter()
                .filter(|i| i.id == id)
                .cloned()
                .map(|i| Box::new(i) as Box<dyn StorageItem>)
                .collect())
        }
    }

    fn sample_folder() -> MemFolder {
        MemFolder {
            items: vec![
                MemItem {
                    id: 1,
                    name: "letter.docx",
                    mime: mime::DOCUMENT,
                    content: Ok(b"letter"),
                },
                MemItem {
                    id: 2,
                    name: "budget.xlsx",
                    mime: mime::SPREADSHEET,
                    content: Ok(b"budget"),
                },
                MemItem {
                    id: 3,
                    name: "notes.txt",
                    mime: "text/plain",
                    content: Ok(b"notes"),
                },
                MemItem {
                    id: 4,
                    name: "broken.pptx",
                    mime: mime::PRESENTATION,
                    content: Err(()),
                },
            ],
            fail_lookups: false,
        }
    }

    // ── Listing ─────────────────────────────────────────────────────────

    #[test]
    fn list_maps_items_to_descriptors() {
        let folder = sample_folder();
        let templates = list_templates(&folder, None).unwrap();

        assert_eq!(templates.len(), 4);
        assert_eq!(
            templates[0],
            TemplateDescriptor {
                id: 1,
                name: "letter.docx".into(),
                kind: "document".into(),
            }
        );
    }

    #[test]
    fn list_marks_unrecognized_mimes_with_empty_kind() {
        let folder = sample_folder();
        let templates = list_templates(&folder, None).unwrap();

        let notes = templates.iter().find(|t| t.name == "notes.txt").unwrap();
        assert_eq!(notes.kind, "");
    }

    #[test]
    fn list_with_kind_uses_mime_search() {
        let folder = sample_folder();
        let sheets = list_templates(&folder, Some(TemplateKind::Spreadsheet)).unwrap();

        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name, "budget.xlsx");
        assert_eq!(sheets[0].kind, "spreadsheet");
    }

    #[test]
    fn list_propagates_storage_errors() {
        let folder = MemFolder {
            items: Vec::new(),
            fail_lookups: true,
        };
        assert!(list_templates(&folder, None).is_err());
        assert!(list_templates(&folder, Some(TemplateKind::Document)).is_err());
    }

    #[test]
    fn descriptor_serializes_kind_as_type() {
        let descriptor = TemplateDescriptor {
            id: 7,
            name: "deck.pptx".into(),
            kind: "presentation".into(),
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["type"], "presentation");
        assert_eq!(json["id"], 7);
    }

    // ── Fetch by id ─────────────────────────────────────────────────────

    #[test]
    fn template_by_id_returns_content() {
        let folder = sample_folder();
        let content = template_by_id(&folder, 2).unwrap();
        assert_eq!(content.as_deref(), Some(b"budget".as_slice()));
    }

    #[test]
    fn template_by_id_missing_is_none_not_error() {
        let folder = sample_folder();
        let content = template_by_id(&folder, 999).unwrap();
        assert!(content.is_none());
    }

    #[test]
    fn template_by_id_lookup_failure_is_none_not_error() {
        let folder = MemFolder {
            items: Vec::new(),
            fail_lookups: true,
        };
        let content = template_by_id(&folder, 1).unwrap();
        assert!(content.is_none());
    }

    #[test]
    fn template_by_id_content_failure_propagates() {
        let folder = sample_folder();
        assert!(template_by_id(&folder, 4).is_err());
    }

    // ── Provisioning ────────────────────────────────────────────────────

    #[test]
    fn global_template_dir_creates_nested_folders() {
        let dir = tempfile::tempdir().unwrap();
        let root = FsFolder::new(dir.path());

        let templates = global_template_dir(&root).unwrap();
        assert!(templates.list().unwrap().is_empty());
        assert!(dir.path().join("stencil/templates").is_dir());
    }

    #[test]
    fn global_template_dir_reuses_existing_folders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("stencil/templates")).unwrap();
        std::fs::write(
            dir.path().join("stencil/templates/a.docx"),
            b"existing",
        )
        .unwrap();

        let root = FsFolder::new(dir.path());
        let templates = global_template_dir(&root).unwrap();
        assert_eq!(templates.list().unwrap().len(), 1);
    }
}
