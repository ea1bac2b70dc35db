use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{Result, StencilError};
use crate::format::TemplateKind;
use crate::store::{StorageFolder, StorageItem};

/// Mimetype reported for files outside the supported template formats.
const OCTET_STREAM: &str = "application/octet-stream";

/// Plain-filesystem storage backend rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsFolder {
    root: PathBuf,
}

impl FsFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> Result<Vec<FsItem>> {
        let read_dir = std::fs::read_dir(&self.root).map_err(|e| StencilError::Io {
            context: format!("reading template directory {}", self.root.display()),
            source: e,
        })?;

        let mut items = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| StencilError::Io {
                context: "reading template directory entry".into(),
                source: e,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            items.push(FsItem::new(path));
        }

        // Deterministic listing order regardless of filesystem iteration.
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }
}

/// Stable id for a stored file, derived from a digest of its path.
fn item_id(path: &Path) -> u64 {
    let digest = Sha256::digest(path.to_string_lossy().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

#[derive(Debug)]
struct FsItem {
    id: u64,
    name: String,
    path: PathBuf,
    mime: &'static str,
}

impl FsItem {
    fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = path
            .extension()
            .and_then(|e| TemplateKind::from_extension(&e.to_string_lossy()))
            .map(TemplateKind::mime)
            .unwrap_or(OCTET_STREAM);

        Self {
            id: item_id(&path),
            name,
            path,
            mime,
        }
    }
}

impl StorageItem for FsItem {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        self.mime
    }

    fn content(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| StencilError::Io {
            context: format!("reading template {}", self.path.display()),
            source: e,
        })
    }
}

impl StorageFolder for FsFolder {
    fn folder_exists(&self, name: &str) -> Result<bool> {
        Ok(self.root.join(name).is_dir())
    }

    fn folder(&self, name: &str) -> Result<Box<dyn StorageFolder>> {
        let path = self.root.join(name);
        if !path.is_dir() {
            return Err(StencilError::FolderNotFound {
                name: name.to_string(),
            });
        }
        Ok(Box::new(FsFolder::new(path)))
    }

    fn create_folder(&self, name: &str) -> Result<Box<dyn StorageFolder>> {
        let path = self.root.join(name);
        std::fs::create_dir_all(&path).map_err(|e| StencilError::Io {
            context: format!("creating template directory {}", path.display()),
            source: e,
        })?;
        Ok(Box::new(FsFolder::new(path)))
    }

    fn list(&self) -> Result<Vec<Box<dyn StorageItem>>> {
        Ok(self
            .scan()?
            .into_iter()
            .map(|i| Box::new(i) as Box<dyn StorageItem>)
            .collect())
    }

    fn search_by_mime(&self, mime_type: &str) -> Result<Vec<Box<dyn StorageItem>>> {
        Ok(self
            .scan()?
            .into_iter()
            .filter(|i| i.mime == mime_type)
            .map(|i| Box::new(i) as Box<dyn StorageItem>)
            .collect())
    }

    fn by_id(&self, id: u64) -> Result<Vec<Box<dyn StorageItem>>> {
        Ok(self
            .scan()?
            .into_iter()
            .filter(|i| i.id == id)
            .map(|i| Box::new(i) as Box<dyn StorageItem>)
            .collect())
    }
}
