pub mod fs;

pub use fs::FsFolder;

use crate::error::Result;

/// A single file entry in a template folder.
pub trait StorageItem {
    /// Stable numeric identifier of the item within its storage.
    fn id(&self) -> u64;

    /// File name of the item.
    fn name(&self) -> &str;

    /// Mimetype reported by the storage.
    fn mime_type(&self) -> &str;

    /// Read the full item content.
    fn content(&self) -> Result<Vec<u8>>;
}

/// Folder abstraction over the storage of the embedding application.
///
/// A host with its own virtual filesystem implements this against its
/// node API; [`FsFolder`] is the plain-filesystem reference backend used
/// by the CLI and by tests.
pub trait StorageFolder {
    /// Whether a direct subfolder with this name exists.
    fn folder_exists(&self, name: &str) -> Result<bool>;

    /// Open an existing direct subfolder.
    fn folder(&self, name: &str) -> Result<Box<dyn StorageFolder>>;

    /// Create (or open) a direct subfolder.
    fn create_folder(&self, name: &str) -> Result<Box<dyn StorageFolder>>;

    /// Non-recursive listing of the folder's files.
    fn list(&self) -> Result<Vec<Box<dyn StorageItem>>>;

    /// Files whose mimetype matches `mime_type` exactly.
    fn search_by_mime(&self, mime_type: &str) -> Result<Vec<Box<dyn StorageItem>>>;

    /// Items with the given id; empty when none match.
    fn by_id(&self, id: u64) -> Result<Vec<Box<dyn StorageItem>>>;
}
