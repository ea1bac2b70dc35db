//! Resolution and serving of office document templates, keyed by locale
//! and format, for embedding in a content-management host.
//!
//! Built-in templates live on disk as `<assets>/<locale-dir>/new.<ext>`
//! and resolve through a fixed locale table with an `en-US` fallback.
//! Uploaded ("global") templates live behind the [`store::StorageFolder`]
//! abstraction, which the embedding application implements against its
//! own storage; [`store::FsFolder`] is the plain-filesystem reference
//! backend.

pub mod assets;
pub mod audit;
pub mod config;
pub mod error;
pub mod format;
pub mod global;
pub mod locale;
pub mod store;

pub use assets::{load_builtin, template_path};
pub use error::{Result, StencilError};
pub use format::{is_template_file, tag_for_mime, TemplateKind};
pub use global::{global_template_dir, list_templates, template_by_id, TemplateDescriptor};
pub use store::{FsFolder, StorageFolder, StorageItem};
