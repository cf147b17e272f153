//! Keeping folders on disk in step with the catalog.

pub mod detect;
mod errors;
mod fs;
pub mod reconcile;

pub use detect::detect_project_kind;
pub use errors::FolderError;
pub use fs::{FileSystem, Folder, LocalFileSystem};
pub use reconcile::{FolderAction, apply, ensure_name_free, place_folder, reconcile};
