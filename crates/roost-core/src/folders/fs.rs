use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::errors::FolderError;

/// A directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub path: PathBuf,
    /// Lowercased extension, e.g. `xcodeproj`.
    pub extension: Option<String>,
}

impl Folder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        Self {
            name,
            path,
            extension,
        }
    }
}

/// Directory operations the engine needs. Swapped for an in-memory fake in
/// tests.
pub trait FileSystem {
    /// Resolve an existing directory.
    fn resolve(&self, path: &Path) -> Result<Folder, FolderError>;

    /// Immediate subdirectories of `parent`, sorted by name.
    fn subfolders(&self, parent: &Path) -> Result<Vec<Folder>, FolderError>;

    fn create_subfolder(&self, parent: &Path, name: &str) -> Result<Folder, FolderError>;

    /// Move (and possibly rename) `folder` to `<parent>/<name>`.
    fn move_folder(&self, folder: &Folder, parent: &Path, name: &str)
    -> Result<Folder, FolderError>;

    /// Whether an entry called `name` exists directly inside `folder`.
    fn contains_file(&self, folder: &Path, name: &str) -> bool;

    /// Delete `path` and everything below it.
    fn remove_folder(&self, path: &Path) -> Result<(), FolderError>;

    /// Whether two paths name the same directory.
    fn same_folder(&self, a: &Path, b: &Path) -> bool {
        a == b
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn resolve(&self, path: &Path) -> Result<Folder, FolderError> {
        let absolute = std::path::absolute(path).map_err(|e| FolderError::io(path, e))?;
        let metadata = fs::metadata(&absolute).map_err(|e| FolderError::io(&absolute, e))?;
        if !metadata.is_dir() {
            return Err(FolderError::NotADirectory { path: absolute });
        }
        Ok(Folder::new(absolute))
    }

    fn subfolders(&self, parent: &Path) -> Result<Vec<Folder>, FolderError> {
        let entries = fs::read_dir(parent).map_err(|e| FolderError::io(parent, e))?;
        let mut folders = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FolderError::io(parent, e))?;
            let is_dir = entry
                .file_type()
                .map_err(|e| FolderError::io(entry.path(), e))?
                .is_dir();
            if is_dir {
                folders.push(Folder::new(entry.path()));
            }
        }
        folders.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(folders)
    }

    fn create_subfolder(&self, parent: &Path, name: &str) -> Result<Folder, FolderError> {
        let path = parent.join(name);
        fs::create_dir(&path).map_err(|e| FolderError::io(&path, e))?;
        info!(event = "core.folder.create_completed", path = %path.display());
        Ok(Folder::new(path))
    }

    fn move_folder(
        &self,
        folder: &Folder,
        parent: &Path,
        name: &str,
    ) -> Result<Folder, FolderError> {
        let target = parent.join(name);
        fs::rename(&folder.path, &target).map_err(|e| FolderError::io(&folder.path, e))?;
        info!(
            event = "core.folder.move_completed",
            from = %folder.path.display(),
            to = %target.display()
        );
        Ok(Folder::new(target))
    }

    fn contains_file(&self, folder: &Path, name: &str) -> bool {
        folder.join(name).exists()
    }

    fn remove_folder(&self, path: &Path) -> Result<(), FolderError> {
        fs::remove_dir_all(path).map_err(|e| FolderError::io(path, e))?;
        info!(event = "core.folder.remove_completed", path = %path.display());
        Ok(())
    }

    fn same_folder(&self, a: &Path, b: &Path) -> bool {
        if a == b {
            return true;
        }
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
