//! In-memory collaborators for exercising operations without touching disk.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::folders::{FileSystem, Folder, FolderError};
use crate::prompt::{PromptError, Prompter};
use crate::store::{CatalogStore, StoreError};

/// Directory tree held in memory. Adding a path adds its ancestors.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.borrow_mut().insert(path.to_path_buf());
        self
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    fn add_dir(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn already_exists(path: &Path) -> FolderError {
        FolderError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "already exists"),
        }
    }
}

fn rebase(set: &mut BTreeSet<PathBuf>, from: &Path, to: &Path) {
    let moved: Vec<PathBuf> = set.iter().filter(|p| p.starts_with(from)).cloned().collect();
    for path in moved {
        set.remove(&path);
        if let Ok(rest) = path.strip_prefix(from) {
            set.insert(to.join(rest));
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn resolve(&self, path: &Path) -> Result<Folder, FolderError> {
        if self.has_dir(path) {
            Ok(Folder::new(path))
        } else if self.files.borrow().contains(path) {
            Err(FolderError::NotADirectory {
                path: path.to_path_buf(),
            })
        } else {
            Err(FolderError::NotFound {
                path: path.to_path_buf(),
            })
        }
    }

    fn subfolders(&self, parent: &Path) -> Result<Vec<Folder>, FolderError> {
        self.resolve(parent)?;
        Ok(self
            .dirs
            .borrow()
            .iter()
            .filter(|p| p.parent() == Some(parent))
            .map(Folder::new)
            .collect())
    }

    fn create_subfolder(&self, parent: &Path, name: &str) -> Result<Folder, FolderError> {
        self.resolve(parent)?;
        let path = parent.join(name);
        if self.has_dir(&path) {
            return Err(Self::already_exists(&path));
        }
        self.dirs.borrow_mut().insert(path.clone());
        Ok(Folder::new(path))
    }

    fn move_folder(
        &self,
        folder: &Folder,
        parent: &Path,
        name: &str,
    ) -> Result<Folder, FolderError> {
        self.resolve(&folder.path)?;
        self.resolve(parent)?;
        let target = parent.join(name);
        if self.has_dir(&target) {
            return Err(Self::already_exists(&target));
        }
        rebase(&mut self.dirs.borrow_mut(), &folder.path, &target);
        rebase(&mut self.files.borrow_mut(), &folder.path, &target);
        Ok(Folder::new(target))
    }

    fn contains_file(&self, folder: &Path, name: &str) -> bool {
        let path = folder.join(name);
        self.has_dir(&path) || self.files.borrow().contains(&path)
    }

    fn remove_folder(&self, path: &Path) -> Result<(), FolderError> {
        self.resolve(path)?;
        self.dirs.borrow_mut().retain(|p| !p.starts_with(path));
        self.files.borrow_mut().retain(|p| !p.starts_with(path));
        Ok(())
    }
}

/// Catalog store that keeps the last saved catalog in memory.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    pub catalog: Catalog,
    pub saves: usize,
    /// Make every save fail with an I/O error.
    pub fail_saves: bool,
}

impl MemoryCatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load(&self) -> Result<Catalog, StoreError> {
        Ok(self.catalog.clone())
    }

    fn save(&mut self, catalog: &Catalog) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::IoError {
                path: PathBuf::from("catalog.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.catalog = catalog.clone();
        self.saves += 1;
        Ok(())
    }
}

/// [`Prompter`] that replays queued answers and records every question.
/// Running out of answers behaves like [`crate::prompt::DeclineAll`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirms: RefCell<VecDeque<bool>>,
    selections: RefCell<VecDeque<Option<usize>>>,
    inputs: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm_with(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn select_with(self, answer: Option<usize>) -> Self {
        self.selections.borrow_mut().push_back(answer);
        self
    }

    pub fn input_with(self, answer: Option<&str>) -> Self {
        self.inputs
            .borrow_mut()
            .push_back(answer.map(str::to_string));
        self
    }

    /// Every message shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool, PromptError> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(false))
    }

    fn select(&self, message: &str, _options: &[String]) -> Result<Option<usize>, PromptError> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.selections.borrow_mut().pop_front().flatten())
    }

    fn input(&self, message: &str) -> Result<Option<String>, PromptError> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.inputs.borrow_mut().pop_front().flatten())
    }
}
