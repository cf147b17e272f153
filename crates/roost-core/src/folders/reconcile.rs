//! Decide how to make `<parent>/<name>` exist for an entity, then do it.
//!
//! [`reconcile`] only looks; [`apply`] is the single place that touches the
//! disk. A folder that already sits at the target is reused (`NoOp`), a
//! supplied folder elsewhere is moved, and otherwise a fresh subfolder is
//! created. A different folder already occupying the target name is an
//! error.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::FolderError;
use super::fs::{FileSystem, Folder};
use crate::names;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderAction {
    NoOp(Folder),
    CreateSubfolder { parent: PathBuf, name: String },
    Move {
        folder: Folder,
        parent: PathBuf,
        name: String,
    },
}

pub fn reconcile(
    fs: &dyn FileSystem,
    existing: Option<&Folder>,
    parent: &Path,
    desired_name: &str,
) -> Result<FolderAction, FolderError> {
    let occupant = fs
        .subfolders(parent)?
        .into_iter()
        .find(|f| names::matches(desired_name, Some(&f.name)));

    let action = match (occupant, existing) {
        (Some(occupant), Some(existing)) if fs.same_folder(&occupant.path, &existing.path) => {
            FolderAction::NoOp(occupant)
        }
        (Some(occupant), _) => {
            return Err(FolderError::FolderNameTaken {
                name: occupant.name,
                parent: parent.to_path_buf(),
            });
        }
        (None, Some(existing)) => FolderAction::Move {
            folder: existing.clone(),
            parent: parent.to_path_buf(),
            name: desired_name.to_string(),
        },
        (None, None) => FolderAction::CreateSubfolder {
            parent: parent.to_path_buf(),
            name: desired_name.to_string(),
        },
    };

    debug!(
        event = "core.folder.reconcile_completed",
        parent = %parent.display(),
        name = desired_name,
        action = ?action
    );
    Ok(action)
}

pub fn apply(fs: &dyn FileSystem, action: FolderAction) -> Result<Folder, FolderError> {
    match action {
        FolderAction::NoOp(folder) => Ok(folder),
        FolderAction::CreateSubfolder { parent, name } => fs.create_subfolder(&parent, &name),
        FolderAction::Move {
            folder,
            parent,
            name,
        } => fs.move_folder(&folder, &parent, &name),
    }
}

/// Fail when some folder already answers to `name` inside `parent`.
///
/// Used when an entity changes name or parent while its own folder is
/// absent. A missing `parent` holds nothing.
pub fn ensure_name_free(
    fs: &dyn FileSystem,
    parent: &Path,
    name: &str,
) -> Result<(), FolderError> {
    match reconcile(fs, None, parent, name) {
        Ok(_) | Err(FolderError::NotFound { .. }) => Ok(()),
        Err(e) => Err(e),
    }
}

/// [`reconcile`] then [`apply`].
pub fn place_folder(
    fs: &dyn FileSystem,
    existing: Option<&Folder>,
    parent: &Path,
    desired_name: &str,
) -> Result<Folder, FolderError> {
    apply(fs, reconcile(fs, existing, parent, desired_name)?)
}
