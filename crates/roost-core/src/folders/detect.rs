use tracing::debug;

use super::errors::FolderError;
use super::fs::{FileSystem, Folder};
use crate::catalog::ProjectKind;

const PACKAGE_MANIFESTS: [&str; 3] = ["Package.swift", "Cargo.toml", "package.json"];

/// Work out what a folder opens as.
///
/// A workspace wins over a project, which wins over a package.
pub fn detect_project_kind(fs: &dyn FileSystem, folder: &Folder) -> Result<ProjectKind, FolderError> {
    let subfolders = fs.subfolders(&folder.path)?;
    let has_extension =
        |ext: &str| subfolders.iter().any(|f| f.extension.as_deref() == Some(ext));

    let kind = if has_extension("xcworkspace") {
        ProjectKind::Workspace
    } else if has_extension("xcodeproj") {
        ProjectKind::Project
    } else if PACKAGE_MANIFESTS
        .iter()
        .any(|manifest| fs.contains_file(&folder.path, manifest))
    {
        ProjectKind::Package
    } else {
        return Err(FolderError::NoProjectInFolder {
            path: folder.path.clone(),
        });
    };

    debug!(
        event = "core.folder.kind_detected",
        path = %folder.path.display(),
        kind = %kind
    );
    Ok(kind)
}

/// Subfolder with the given extension, used to pick what an IDE should open.
pub fn find_bundle(
    fs: &dyn FileSystem,
    folder: &Folder,
    extension: &str,
) -> Result<Option<Folder>, FolderError> {
    Ok(fs
        .subfolders(&folder.path)?
        .into_iter()
        .find(|f| f.extension.as_deref() == Some(extension)))
}
