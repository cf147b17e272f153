use std::path::PathBuf;

use crate::errors::RoostError;

#[derive(Debug, thiserror::Error)]
pub enum FolderError {
    #[error("Folder not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("'{}' already contains a different folder named '{name}'", parent.display())]
    FolderNameTaken { name: String, parent: PathBuf },

    #[error("A folder named '{name}' already exists in '{}'; import it instead", parent.display())]
    GroupFolderAlreadyExists { name: String, parent: PathBuf },

    #[error("No project, workspace or package manifest found in {}", path.display())]
    NoProjectInFolder { path: PathBuf },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FolderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            FolderError::NotFound { path }
        } else {
            FolderError::Io { path, source }
        }
    }

    /// Group creation reports a name collision as an existing group folder.
    pub(crate) fn into_group_collision(self) -> Self {
        match self {
            FolderError::FolderNameTaken { name, parent } => {
                FolderError::GroupFolderAlreadyExists { name, parent }
            }
            other => other,
        }
    }
}

impl RoostError for FolderError {
    fn error_code(&self) -> &'static str {
        match self {
            FolderError::NotFound { .. } => "FOLDER_NOT_FOUND",
            FolderError::NotADirectory { .. } => "NOT_A_DIRECTORY",
            FolderError::FolderNameTaken { .. } => "FOLDER_NAME_TAKEN",
            FolderError::GroupFolderAlreadyExists { .. } => "GROUP_FOLDER_ALREADY_EXISTS",
            FolderError::NoProjectInFolder { .. } => "NO_PROJECT_IN_FOLDER",
            FolderError::Io { .. } => "FOLDER_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, FolderError::Io { .. })
    }
}
