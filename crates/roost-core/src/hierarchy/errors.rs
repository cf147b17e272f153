use crate::errors::RoostError;

#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    #[error("{kind} name cannot be empty")]
    InvalidName { kind: &'static str },

    #[error("A category named '{name}' already exists")]
    CategoryNameTaken { name: String },

    #[error("'{path}' already contains a folder named '{name}'")]
    CategoryPathTaken { name: String, path: String },

    #[error("'{path}' holds the folder of {owner}")]
    FolderAlreadyCataloged { path: String, owner: String },

    #[error("A group named '{name}' already exists")]
    GroupNameTaken { name: String },

    #[error("A project named '{name}' already exists")]
    ProjectNameTaken { name: String },

    #[error("Shortcut '{shortcut}' is already used by {owner}")]
    ShortcutTaken { shortcut: String, owner: String },

    #[error("Shortcut '{shortcut}' is shared by {first} and {second}")]
    ShortcutConflict {
        shortcut: String,
        first: String,
        second: String,
    },

    #[error("Category '{name}' not found")]
    MissingCategory { name: String },

    #[error("Group '{name}' not found")]
    MissingGroup { name: String },

    #[error("Project '{name}' not found")]
    MissingProject { name: String },
}

impl RoostError for HierarchyError {
    fn error_code(&self) -> &'static str {
        match self {
            HierarchyError::InvalidName { .. } => "INVALID_NAME",
            HierarchyError::CategoryNameTaken { .. } => "CATEGORY_NAME_TAKEN",
            HierarchyError::CategoryPathTaken { .. } => "CATEGORY_PATH_TAKEN",
            HierarchyError::FolderAlreadyCataloged { .. } => "FOLDER_ALREADY_CATALOGED",
            HierarchyError::GroupNameTaken { .. } => "GROUP_NAME_TAKEN",
            HierarchyError::ProjectNameTaken { .. } => "PROJECT_NAME_TAKEN",
            HierarchyError::ShortcutTaken { .. } => "SHORTCUT_TAKEN",
            HierarchyError::ShortcutConflict { .. } => "SHORTCUT_CONFLICT",
            HierarchyError::MissingCategory { .. } => "CATEGORY_NOT_FOUND",
            HierarchyError::MissingGroup { .. } => "GROUP_NOT_FOUND",
            HierarchyError::MissingProject { .. } => "PROJECT_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        // A conflict means the catalog itself is inconsistent.
        !matches!(self, HierarchyError::ShortcutConflict { .. })
    }
}
