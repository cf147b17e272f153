use std::path::PathBuf;

use roost_git::{GitError, SyncVerdict};

use crate::errors::RoostError;

#[derive(Debug, thiserror::Error)]
pub enum EvictionError {
    #[error("{} is not a git repository with a configured remote", path.display())]
    MissingGitRepository { path: PathBuf },

    #[error("{} has uncommitted changes", path.display())]
    DirtyWorkingTree { path: PathBuf },

    #[error("Branch '{branch}' has commits that are not on its remote ({verdict}); push them first")]
    ProjectAheadOfRemote { branch: String, verdict: SyncVerdict },

    #[error("Could not verify {step}: {source}")]
    SafetyCheckFailed {
        step: &'static str,
        #[source]
        source: GitError,
    },
}

impl RoostError for EvictionError {
    fn error_code(&self) -> &'static str {
        match self {
            EvictionError::MissingGitRepository { .. } => "EVICTION_NO_REPOSITORY",
            EvictionError::DirtyWorkingTree { .. } => "EVICTION_DIRTY_TREE",
            EvictionError::ProjectAheadOfRemote { .. } => "EVICTION_UNPUSHED_COMMITS",
            EvictionError::SafetyCheckFailed { .. } => "EVICTION_CHECK_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, EvictionError::SafetyCheckFailed { .. })
    }
}
