//! Deciding whether a project folder may be deleted from disk.
//!
//! Eviction only removes the local copy; the catalog entry stays so the
//! project can be cloned back later. The checks therefore make sure that
//! everything in the folder also exists on the remote.

mod errors;

use std::path::Path;

use roost_config::GitConfig;
use roost_git::{GitError, GitExecutor, SyncVerdict, ensure_repository_with_remote, query};
use serde::Serialize;
use tracing::{info, warn};

pub use errors::EvictionError;

/// What the checks saw when they passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvictionClearance {
    pub branch: String,
    pub verdict: SyncVerdict,
    /// Local branches not merged into the integration branch. Advisory only:
    /// they may still exist on the remote.
    pub unmerged_branches: Vec<String>,
}

/// Run the eviction checks in order, stopping at the first failure.
///
/// 1. The folder is a repository with the configured remote.
/// 2. The working tree is clean.
/// 3. Remote refs are fetched.
/// 4. The current branch is neither ahead of nor diverged from its remote.
pub fn check_eviction_safety(
    folder: &Path,
    git: &dyn GitExecutor,
    config: &GitConfig,
) -> Result<EvictionClearance, EvictionError> {
    let remote = config.remote();
    info!(
        event = "core.eviction.check_started",
        path = %folder.display(),
        remote = remote
    );

    match ensure_repository_with_remote(folder, remote) {
        Ok(_) => {}
        Err(GitError::NotInRepository { .. } | GitError::RemoteNotFound { .. }) => {
            return Err(EvictionError::MissingGitRepository {
                path: folder.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(EvictionError::SafetyCheckFailed {
                step: "repository",
                source,
            });
        }
    }

    let dirty = query::has_uncommitted_changes(git, folder).map_err(|source| {
        EvictionError::SafetyCheckFailed {
            step: "working tree status",
            source,
        }
    })?;
    if dirty {
        return Err(EvictionError::DirtyWorkingTree {
            path: folder.to_path_buf(),
        });
    }

    query::fetch(git, folder, remote).map_err(|source| EvictionError::SafetyCheckFailed {
        step: "remote fetch",
        source,
    })?;

    let branch = query::current_branch(git, folder).map_err(|source| {
        EvictionError::SafetyCheckFailed {
            step: "current branch",
            source,
        }
    })?;
    let verdict = query::compare_with_remote(git, folder, remote, &branch).map_err(|source| {
        EvictionError::SafetyCheckFailed {
            step: "remote comparison",
            source,
        }
    })?;
    if verdict.has_unpushed_work() {
        return Err(EvictionError::ProjectAheadOfRemote { branch, verdict });
    }

    let unmerged_branches = query::unmerged_branches(git, folder, config.integration_branch())
        .unwrap_or_else(|e| {
            warn!(
                event = "core.eviction.unmerged_check_failed",
                path = %folder.display(),
                error = %e
            );
            Vec::new()
        });

    info!(
        event = "core.eviction.check_completed",
        path = %folder.display(),
        branch = branch.as_str(),
        verdict = %verdict,
        unmerged = unmerged_branches.len()
    );
    Ok(EvictionClearance {
        branch,
        verdict,
        unmerged_branches,
    })
}
