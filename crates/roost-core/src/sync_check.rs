//! Advisory branch check before opening a project.
//!
//! Nothing here blocks a launch; every failure degrades to "no warning".

use std::path::Path;

use roost_config::GitConfig;
use roost_git::{BranchWarning, GitExecutor, ensure_repository_with_remote, sync_warning};
use tracing::debug;

use crate::catalog::Project;

/// Warn when the project's current or integration branch lacks remote work.
///
/// Skipped for projects without a remote link, folders that are not on disk
/// and folders that are not repositories with the configured remote.
pub fn check_branch_sync(
    project: &Project,
    folder: &Path,
    git: &dyn GitExecutor,
    config: &GitConfig,
) -> Option<BranchWarning> {
    if project.remote.is_none() {
        debug!(
            event = "core.sync.skipped",
            project = project.name.as_str(),
            reason = "no_remote_link"
        );
        return None;
    }
    if !folder.is_dir() {
        debug!(
            event = "core.sync.skipped",
            project = project.name.as_str(),
            reason = "folder_missing"
        );
        return None;
    }
    if let Err(e) = ensure_repository_with_remote(folder, config.remote()) {
        debug!(
            event = "core.sync.skipped",
            project = project.name.as_str(),
            reason = "not_a_repository",
            error = %e
        );
        return None;
    }

    sync_warning(
        git,
        folder,
        config.remote(),
        config.integration_branch(),
        config.fetch_before_check(),
    )
}
