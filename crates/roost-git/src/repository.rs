//! Local repository inspection through git2.
//!
//! Only read-only, auth-free questions live here. Everything that talks to a
//! remote goes through the git CLI (see [`crate::query`]).

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::errors::GitError;

/// What roost needs to know about a project's repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub root: PathBuf,
    pub remotes: Vec<String>,
}

impl RepositoryInfo {
    pub fn has_remote(&self, name: &str) -> bool {
        self.remotes.iter().any(|r| r == name)
    }
}

/// Open the repository rooted exactly at `path`.
///
/// Parent directories are deliberately not searched: a project folder that
/// merely sits inside some other repository is not a repository itself.
pub fn inspect_repository(path: &Path) -> Result<RepositoryInfo, GitError> {
    let repo = Repository::open(path).map_err(|e| {
        debug!(
            event = "git.repository.open_failed",
            path = %path.display(),
            error = %e
        );
        if e.code() == git2::ErrorCode::NotFound {
            GitError::NotInRepository {
                path: path.display().to_string(),
            }
        } else {
            GitError::Git2Error { source: e }
        }
    })?;

    let root = repo
        .workdir()
        .ok_or_else(|| GitError::NotInRepository {
            path: path.display().to_string(),
        })?
        .to_path_buf();

    let remotes = repo
        .remotes()?
        .iter()
        .flatten()
        .map(str::to_string)
        .collect();

    Ok(RepositoryInfo { root, remotes })
}

/// Verify that `path` is a repository with `remote` configured.
pub fn ensure_repository_with_remote(path: &Path, remote: &str) -> Result<RepositoryInfo, GitError> {
    let info = inspect_repository(path)?;
    if !info.has_remote(remote) {
        return Err(GitError::RemoteNotFound {
            remote: remote.to_string(),
            path: path.display().to_string(),
        });
    }
    Ok(info)
}

/// URL of `remote`, if the repository and remote exist.
pub fn remote_url(path: &Path, remote: &str) -> Option<String> {
    let repo = Repository::open(path).ok()?;
    let found = repo.find_remote(remote).ok()?;
    found.url().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{add_remote, init_repo_with_commit};
    use tempfile::TempDir;

    #[test]
    fn test_plain_directory_is_not_a_repository() {
        let dir = TempDir::new().unwrap();
        let err = inspect_repository(dir.path()).unwrap_err();
        assert!(matches!(err, GitError::NotInRepository { .. }));
    }

    #[test]
    fn test_nested_folder_is_not_treated_as_repository() {
        let dir = TempDir::new().unwrap();
        init_repo_with_commit(dir.path()).unwrap();
        let nested = dir.path().join("inner");
        std::fs::create_dir(&nested).unwrap();

        assert!(inspect_repository(&nested).is_err());
    }

    #[test]
    fn test_repository_without_remote() {
        let dir = TempDir::new().unwrap();
        init_repo_with_commit(dir.path()).unwrap();

        let info = inspect_repository(dir.path()).unwrap();
        assert!(info.remotes.is_empty());
        let err = ensure_repository_with_remote(dir.path(), "origin").unwrap_err();
        assert!(matches!(err, GitError::RemoteNotFound { .. }));
    }

    #[test]
    fn test_repository_with_remote() {
        let dir = TempDir::new().unwrap();
        init_repo_with_commit(dir.path()).unwrap();
        add_remote(dir.path(), "origin", "https://example.com/me/app.git").unwrap();

        let info = ensure_repository_with_remote(dir.path(), "origin").unwrap();
        assert!(info.has_remote("origin"));
        assert_eq!(
            remote_url(dir.path(), "origin").as_deref(),
            Some("https://example.com/me/app.git")
        );
        assert!(remote_url(dir.path(), "upstream").is_none());
    }
}
