//! Git queries expressed as commands run through a [`GitExecutor`].
//!
//! Callers only deal with standard Rust types; the exact command lines stay
//! in this module.

use std::path::Path;

use tracing::{debug, info};

use crate::errors::GitError;
use crate::executor::GitExecutor;
use crate::sync::{SyncVerdict, classify_counts};
use crate::validation::validate_git_arg;

/// Name of the checked-out branch (`HEAD` when detached).
pub fn current_branch(git: &dyn GitExecutor, dir: &Path) -> Result<String, GitError> {
    git.run(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// All local branch names.
pub fn local_branches(git: &dyn GitExecutor, dir: &Path) -> Result<Vec<String>, GitError> {
    let output = git.run(
        dir,
        &["for-each-ref", "--format=%(refname:short)", "refs/heads"],
    )?;
    Ok(split_lines(&output))
}

/// Local branches already merged into `target`.
pub fn merged_branches(
    git: &dyn GitExecutor,
    dir: &Path,
    target: &str,
) -> Result<Vec<String>, GitError> {
    validate_git_arg(target, "branch name")?;
    let output = git.run(
        dir,
        &["branch", "--merged", target, "--format=%(refname:short)"],
    )?;
    Ok(split_lines(&output))
}

/// Local branches that are not merged into `target` (excluding `target`).
pub fn unmerged_branches(
    git: &dyn GitExecutor,
    dir: &Path,
    target: &str,
) -> Result<Vec<String>, GitError> {
    let merged = merged_branches(git, dir, target)?;
    Ok(local_branches(git, dir)?
        .into_iter()
        .filter(|branch| branch != target && !merged.contains(branch))
        .collect())
}

/// Update remote-tracking refs for `remote`.
pub fn fetch(git: &dyn GitExecutor, dir: &Path, remote: &str) -> Result<(), GitError> {
    validate_git_arg(remote, "remote name")?;
    info!(
        event = "git.fetch_started",
        remote = remote,
        path = %dir.display()
    );
    git.run(dir, &["fetch", remote])?;
    info!(event = "git.fetch_completed", remote = remote);
    Ok(())
}

/// Compare `branch` with `<remote>/<branch>`.
///
/// Output that cannot be parsed yields [`SyncVerdict::Undetermined`]; a
/// failing git command is returned as an error.
pub fn compare_with_remote(
    git: &dyn GitExecutor,
    dir: &Path,
    remote: &str,
    branch: &str,
) -> Result<SyncVerdict, GitError> {
    validate_git_arg(remote, "remote name")?;
    validate_git_arg(branch, "branch name")?;

    let range = format!("{branch}...{remote}/{branch}");
    let output = git.run(dir, &["rev-list", "--left-right", "--count", range.as_str()])?;
    let verdict = classify_counts(&output);

    debug!(
        event = "git.compare_completed",
        branch = branch,
        remote = remote,
        raw = output.as_str(),
        verdict = %verdict
    );
    Ok(verdict)
}

/// Whether `git status --porcelain` reports anything.
pub fn has_uncommitted_changes(git: &dyn GitExecutor, dir: &Path) -> Result<bool, GitError> {
    let output = git.run(dir, &["status", "--porcelain"])?;
    Ok(!output.is_empty())
}

/// Clone `url` into `<parent>/<name>`.
pub fn clone_into(
    git: &dyn GitExecutor,
    parent: &Path,
    url: &str,
    name: &str,
) -> Result<(), GitError> {
    validate_git_arg(url, "remote url")?;
    validate_git_arg(name, "folder name")?;

    info!(
        event = "git.clone_started",
        url = url,
        parent = %parent.display(),
        name = name
    );
    git.run(parent, &["clone", "--", url, name])?;
    info!(event = "git.clone_completed", url = url, name = name);
    Ok(())
}

fn split_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGit;

    #[test]
    fn test_compare_with_remote_builds_left_right_range() {
        let git = ScriptedGit::new().with_output(
            "rev-list --left-right --count main...origin/main",
            "3\t0",
        );
        let verdict = compare_with_remote(&git, Path::new("/repo"), "origin", "main").unwrap();
        assert_eq!(verdict, SyncVerdict::Ahead);
    }

    #[test]
    fn test_compare_with_remote_rejects_option_like_branch() {
        let git = ScriptedGit::new();
        let err = compare_with_remote(&git, Path::new("/repo"), "origin", "--all").unwrap_err();
        assert!(matches!(err, GitError::InvalidArgument { .. }));
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_compare_with_remote_propagates_command_failure() {
        let git = ScriptedGit::new().with_failure(
            "rev-list --left-right --count main...origin/main",
            "bad revision",
        );
        assert!(compare_with_remote(&git, Path::new("/repo"), "origin", "main").is_err());
    }

    #[test]
    fn test_has_uncommitted_changes() {
        let dirty = ScriptedGit::new().with_output("status --porcelain", " M src/lib.rs");
        assert!(has_uncommitted_changes(&dirty, Path::new("/repo")).unwrap());

        let clean = ScriptedGit::new().with_output("status --porcelain", "");
        assert!(!has_uncommitted_changes(&clean, Path::new("/repo")).unwrap());
    }

    #[test]
    fn test_unmerged_branches_excludes_target_and_merged() {
        let git = ScriptedGit::new()
            .with_output(
                "for-each-ref --format=%(refname:short) refs/heads",
                "main\nfeature/a\nfeature/b\n",
            )
            .with_output(
                "branch --merged main --format=%(refname:short)",
                "main\nfeature/a",
            );

        let unmerged = unmerged_branches(&git, Path::new("/repo"), "main").unwrap();
        assert_eq!(unmerged, vec!["feature/b".to_string()]);
    }

    #[test]
    fn test_clone_into_uses_separator() {
        let git = ScriptedGit::new().with_output(
            "clone -- git@example.com:me/app.git App",
            "",
        );
        clone_into(
            &git,
            Path::new("/work/Tools"),
            "git@example.com:me/app.git",
            "App",
        )
        .unwrap();
        assert!(git.was_called("clone -- git@example.com:me/app.git App"));
    }
}
