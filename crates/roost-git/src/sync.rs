//! Branch synchronization classification.
//!
//! A local branch is compared with its remote tracking branch using
//! `git rev-list --left-right --count <branch>...<remote>/<branch>`, which
//! prints `ahead<TAB>behind`. The counts are turned into a [`SyncVerdict`].

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::executor::GitExecutor;
use crate::query;

/// Relationship between a local branch and its remote tracking branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncVerdict {
    InSync,
    Ahead,
    Behind,
    Diverged,
    Undetermined,
}

impl SyncVerdict {
    pub fn from_counts(counts: CommitCounts) -> Self {
        match (counts.ahead, counts.behind) {
            (0, 0) => SyncVerdict::InSync,
            (_, 0) => SyncVerdict::Ahead,
            (0, _) => SyncVerdict::Behind,
            _ => SyncVerdict::Diverged,
        }
    }

    /// The remote has commits the local branch lacks.
    pub fn is_missing_remote_work(&self) -> bool {
        matches!(self, SyncVerdict::Behind | SyncVerdict::Diverged)
    }

    /// The local branch has commits the remote lacks.
    pub fn has_unpushed_work(&self) -> bool {
        matches!(self, SyncVerdict::Ahead | SyncVerdict::Diverged)
    }
}

impl fmt::Display for SyncVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SyncVerdict::InSync => "in sync",
            SyncVerdict::Ahead => "ahead",
            SyncVerdict::Behind => "behind",
            SyncVerdict::Diverged => "diverged",
            SyncVerdict::Undetermined => "undetermined",
        };
        f.write_str(label)
    }
}

/// Commit counts produced by a left-right comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CommitCounts {
    pub ahead: usize,
    pub behind: usize,
}

/// Parse `ahead<TAB>behind`. Anything other than exactly two integer fields
/// is rejected.
pub fn parse_counts(raw: &str) -> Option<CommitCounts> {
    let fields: Vec<&str> = raw.trim().split('\t').collect();
    let [ahead, behind] = fields.as_slice() else {
        return None;
    };
    Some(CommitCounts {
        ahead: ahead.trim().parse().ok()?,
        behind: behind.trim().parse().ok()?,
    })
}

/// Classify raw comparison output.
pub fn classify_counts(raw: &str) -> SyncVerdict {
    parse_counts(raw)
        .map(SyncVerdict::from_counts)
        .unwrap_or(SyncVerdict::Undetermined)
}

/// A branch the user should be warned about before opening a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchWarning {
    pub branch: String,
    pub verdict: SyncVerdict,
}

impl fmt::Display for BranchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "branch '{}' is {} its remote", self.branch, self.verdict)?;
        if self.verdict == SyncVerdict::Behind {
            f.write_str(" (pull before working)")?;
        }
        Ok(())
    }
}

/// Decide which branch, if any, to warn about.
///
/// The current branch wins: if it is behind or diverged it is reported
/// straight away. Only when it looks fine and is not itself the integration
/// branch is the integration branch consulted. `verdict_for` is called at
/// most once per branch.
pub fn resolve_warning<F>(
    current_branch: &str,
    integration_branch: &str,
    mut verdict_for: F,
) -> Option<BranchWarning>
where
    F: FnMut(&str) -> SyncVerdict,
{
    let current = verdict_for(current_branch);
    if current.is_missing_remote_work() {
        return Some(BranchWarning {
            branch: current_branch.to_string(),
            verdict: current,
        });
    }

    if current_branch == integration_branch {
        return None;
    }

    let integration = verdict_for(integration_branch);
    integration
        .is_missing_remote_work()
        .then(|| BranchWarning {
            branch: integration_branch.to_string(),
            verdict: integration,
        })
}

/// Advisory sync check for a repository.
///
/// Never fails: any git error degrades to `None` and is logged at debug
/// level. Callers are expected to have checked that `dir` is a repository
/// with `remote` configured.
pub fn sync_warning(
    git: &dyn GitExecutor,
    dir: &Path,
    remote: &str,
    integration_branch: &str,
    fetch_first: bool,
) -> Option<BranchWarning> {
    if fetch_first && let Err(e) = query::fetch(git, dir, remote) {
        debug!(
            event = "git.sync.fetch_skipped",
            path = %dir.display(),
            error = %e
        );
        return None;
    }

    let current = match query::current_branch(git, dir) {
        Ok(branch) => branch,
        Err(e) => {
            debug!(
                event = "git.sync.current_branch_unavailable",
                path = %dir.display(),
                error = %e
            );
            return None;
        }
    };

    let warning = resolve_warning(&current, integration_branch, |branch| {
        match query::compare_with_remote(git, dir, remote, branch) {
            Ok(verdict) => verdict,
            Err(e) => {
                debug!(
                    event = "git.sync.compare_failed",
                    branch = branch,
                    error = %e
                );
                SyncVerdict::Undetermined
            }
        }
    });

    if let Some(ref w) = warning {
        info!(
            event = "git.sync.warning_raised",
            path = %dir.display(),
            branch = w.branch.as_str(),
            verdict = %w.verdict
        );
    }
    warning
}
