//! roost-git: git access for roost.
//!
//! - [`executor`] runs git commands (`GitExecutor`, `GitCli`)
//! - [`query`] wraps the individual commands roost needs
//! - [`repository`] inspects local repositories through git2
//! - [`sync`] classifies branch sync state and picks the branch to warn about

pub mod errors;
pub mod executor;
pub mod query;
pub mod repository;
pub mod sync;
pub mod test_support;
pub mod validation;

pub use errors::GitError;
pub use executor::{GitCli, GitExecutor};
pub use repository::{RepositoryInfo, ensure_repository_with_remote, inspect_repository};
pub use sync::{BranchWarning, CommitCounts, SyncVerdict, classify_counts, sync_warning};
