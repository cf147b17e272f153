//! roost-core: catalog and consistency engine for the roost project launcher
//!
//! Projects live in a Category → Group → Project tree that mirrors folders
//! on disk. This crate keeps the tree, the folders and the shortcut
//! namespace consistent, and decides when a project folder may be evicted.
//!
//! # Main Entry Points
//!
//! - [`ops`] - Every mutating operation, driven through [`ops::OpsContext`]
//! - [`launch`] - Resolve a shortcut or name and plan how to open it
//! - [`shortcuts`] - Main-project shortcut rules and invariants
//! - [`eviction`] - Safety checks before deleting a project folder

pub mod catalog;
pub mod errors;
pub mod events;
pub mod eviction;
pub mod folders;
pub mod hierarchy;
pub mod launch;
pub mod logging;
pub mod names;
pub mod ops;
pub mod prompt;
pub mod shortcuts;
pub mod store;
pub mod sync_check;
pub mod test_support;

pub use catalog::{
    Catalog, Category, CategoryId, Group, GroupId, Project, ProjectId, ProjectKind, ProjectLink,
    RemovalReport,
};
pub use errors::{RoostError, RoostResult};
pub use eviction::{EvictionClearance, EvictionError};
pub use folders::{FileSystem, Folder, FolderError, LocalFileSystem};
pub use hierarchy::HierarchyError;
pub use launch::{LaunchCommand, LaunchError, LaunchMode, LaunchPlan};
pub use ops::{OpsContext, OpsError};
pub use prompt::{DeclineAll, PromptError, Prompter};
pub use store::{CatalogStore, JsonCatalogStore, StoreError};

pub use roost_config::{ConfigError, RoostConfig};
pub use roost_git::{BranchWarning, GitCli, GitExecutor, SyncVerdict};

pub use logging::init_logging;
