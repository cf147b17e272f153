//! Catalog operations used by every front end.
//!
//! Each operation loads the catalog, validates, reconciles folders on disk,
//! mutates the tree, checks shortcut invariants and saves. Collaborators come
//! in through [`OpsContext`] so tests can replace all of them.

mod categories;
mod groups;
mod launch;
mod lifecycle;
mod projects;
mod shortcuts;

pub use categories::{create_category, delete_category, import_category};
pub use groups::{create_group, delete_group, import_group};
pub use launch::prepare_launch;
pub use lifecycle::{EvictionOutcome, evict_project, restore_project};
pub use projects::{
    AddedProject, NewProject, ProjectRemoval, add_project, move_project, remove_project,
    rename_project,
};
pub use shortcuts::{change_main_project, set_project_shortcut};

use std::path::PathBuf;

use roost_config::RoostConfig;
use roost_git::{GitError, GitExecutor};
use tracing::warn;

use crate::catalog::{Catalog, Group, ProjectId};
use crate::errors::RoostError;
use crate::eviction::EvictionError;
use crate::folders::{FileSystem, Folder, FolderError};
use crate::hierarchy::{HierarchyError, validate_shortcut};
use crate::launch::LaunchError;
use crate::prompt::{PromptError, Prompter};
use crate::shortcuts::{candidate_replacements, check_shortcut_invariants};
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error(transparent)]
    Folder(#[from] FolderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Eviction(#[from] EvictionError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Group '{group}' has no shortcut to hand to its main project; pass one with --shortcut")]
    ShortcutRequired { group: String },

    #[error("Project '{project}' has no remote link")]
    NoRemoteLink { project: String },

    #[error("Project '{project}' is already on disk at {}", path.display())]
    AlreadyOnDisk { project: String, path: PathBuf },

    #[error("Cancelled")]
    Cancelled,
}

impl RoostError for OpsError {
    fn error_code(&self) -> &'static str {
        match self {
            OpsError::Hierarchy(e) => e.error_code(),
            OpsError::Folder(e) => e.error_code(),
            OpsError::Store(e) => e.error_code(),
            OpsError::Eviction(e) => e.error_code(),
            OpsError::Launch(e) => e.error_code(),
            OpsError::Git(e) => e.error_code(),
            OpsError::Prompt(e) => e.error_code(),
            OpsError::ShortcutRequired { .. } => "SHORTCUT_REQUIRED",
            OpsError::NoRemoteLink { .. } => "NO_REMOTE_LINK",
            OpsError::AlreadyOnDisk { .. } => "ALREADY_ON_DISK",
            OpsError::Cancelled => "CANCELLED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            OpsError::Hierarchy(e) => e.is_user_error(),
            OpsError::Folder(e) => e.is_user_error(),
            OpsError::Store(e) => e.is_user_error(),
            OpsError::Eviction(e) => e.is_user_error(),
            OpsError::Launch(e) => e.is_user_error(),
            OpsError::Git(e) => e.is_user_error(),
            OpsError::Prompt(e) => e.is_user_error(),
            OpsError::ShortcutRequired { .. }
            | OpsError::NoRemoteLink { .. }
            | OpsError::AlreadyOnDisk { .. }
            | OpsError::Cancelled => true,
        }
    }
}

/// Everything an operation may touch.
pub struct OpsContext<'a> {
    pub store: &'a mut dyn CatalogStore,
    pub fs: &'a dyn FileSystem,
    pub git: &'a dyn GitExecutor,
    pub prompter: &'a dyn Prompter,
    pub config: &'a RoostConfig,
}

impl OpsContext<'_> {
    /// Check invariants and persist. Nothing is saved when the check fails.
    fn commit(&mut self, catalog: &Catalog) -> Result<(), OpsError> {
        check_shortcut_invariants(catalog)?;
        self.store.save(catalog)?;
        Ok(())
    }

    /// [`Self::commit`] for an operation that already changed the disk.
    ///
    /// When the save fails a moved folder goes back to `original`; a freshly
    /// created one is left in place and logged.
    fn commit_placed(
        &mut self,
        catalog: &Catalog,
        placed: &Folder,
        original: Option<&Folder>,
    ) -> Result<(), OpsError> {
        let Err(err) = self.commit(catalog) else {
            return Ok(());
        };

        match original {
            Some(original) if self.fs.same_folder(&original.path, &placed.path) => {}
            Some(original) => {
                let undo = original
                    .path
                    .parent()
                    .map(|parent| self.fs.move_folder(placed, parent, &original.name));
                match undo {
                    Some(Ok(_)) => warn!(
                        event = "core.folder.move_rolled_back",
                        from = %placed.path.display(),
                        to = %original.path.display()
                    ),
                    Some(Err(e)) => warn!(
                        event = "core.folder.rollback_failed",
                        path = %placed.path.display(),
                        original = %original.path.display(),
                        error = %e
                    ),
                    None => warn!(
                        event = "core.folder.rollback_failed",
                        path = %placed.path.display(),
                        original = %original.path.display()
                    ),
                }
            }
            None => warn!(
                event = "core.folder.left_uncataloged",
                path = %placed.path.display(),
                error = %err
            ),
        }
        Err(err)
    }

    /// Refuse a folder that is, or contains, a folder the catalog owns.
    fn ensure_uncataloged(
        &self,
        catalog: &Catalog,
        folder: &Folder,
    ) -> Result<(), HierarchyError> {
        let owned = catalog.owned_folders();
        let owner = owned
            .iter()
            .find(|(path, _)| self.fs.same_folder(path, &folder.path))
            .or_else(|| {
                owned.iter().find(|(path, _)| {
                    path.ancestors()
                        .any(|ancestor| self.fs.same_folder(ancestor, &folder.path))
                })
            });
        match owner {
            Some((_, owner)) => Err(HierarchyError::FolderAlreadyCataloged {
                path: folder.path.display().to_string(),
                owner: owner.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Prompt for a shortcut for `group`, validated against the whole catalog.
    fn ask_for_shortcut(&self, catalog: &Catalog, group: &str) -> Result<String, OpsError> {
        let answer = self
            .prompter
            .input(&format!("Shortcut for the main project of group '{group}'"))?;
        validate_shortcut(answer.as_deref(), catalog.groups(), catalog.projects())?.ok_or_else(
            || OpsError::ShortcutRequired {
                group: group.to_string(),
            },
        )
    }

    /// Ask which project should take over the main slot `leaving` holds.
    fn choose_replacement(
        &self,
        group: &Group,
        leaving: ProjectId,
        leaving_name: &str,
    ) -> Result<Option<ProjectId>, OpsError> {
        let candidates = candidate_replacements(group, Some(leaving));
        if candidates.is_empty() {
            return Ok(None);
        }
        let options: Vec<String> = candidates.iter().map(|p| p.name.clone()).collect();
        let message = format!(
            "'{leaving_name}' was the main project of group '{}'. Choose a replacement",
            group.name
        );
        let choice = self.prompter.select(&message, &options)?;
        Ok(choice.and_then(|i| candidates.get(i)).map(|p| p.id))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use roost_config::RoostConfig;
    use roost_git::test_support::ScriptedGit;

    use super::OpsContext;
    use crate::catalog::{Catalog, Category, Group, Project, ProjectKind};
    use crate::test_support::{MemoryCatalogStore, MemoryFileSystem, ScriptedPrompter};

    /// Owns every collaborator so a test can build an [`OpsContext`] and
    /// inspect the fakes afterwards.
    pub struct Harness {
        pub store: MemoryCatalogStore,
        pub fs: MemoryFileSystem,
        pub git: ScriptedGit,
        pub prompter: ScriptedPrompter,
        pub config: RoostConfig,
    }

    impl Harness {
        pub fn new(catalog: Catalog, fs: MemoryFileSystem) -> Self {
            Self {
                store: MemoryCatalogStore::new(catalog),
                fs,
                git: ScriptedGit::new(),
                prompter: ScriptedPrompter::new(),
                config: RoostConfig::default(),
            }
        }

        pub fn ctx(&mut self) -> OpsContext<'_> {
            OpsContext {
                store: &mut self.store,
                fs: &self.fs,
                git: &self.git,
                prompter: &self.prompter,
                config: &self.config,
            }
        }

        pub fn catalog(&self) -> &Catalog {
            &self.store.catalog
        }

        pub fn shortcut_of(&self, project: &str) -> Option<String> {
            let catalog = self.catalog();
            let at = catalog.locate_project(project)?;
            catalog.project_at(at).shortcut.clone()
        }
    }

    pub fn project(name: &str, shortcut: Option<&str>) -> Project {
        let mut p = Project::new(name, ProjectKind::Package);
        p.shortcut = shortcut.map(str::to_string);
        p
    }

    pub fn group(name: &str, shortcut: Option<&str>, projects: Vec<Project>) -> Group {
        let mut g = Group::new(name, shortcut.map(str::to_string));
        g.projects = projects;
        g
    }

    /// `Work` at `/dev/Work` with groups `Web` (shortcut `w`, main `App`,
    /// plus `Kit`) and `Tools` (no shortcut, `Cli`). Folders exist on disk.
    pub fn work_catalog() -> (Catalog, MemoryFileSystem) {
        let mut work = Category::new("Work", "/dev/Work");
        work.groups = vec![
            group(
                "Web",
                Some("w"),
                vec![project("App", Some("w")), project("Kit", Some("k"))],
            ),
            group("Tools", None, vec![project("Cli", None)]),
        ];
        let fs = MemoryFileSystem::new()
            .with_file("/dev/Work/Web/App/Package.swift")
            .with_file("/dev/Work/Web/Kit/Package.swift")
            .with_file("/dev/Work/Tools/Cli/Package.swift");
        (
            Catalog {
                categories: vec![work],
            },
            fs,
        )
    }
}
