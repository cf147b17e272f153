//! Turning a typed token into something to open.

use std::fmt;
use std::path::PathBuf;

use roost_config::RoostConfig;
use roost_git::{BranchWarning, GitExecutor};
use serde::Serialize;
use tracing::info;

use crate::catalog::{Catalog, ProjectKind, ProjectLocation};
use crate::errors::RoostError;
use crate::folders::{FileSystem, FolderError, detect};
use crate::names;
use crate::shortcuts::current_main_project;
use crate::sync_check::check_branch_sync;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("No group shortcut, project shortcut or project named '{token}'")]
    UnknownTarget { token: String },

    #[error("Group '{group}' has no main project; pick one with 'roost project main'")]
    NoMainProject { group: String },

    #[error("Project '{project}' has no remote link")]
    NoRemoteLink { project: String },

    #[error("Project '{project}' is not on disk at {}; restore it first", path.display())]
    NotOnDisk { project: String, path: PathBuf },

    #[error(transparent)]
    Folder(#[from] FolderError),
}

impl RoostError for LaunchError {
    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::UnknownTarget { .. } => "LAUNCH_UNKNOWN_TARGET",
            LaunchError::NoMainProject { .. } => "LAUNCH_NO_MAIN_PROJECT",
            LaunchError::NoRemoteLink { .. } => "LAUNCH_NO_REMOTE_LINK",
            LaunchError::NotOnDisk { .. } => "LAUNCH_NOT_ON_DISK",
            LaunchError::Folder(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            LaunchError::Folder(e) => e.is_user_error(),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    Ide,
    Terminal,
    Browser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedBy {
    GroupShortcut,
    ProjectShortcut,
    ProjectName,
}

impl fmt::Display for MatchedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchedBy::GroupShortcut => write!(f, "group shortcut"),
            MatchedBy::ProjectShortcut => write!(f, "project shortcut"),
            MatchedBy::ProjectName => write!(f, "project name"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchTarget {
    pub location: ProjectLocation,
    pub matched_by: MatchedBy,
}

/// Find the project a token refers to.
///
/// Group shortcuts are tried first and open the group's main project, then
/// project shortcuts, then project names.
pub fn resolve_target(catalog: &Catalog, token: &str) -> Result<LaunchTarget, LaunchError> {
    let token = token.trim();

    if let Some(group) = catalog
        .groups()
        .find(|g| names::matches(token, g.shortcut.as_deref()))
    {
        let main = current_main_project(group).ok_or_else(|| LaunchError::NoMainProject {
            group: group.name.clone(),
        })?;
        if let Some(location) = catalog.locate_project_by_id(main.id) {
            return Ok(LaunchTarget {
                location,
                matched_by: MatchedBy::GroupShortcut,
            });
        }
    }

    if let Some(project) = catalog
        .projects()
        .find(|p| names::matches(token, p.shortcut.as_deref()))
        && let Some(location) = catalog.locate_project_by_id(project.id)
    {
        return Ok(LaunchTarget {
            location,
            matched_by: MatchedBy::ProjectShortcut,
        });
    }

    catalog
        .locate_project(token)
        .map(|location| LaunchTarget {
            location,
            matched_by: MatchedBy::ProjectName,
        })
        .ok_or_else(|| LaunchError::UnknownTarget {
            token: token.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LaunchCommand {
    /// Run `program <path>`.
    Open { program: String, path: PathBuf },
    /// Print the path for a shell wrapper to `cd` into.
    ChangeDirectory { path: PathBuf },
    OpenUrl { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub project: String,
    pub folder: PathBuf,
    pub command: LaunchCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<BranchWarning>,
}

/// Work out what opening `target` in `mode` means.
///
/// Local modes require the folder to be on disk and run the advisory branch
/// check. Browser mode only needs the remote link.
pub fn plan_launch(
    catalog: &Catalog,
    target: LaunchTarget,
    mode: LaunchMode,
    fs: &dyn FileSystem,
    git: &dyn GitExecutor,
    config: &RoostConfig,
) -> Result<LaunchPlan, LaunchError> {
    let project = catalog.project_at(target.location);
    let folder = catalog.project_folder(target.location);

    if mode == LaunchMode::Browser {
        let link = project
            .remote
            .as_ref()
            .ok_or_else(|| LaunchError::NoRemoteLink {
                project: project.name.clone(),
            })?;
        return Ok(LaunchPlan {
            project: project.name.clone(),
            folder,
            command: LaunchCommand::OpenUrl {
                url: link.url.clone(),
            },
            warning: None,
        });
    }

    let resolved = match fs.resolve(&folder) {
        Ok(resolved) => resolved,
        Err(FolderError::NotFound { .. }) => {
            return Err(LaunchError::NotOnDisk {
                project: project.name.clone(),
                path: folder,
            });
        }
        Err(e) => return Err(e.into()),
    };

    let command = match mode {
        LaunchMode::Terminal => LaunchCommand::ChangeDirectory {
            path: resolved.path.clone(),
        },
        _ => {
            let bundle_extension = match project.kind {
                ProjectKind::Workspace => Some("xcworkspace"),
                ProjectKind::Project => Some("xcodeproj"),
                ProjectKind::Package => None,
            };
            let path = match bundle_extension {
                Some(ext) => detect::find_bundle(fs, &resolved, ext)?
                    .map(|bundle| bundle.path)
                    .unwrap_or_else(|| resolved.path.clone()),
                None => resolved.path.clone(),
            };
            LaunchCommand::Open {
                program: config.launch.editor().to_string(),
                path,
            }
        }
    };

    let warning = check_branch_sync(project, &resolved.path, git, &config.git);
    info!(
        event = "core.launch.plan_completed",
        project = project.name.as_str(),
        mode = ?mode,
        matched_by = %target.matched_by,
        warned = warning.is_some()
    );

    Ok(LaunchPlan {
        project: project.name.clone(),
        folder: resolved.path,
        command,
        warning,
    })
}
