//! Evicting a project's folder from disk and cloning it back.

use std::path::PathBuf;

use roost_git::query;
use serde::Serialize;
use tracing::info;

use super::projects::locate_project;
use super::{OpsContext, OpsError};
use crate::eviction::{EvictionClearance, check_eviction_safety};
use crate::folders::FolderError;

#[derive(Debug, Clone, Serialize)]
pub struct EvictionOutcome {
    pub project: String,
    pub folder: PathBuf,
    pub clearance: EvictionClearance,
}

/// Delete a project's folder once the safety checks pass and the user
/// confirms. The catalog entry stays so the project can be restored.
pub fn evict_project(ctx: &mut OpsContext<'_>, name: &str) -> Result<EvictionOutcome, OpsError> {
    info!(event = "core.project.evict_started", name = name);

    let catalog = ctx.store.load()?;
    let at = locate_project(&catalog, name)?;
    let project = catalog.project_at(at);
    let remote = project
        .remote
        .as_ref()
        .ok_or_else(|| OpsError::NoRemoteLink {
            project: project.name.clone(),
        })?;
    let folder = ctx.fs.resolve(&catalog.project_folder(at))?;

    let clearance = check_eviction_safety(&folder.path, ctx.git, &ctx.config.git)?;

    let mut message = format!(
        "Delete {} from disk? It can be cloned back from {}.",
        folder.path.display(),
        remote.url
    );
    if !clearance.unmerged_branches.is_empty() {
        message.push_str(&format!(
            "\nLocal branches not merged into {}: {}",
            ctx.config.git.integration_branch(),
            clearance.unmerged_branches.join(", ")
        ));
    }
    if !ctx.prompter.confirm(&message)? {
        info!(event = "core.project.evict_cancelled", name = name);
        return Err(OpsError::Cancelled);
    }

    ctx.fs.remove_folder(&folder.path)?;

    info!(
        event = "core.project.evict_completed",
        name = project.name.as_str(),
        path = %folder.path.display()
    );
    Ok(EvictionOutcome {
        project: project.name.clone(),
        folder: folder.path,
        clearance,
    })
}

/// Clone an evicted project back into its group folder.
pub fn restore_project(ctx: &mut OpsContext<'_>, name: &str) -> Result<PathBuf, OpsError> {
    info!(event = "core.project.restore_started", name = name);

    let catalog = ctx.store.load()?;
    let at = locate_project(&catalog, name)?;
    let project = catalog.project_at(at);
    let remote = project
        .remote
        .as_ref()
        .ok_or_else(|| OpsError::NoRemoteLink {
            project: project.name.clone(),
        })?;

    let folder = catalog.project_folder(at);
    match ctx.fs.resolve(&folder) {
        Ok(_) => {
            return Err(OpsError::AlreadyOnDisk {
                project: project.name.clone(),
                path: folder,
            });
        }
        Err(FolderError::NotFound { .. }) => {}
        Err(e) => return Err(e.into()),
    }

    let parent = ctx.fs.resolve(&catalog.group_folder(at.group_location()))?;
    query::clone_into(ctx.git, &parent.path, &remote.url, &project.name)?;

    info!(
        event = "core.project.restore_completed",
        name = project.name.as_str(),
        path = %folder.display()
    );
    Ok(folder)
}
