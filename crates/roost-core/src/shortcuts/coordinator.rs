//! The main project of a group.
//!
//! A group has no explicit "main" pointer. Its main project is whichever of
//! its projects carries the same shortcut as the group, so there is only one
//! fact to keep consistent. Every helper here derives from that rule.

use roost_config::ShortcutConfig;
use tracing::info;

use crate::catalog::{Group, Project, ProjectId};
use crate::hierarchy::HierarchyError;
use crate::names;

/// The project whose shortcut matches the group's, if any.
pub fn current_main_project(group: &Group) -> Option<&Project> {
    let shortcut = group.shortcut.as_deref()?;
    group
        .projects
        .iter()
        .find(|p| names::matches(shortcut, p.shortcut.as_deref()))
}

/// Projects that could take over as main, ordered by name ignoring case.
pub fn candidate_replacements(group: &Group, excluding: Option<ProjectId>) -> Vec<&Project> {
    let mut candidates: Vec<&Project> = group
        .projects
        .iter()
        .filter(|p| Some(p.id) != excluding)
        .collect();
    candidates.sort_by(|a, b| {
        names::fold(&a.name)
            .cmp(&names::fold(&b.name))
            .then_with(|| a.name.cmp(&b.name))
    });
    candidates
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutResolution {
    Resolved(String),
    /// Neither the group nor the new main has a shortcut; ask the caller.
    Required,
}

/// Pick the shortcut a newly chosen main project should carry.
///
/// The group's existing shortcut wins, then the project's own.
pub fn resolve_shortcut_for_new_main(group: &Group, new_main: &Project) -> ShortcutResolution {
    let non_blank = |s: &Option<String>| s.as_deref().filter(|s| !s.is_empty()).map(str::to_string);
    non_blank(&group.shortcut)
        .or_else(|| non_blank(&new_main.shortcut))
        .map(ShortcutResolution::Resolved)
        .unwrap_or(ShortcutResolution::Required)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainProjectChange {
    pub shortcut: String,
    pub previous_main: Option<ProjectId>,
    pub new_main: ProjectId,
}

/// Hand the group's shortcut slot to `new_main`.
///
/// The previous main loses its shortcut only if it still holds `shortcut`.
/// Making the current main main again changes nothing but the shortcut.
pub fn apply_main_project_change(
    group: &mut Group,
    current_main: Option<ProjectId>,
    new_main: ProjectId,
    shortcut: &str,
) -> Result<MainProjectChange, HierarchyError> {
    if group.project(new_main).is_none() {
        return Err(HierarchyError::MissingProject {
            name: new_main.to_string(),
        });
    }

    if let Some(previous) = current_main.filter(|id| *id != new_main)
        && let Some(project) = group.project_mut(previous)
        && names::matches(shortcut, project.shortcut.as_deref())
    {
        project.shortcut = None;
    }

    if let Some(project) = group.project_mut(new_main) {
        project.shortcut = Some(shortcut.to_string());
    }
    group.shortcut = Some(shortcut.to_string());

    info!(
        event = "core.shortcut.main_changed",
        group = group.name.as_str(),
        shortcut = shortcut,
        new_main = %new_main
    );

    Ok(MainProjectChange {
        shortcut: shortcut.to_string(),
        previous_main: current_main,
        new_main,
    })
}

/// Whether a project being saved into `group` should also give the group
/// its shortcut, making it the main project.
///
/// Requires the project to bring a shortcut. Then either the user marked it
/// as main, or the group has no shortcut yet and the configuration lets the
/// first project with a shortcut become main.
pub fn should_adopt_shortcut_on_save(
    group: &Group,
    explicitly_main: bool,
    proposed_shortcut: Option<&str>,
    policy: &ShortcutConfig,
) -> bool {
    let brings_shortcut = proposed_shortcut.is_some_and(|s| !s.trim().is_empty());
    let group_has_shortcut = group.shortcut.as_deref().is_some_and(|s| !s.is_empty());

    brings_shortcut
        && (explicitly_main || (!group_has_shortcut && policy.first_project_becomes_main()))
}

/// Release the group's shortcut slot held by a project about to leave it.
///
/// Returns the slot when `leaving` is the main project, after clearing the
/// project's copy. The group keeps its shortcut either way.
pub fn release_main_slot(group: &mut Group, leaving: ProjectId) -> Option<String> {
    let is_main = current_main_project(group).is_some_and(|p| p.id == leaving);
    if !is_main {
        return None;
    }
    let slot = group.shortcut.clone()?;
    group.project_mut(leaving)?.shortcut = None;
    Some(slot)
}
