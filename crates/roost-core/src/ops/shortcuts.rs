use tracing::{debug, info};

use super::projects::{locate_group, locate_project};
use super::{OpsContext, OpsError};
use crate::catalog::Project;
use crate::hierarchy::{HierarchyError, validate_shortcut};
use crate::shortcuts::{
    MainProjectChange, ShortcutResolution, apply_main_project_change, current_main_project,
    resolve_shortcut_for_new_main,
};

/// Set or clear a project's shortcut.
///
/// When the project is its group's main project the group shortcut follows
/// the new value. Clearing it leaves the group's shortcut in place.
pub fn set_project_shortcut(
    ctx: &mut OpsContext<'_>,
    name: &str,
    shortcut: Option<&str>,
) -> Result<Project, OpsError> {
    info!(
        event = "core.project.shortcut_started",
        name = name,
        shortcut = ?shortcut
    );

    let mut catalog = ctx.store.load()?;
    let at = locate_project(&catalog, name)?;
    let group_at = at.group_location();
    let id = catalog.project_at(at).id;
    let group_id = catalog.group_at(group_at).id;
    let is_main = current_main_project(catalog.group_at(group_at)).is_some_and(|p| p.id == id);

    let shortcut = validate_shortcut(
        shortcut,
        catalog
            .groups()
            .filter(|g| !(is_main && g.id == group_id)),
        catalog.projects().filter(|p| p.id != id),
    )?;

    let group = catalog.group_at_mut(group_at);
    if is_main && let Some(new) = &shortcut {
        group.shortcut = Some(new.clone());
    }
    let project = group
        .project_mut(id)
        .ok_or_else(|| HierarchyError::MissingProject {
            name: name.to_string(),
        })?;
    project.shortcut = shortcut;
    let project = project.clone();
    ctx.commit(&catalog)?;

    info!(
        event = "core.project.shortcut_completed",
        name = project.name.as_str(),
        shortcut = ?project.shortcut,
        group_followed = is_main
    );
    Ok(project)
}

/// Make `project` the main project of its group.
///
/// The group keeps its shortcut when it has one, otherwise it takes the
/// project's. When neither has one, `shortcut` is used, and without that the
/// user is prompted.
pub fn change_main_project(
    ctx: &mut OpsContext<'_>,
    category: &str,
    group: &str,
    project: &str,
    shortcut: Option<&str>,
) -> Result<MainProjectChange, OpsError> {
    info!(
        event = "core.group.main_change_started",
        category = category,
        group = group,
        project = project
    );

    let mut catalog = ctx.store.load()?;
    let at = locate_group(&catalog, category, group)?;
    let current = catalog.group_at(at);
    let new_main = current
        .find_project(project)
        .ok_or_else(|| HierarchyError::MissingProject {
            name: project.to_string(),
        })?;
    let new_main_id = new_main.id;
    let previous_main = current_main_project(current).map(|p| p.id);

    let resolved = match resolve_shortcut_for_new_main(current, new_main) {
        ShortcutResolution::Resolved(resolved) => {
            if shortcut.is_some() {
                debug!(
                    event = "core.group.main_change_shortcut_ignored",
                    group = current.name.as_str(),
                    kept = resolved.as_str()
                );
            }
            resolved
        }
        ShortcutResolution::Required => {
            match validate_shortcut(shortcut, catalog.groups(), catalog.projects())? {
                Some(supplied) => supplied,
                None => ctx.ask_for_shortcut(&catalog, &current.name)?,
            }
        }
    };

    let change =
        apply_main_project_change(catalog.group_at_mut(at), previous_main, new_main_id, &resolved)?;
    ctx.commit(&catalog)?;

    info!(
        event = "core.group.main_change_completed",
        group = group,
        shortcut = change.shortcut.as_str()
    );
    Ok(change)
}
