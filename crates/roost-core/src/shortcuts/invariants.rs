use std::collections::HashMap;

use crate::catalog::{Catalog, GroupId};
use crate::hierarchy::HierarchyError;
use crate::names;

/// Verify that shortcuts are unambiguous across the catalog.
///
/// Group shortcuts are unique among groups, project shortcuts among
/// projects, and a project may only share a shortcut with its own group
/// (which makes it that group's main project).
pub fn check_shortcut_invariants(catalog: &Catalog) -> Result<(), HierarchyError> {
    let mut group_owners: HashMap<String, (GroupId, &str)> = HashMap::new();
    for group in catalog.groups() {
        let Some(shortcut) = group.shortcut.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let previous = group_owners.insert(names::fold(shortcut), (group.id, &group.name));
        if let Some((_, other)) = previous {
            return Err(conflict(
                shortcut,
                format!("group '{other}'"),
                format!("group '{}'", group.name),
            ));
        }
    }

    let mut project_owners: HashMap<String, &str> = HashMap::new();
    for group in catalog.groups() {
        for project in &group.projects {
            let Some(shortcut) = project.shortcut.as_deref().filter(|s| !s.is_empty()) else {
                continue;
            };
            let key = names::fold(shortcut);
            if let Some(other) = project_owners.insert(key.clone(), &project.name) {
                return Err(conflict(
                    shortcut,
                    format!("project '{other}'"),
                    format!("project '{}'", project.name),
                ));
            }
            if let Some((owner_id, owner_name)) = group_owners.get(&key)
                && *owner_id != group.id
            {
                return Err(conflict(
                    shortcut,
                    format!("group '{owner_name}'"),
                    format!("project '{}'", project.name),
                ));
            }
        }
    }
    Ok(())
}

fn conflict(shortcut: &str, first: String, second: String) -> HierarchyError {
    HierarchyError::ShortcutConflict {
        shortcut: shortcut.to_string(),
        first,
        second,
    }
}
