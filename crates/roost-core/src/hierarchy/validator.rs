//! Pure checks run before any create, rename or move.
//!
//! Each validator trims its input and returns the value to store.

use crate::catalog::{Category, Group, Project};
use crate::folders::Folder;
use crate::hierarchy::errors::HierarchyError;
use crate::names;

fn clean_name(candidate: &str, kind: &'static str) -> Result<String, HierarchyError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(HierarchyError::InvalidName { kind });
    }
    Ok(trimmed.to_string())
}

pub fn validate_category_name(
    candidate: &str,
    existing: &[Category],
) -> Result<String, HierarchyError> {
    let name = clean_name(candidate, "Category")?;
    if existing.iter().any(|c| names::matches(&name, Some(&c.name))) {
        return Err(HierarchyError::CategoryNameTaken { name });
    }
    Ok(name)
}

/// Reject a new category folder when `parent` already holds a subfolder of
/// that name.
pub fn validate_parent_folder(
    parent: &Folder,
    subfolders: &[Folder],
    candidate: &str,
) -> Result<(), HierarchyError> {
    if subfolders
        .iter()
        .any(|f| names::matches(candidate, Some(&f.name)))
    {
        return Err(HierarchyError::CategoryPathTaken {
            name: candidate.to_string(),
            path: parent.path.display().to_string(),
        });
    }
    Ok(())
}

/// Group names only have to be unique inside their category.
pub fn validate_group_name(candidate: &str, siblings: &[Group]) -> Result<String, HierarchyError> {
    let name = clean_name(candidate, "Group")?;
    if siblings.iter().any(|g| names::matches(&name, Some(&g.name))) {
        return Err(HierarchyError::GroupNameTaken { name });
    }
    Ok(name)
}

/// Project names are unique across the whole catalog. Pass every project
/// except the one being renamed.
pub fn validate_project_name<'a>(
    candidate: &str,
    projects: impl IntoIterator<Item = &'a Project>,
) -> Result<String, HierarchyError> {
    let name = clean_name(candidate, "Project")?;
    if projects
        .into_iter()
        .any(|p| names::matches(&name, Some(&p.name)))
    {
        return Err(HierarchyError::ProjectNameTaken { name });
    }
    Ok(name)
}

/// A blank shortcut means "no shortcut" and always passes.
pub fn validate_shortcut<'a, 'b>(
    candidate: Option<&str>,
    groups: impl IntoIterator<Item = &'a Group>,
    projects: impl IntoIterator<Item = &'b Project>,
) -> Result<Option<String>, HierarchyError> {
    let Some(shortcut) = candidate.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Some(group) = groups
        .into_iter()
        .find(|g| names::matches(shortcut, g.shortcut.as_deref()))
    {
        return Err(HierarchyError::ShortcutTaken {
            shortcut: shortcut.to_string(),
            owner: format!("group '{}'", group.name),
        });
    }
    if let Some(project) = projects
        .into_iter()
        .find(|p| names::matches(shortcut, p.shortcut.as_deref()))
    {
        return Err(HierarchyError::ShortcutTaken {
            shortcut: shortcut.to_string(),
            owner: format!("project '{}'", project.name),
        });
    }
    Ok(Some(shortcut.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::catalog::ProjectKind;

    fn folder(name: &str) -> Folder {
        Folder::new(PathBuf::from("/dev").join(name))
    }

    #[test]
    fn test_category_name_is_trimmed_and_unique() {
        let existing = vec![Category::new("Work", "/dev/Work")];
        assert_eq!(validate_category_name("  Home ", &existing).unwrap(), "Home");
        assert!(matches!(
            validate_category_name("work", &existing),
            Err(HierarchyError::CategoryNameTaken { .. })
        ));
        assert!(matches!(
            validate_category_name("   ", &existing),
            Err(HierarchyError::InvalidName { kind: "Category" })
        ));
    }

    #[test]
    fn test_parent_folder_rejects_existing_subfolder() {
        let parent = Folder::new("/dev");
        let subfolders = vec![folder("Work"), folder("notes")];
        assert!(matches!(
            validate_parent_folder(&parent, &subfolders, "NOTES"),
            Err(HierarchyError::CategoryPathTaken { .. })
        ));
        assert!(validate_parent_folder(&parent, &subfolders, "Home").is_ok());
    }

    #[test]
    fn test_group_name_only_checks_siblings() {
        let siblings = vec![Group::new("Web", None)];
        assert!(matches!(
            validate_group_name("WEB", &siblings),
            Err(HierarchyError::GroupNameTaken { .. })
        ));
        assert_eq!(validate_group_name("Web", &[]).unwrap(), "Web");
    }

    #[test]
    fn test_project_name_is_globally_unique() {
        let projects = vec![Project::new("App", ProjectKind::Project)];
        assert!(matches!(
            validate_project_name("app", &projects),
            Err(HierarchyError::ProjectNameTaken { .. })
        ));
        assert!(matches!(
            validate_project_name("", &projects),
            Err(HierarchyError::InvalidName { kind: "Project" })
        ));
    }

    #[test]
    fn test_shortcut_collides_with_groups_and_projects() {
        let groups = vec![Group::new("Web", Some("w".to_string()))];
        let mut app = Project::new("App", ProjectKind::Project);
        app.shortcut = Some("a".to_string());
        let projects = vec![app];

        let err = validate_shortcut(Some("W"), &groups, &projects).unwrap_err();
        assert!(err.to_string().contains("group 'Web'"));
        let err = validate_shortcut(Some("A"), &groups, &projects).unwrap_err();
        assert!(err.to_string().contains("project 'App'"));
        assert_eq!(
            validate_shortcut(Some(" x "), &groups, &projects).unwrap(),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_blank_shortcut_means_none() {
        let groups = vec![Group::new("Web", Some(String::new()))];
        assert_eq!(validate_shortcut(Some("  "), &groups, &[]).unwrap(), None);
        assert_eq!(validate_shortcut(None, &groups, &[]).unwrap(), None);
    }
}
