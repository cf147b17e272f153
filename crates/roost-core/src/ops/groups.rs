use std::path::Path;

use tracing::info;

use super::{OpsContext, OpsError};
use crate::catalog::{Group, RemovalReport};
use crate::folders::{Folder, FolderError, place_folder};
use crate::hierarchy::{HierarchyError, validate_group_name, validate_shortcut};

fn missing_category(name: &str) -> HierarchyError {
    HierarchyError::MissingCategory {
        name: name.to_string(),
    }
}

/// Shared by create and import: validate, place the folder, register.
fn register_group(
    ctx: &mut OpsContext<'_>,
    category: &str,
    name: &str,
    shortcut: Option<&str>,
    existing: Option<&Folder>,
) -> Result<Group, OpsError> {
    let mut catalog = ctx.store.load()?;
    let index = catalog
        .category_index(category)
        .ok_or_else(|| missing_category(category))?;

    if let Some(existing) = existing {
        ctx.ensure_uncataloged(&catalog, existing)?;
    }
    let name = validate_group_name(name, &catalog.categories[index].groups)?;
    let shortcut = validate_shortcut(shortcut, catalog.groups(), catalog.projects())?;

    let parent = catalog.categories[index].path.clone();
    let placed = place_folder(ctx.fs, existing, &parent, &name)
        .map_err(FolderError::into_group_collision)?;

    let group = Group::new(name, shortcut);
    catalog.categories[index].groups.push(group.clone());
    ctx.commit_placed(&catalog, &placed, existing)?;
    Ok(group)
}

/// Create a group and its folder inside `category`.
pub fn create_group(
    ctx: &mut OpsContext<'_>,
    category: &str,
    name: &str,
    shortcut: Option<&str>,
) -> Result<Group, OpsError> {
    info!(
        event = "core.group.create_started",
        category = category,
        name = name,
        shortcut = ?shortcut
    );
    let group = register_group(ctx, category, name, shortcut, None)?;
    info!(event = "core.group.create_completed", name = group.name.as_str());
    Ok(group)
}

/// Adopt an existing folder as a group, moving it into the category folder.
pub fn import_group(
    ctx: &mut OpsContext<'_>,
    category: &str,
    folder: &Path,
    name: Option<&str>,
    shortcut: Option<&str>,
) -> Result<Group, OpsError> {
    info!(
        event = "core.group.import_started",
        category = category,
        folder = %folder.display(),
        name = ?name
    );
    let folder = ctx.fs.resolve(folder)?;
    let name = name.unwrap_or(&folder.name).to_string();
    let group = register_group(ctx, category, &name, shortcut, Some(&folder))?;
    info!(event = "core.group.import_completed", name = group.name.as_str());
    Ok(group)
}

/// Remove a group and its projects from the catalog. Folders stay on disk.
pub fn delete_group(
    ctx: &mut OpsContext<'_>,
    category: &str,
    name: &str,
) -> Result<RemovalReport, OpsError> {
    info!(event = "core.group.delete_started", category = category, name = name);

    let mut catalog = ctx.store.load()?;
    if catalog.category_index(category).is_none() {
        return Err(missing_category(category).into());
    }
    let at = catalog
        .locate_group(category, name)
        .ok_or_else(|| HierarchyError::MissingGroup {
            name: name.to_string(),
        })?;
    let id = catalog.group_at(at).id;
    let report = catalog
        .remove_group(id)
        .ok_or_else(|| HierarchyError::MissingGroup {
            name: name.to_string(),
        })?;
    ctx.commit(&catalog)?;

    info!(
        event = "core.group.delete_completed",
        name = name,
        projects = report.projects.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures::{Harness, work_catalog};

    #[test]
    fn test_create_group_creates_folder() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let group = create_group(&mut h.ctx(), "work", "Api", Some(" a ")).unwrap();
        assert_eq!(group.shortcut.as_deref(), Some("a"));
        assert!(h.fs.has_dir("/dev/Work/Api"));
        assert!(h.catalog().locate_group("Work", "api").is_some());
    }

    #[test]
    fn test_existing_folder_maps_to_group_collision() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_dir("/dev/Work/Docs"));

        let err = create_group(&mut h.ctx(), "Work", "docs", None).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Folder(FolderError::GroupFolderAlreadyExists { .. })
        ));
        assert_eq!(h.store.saves, 0);
    }

    #[test]
    fn test_group_shortcut_must_be_globally_unique() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = create_group(&mut h.ctx(), "Work", "Api", Some("K")).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::ShortcutTaken { .. })
        ));
        assert!(!h.fs.has_dir("/dev/Work/Api"));
    }

    #[test]
    fn test_group_name_is_unique_within_category() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = create_group(&mut h.ctx(), "Work", "WEB", None).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::GroupNameTaken { .. })
        ));
    }

    #[test]
    fn test_import_group_moves_folder_into_category() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_file("/tmp/experiments/Demo/Package.swift"));

        let group =
            import_group(&mut h.ctx(), "Work", Path::new("/tmp/experiments"), Some("Labs"), None)
                .unwrap();
        assert_eq!(group.name, "Labs");
        assert!(h.fs.has_dir("/dev/Work/Labs/Demo"));
        assert!(!h.fs.has_dir("/tmp/experiments"));
    }

    #[test]
    fn test_import_group_already_in_place() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_dir("/dev/Work/Docs"));

        let group = import_group(&mut h.ctx(), "Work", Path::new("/dev/Work/Docs"), None, None)
            .unwrap();
        assert_eq!(group.name, "Docs");
        assert!(h.fs.has_dir("/dev/Work/Docs"));
    }

    #[test]
    fn test_import_group_refuses_a_cataloged_group_folder() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = import_group(
            &mut h.ctx(),
            "Work",
            Path::new("/dev/Work/Web"),
            Some("Frontend"),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::FolderAlreadyCataloged { ref owner, .. })
                if owner == "group 'Web'"
        ));
        assert!(h.fs.has_dir("/dev/Work/Web/App"));
        assert!(!h.fs.has_dir("/dev/Work/Frontend"));
        assert_eq!(h.store.saves, 0);
    }

    #[test]
    fn test_import_group_refuses_a_folder_holding_the_catalog() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = import_group(&mut h.ctx(), "Work", Path::new("/dev"), Some("All"), None)
            .unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::FolderAlreadyCataloged { ref owner, .. })
                if owner == "category 'Work'"
        ));
        assert!(h.fs.has_dir("/dev/Work/Tools/Cli"));
    }

    #[test]
    fn test_failed_save_moves_imported_group_back() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_file("/tmp/experiments/Demo/Package.swift"));
        h.store.fail_saves = true;

        let err =
            import_group(&mut h.ctx(), "Work", Path::new("/tmp/experiments"), Some("Labs"), None)
                .unwrap_err();
        assert!(matches!(err, OpsError::Store(_)));
        assert!(h.fs.has_dir("/tmp/experiments/Demo"));
        assert!(!h.fs.has_dir("/dev/Work/Labs"));
    }

    #[test]
    fn test_missing_category() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = create_group(&mut h.ctx(), "Home", "Api", None).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::MissingCategory { .. })
        ));
    }

    #[test]
    fn test_delete_group_cascades() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let report = delete_group(&mut h.ctx(), "Work", "web").unwrap();
        assert_eq!(report.projects, vec!["App", "Kit"]);
        assert!(h.catalog().locate_project("App").is_none());
        assert!(h.catalog().locate_project("Cli").is_some());

        let err = delete_group(&mut h.ctx(), "Work", "Web").unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::MissingGroup { .. })
        ));
    }
}
