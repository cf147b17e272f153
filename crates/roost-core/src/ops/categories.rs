use std::path::Path;

use tracing::info;

use super::{OpsContext, OpsError};
use crate::catalog::{Category, RemovalReport};
use crate::folders::place_folder;
use crate::hierarchy::{HierarchyError, validate_category_name, validate_parent_folder};

/// Create `<parent>/<name>` and register it as a category.
pub fn create_category(
    ctx: &mut OpsContext<'_>,
    name: &str,
    parent: &Path,
) -> Result<Category, OpsError> {
    info!(
        event = "core.category.create_started",
        name = name,
        parent = %parent.display()
    );

    let mut catalog = ctx.store.load()?;
    let name = validate_category_name(name, &catalog.categories)?;
    let parent = ctx.fs.resolve(parent)?;
    let subfolders = ctx.fs.subfolders(&parent.path)?;
    validate_parent_folder(&parent, &subfolders, &name)?;

    let folder = place_folder(ctx.fs, None, &parent.path, &name)?;
    let category = Category::new(name, folder.path.clone());
    catalog.categories.push(category.clone());
    ctx.commit_placed(&catalog, &folder, None)?;

    info!(
        event = "core.category.create_completed",
        name = category.name.as_str(),
        path = %category.path.display()
    );
    Ok(category)
}

/// Adopt an existing folder as a category. A different `name` renames the
/// folder in place.
pub fn import_category(
    ctx: &mut OpsContext<'_>,
    folder: &Path,
    name: Option<&str>,
) -> Result<Category, OpsError> {
    info!(
        event = "core.category.import_started",
        folder = %folder.display(),
        name = ?name
    );

    let mut catalog = ctx.store.load()?;
    let folder = ctx.fs.resolve(folder)?;
    ctx.ensure_uncataloged(&catalog, &folder)?;

    let name = validate_category_name(name.unwrap_or(&folder.name), &catalog.categories)?;
    let parent = folder
        .path
        .parent()
        .ok_or(HierarchyError::InvalidName { kind: "Category" })?
        .to_path_buf();
    let placed = place_folder(ctx.fs, Some(&folder), &parent, &name)?;

    let category = Category::new(name, placed.path.clone());
    catalog.categories.push(category.clone());
    ctx.commit_placed(&catalog, &placed, Some(&folder))?;

    info!(
        event = "core.category.import_completed",
        name = category.name.as_str(),
        path = %category.path.display()
    );
    Ok(category)
}

/// Remove a category and everything under it from the catalog. Folders on
/// disk are left alone.
pub fn delete_category(ctx: &mut OpsContext<'_>, name: &str) -> Result<RemovalReport, OpsError> {
    info!(event = "core.category.delete_started", name = name);

    let mut catalog = ctx.store.load()?;
    let id = catalog
        .find_category(name)
        .map(|c| c.id)
        .ok_or_else(|| HierarchyError::MissingCategory {
            name: name.to_string(),
        })?;
    let report = catalog
        .remove_category(id)
        .ok_or_else(|| HierarchyError::MissingCategory {
            name: name.to_string(),
        })?;
    ctx.commit(&catalog)?;

    info!(
        event = "core.category.delete_completed",
        name = name,
        groups = report.groups.len(),
        projects = report.projects.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::catalog::Catalog;
    use crate::folders::{FileSystem, FolderError};
    use crate::ops::fixtures::{Harness, work_catalog};
    use crate::test_support::MemoryFileSystem;

    #[test]
    fn test_create_category_makes_folder() {
        let mut h = Harness::new(Catalog::default(), MemoryFileSystem::new().with_dir("/dev"));

        let category = create_category(&mut h.ctx(), " Work ", Path::new("/dev")).unwrap();
        assert_eq!(category.name, "Work");
        assert_eq!(category.path, PathBuf::from("/dev/Work"));
        assert!(h.fs.has_dir("/dev/Work"));
        assert_eq!(h.store.saves, 1);
    }

    #[test]
    fn test_category_names_conflict_ignoring_case() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_dir("/other"));

        let err = create_category(&mut h.ctx(), "WORK", Path::new("/other")).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::CategoryNameTaken { .. })
        ));
        assert!(!h.fs.has_dir("/other/WORK"));
        assert_eq!(h.store.saves, 0);
    }

    #[test]
    fn test_create_refuses_existing_subfolder() {
        let mut h = Harness::new(
            Catalog::default(),
            MemoryFileSystem::new().with_dir("/dev/home"),
        );

        let err = create_category(&mut h.ctx(), "Home", Path::new("/dev")).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::CategoryPathTaken { .. })
        ));
    }

    #[test]
    fn test_create_needs_existing_parent() {
        let mut h = Harness::new(Catalog::default(), MemoryFileSystem::new());
        let err = create_category(&mut h.ctx(), "Work", Path::new("/nowhere")).unwrap_err();
        assert!(matches!(err, OpsError::Folder(FolderError::NotFound { .. })));
    }

    #[test]
    fn test_import_uses_folder_name_and_keeps_folder() {
        let mut h = Harness::new(
            Catalog::default(),
            MemoryFileSystem::new().with_dir("/dev/Side"),
        );

        let category = import_category(&mut h.ctx(), Path::new("/dev/Side"), None).unwrap();
        assert_eq!(category.name, "Side");
        assert_eq!(category.path, PathBuf::from("/dev/Side"));
        assert!(h.fs.has_dir("/dev/Side"));
    }

    #[test]
    fn test_import_with_new_name_renames_folder() {
        let mut h = Harness::new(
            Catalog::default(),
            MemoryFileSystem::new().with_dir("/dev/side-projects"),
        );

        let category =
            import_category(&mut h.ctx(), Path::new("/dev/side-projects"), Some("Side")).unwrap();
        assert_eq!(category.path, PathBuf::from("/dev/Side"));
        assert!(!h.fs.has_dir("/dev/side-projects"));
        assert!(h.fs.resolve(Path::new("/dev/Side")).is_ok());
    }

    #[test]
    fn test_import_same_folder_twice_is_refused() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = import_category(&mut h.ctx(), Path::new("/dev/Work"), Some("Again")).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::FolderAlreadyCataloged { .. })
        ));
    }

    #[test]
    fn test_delete_category_cascades_but_keeps_folders() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let report = delete_category(&mut h.ctx(), "work").unwrap();
        assert_eq!(report.groups, vec!["Web", "Tools"]);
        assert_eq!(report.projects, vec!["App", "Kit", "Cli"]);
        assert!(h.catalog().categories.is_empty());
        assert!(h.fs.has_dir("/dev/Work/Web/App"));
    }

    #[test]
    fn test_delete_missing_category() {
        let mut h = Harness::new(Catalog::default(), MemoryFileSystem::new());
        let err = delete_category(&mut h.ctx(), "Nope").unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::MissingCategory { .. })
        ));
    }
}
