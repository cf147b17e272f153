use std::path::PathBuf;

use roost_git::repository::remote_url;
use serde::Serialize;
use tracing::{debug, info};

use super::{OpsContext, OpsError};
use crate::catalog::{Catalog, GroupLocation, Project, ProjectKind, ProjectLink, ProjectLocation};
use crate::folders::{FolderError, detect_project_kind, ensure_name_free, place_folder};
use crate::hierarchy::{HierarchyError, validate_project_name, validate_shortcut};
use crate::shortcuts::{
    ShortcutResolution, apply_main_project_change, current_main_project, release_main_slot,
    resolve_shortcut_for_new_main, should_adopt_shortcut_on_save,
};

/// Request to add a project to a group.
///
/// With `source` set the folder is adopted (moved into the group when it
/// lives elsewhere) and its kind detected; otherwise an empty folder is
/// created.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub category: String,
    pub group: String,
    /// Defaults to the source folder's name.
    pub name: Option<String>,
    pub shortcut: Option<String>,
    pub source: Option<PathBuf>,
    pub kind: Option<ProjectKind>,
    /// Defaults to the source repository's configured remote, if any.
    pub remote: Option<ProjectLink>,
    pub links: Vec<ProjectLink>,
    pub make_main: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddedProject {
    pub project: Project,
    pub folder: PathBuf,
    pub is_main: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRemoval {
    pub project: Project,
    /// Name of the project that took over the main slot.
    pub new_main: Option<String>,
}

pub(super) fn locate_group(
    catalog: &Catalog,
    category: &str,
    group: &str,
) -> Result<GroupLocation, HierarchyError> {
    if catalog.category_index(category).is_none() {
        return Err(HierarchyError::MissingCategory {
            name: category.to_string(),
        });
    }
    catalog
        .locate_group(category, group)
        .ok_or_else(|| HierarchyError::MissingGroup {
            name: group.to_string(),
        })
}

pub(super) fn locate_project(
    catalog: &Catalog,
    name: &str,
) -> Result<ProjectLocation, HierarchyError> {
    catalog
        .locate_project(name)
        .ok_or_else(|| HierarchyError::MissingProject {
            name: name.to_string(),
        })
}

pub fn add_project(ctx: &mut OpsContext<'_>, request: NewProject) -> Result<AddedProject, OpsError> {
    info!(
        event = "core.project.add_started",
        category = request.category.as_str(),
        group = request.group.as_str(),
        name = ?request.name,
        source = ?request.source,
        make_main = request.make_main
    );

    let mut catalog = ctx.store.load()?;
    let at = locate_group(&catalog, &request.category, &request.group)?;

    let source = request
        .source
        .as_deref()
        .map(|path| ctx.fs.resolve(path))
        .transpose()?;
    if let Some(folder) = &source {
        ctx.ensure_uncataloged(&catalog, folder)?;
    }
    let candidate = request
        .name
        .as_deref()
        .or(source.as_ref().map(|f| f.name.as_str()))
        .unwrap_or_default();
    let name = validate_project_name(candidate, catalog.projects())?;
    let shortcut = validate_shortcut(
        request.shortcut.as_deref(),
        catalog.groups(),
        catalog.projects(),
    )?;

    let kind = match (request.kind, &source) {
        (Some(kind), _) => kind,
        (None, Some(folder)) => detect_project_kind(ctx.fs, folder)?,
        (None, None) => ProjectKind::default(),
    };
    let remote_name = ctx.config.git.remote();
    let remote = request.remote.or_else(|| {
        let folder = source.as_ref()?;
        remote_url(&folder.path, remote_name).map(|url| ProjectLink::new(remote_name, url))
    });

    let mut project = Project::new(name, kind);
    project.shortcut = shortcut;
    project.remote = remote;
    project.links = request.links;

    let group = catalog.group_at(at);
    let adopt = should_adopt_shortcut_on_save(
        group,
        request.make_main,
        project.shortcut.as_deref(),
        &ctx.config.shortcuts,
    );
    let main_shortcut = if request.make_main && !adopt {
        match resolve_shortcut_for_new_main(group, &project) {
            ShortcutResolution::Resolved(shortcut) => Some(shortcut),
            ShortcutResolution::Required => Some(ctx.ask_for_shortcut(&catalog, &group.name)?),
        }
    } else {
        None
    };

    let parent = catalog.group_folder(at);
    let folder = place_folder(ctx.fs, source.as_ref(), &parent, &project.name)?;

    let id = project.id;
    let group = catalog.group_at_mut(at);
    let previous_main = current_main_project(group).map(|p| p.id);
    group.projects.push(project);
    if adopt {
        group.shortcut = group.project(id).and_then(|p| p.shortcut.clone());
    } else if let Some(shortcut) = main_shortcut {
        apply_main_project_change(group, previous_main, id, &shortcut)?;
    }
    let is_main = current_main_project(group).is_some_and(|p| p.id == id);
    let project = group
        .project(id)
        .cloned()
        .ok_or_else(|| HierarchyError::MissingProject {
            name: candidate.to_string(),
        })?;

    ctx.commit_placed(&catalog, &folder, source.as_ref())?;

    info!(
        event = "core.project.add_completed",
        name = project.name.as_str(),
        kind = %project.kind,
        is_main = is_main,
        path = %folder.path.display()
    );
    Ok(AddedProject {
        project,
        folder: folder.path,
        is_main,
    })
}

/// Rename a project and its folder. A project that is not on disk is only
/// renamed in the catalog, provided no other folder already has the new name.
pub fn rename_project(
    ctx: &mut OpsContext<'_>,
    name: &str,
    new_name: &str,
) -> Result<Project, OpsError> {
    info!(event = "core.project.rename_started", name = name, new_name = new_name);

    let mut catalog = ctx.store.load()?;
    let at = locate_project(&catalog, name)?;
    let id = catalog.project_at(at).id;
    let new_name = validate_project_name(new_name, catalog.projects().filter(|p| p.id != id))?;

    let parent = catalog.group_folder(at.group_location());
    let moved = match ctx.fs.resolve(&catalog.project_folder(at)) {
        Ok(existing) => {
            let mut placed = place_folder(ctx.fs, Some(&existing), &parent, &new_name)?;
            // Case-only renames reconcile to a no-op.
            if placed.name != new_name {
                placed = ctx.fs.move_folder(&placed, &parent, &new_name)?;
            }
            Some((placed, existing))
        }
        Err(FolderError::NotFound { path }) => {
            debug!(event = "core.project.rename_folder_absent", path = %path.display());
            ensure_name_free(ctx.fs, &parent, &new_name)?;
            None
        }
        Err(e) => return Err(e.into()),
    };

    let project = catalog.project_at_mut(at);
    project.name = new_name;
    let project = project.clone();
    match &moved {
        Some((placed, existing)) => ctx.commit_placed(&catalog, placed, Some(existing))?,
        None => ctx.commit(&catalog)?,
    }

    info!(event = "core.project.rename_completed", name = project.name.as_str());
    Ok(project)
}

/// Move a project into another group.
///
/// A main project gives up its shortcut when it leaves; the old group keeps
/// the shortcut without a main project.
pub fn move_project(
    ctx: &mut OpsContext<'_>,
    name: &str,
    category: &str,
    group: &str,
) -> Result<Project, OpsError> {
    info!(
        event = "core.project.move_started",
        name = name,
        category = category,
        group = group
    );

    let mut catalog = ctx.store.load()?;
    let from = locate_project(&catalog, name)?;
    let to = locate_group(&catalog, category, group)?;
    if from.group_location() == to {
        debug!(event = "core.project.move_skipped", name = name, reason = "same_group");
        return Ok(catalog.project_at(from).clone());
    }

    let id = catalog.project_at(from).id;
    let project_name = catalog.project_at(from).name.clone();
    let target_parent = catalog.group_folder(to);
    let moved = match ctx.fs.resolve(&catalog.project_folder(from)) {
        Ok(existing) => {
            let placed = place_folder(ctx.fs, Some(&existing), &target_parent, &project_name)?;
            Some((placed, existing))
        }
        Err(FolderError::NotFound { path }) => {
            debug!(event = "core.project.move_folder_absent", path = %path.display());
            ensure_name_free(ctx.fs, &target_parent, &project_name)?;
            None
        }
        Err(e) => return Err(e.into()),
    };

    let released = release_main_slot(catalog.group_at_mut(from.group_location()), id);
    let project = catalog
        .remove_project(id)
        .ok_or_else(|| HierarchyError::MissingProject {
            name: name.to_string(),
        })?;
    catalog.group_at_mut(to).projects.push(project.clone());
    match &moved {
        Some((placed, existing)) => ctx.commit_placed(&catalog, placed, Some(existing))?,
        None => ctx.commit(&catalog)?,
    }

    info!(
        event = "core.project.move_completed",
        name = project.name.as_str(),
        released_shortcut = ?released
    );
    Ok(project)
}

/// Remove a project from the catalog, leaving its folder on disk.
///
/// When it was the main project the user may pick a replacement, which
/// takes over the group's shortcut. Without one the shortcut stays on the
/// group with no main project.
pub fn remove_project(ctx: &mut OpsContext<'_>, name: &str) -> Result<ProjectRemoval, OpsError> {
    info!(event = "core.project.remove_started", name = name);

    let mut catalog = ctx.store.load()?;
    let at = locate_project(&catalog, name)?;
    let group_at = at.group_location();
    let project = catalog.project_at(at).clone();

    let was_main =
        current_main_project(catalog.group_at(group_at)).is_some_and(|p| p.id == project.id);
    let replacement = if was_main {
        ctx.choose_replacement(catalog.group_at(group_at), project.id, &project.name)?
    } else {
        None
    };

    let slot = release_main_slot(catalog.group_at_mut(group_at), project.id);
    catalog.remove_project(project.id);

    let mut new_main = None;
    if let (Some(slot), Some(replacement)) = (slot, replacement) {
        let group = catalog.group_at_mut(group_at);
        apply_main_project_change(group, None, replacement, &slot)?;
        new_main = group.project(replacement).map(|p| p.name.clone());
    }
    ctx.commit(&catalog)?;

    info!(
        event = "core.project.remove_completed",
        name = project.name.as_str(),
        new_main = ?new_main
    );
    Ok(ProjectRemoval { project, new_main })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures::{Harness, work_catalog};
    use crate::ops::change_main_project;
    use crate::shortcuts::check_shortcut_invariants;
    use crate::test_support::MemoryFileSystem;

    fn request(group: &str, name: &str) -> NewProject {
        NewProject {
            category: "Work".to_string(),
            group: group.to_string(),
            name: Some(name.to_string()),
            ..NewProject::default()
        }
    }

    fn empty_group_catalog() -> Harness {
        let (mut catalog, fs) = work_catalog();
        catalog.categories[0]
            .groups
            .push(crate::catalog::Group::new("Api", None));
        Harness::new(catalog, fs.with_dir("/dev/Work/Api"))
    }

    #[test]
    fn test_add_creates_folder() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let added = add_project(&mut h.ctx(), request("Tools", "Lint")).unwrap();
        assert_eq!(added.folder, PathBuf::from("/dev/Work/Tools/Lint"));
        assert!(h.fs.has_dir("/dev/Work/Tools/Lint"));
        assert!(!added.is_main);
    }

    #[test]
    fn test_adopted_folder_is_moved_and_detected() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_dir("/tmp/Viewer/Viewer.xcworkspace"));

        let added = add_project(
            &mut h.ctx(),
            NewProject {
                name: None,
                source: Some(PathBuf::from("/tmp/Viewer")),
                ..request("Tools", "")
            },
        )
        .unwrap();
        assert_eq!(added.project.name, "Viewer");
        assert_eq!(added.project.kind, ProjectKind::Workspace);
        assert!(h.fs.has_dir("/dev/Work/Tools/Viewer/Viewer.xcworkspace"));
        assert!(!h.fs.has_dir("/tmp/Viewer"));
    }

    #[test]
    fn test_adopting_a_cataloged_project_folder_is_refused() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = add_project(
            &mut h.ctx(),
            NewProject {
                source: Some(PathBuf::from("/dev/Work/Web/App")),
                ..request("Tools", "App2")
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::FolderAlreadyCataloged { ref owner, .. })
                if owner == "project 'App'"
        ));
        assert!(h.fs.has_dir("/dev/Work/Web/App"));
        assert!(!h.fs.has_dir("/dev/Work/Tools/App2"));
        assert_eq!(h.store.saves, 0);
    }

    #[test]
    fn test_adopting_a_folder_that_holds_a_group_is_refused() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = add_project(
            &mut h.ctx(),
            NewProject {
                source: Some(PathBuf::from("/dev/Work/Web")),
                ..request("Tools", "Everything")
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::FolderAlreadyCataloged { .. })
        ));
        assert!(h.fs.has_dir("/dev/Work/Web/Kit"));
    }

    #[test]
    fn test_failed_save_moves_adopted_folder_back() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_dir("/tmp/Viewer/Viewer.xcworkspace"));
        h.store.fail_saves = true;

        let err = add_project(
            &mut h.ctx(),
            NewProject {
                name: None,
                source: Some(PathBuf::from("/tmp/Viewer")),
                ..request("Tools", "")
            },
        )
        .unwrap_err();
        assert!(matches!(err, OpsError::Store(_)));
        assert!(h.fs.has_dir("/tmp/Viewer/Viewer.xcworkspace"));
        assert!(!h.fs.has_dir("/dev/Work/Tools/Viewer"));
    }

    #[test]
    fn test_adopting_folder_without_project_fails_before_moving() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_file("/tmp/notes/todo.txt"));

        let err = add_project(
            &mut h.ctx(),
            NewProject {
                source: Some(PathBuf::from("/tmp/notes")),
                ..request("Tools", "Notes")
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OpsError::Folder(FolderError::NoProjectInFolder { .. })
        ));
        assert!(h.fs.has_dir("/tmp/notes"));
    }

    #[test]
    fn test_project_names_are_global() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = add_project(&mut h.ctx(), request("Tools", "kit")).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::ProjectNameTaken { .. })
        ));
    }

    #[test]
    fn test_first_project_with_shortcut_becomes_main() {
        let mut h = empty_group_catalog();

        let added = add_project(
            &mut h.ctx(),
            NewProject {
                shortcut: Some("s".to_string()),
                ..request("Api", "Server")
            },
        )
        .unwrap();
        assert!(added.is_main);
        let at = h.catalog().locate_group("Work", "Api").unwrap();
        assert_eq!(h.catalog().group_at(at).shortcut.as_deref(), Some("s"));
    }

    #[test]
    fn test_first_project_policy_can_be_disabled() {
        let mut h = empty_group_catalog();
        h.config.shortcuts.first_project_becomes_main = Some(false);

        let added = add_project(
            &mut h.ctx(),
            NewProject {
                shortcut: Some("s".to_string()),
                ..request("Api", "Server")
            },
        )
        .unwrap();
        assert!(!added.is_main);
        let at = h.catalog().locate_group("Work", "Api").unwrap();
        assert_eq!(h.catalog().group_at(at).shortcut, None);
    }

    #[test]
    fn test_explicit_main_takes_group_shortcut() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let added = add_project(
            &mut h.ctx(),
            NewProject {
                make_main: true,
                ..request("Web", "Site")
            },
        )
        .unwrap();
        assert!(added.is_main);
        assert_eq!(h.shortcut_of("Site").as_deref(), Some("w"));
        assert_eq!(h.shortcut_of("App"), None);
        assert!(check_shortcut_invariants(h.catalog()).is_ok());
    }

    #[test]
    fn test_explicit_main_without_any_shortcut_prompts() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);
        h.prompter = crate::test_support::ScriptedPrompter::new().input_with(Some("t"));

        let added = add_project(
            &mut h.ctx(),
            NewProject {
                make_main: true,
                ..request("Tools", "Lint")
            },
        )
        .unwrap();
        assert!(added.is_main);
        assert_eq!(h.shortcut_of("Lint").as_deref(), Some("t"));
        assert_eq!(h.prompter.asked().len(), 1);
    }

    #[test]
    fn test_declined_shortcut_prompt_changes_nothing() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = add_project(
            &mut h.ctx(),
            NewProject {
                make_main: true,
                ..request("Tools", "Lint")
            },
        )
        .unwrap_err();
        assert!(matches!(err, OpsError::ShortcutRequired { .. }));
        assert!(!h.fs.has_dir("/dev/Work/Tools/Lint"));
        assert_eq!(h.store.saves, 0);
    }

    #[test]
    fn test_rename_moves_folder() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let project = rename_project(&mut h.ctx(), "kit", "Toolkit").unwrap();
        assert_eq!(project.name, "Toolkit");
        assert!(h.fs.has_dir("/dev/Work/Web/Toolkit"));
        assert!(!h.fs.has_dir("/dev/Work/Web/Kit"));
        assert!(h.catalog().locate_project("Kit").is_none());
    }

    #[test]
    fn test_case_only_rename() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        rename_project(&mut h.ctx(), "Kit", "KIT").unwrap();
        assert!(h.fs.has_dir("/dev/Work/Web/KIT"));
        assert!(!h.fs.has_dir("/dev/Work/Web/Kit"));
    }

    #[test]
    fn test_rename_evicted_project_is_catalog_only() {
        let (catalog, _) = work_catalog();
        let mut h = Harness::new(catalog, MemoryFileSystem::new().with_dir("/dev/Work/Web"));

        rename_project(&mut h.ctx(), "Kit", "Toolkit").unwrap();
        assert!(h.catalog().locate_project("Toolkit").is_some());
        assert!(!h.fs.has_dir("/dev/Work/Web/Toolkit"));
    }

    #[test]
    fn test_rename_evicted_project_onto_unrelated_folder_fails() {
        let (catalog, _) = work_catalog();
        let mut h = Harness::new(
            catalog,
            MemoryFileSystem::new().with_dir("/dev/Work/Web/Unrelated"),
        );

        let err = rename_project(&mut h.ctx(), "Kit", "Unrelated").unwrap_err();
        assert!(matches!(
            err,
            OpsError::Folder(FolderError::FolderNameTaken { .. })
        ));
        assert!(h.catalog().locate_project("Kit").is_some());
        assert_eq!(h.store.saves, 0);
    }

    #[test]
    fn test_failed_save_rolls_rename_back() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);
        h.store.fail_saves = true;

        let err = rename_project(&mut h.ctx(), "Kit", "Toolkit").unwrap_err();
        assert!(matches!(err, OpsError::Store(_)));
        assert!(h.fs.has_dir("/dev/Work/Web/Kit"));
        assert!(!h.fs.has_dir("/dev/Work/Web/Toolkit"));
    }

    #[test]
    fn test_rename_to_taken_name() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let err = rename_project(&mut h.ctx(), "Kit", "cli").unwrap_err();
        assert!(matches!(
            err,
            OpsError::Hierarchy(HierarchyError::ProjectNameTaken { .. })
        ));
    }

    #[test]
    fn test_move_main_project_orphans_group_shortcut() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let moved = move_project(&mut h.ctx(), "App", "Work", "Tools").unwrap();
        assert_eq!(moved.shortcut, None);
        assert!(h.fs.has_dir("/dev/Work/Tools/App"));
        assert!(!h.fs.has_dir("/dev/Work/Web/App"));

        let web = h.catalog().locate_group("Work", "Web").unwrap();
        let web = h.catalog().group_at(web);
        assert_eq!(web.shortcut.as_deref(), Some("w"));
        assert!(current_main_project(web).is_none());
        assert!(check_shortcut_invariants(h.catalog()).is_ok());
    }

    #[test]
    fn test_move_keeps_non_main_shortcut() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        move_project(&mut h.ctx(), "Kit", "Work", "Tools").unwrap();
        assert_eq!(h.shortcut_of("Kit").as_deref(), Some("k"));
    }

    #[test]
    fn test_move_into_occupied_folder_fails() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs.with_dir("/dev/Work/Tools/Kit"));

        let err = move_project(&mut h.ctx(), "Kit", "Work", "Tools").unwrap_err();
        assert!(matches!(
            err,
            OpsError::Folder(FolderError::FolderNameTaken { .. })
        ));
        assert_eq!(h.store.saves, 0);
    }

    #[test]
    fn test_move_evicted_project_into_occupied_name_fails() {
        let (catalog, _) = work_catalog();
        let mut h = Harness::new(
            catalog,
            MemoryFileSystem::new()
                .with_dir("/dev/Work/Web")
                .with_dir("/dev/Work/Tools/kit"),
        );

        let err = move_project(&mut h.ctx(), "Kit", "Work", "Tools").unwrap_err();
        assert!(matches!(
            err,
            OpsError::Folder(FolderError::FolderNameTaken { .. })
        ));
        let at = h.catalog().locate_project("Kit").unwrap();
        assert_eq!(h.catalog().group_at(at.group_location()).name, "Web");
    }

    #[test]
    fn test_failed_save_moves_project_folder_back() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);
        h.store.fail_saves = true;

        move_project(&mut h.ctx(), "Kit", "Work", "Tools").unwrap_err();
        assert!(h.fs.has_dir("/dev/Work/Web/Kit"));
        assert!(!h.fs.has_dir("/dev/Work/Tools/Kit"));
    }

    #[test]
    fn test_remove_main_with_replacement() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);
        h.prompter = crate::test_support::ScriptedPrompter::new().select_with(Some(0));

        let removal = remove_project(&mut h.ctx(), "App").unwrap();
        assert_eq!(removal.new_main.as_deref(), Some("Kit"));
        assert_eq!(h.shortcut_of("Kit").as_deref(), Some("w"));
        assert!(h.fs.has_dir("/dev/Work/Web/App"));
        assert!(check_shortcut_invariants(h.catalog()).is_ok());
    }

    #[test]
    fn test_remove_main_without_replacement_orphans_shortcut() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        let removal = remove_project(&mut h.ctx(), "App").unwrap();
        assert_eq!(removal.new_main, None);
        assert_eq!(h.shortcut_of("Kit").as_deref(), Some("k"));
        let web = h.catalog().locate_group("Work", "Web").unwrap();
        assert_eq!(h.catalog().group_at(web).shortcut.as_deref(), Some("w"));
    }

    #[test]
    fn test_remove_only_main_project_keeps_orphaned_shortcut() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);
        change_main_project(&mut h.ctx(), "Work", "Tools", "Cli", Some("c")).unwrap();

        let removal = remove_project(&mut h.ctx(), "Cli").unwrap();
        assert_eq!(removal.new_main, None);
        assert!(h.prompter.asked().is_empty());
        assert!(h.fs.has_dir("/dev/Work/Tools/Cli"));
        let tools = h.catalog().locate_group("Work", "Tools").unwrap();
        assert_eq!(h.catalog().group_at(tools).shortcut.as_deref(), Some("c"));
    }

    #[test]
    fn test_missing_project() {
        let (catalog, fs) = work_catalog();
        let mut h = Harness::new(catalog, fs);

        for err in [
            remove_project(&mut h.ctx(), "Nope").unwrap_err(),
            rename_project(&mut h.ctx(), "Nope", "Other").unwrap_err(),
        ] {
            assert!(matches!(
                err,
                OpsError::Hierarchy(HierarchyError::MissingProject { .. })
            ));
        }
    }
}
