//! Lookups and structural edits over a [`Catalog`].

use std::path::{Path, PathBuf};

use super::types::*;
use crate::names;

impl Catalog {
    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| names::matches(name, Some(&c.name)))
    }

    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.category_index(name).map(|i| &self.categories[i])
    }

    pub fn category_at_path(&self, path: &Path) -> Option<&Category> {
        self.categories.iter().find(|c| c.path == path)
    }

    pub fn locate_group(&self, category: &str, group: &str) -> Option<GroupLocation> {
        let category_index = self.category_index(category)?;
        let group_index = self.categories[category_index]
            .groups
            .iter()
            .position(|g| names::matches(group, Some(&g.name)))?;
        Some(GroupLocation {
            category: category_index,
            group: group_index,
        })
    }

    pub fn locate_group_by_id(&self, id: GroupId) -> Option<GroupLocation> {
        self.categories.iter().enumerate().find_map(|(ci, c)| {
            c.groups.iter().position(|g| g.id == id).map(|gi| GroupLocation {
                category: ci,
                group: gi,
            })
        })
    }

    /// Project names are unique across the catalog, so a name is enough.
    pub fn locate_project(&self, name: &str) -> Option<ProjectLocation> {
        self.find_project_location(|p| names::matches(name, Some(&p.name)))
    }

    pub fn locate_project_by_id(&self, id: ProjectId) -> Option<ProjectLocation> {
        self.find_project_location(|p| p.id == id)
    }

    fn find_project_location<F>(&self, mut predicate: F) -> Option<ProjectLocation>
    where
        F: FnMut(&Project) -> bool,
    {
        for (ci, category) in self.categories.iter().enumerate() {
            for (gi, group) in category.groups.iter().enumerate() {
                if let Some(pi) = group.projects.iter().position(&mut predicate) {
                    return Some(ProjectLocation {
                        category: ci,
                        group: gi,
                        project: pi,
                    });
                }
            }
        }
        None
    }

    pub fn group_at(&self, at: GroupLocation) -> &Group {
        &self.categories[at.category].groups[at.group]
    }

    pub fn group_at_mut(&mut self, at: GroupLocation) -> &mut Group {
        &mut self.categories[at.category].groups[at.group]
    }

    pub fn project_at(&self, at: ProjectLocation) -> &Project {
        &self.group_at(at.group_location()).projects[at.project]
    }

    pub fn project_at_mut(&mut self, at: ProjectLocation) -> &mut Project {
        &mut self.group_at_mut(at.group_location()).projects[at.project]
    }

    pub fn group_folder(&self, at: GroupLocation) -> PathBuf {
        let category = &self.categories[at.category];
        category.group_path(&category.groups[at.group])
    }

    pub fn project_folder(&self, at: ProjectLocation) -> PathBuf {
        self.group_folder(at.group_location())
            .join(&self.project_at(at).name)
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.categories.iter().flat_map(|c| c.groups.iter())
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.groups().flat_map(|g| g.projects.iter())
    }

    /// Every folder the catalog owns, labelled with its owner.
    pub fn owned_folders(&self) -> Vec<(PathBuf, String)> {
        let mut owned = Vec::new();
        for category in &self.categories {
            owned.push((category.path.clone(), format!("category '{}'", category.name)));
            for group in &category.groups {
                let group_path = category.group_path(group);
                owned.push((group_path.clone(), format!("group '{}'", group.name)));
                owned.extend(group.projects.iter().map(|project| {
                    (
                        group_path.join(&project.name),
                        format!("project '{}'", project.name),
                    )
                }));
            }
        }
        owned
    }

    /// Remove a category with all of its groups and projects.
    pub fn remove_category(&mut self, id: CategoryId) -> Option<RemovalReport> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        let removed = self.categories.remove(index);
        let mut report = RemovalReport::default();
        report.tally_category(&removed);
        Some(report)
    }

    /// Remove a group with all of its projects.
    pub fn remove_group(&mut self, id: GroupId) -> Option<RemovalReport> {
        let at = self.locate_group_by_id(id)?;
        let removed = self.categories[at.category].groups.remove(at.group);
        let mut report = RemovalReport::default();
        report.tally_group(&removed);
        Some(report)
    }

    pub fn remove_project(&mut self, id: ProjectId) -> Option<Project> {
        let at = self.locate_project_by_id(id)?;
        Some(self.group_at_mut(at.group_location()).projects.remove(at.project))
    }
}
