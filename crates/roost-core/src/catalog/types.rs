use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Stable identity of a category across renames.
    CategoryId
);
entity_id!(GroupId);
entity_id!(ProjectId);

/// What kind of folder a project opens as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// A folder holding an `.xcodeproj`.
    #[default]
    Project,
    /// A folder with a package manifest (`Package.swift`, `Cargo.toml`,
    /// `package.json`), opened as a folder.
    Package,
    /// A folder holding an `.xcworkspace`.
    Workspace,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectKind::Project => write!(f, "project"),
            ProjectKind::Package => write!(f, "package"),
            ProjectKind::Workspace => write!(f, "workspace"),
        }
    }
}

/// A named URL attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub name: String,
    pub url: String,
}

impl ProjectLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    #[serde(default)]
    pub kind: ProjectKind,
    /// The repository this project can be re-cloned from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<ProjectLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ProjectLink>,
}

impl Project {
    pub fn new(name: impl Into<String>, kind: ProjectKind) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            shortcut: None,
            kind,
            remote: None,
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Group {
    pub fn new(name: impl Into<String>, shortcut: Option<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            shortcut,
            projects: Vec::new(),
        }
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn find_project(&self, name: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| crate::names::matches(name, Some(&p.name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Absolute path of the category folder. Group and project folders are
    /// derived from it and never stored.
    pub path: PathBuf,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Category {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            path: path.into(),
            groups: Vec::new(),
        }
    }

    pub fn group_path(&self, group: &Group) -> PathBuf {
        self.path.join(&group.name)
    }

    pub fn project_path(&self, group: &Group, project: &Project) -> PathBuf {
        self.group_path(group).join(&project.name)
    }

    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups
            .iter()
            .find(|g| crate::names::matches(name, Some(&g.name)))
    }
}

/// The whole persisted hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Index path to a group inside a [`Catalog`].
///
/// Only valid until the catalog is next mutated structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLocation {
    pub category: usize,
    pub group: usize,
}

/// Index path to a project inside a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLocation {
    pub category: usize,
    pub group: usize,
    pub project: usize,
}

impl ProjectLocation {
    pub fn group_location(&self) -> GroupLocation {
        GroupLocation {
            category: self.category,
            group: self.group,
        }
    }
}

/// Names of everything a cascading delete took with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    pub projects: Vec<String>,
}

impl RemovalReport {
    pub(crate) fn tally_category(&mut self, category: &Category) {
        self.categories.push(category.name.clone());
        for group in &category.groups {
            self.tally_group(group);
        }
    }

    pub(crate) fn tally_group(&mut self, group: &Group) {
        self.groups.push(group.name.clone());
        self.projects
            .extend(group.projects.iter().map(|p| p.name.clone()));
    }
}
