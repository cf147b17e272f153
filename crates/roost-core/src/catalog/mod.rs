//! The Category → Group → Project tree.
//!
//! Only category folders carry a stored path; group and project folders are
//! always `<category>/<group>/<project>` computed from the current names.

mod tree;
mod types;

pub use types::{
    Catalog, Category, CategoryId, Group, GroupId, GroupLocation, Project, ProjectId,
    ProjectKind, ProjectLink, ProjectLocation, RemovalReport,
};
