use std::path::Path;

use unicode_width::UnicodeWidthStr;

use roost_core::Catalog;
use roost_core::shortcuts::current_main_project;

use crate::color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Category,
    Group,
    Project { main: bool, on_disk: bool },
}

/// One line of the catalog tree, before coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub name: String,
    pub shortcut: Option<String>,
    /// Folder for categories, kind for projects.
    pub detail: String,
    pub kind: RowKind,
}

pub struct TreeFormatter {
    rows: Vec<TreeRow>,
    name_width: usize,
}

impl TreeFormatter {
    /// `on_disk` reports whether a project folder currently exists.
    pub fn new(catalog: &Catalog, on_disk: impl Fn(&Path) -> bool) -> Self {
        let mut rows = Vec::new();
        for category in &catalog.categories {
            rows.push(TreeRow {
                depth: 0,
                name: category.name.clone(),
                shortcut: None,
                detail: category.path.display().to_string(),
                kind: RowKind::Category,
            });
            for group in &category.groups {
                rows.push(TreeRow {
                    depth: 1,
                    name: group.name.clone(),
                    shortcut: group.shortcut.clone(),
                    detail: String::new(),
                    kind: RowKind::Group,
                });
                let main = current_main_project(group).map(|p| p.id);
                for project in &group.projects {
                    rows.push(TreeRow {
                        depth: 2,
                        name: project.name.clone(),
                        shortcut: project.shortcut.clone(),
                        detail: project.kind.to_string(),
                        kind: RowKind::Project {
                            main: main == Some(project.id),
                            on_disk: on_disk(&category.project_path(group, project)),
                        },
                    });
                }
            }
        }

        let name_width = rows
            .iter()
            .map(|row| indent_width(row.depth) + display_width(&row.name))
            .max()
            .unwrap_or(0);

        Self { rows, name_width }
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn print(&self) {
        for row in &self.rows {
            println!("{}", self.format_row(row));
        }
    }

    fn format_row(&self, row: &TreeRow) -> String {
        let marker = match row.kind {
            RowKind::Project { main: true, .. } => color::moss("*"),
            _ => " ".to_string(),
        };
        let indent = " ".repeat(indent_width(row.depth).saturating_sub(2));
        let padding = " ".repeat(
            self.name_width
                .saturating_sub(indent_width(row.depth) + display_width(&row.name)),
        );
        let name = match row.kind {
            RowKind::Category | RowKind::Group => color::bold(&row.name),
            RowKind::Project { .. } => color::dusk(&row.name),
        };
        let shortcut = row
            .shortcut
            .as_deref()
            .map(|s| color::heather(&format!("[{}]", s)))
            .unwrap_or_default();

        let mut line = format!("{}{} {}{}  {}", indent, marker, name, padding, shortcut);
        if !row.detail.is_empty() {
            line.push_str(&format!("  {}", color::slate(&row.detail)));
        }
        if let RowKind::Project { on_disk: false, .. } = row.kind {
            line.push_str(&format!("  {}", color::amber("(evicted)")));
        }
        line.trim_end().to_string()
    }
}

fn indent_width(depth: usize) -> usize {
    2 + depth * 2
}

fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}
