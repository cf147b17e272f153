use std::path::Path;

use clap::ArgMatches;
use tracing::info;

use roost_core::RemovalReport;
use roost_core::ops;

use super::helpers::{Runtime, format_count, report_failure};
use crate::color;

pub(crate) fn handle_category_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("add", sub)) => handle_category_add(sub),
        Some(("import", sub)) => handle_category_import(sub),
        Some(("list", _)) => handle_category_list(),
        Some(("remove", sub)) => handle_category_remove(sub),
        _ => Err("Unknown category subcommand".into()),
    }
}

fn handle_category_add(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Category name is required")?;
    let parent = matches
        .get_one::<String>("parent")
        .map(String::as_str)
        .unwrap_or(".");

    info!(event = "cli.category.add_started", name = name.as_str(), parent = parent);

    let mut runtime = Runtime::load()?;
    let category = ops::create_category(&mut runtime.ctx(), name, Path::new(parent))
        .map_err(|e| report_failure("Could not create category", "cli.category.add_failed", e))?;

    println!(
        "{} {}",
        color::bold("Category created:"),
        color::dusk(&category.name)
    );
    println!(
        "  {} {}",
        color::slate("path:"),
        category.path.display()
    );

    info!(event = "cli.category.add_completed", name = category.name.as_str());
    Ok(())
}

fn handle_category_import(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("Folder path is required")?;
    let name = matches.get_one::<String>("name").map(String::as_str);

    info!(event = "cli.category.import_started", path = path.as_str(), name = ?name);

    let mut runtime = Runtime::load()?;
    let category = ops::import_category(&mut runtime.ctx(), Path::new(path), name).map_err(|e| {
        report_failure("Could not import category", "cli.category.import_failed", e)
    })?;

    println!(
        "{} {}",
        color::bold("Category imported:"),
        color::dusk(&category.name)
    );
    println!(
        "  {} {}",
        color::slate("path:"),
        category.path.display()
    );

    info!(event = "cli.category.import_completed", name = category.name.as_str());
    Ok(())
}

fn handle_category_list() -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.category.list_started");

    let runtime = Runtime::load()?;
    let catalog = runtime
        .catalog()
        .map_err(|e| report_failure("Could not read catalog", "cli.category.list_failed", e))?;

    if catalog.categories.is_empty() {
        println!("No categories yet.");
        println!("  Create one with: roost category add <name> --in <folder>");
    } else {
        for category in &catalog.categories {
            let projects: usize = category.groups.iter().map(|g| g.projects.len()).sum();
            println!(
                "{}  {}  {}",
                color::dusk(&category.name),
                color::slate(&category.path.display().to_string()),
                color::slate(&format!(
                    "({}, {})",
                    format_count(category.groups.len(), "group", "groups"),
                    format_count(projects, "project", "projects")
                )),
            );
        }
    }

    info!(
        event = "cli.category.list_completed",
        count = catalog.categories.len()
    );
    Ok(())
}

fn handle_category_remove(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Category name is required")?;

    info!(event = "cli.category.remove_started", name = name.as_str());

    let mut runtime = Runtime::load()?;
    let report = ops::delete_category(&mut runtime.ctx(), name).map_err(|e| {
        report_failure("Could not remove category", "cli.category.remove_failed", e)
    })?;

    print_removal(&report);

    info!(
        event = "cli.category.remove_completed",
        name = name.as_str(),
        groups = report.groups.len(),
        projects = report.projects.len()
    );
    Ok(())
}

/// Summarize a cascade removal. Folders are never touched by removals.
pub(super) fn print_removal(report: &RemovalReport) {
    let mut parts = Vec::new();
    if !report.categories.is_empty() {
        parts.push(format_count(report.categories.len(), "category", "categories"));
    }
    parts.push(format_count(report.groups.len(), "group", "groups"));
    parts.push(format_count(report.projects.len(), "project", "projects"));

    println!(
        "{} {}",
        color::bold("Removed from catalog:"),
        parts.join(", ")
    );
    for project in &report.projects {
        println!("  {} {}", color::slate("-"), project);
    }
    println!("{}", color::slate("Folders on disk were left in place."));
}
