use std::path::Path;

use clap::ArgMatches;
use tracing::info;

use roost_core::{Group, ops};

use super::category::print_removal;
use super::helpers::{Runtime, report_failure};
use crate::color;

pub(crate) fn handle_group_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("add", sub)) => handle_group_add(sub),
        Some(("import", sub)) => handle_group_import(sub),
        Some(("remove", sub)) => handle_group_remove(sub),
        _ => Err("Unknown group subcommand".into()),
    }
}

fn handle_group_add(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let category = matches
        .get_one::<String>("category")
        .ok_or("Category is required")?;
    let name = matches
        .get_one::<String>("group")
        .ok_or("Group name is required")?;
    let shortcut = matches.get_one::<String>("shortcut").map(String::as_str);

    info!(
        event = "cli.group.add_started",
        category = category.as_str(),
        name = name.as_str()
    );

    let mut runtime = Runtime::load()?;
    let group = ops::create_group(&mut runtime.ctx(), category, name, shortcut)
        .map_err(|e| report_failure("Could not create group", "cli.group.add_failed", e))?;

    print_group("Group created:", category, &group);

    info!(event = "cli.group.add_completed", name = group.name.as_str());
    Ok(())
}

fn handle_group_import(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let category = matches
        .get_one::<String>("category")
        .ok_or("Category is required")?;
    let path = matches
        .get_one::<String>("path")
        .ok_or("Folder path is required")?;
    let name = matches.get_one::<String>("name").map(String::as_str);
    let shortcut = matches.get_one::<String>("shortcut").map(String::as_str);

    info!(
        event = "cli.group.import_started",
        category = category.as_str(),
        path = path.as_str()
    );

    let mut runtime = Runtime::load()?;
    let group = ops::import_group(&mut runtime.ctx(), category, Path::new(path), name, shortcut)
        .map_err(|e| report_failure("Could not import group", "cli.group.import_failed", e))?;

    print_group("Group imported:", category, &group);

    info!(event = "cli.group.import_completed", name = group.name.as_str());
    Ok(())
}

fn handle_group_remove(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let category = matches
        .get_one::<String>("category")
        .ok_or("Category is required")?;
    let name = matches
        .get_one::<String>("group")
        .ok_or("Group name is required")?;

    info!(
        event = "cli.group.remove_started",
        category = category.as_str(),
        name = name.as_str()
    );

    let mut runtime = Runtime::load()?;
    let report = ops::delete_group(&mut runtime.ctx(), category, name)
        .map_err(|e| report_failure("Could not remove group", "cli.group.remove_failed", e))?;

    print_removal(&report);

    info!(
        event = "cli.group.remove_completed",
        name = name.as_str(),
        projects = report.projects.len()
    );
    Ok(())
}

fn print_group(headline: &str, category: &str, group: &Group) {
    println!(
        "{} {} {}",
        color::bold(headline),
        color::dusk(&format!("{}/{}", category, group.name)),
        group
            .shortcut
            .as_deref()
            .map(|s| color::heather(&format!("[{}]", s)))
            .unwrap_or_default()
    );
}
