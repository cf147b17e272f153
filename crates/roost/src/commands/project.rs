use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{info, warn};

use roost_core::ops::{self, NewProject};
use roost_core::{OpsError, ProjectKind, ProjectLink};

use super::helpers::{Runtime, parse_link, report_failure};
use crate::color;
use crate::prompt::TerminalPrompter;

pub(crate) fn handle_project_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("add", sub)) => handle_project_add(sub),
        Some(("rename", sub)) => handle_project_rename(sub),
        Some(("move", sub)) => handle_project_move(sub),
        Some(("shortcut", sub)) => handle_project_shortcut(sub),
        Some(("main", sub)) => handle_project_main(sub),
        Some(("remove", sub)) => handle_project_remove(sub),
        Some(("evict", sub)) => handle_project_evict(sub),
        Some(("restore", sub)) => handle_project_restore(sub),
        _ => Err("Unknown project subcommand".into()),
    }
}

fn parse_kind(raw: &str) -> Option<ProjectKind> {
    match raw {
        "project" => Some(ProjectKind::Project),
        "package" => Some(ProjectKind::Package),
        "workspace" => Some(ProjectKind::Workspace),
        _ => None,
    }
}

fn handle_project_add(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let category = matches
        .get_one::<String>("category")
        .ok_or("Category is required")?;
    let group = matches
        .get_one::<String>("group")
        .ok_or("Group is required")?;

    let links = matches
        .get_many::<String>("link")
        .unwrap_or_default()
        .map(|raw| parse_link(raw))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| eprintln!("{}", color::error(e)))?;

    let mut runtime = Runtime::load()?;
    let remote_name = runtime.config.git.remote().to_string();

    let request = NewProject {
        category: category.clone(),
        group: group.clone(),
        name: matches.get_one::<String>("name").cloned(),
        shortcut: matches.get_one::<String>("shortcut").cloned(),
        source: matches.get_one::<String>("from").map(PathBuf::from),
        kind: matches
            .get_one::<String>("kind")
            .and_then(|k| parse_kind(k)),
        remote: matches
            .get_one::<String>("remote")
            .map(|url| ProjectLink::new(remote_name, url.as_str())),
        links,
        make_main: matches.get_flag("main"),
    };

    info!(
        event = "cli.project.add_started",
        category = category.as_str(),
        group = group.as_str(),
        name = ?request.name,
        source = ?request.source
    );

    let added = ops::add_project(&mut runtime.ctx(), request)
        .map_err(|e| report_failure("Could not add project", "cli.project.add_failed", e))?;

    println!(
        "{} {} {}",
        color::bold("Project added:"),
        color::dusk(&added.project.name),
        color::slate(&format!("({})", added.project.kind))
    );
    println!("  {} {}", color::slate("path:"), added.folder.display());
    if let Some(shortcut) = &added.project.shortcut {
        println!("  {} {}", color::slate("shortcut:"), color::heather(shortcut));
    }
    if let Some(remote) = &added.project.remote {
        println!("  {} {}", color::slate("remote:"), remote.url);
    }
    if added.is_main {
        println!("  {}", color::moss(&format!("main project of {}", group)));
    }

    info!(
        event = "cli.project.add_completed",
        name = added.project.name.as_str(),
        is_main = added.is_main
    );
    Ok(())
}

fn handle_project_rename(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("project")
        .ok_or("Project name is required")?;
    let new_name = matches
        .get_one::<String>("new-name")
        .ok_or("New name is required")?;

    info!(
        event = "cli.project.rename_started",
        name = name.as_str(),
        new_name = new_name.as_str()
    );

    let mut runtime = Runtime::load()?;
    let project = ops::rename_project(&mut runtime.ctx(), name, new_name)
        .map_err(|e| report_failure("Could not rename project", "cli.project.rename_failed", e))?;

    println!(
        "{} {} → {}",
        color::bold("Renamed:"),
        name,
        color::dusk(&project.name)
    );

    info!(event = "cli.project.rename_completed", name = project.name.as_str());
    Ok(())
}

fn handle_project_move(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("project")
        .ok_or("Project name is required")?;
    let category = matches
        .get_one::<String>("category")
        .ok_or("Target category is required")?;
    let group = matches
        .get_one::<String>("group")
        .ok_or("Target group is required")?;

    info!(
        event = "cli.project.move_started",
        name = name.as_str(),
        category = category.as_str(),
        group = group.as_str()
    );

    let mut runtime = Runtime::load()?;
    let project = ops::move_project(&mut runtime.ctx(), name, category, group)
        .map_err(|e| report_failure("Could not move project", "cli.project.move_failed", e))?;

    println!(
        "{} {} → {}",
        color::bold("Moved:"),
        color::dusk(&project.name),
        color::dusk(&format!("{}/{}", category, group))
    );

    info!(event = "cli.project.move_completed", name = project.name.as_str());
    Ok(())
}

fn handle_project_shortcut(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("project")
        .ok_or("Project name is required")?;
    let shortcut = if matches.get_flag("clear") {
        None
    } else {
        matches.get_one::<String>("shortcut").map(String::as_str)
    };

    info!(
        event = "cli.project.shortcut_started",
        name = name.as_str(),
        shortcut = ?shortcut
    );

    let mut runtime = Runtime::load()?;
    let project = ops::set_project_shortcut(&mut runtime.ctx(), name, shortcut).map_err(|e| {
        report_failure("Could not set shortcut", "cli.project.shortcut_failed", e)
    })?;

    match &project.shortcut {
        Some(s) => println!(
            "{} {} {}",
            color::bold("Shortcut set:"),
            color::dusk(&project.name),
            color::heather(&format!("[{}]", s))
        ),
        None => println!(
            "{} {}",
            color::bold("Shortcut cleared:"),
            color::dusk(&project.name)
        ),
    }

    info!(event = "cli.project.shortcut_completed", name = project.name.as_str());
    Ok(())
}

fn handle_project_main(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let category = matches
        .get_one::<String>("category")
        .ok_or("Category is required")?;
    let group = matches
        .get_one::<String>("group")
        .ok_or("Group is required")?;
    let project = matches
        .get_one::<String>("project")
        .ok_or("Project name is required")?;
    let shortcut = matches.get_one::<String>("shortcut").map(String::as_str);

    info!(
        event = "cli.project.main_started",
        category = category.as_str(),
        group = group.as_str(),
        project = project.as_str()
    );

    let mut runtime = Runtime::load()?;
    let change = ops::change_main_project(&mut runtime.ctx(), category, group, project, shortcut)
        .map_err(|e| {
            report_failure("Could not change main project", "cli.project.main_failed", e)
        })?;

    println!(
        "{} {} {}",
        color::bold(&format!("Main project of {}:", group)),
        color::moss(project),
        color::heather(&format!("[{}]", change.shortcut))
    );

    info!(
        event = "cli.project.main_completed",
        project = project.as_str(),
        shortcut = change.shortcut.as_str()
    );
    Ok(())
}

fn handle_project_remove(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("project")
        .ok_or("Project name is required")?;

    info!(event = "cli.project.remove_started", name = name.as_str());

    let mut runtime = Runtime::load()?;
    let removal = ops::remove_project(&mut runtime.ctx(), name)
        .map_err(|e| report_failure("Could not remove project", "cli.project.remove_failed", e))?;

    println!(
        "{} {}",
        color::bold("Removed from catalog:"),
        color::dusk(&removal.project.name)
    );
    if let Some(new_main) = &removal.new_main {
        println!("  {} {}", color::slate("new main project:"), color::moss(new_main));
    }
    println!("{}", color::slate("The folder on disk was left in place."));

    info!(
        event = "cli.project.remove_completed",
        name = removal.project.name.as_str(),
        new_main = ?removal.new_main
    );
    Ok(())
}

fn handle_project_evict(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("project")
        .ok_or("Project name is required")?;
    let assume_yes = matches.get_flag("yes");

    info!(
        event = "cli.project.evict_started",
        name = name.as_str(),
        assume_yes = assume_yes
    );

    let mut runtime = Runtime::with_prompter(TerminalPrompter::new(assume_yes))?;
    let outcome = match ops::evict_project(&mut runtime.ctx(), name) {
        Ok(outcome) => outcome,
        Err(OpsError::Cancelled) => {
            println!("Eviction cancelled. Nothing was deleted.");
            warn!(event = "cli.project.evict_cancelled", name = name.as_str());
            return Ok(());
        }
        Err(e) => {
            let err = report_failure("Cannot evict project", "cli.project.evict_failed", e);
            eprintln!(
                "{}",
                color::hint("Nothing was deleted. Push or stash your work, then try again.")
            );
            return Err(err);
        }
    };

    println!(
        "{} {}",
        color::bold("Evicted:"),
        color::dusk(&outcome.project)
    );
    println!("  {} {}", color::slate("deleted:"), outcome.folder.display());
    println!(
        "  {} {} ({})",
        color::slate("branch:"),
        outcome.clearance.branch,
        color::verdict(&outcome.clearance.verdict.to_string())
    );
    println!(
        "{}",
        color::slate(&format!("Bring it back with: roost project restore {}", outcome.project))
    );

    info!(event = "cli.project.evict_completed", name = outcome.project.as_str());
    Ok(())
}

fn handle_project_restore(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("project")
        .ok_or("Project name is required")?;

    info!(event = "cli.project.restore_started", name = name.as_str());

    let mut runtime = Runtime::load()?;
    let folder = ops::restore_project(&mut runtime.ctx(), name)
        .map_err(|e| report_failure("Could not restore project", "cli.project.restore_failed", e))?;

    println!("{} {}", color::bold("Restored:"), color::dusk(name));
    println!("  {} {}", color::slate("path:"), folder.display());

    info!(event = "cli.project.restore_completed", name = name.as_str());
    Ok(())
}
