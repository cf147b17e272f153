use std::process::Command;

use clap::ArgMatches;
use tracing::{error, info};

use roost_core::launch::{LaunchCommand, LaunchMode, LaunchPlan};
use roost_core::ops;

use super::helpers::{Runtime, report_failure};
use crate::color;

fn prepare(
    runtime: &mut Runtime,
    token: &str,
    mode: LaunchMode,
    event: &'static str,
) -> Result<LaunchPlan, Box<dyn std::error::Error>> {
    ops::prepare_launch(&mut runtime.ctx(), token, mode)
        .map_err(|e| report_failure(&format!("Cannot open '{}'", token), event, e))
}

/// Sync warnings go to stderr so `cd "$(roost cd w)"` keeps working.
fn print_warning(plan: &LaunchPlan) {
    if let Some(warning) = &plan.warning {
        eprintln!(
            "{} {}: {}",
            color::warning("Warning:"),
            plan.project,
            warning
        );
    }
}

pub(crate) fn handle_open_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches
        .get_one::<String>("token")
        .ok_or("Shortcut or project name is required")?;

    info!(event = "cli.open_started", token = token.as_str());

    let mut runtime = Runtime::load()?;
    if let Some(editor) = matches.get_one::<String>("editor") {
        runtime.config.launch.editor = Some(editor.clone());
    }

    let plan = prepare(&mut runtime, token, LaunchMode::Ide, "cli.open_failed")?;
    print_warning(&plan);

    let LaunchCommand::Open { program, path } = &plan.command else {
        return Err("Unexpected launch command for IDE mode".into());
    };

    let binary = which::which(program).map_err(|e| {
        eprintln!(
            "{}",
            color::error(&format!("Editor '{}' not found on PATH", program))
        );
        eprintln!(
            "{}",
            color::hint("Tip: set launch.editor in ~/.roost/config.toml or pass --editor.")
        );
        error!(event = "cli.open_failed", editor = program.as_str(), error = %e);
        format!("Editor '{}' not found: {}", program, e)
    })?;

    Command::new(&binary).arg(path).spawn().map_err(|e| {
        eprintln!(
            "{}",
            color::error(&format!("Failed to start '{}': {}", program, e))
        );
        error!(event = "cli.open_failed", editor = program.as_str(), error = %e);
        e
    })?;

    println!(
        "{} {} {}",
        color::bold("Opening"),
        color::dusk(&plan.project),
        color::slate(&format!("in {}", program))
    );

    info!(
        event = "cli.open_completed",
        project = plan.project.as_str(),
        path = %path.display()
    );
    Ok(())
}

pub(crate) fn handle_cd_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches
        .get_one::<String>("token")
        .ok_or("Shortcut or project name is required")?;

    info!(event = "cli.cd_started", token = token.as_str());

    let mut runtime = Runtime::load()?;
    let plan = prepare(&mut runtime, token, LaunchMode::Terminal, "cli.cd_failed")?;
    print_warning(&plan);

    // Print only the path - no formatting, no leading text
    println!("{}", plan.folder.display());

    info!(
        event = "cli.cd_completed",
        project = plan.project.as_str(),
        path = %plan.folder.display()
    );
    Ok(())
}

pub(crate) fn handle_browse_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches
        .get_one::<String>("token")
        .ok_or("Shortcut or project name is required")?;

    info!(event = "cli.browse_started", token = token.as_str());

    let mut runtime = Runtime::load()?;
    let plan = prepare(&mut runtime, token, LaunchMode::Browser, "cli.browse_failed")?;
    let LaunchCommand::OpenUrl { url } = &plan.command else {
        return Err("Unexpected launch command for browser mode".into());
    };

    open::that(browsable_url(url)).map_err(|e| {
        eprintln!(
            "{}",
            color::error(&format!("Could not open {}: {}", url, e))
        );
        error!(event = "cli.browse_failed", url = url.as_str(), error = %e);
        e
    })?;

    println!("{} {}", color::bold("Opening"), color::dusk(url));

    info!(event = "cli.browse_completed", project = plan.project.as_str());
    Ok(())
}

pub(crate) fn handle_sync_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches
        .get_one::<String>("token")
        .ok_or("Shortcut or project name is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.sync_started", token = token.as_str());

    let mut runtime = Runtime::load()?;
    let plan = prepare(&mut runtime, token, LaunchMode::Terminal, "cli.sync_failed")?;

    if json_output {
        let output = serde_json::json!({
            "project": plan.project,
            "folder": plan.folder,
            "warning": plan.warning,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &plan.warning {
            Some(warning) => println!(
                "{} branch '{}' is {} its remote",
                color::dusk(&plan.project),
                warning.branch,
                color::verdict(&warning.verdict.to_string())
            ),
            None => println!(
                "{} {}",
                color::dusk(&plan.project),
                color::moss("has nothing to pull")
            ),
        }
    }

    info!(
        event = "cli.sync_completed",
        project = plan.project.as_str(),
        warned = plan.warning.is_some()
    );
    Ok(())
}

/// Turn `git@host:owner/repo.git` into `https://host/owner/repo`. Other URLs
/// pass through unchanged.
fn browsable_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("git@")
        && let Some((host, path)) = rest.split_once(':')
    {
        let path = path.strip_suffix(".git").unwrap_or(path);
        return format!("https://{}/{}", host, path);
    }
    url.to_string()
}
