use clap::ArgMatches;
use tracing::error;

use roost_core::events;

mod category;
mod completions;
mod group;
pub(crate) mod helpers;
mod launch;
mod list;
mod project;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("category", sub_matches)) => category::handle_category_command(sub_matches),
        Some(("group", sub_matches)) => group::handle_group_command(sub_matches),
        Some(("project", sub_matches)) => project::handle_project_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("open", sub_matches)) => launch::handle_open_command(sub_matches),
        Some(("cd", sub_matches)) => launch::handle_cd_command(sub_matches),
        Some(("browse", sub_matches)) => launch::handle_browse_command(sub_matches),
        Some(("sync", sub_matches)) => launch::handle_sync_command(sub_matches),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
