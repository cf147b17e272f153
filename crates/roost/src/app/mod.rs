mod catalog;
mod global;
mod launch;
mod misc;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(catalog::category_command())
        .subcommand(catalog::group_command())
        .subcommand(catalog::project_command())
        .subcommand(misc::list_command())
        .subcommand(launch::open_command())
        .subcommand(launch::cd_command())
        .subcommand(launch::browse_command())
        .subcommand(launch::sync_command())
        .subcommand(misc::completions_command())
}
