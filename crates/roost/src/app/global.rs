use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("roost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Catalog, open and safely evict your projects")
        .long_about("roost keeps a Category → Group → Project tree in sync with folders on disk. Every group and project can carry a shortcut; a group's shortcut opens its main project. Projects with a remote can be evicted from disk once their work is pushed, and cloned back later.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
