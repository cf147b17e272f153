use clap::{Arg, ArgAction, Command};

fn token_arg() -> Arg {
    Arg::new("token")
        .help("Group shortcut, project shortcut or project name")
        .required(true)
        .index(1)
}

pub fn open_command() -> Command {
    Command::new("open")
        .about("Open a project in the configured editor")
        .arg(token_arg())
        .arg(
            Arg::new("editor")
                .long("editor")
                .short('e')
                .help("Editor command to use instead of launch.editor"),
        )
}

pub fn cd_command() -> Command {
    Command::new("cd")
        .about("Print a project's folder (use with: cd \"$(roost cd <token>)\")")
        .arg(token_arg())
}

pub fn browse_command() -> Command {
    Command::new("browse")
        .about("Open a project's remote in the browser")
        .arg(token_arg())
}

pub fn sync_command() -> Command {
    Command::new("sync")
        .about("Check whether a project's branches are behind their remote")
        .arg(token_arg())
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
