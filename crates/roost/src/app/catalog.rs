use clap::{Arg, ArgAction, Command};

fn category_arg() -> Arg {
    Arg::new("category")
        .help("Category name")
        .required(true)
        .index(1)
}

fn group_arg() -> Arg {
    Arg::new("group")
        .help("Group name")
        .required(true)
        .index(2)
}

fn project_arg() -> Arg {
    Arg::new("project")
        .help("Project name")
        .required(true)
        .index(1)
}

fn shortcut_arg() -> Arg {
    Arg::new("shortcut")
        .long("shortcut")
        .short('s')
        .help("Shortcut used to open it (unique across all groups and projects)")
}

pub fn category_command() -> Command {
    Command::new("category")
        .about("Manage categories (top-level folders)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("add")
                .about("Create a category folder and register it")
                .arg(
                    Arg::new("name")
                        .help("Category name, also used as the folder name")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("parent")
                        .long("in")
                        .help("Folder to create the category in (default: current directory)")
                        .default_value("."),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Register an existing folder as a category")
                .arg(
                    Arg::new("path")
                        .help("Folder to import")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .help("Rename the folder to this category name"),
                ),
        )
        .subcommand(Command::new("list").about("List categories and their folders"))
        .subcommand(
            Command::new("remove")
                .about("Remove a category and everything in it from the catalog (folders stay)")
                .arg(
                    Arg::new("name")
                        .help("Category name")
                        .required(true)
                        .index(1),
                ),
        )
}

pub fn group_command() -> Command {
    Command::new("group")
        .about("Manage groups inside a category")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("add")
                .about("Create a group folder inside a category")
                .arg(category_arg())
                .arg(group_arg())
                .arg(shortcut_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Move an existing folder into a category as a group")
                .arg(category_arg())
                .arg(
                    Arg::new("path")
                        .help("Folder to import")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .help("Group name (default: folder name)"),
                )
                .arg(shortcut_arg()),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a group and its projects from the catalog (folders stay)")
                .arg(category_arg())
                .arg(group_arg()),
        )
}

pub fn project_command() -> Command {
    Command::new("project")
        .about("Manage projects inside a group")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("add")
                .about("Create or adopt a project folder inside a group")
                .arg(category_arg())
                .arg(group_arg())
                .arg(
                    Arg::new("name")
                        .help("Project name (default: name of --from folder)")
                        .index(3)
                        .required_unless_present("from"),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .short('f')
                        .help("Existing folder to adopt; moved into the group when it lives elsewhere"),
                )
                .arg(shortcut_arg())
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .short('k')
                        .help("Project kind (default: detected from --from, else project)")
                        .value_parser(["project", "package", "workspace"]),
                )
                .arg(
                    Arg::new("remote")
                        .long("remote")
                        .short('r')
                        .help("Remote repository URL (default: the adopted repository's remote)"),
                )
                .arg(
                    Arg::new("link")
                        .long("link")
                        .help("Extra link as NAME=URL (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("main")
                        .long("main")
                        .help("Make this the group's main project")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("rename")
                .about("Rename a project and its folder")
                .arg(project_arg())
                .arg(
                    Arg::new("new-name")
                        .help("New project name")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("move")
                .about("Move a project and its folder to another group")
                .arg(project_arg())
                .arg(
                    Arg::new("category")
                        .help("Target category")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("group")
                        .help("Target group")
                        .required(true)
                        .index(3),
                ),
        )
        .subcommand(
            Command::new("shortcut")
                .about("Set or clear a project's shortcut")
                .arg(project_arg())
                .arg(
                    Arg::new("shortcut")
                        .help("New shortcut")
                        .index(2)
                        .required_unless_present("clear"),
                )
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .help("Remove the shortcut")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("shortcut"),
                ),
        )
        .subcommand(
            Command::new("main")
                .about("Make a project the main project of its group")
                .arg(category_arg())
                .arg(group_arg())
                .arg(
                    Arg::new("project")
                        .help("Project that becomes main")
                        .required(true)
                        .index(3),
                )
                .arg(
                    shortcut_arg()
                        .help("Shortcut to use when neither the group nor the project has one"),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a project from the catalog (the folder stays)")
                .arg(project_arg()),
        )
        .subcommand(
            Command::new("evict")
                .about("Delete a project's folder once its work is pushed")
                .arg(project_arg())
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt (safety checks still run)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("restore")
                .about("Clone an evicted project back into its group")
                .arg(project_arg()),
        )
}
