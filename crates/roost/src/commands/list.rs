use clap::ArgMatches;
use tracing::info;

use super::helpers::{Runtime, report_failure};
use crate::tree::TreeFormatter;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let runtime = Runtime::load()?;
    let catalog = runtime
        .catalog()
        .map_err(|e| report_failure("Could not read catalog", "cli.list_failed", e))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else if catalog.categories.is_empty() {
        println!("Catalog is empty.");
        println!("  Get started with: roost category add <name> --in <folder>");
    } else {
        TreeFormatter::new(&catalog, |path| path.is_dir()).print();
    }

    info!(
        event = "cli.list_completed",
        categories = catalog.categories.len(),
        projects = catalog.projects().count()
    );
    Ok(())
}
