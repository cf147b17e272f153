use tracing::{error, warn};

use roost_config::RoostConfig;
use roost_core::errors::RoostError;
use roost_core::events;
use roost_core::{
    Catalog, CatalogStore, GitCli, JsonCatalogStore, LocalFileSystem, OpsContext, ProjectLink,
    StoreError,
};
use roost_paths::RoostPaths;

use crate::color;
use crate::prompt::TerminalPrompter;

/// Everything an operation needs, wired to the real disk, git and stdin.
pub struct Runtime {
    store: JsonCatalogStore,
    fs: LocalFileSystem,
    git: GitCli,
    prompter: TerminalPrompter,
    pub config: RoostConfig,
}

impl Runtime {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_prompter(TerminalPrompter::default())
    }

    pub fn with_prompter(prompter: TerminalPrompter) -> Result<Self, Box<dyn std::error::Error>> {
        let paths = RoostPaths::resolve().inspect_err(|e| {
            eprintln!("{}", color::error(&e.to_string()));
            events::log_app_error(e);
        })?;
        Ok(Self {
            store: JsonCatalogStore::new(&paths),
            fs: LocalFileSystem,
            git: GitCli::default(),
            prompter,
            config: load_config_with_warning(&paths),
        })
    }

    /// Read-only snapshot for commands that don't mutate anything.
    pub fn catalog(&self) -> Result<Catalog, StoreError> {
        self.store.load()
    }

    pub fn ctx(&mut self) -> OpsContext<'_> {
        OpsContext {
            store: &mut self.store,
            fs: &self.fs,
            git: &self.git,
            prompter: &self.prompter,
            config: &self.config,
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning(paths: &RoostPaths) -> RoostConfig {
    match roost_config::load_from_paths(paths) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                color::warning(&format!(
                    "Warning: Could not load config: {}. Using defaults.",
                    e
                ))
            );
            eprintln!(
                "{}",
                color::hint(&format!(
                    "Tip: Check {} for syntax errors.",
                    paths.user_config().display()
                ))
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            RoostConfig::default()
        }
    }
}

/// Print a failed operation, log it, and hand the error back for `?`.
pub fn report_failure<E>(action: &str, event: &'static str, e: E) -> Box<dyn std::error::Error>
where
    E: RoostError,
{
    eprintln!("{}", color::error(&format!("{}: {}", action, e)));
    error!(event = event, error = %e);
    events::log_app_error(&e);
    Box::new(e)
}

/// Check if user confirmation input indicates acceptance.
/// Accepts "y" or "yes" (case-insensitive).
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

/// Parse `NAME=URL`. Both halves must be non-empty.
pub fn parse_link(raw: &str) -> Result<ProjectLink, String> {
    match raw.split_once('=') {
        Some((name, url)) if !name.trim().is_empty() && !url.trim().is_empty() => {
            Ok(ProjectLink::new(name.trim(), url.trim()))
        }
        _ => Err(format!("Invalid link '{}': expected NAME=URL", raw)),
    }
}

pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}
