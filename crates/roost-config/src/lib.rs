//! # roost-config
//!
//! TOML configuration types, loading, and validation for roost.
//!
//! Single source of truth for `RoostConfig`. Depends only on `roost-paths`.

mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use errors::ConfigError;
pub use loading::{load_from_paths, load_hierarchy};
pub use types::{GitConfig, LaunchConfig, RoostConfig, ShortcutConfig};
pub use validation::validate_config;

impl RoostConfig {
    /// Load configuration from `~/.roost/config.toml`.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
