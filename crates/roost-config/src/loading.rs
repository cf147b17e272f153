//! Configuration loading.
//!
//! Configuration comes from two sources (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.roost/config.toml` (or `$ROOST_HOME/config.toml`)

use std::fs;
use std::path::Path;

use roost_paths::RoostPaths;
use tracing::debug;

use crate::errors::ConfigError;
use crate::types::RoostConfig;
use crate::validation::validate_config;

/// Load the user configuration, falling back to defaults when no file exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, or if
/// validation fails. A missing config file is not an error.
pub fn load_hierarchy() -> Result<RoostConfig, ConfigError> {
    let paths = RoostPaths::resolve().map_err(|e| ConfigError::PathResolution {
        message: e.to_string(),
    })?;
    load_from_paths(&paths)
}

/// Load configuration using an explicit path layout. Used by tests and by
/// callers that already resolved [`RoostPaths`].
pub fn load_from_paths(paths: &RoostPaths) -> Result<RoostConfig, ConfigError> {
    let config = match load_config_file(&paths.user_config()) {
        Ok(config) => config,
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "config.load.user_config_missing",
                path = %paths.user_config().display()
            );
            RoostConfig::default()
        }
        Err(e) => return Err(e),
    };

    validate_config(&config)?;
    Ok(config)
}

/// Load a configuration file from the given path.
pub(crate) fn load_config_file(path: &Path) -> Result<RoostConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let paths = RoostPaths::from_dir(dir.path().to_path_buf());

        let config = load_from_paths(&paths).unwrap();
        assert_eq!(config.git.remote(), "origin");
        assert!(config.shortcuts.first_project_becomes_main());
    }

    #[test]
    fn test_user_config_is_loaded() {
        let dir = TempDir::new().unwrap();
        let paths = RoostPaths::from_dir(dir.path().to_path_buf());
        fs::write(
            paths.user_config(),
            r#"
[git]
remote = "upstream"
integration_branch = "develop"

[shortcuts]
first_project_becomes_main = false
"#,
        )
        .unwrap();

        let config = load_from_paths(&paths).unwrap();
        assert_eq!(config.git.remote(), "upstream");
        assert_eq!(config.git.integration_branch(), "develop");
        assert!(config.git.fetch_before_check());
        assert!(!config.shortcuts.first_project_becomes_main());
        assert_eq!(config.launch.editor(), "code");
    }

    #[test]
    fn test_parse_error_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let paths = RoostPaths::from_dir(dir.path().to_path_buf());
        fs::write(paths.user_config(), "invalid toml [[[").unwrap();

        let err = load_from_paths(&paths).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let dir = TempDir::new().unwrap();
        let paths = RoostPaths::from_dir(dir.path().to_path_buf());
        fs::write(paths.user_config(), "[launch]\neditor = \"\"\n").unwrap();

        let err = load_from_paths(&paths).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_load_hierarchy_reads_roost_home() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[launch]\neditor = \"hx\"\n",
        )
        .unwrap();

        temp_env::with_var(roost_paths::ROOST_HOME_ENV, Some(dir.path()), || {
            let config = load_hierarchy().unwrap();
            assert_eq!(config.launch.editor(), "hx");
        });
    }

    #[test]
    fn test_toml_parsing_edge_cases() {
        let empty_config: RoostConfig = toml::from_str("").unwrap();
        assert_eq!(empty_config.git.integration_branch(), "main");

        let invalid_result: Result<RoostConfig, _> = toml::from_str("[git]\nremote = 3\n");
        assert!(invalid_result.is_err());
    }
}
