//! Configuration validation logic.

use crate::errors::ConfigError;
use crate::types::RoostConfig;

/// Validate a RoostConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `git.remote`, `git.integration_branch` and `launch.editor`, when set,
///   must not be blank
/// - `git.remote` and `git.integration_branch` must not start with `-`
pub fn validate_config(config: &RoostConfig) -> Result<(), ConfigError> {
    check_not_blank("git.remote", config.git.remote.as_deref())?;
    check_not_blank(
        "git.integration_branch",
        config.git.integration_branch.as_deref(),
    )?;
    check_not_blank("launch.editor", config.launch.editor.as_deref())?;

    for (key, value) in [
        ("git.remote", config.git.remote()),
        ("git.integration_branch", config.git.integration_branch()),
    ] {
        if value.starts_with('-') {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{key} must not start with '-' (got '{value}')"),
            });
        }
    }

    Ok(())
}

fn check_not_blank(key: &str, value: Option<&str>) -> Result<(), ConfigError> {
    if let Some(value) = value
        && value.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("{key} must not be empty"),
        });
    }
    Ok(())
}
