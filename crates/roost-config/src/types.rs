//! Configuration type definitions for roost.
//!
//! These types are deserialized from `~/.roost/config.toml`.
//!
//! # Example Configuration
//!
//! ```toml
//! [git]
//! remote = "origin"
//! integration_branch = "main"
//! fetch_before_check = true
//!
//! [shortcuts]
//! first_project_becomes_main = true
//!
//! [launch]
//! editor = "code"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from the user config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoostConfig {
    /// Git settings used by the sync and eviction checks
    #[serde(default)]
    pub git: GitConfig,

    /// Shortcut assignment policy
    #[serde(default)]
    pub shortcuts: ShortcutConfig,

    /// How projects are opened
    #[serde(default)]
    pub launch: LaunchConfig,
}

/// Git configuration for branch sync checks and eviction.
///
/// Fields are `Option<T>` so only explicitly-set values show up when the
/// config is written back out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitConfig {
    /// Remote that must exist for a project to be considered recoverable.
    /// Default: "origin"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// Branch checked as a fallback when the current branch is in sync.
    /// Default: "main"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_branch: Option<String>,

    /// Whether the advisory sync check fetches before comparing.
    /// Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_before_check: Option<bool>,
}

impl GitConfig {
    /// Returns the remote name, defaulting to "origin".
    pub fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or("origin")
    }

    /// Returns the integration branch, defaulting to "main".
    pub fn integration_branch(&self) -> &str {
        self.integration_branch.as_deref().unwrap_or("main")
    }

    /// Returns whether to fetch before the advisory check, defaulting to true.
    pub fn fetch_before_check(&self) -> bool {
        self.fetch_before_check.unwrap_or(true)
    }
}

/// Shortcut assignment policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortcutConfig {
    /// When a project with a shortcut is added to a group that has no
    /// shortcut yet, the group adopts it and the project becomes main.
    /// Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_project_becomes_main: Option<bool>,
}

impl ShortcutConfig {
    pub fn first_project_becomes_main(&self) -> bool {
        self.first_project_becomes_main.unwrap_or(true)
    }
}

/// Launch configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Command used to open a project in the IDE.
    /// Default: "code"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl LaunchConfig {
    pub fn editor(&self) -> &str {
        self.editor.as_deref().unwrap_or("code")
    }
}
