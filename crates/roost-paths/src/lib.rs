use std::path::{Path, PathBuf};

/// Environment variable that overrides the base `~/.roost` directory.
pub const ROOST_HOME_ENV: &str = "ROOST_HOME";

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found, set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.roost/` directory layout.
///
/// Single source of truth for every path under `~/.roost/`. Use `resolve()` in
/// production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct RoostPaths {
    roost_dir: PathBuf,
}

impl RoostPaths {
    /// Resolve paths from `$ROOST_HOME`, falling back to `~/.roost`.
    pub fn resolve() -> Result<Self, PathError> {
        if let Some(dir) = std::env::var_os(ROOST_HOME_ENV)
            && !dir.is_empty()
        {
            return Ok(Self {
                roost_dir: PathBuf::from(dir),
            });
        }

        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            roost_dir: home.join(".roost"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(roost_dir: PathBuf) -> Self {
        Self { roost_dir }
    }

    /// The base `~/.roost` directory.
    pub fn roost_dir(&self) -> &Path {
        &self.roost_dir
    }

    // --- Top-level files ---

    pub fn catalog_file(&self) -> PathBuf {
        self.roost_dir.join("catalog.json")
    }

    pub fn catalog_temp_file(&self) -> PathBuf {
        self.roost_dir.join("catalog.json.tmp")
    }

    pub fn user_config(&self) -> PathBuf {
        self.roost_dir.join("config.toml")
    }
}
