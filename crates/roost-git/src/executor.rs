//! Git command execution.
//!
//! Every git invocation roost makes goes through [`GitExecutor`]. The CLI
//! inherits the user's SSH agent and credential helpers, which `fetch` and
//! `clone` need. Tests swap in [`crate::test_support::ScriptedGit`].

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::errors::GitError;

/// Runs a git command in a working directory.
///
/// Implementations return stdout with surrounding whitespace trimmed and
/// fail with [`GitError::CommandFailed`] on a non-zero exit.
pub trait GitExecutor {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<String, GitError>;
}

/// [`GitExecutor`] backed by the `git` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCli {
    binary: PathBuf,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("git"),
        }
    }
}

impl GitCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn render(&self, args: &[&str]) -> String {
        let mut rendered = self.binary.to_string_lossy().into_owned();
        for arg in args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }
}

impl GitExecutor for GitCli {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<String, GitError> {
        let command = self.render(args);
        debug!(
            event = "git.exec.started",
            command = command.as_str(),
            path = %dir.display()
        );

        let output = Command::new(&self.binary)
            .current_dir(dir)
            .args(args)
            .output()
            .map_err(|e| GitError::SpawnFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                event = "git.exec.failed",
                command = command.as_str(),
                path = %dir.display(),
                code = output.status.code(),
                stderr = stderr.as_str()
            );
            return Err(GitError::CommandFailed {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(
            event = "git.exec.completed",
            command = command.as_str(),
            bytes = stdout.len()
        );
        Ok(stdout)
    }
}
