//! Test helpers: a scripted [`GitExecutor`] and git2 repository builders.
//!
//! Exposed publicly so tests in dependent crates don't need to import git2
//! or shell out to git directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use git2::Repository;

use crate::errors::GitError;
use crate::executor::GitExecutor;

/// [`GitExecutor`] that answers from a script keyed by the joined argument
/// list (`"rev-parse --abbrev-ref HEAD"`). Unscripted commands fail.
#[derive(Debug, Default)]
pub struct ScriptedGit {
    responses: HashMap<String, Result<String, String>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(stdout.trim().to_string()));
        self
    }

    pub fn with_failure(mut self, command: &str, stderr: &str) -> Self {
        self.responses
            .insert(command.to_string(), Err(stderr.to_string()));
        self
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn was_called(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl GitExecutor for ScriptedGit {
    fn run(&self, _dir: &Path, args: &[&str]) -> Result<String, GitError> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());
        match self.responses.get(&command) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(stderr)) => Err(GitError::CommandFailed {
                command: format!("git {command}"),
                code: Some(1),
                stderr: stderr.clone(),
            }),
            None => Err(GitError::CommandFailed {
                command: format!("git {command}"),
                code: Some(1),
                stderr: "unscripted command".to_string(),
            }),
        }
    }
}

/// Initialize a new git repository at the given path with an initial commit.
pub fn init_repo_with_commit(path: &Path) -> Result<(), GitError> {
    let repo = Repository::init(path)?;
    let sig = repo
        .signature()
        .or_else(|_| git2::Signature::now("Test", "test@test.com"))?;
    let tree_id = repo.index()?.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;
    Ok(())
}

/// Register a remote without contacting it.
pub fn add_remote(path: &Path, name: &str, url: &str) -> Result<(), GitError> {
    let repo = Repository::open(path)?;
    repo.remote(name, url)?;
    Ok(())
}
