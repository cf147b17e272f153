//! Integration tests for CLI output behavior.
//!
//! Each test points `ROOST_HOME` at its own temp dir so the catalog and config
//! never touch the real `~/.roost`. Stdin is closed, so every prompt gets the
//! negative answer.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create roost home"),
            root: TempDir::new().expect("Failed to create work root"),
        }
    }

    fn roost(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_roost"))
            .args(args)
            .env("ROOST_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.root.path())
            .output()
            .unwrap_or_else(|e| panic!("Failed to execute 'roost {}': {}", args.join(" "), e))
    }

    fn roost_ok(&self, args: &[&str]) -> String {
        let output = self.roost(args);
        assert!(
            output.status.success(),
            "roost {} failed with {:?}. stderr: {}",
            args.join(" "),
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn root(&self) -> &Path {
        self.root.path()
    }

    /// Work/Web [w] with App as its main project.
    fn with_web_group(self) -> Self {
        let root = self.root().display().to_string();
        self.roost_ok(&["category", "add", "Work", "--in", &root]);
        self.roost_ok(&["group", "add", "Work", "Web", "--shortcut", "w"]);
        self.roost_ok(&["project", "add", "Work", "Web", "App", "--main"]);
        self
    }
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_list_on_empty_catalog() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.roost_ok(&["list"]);
    assert!(stdout.contains("Catalog is empty."), "stdout: {}", stdout);
}

#[test]
fn test_default_output_has_no_json_logs() {
    let sandbox = Sandbox::new();
    let output = sandbox.roost(&["list"]);
    let stderr = stderr_of(&output);
    assert!(
        !stderr.contains("\"event\""),
        "quiet mode should not emit logs, got: {}",
        stderr
    );
}

#[test]
fn test_verbose_flag_emits_json_logs_on_stderr() {
    let sandbox = Sandbox::new();
    let output = sandbox.roost(&["-v", "list"]);
    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("core.app.startup_completed"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("cli.list_completed"), "stderr: {}", stderr);
}

#[test]
fn test_created_hierarchy_mirrors_folders() {
    let sandbox = Sandbox::new().with_web_group();
    assert!(sandbox.root().join("Work").join("Web").join("App").is_dir());

    let stdout = sandbox.roost_ok(&["list"]);
    assert!(stdout.contains("Work"), "stdout: {}", stdout);
    assert!(stdout.contains("* App"), "main marker missing: {}", stdout);
    assert!(stdout.contains("[w]"), "shortcut missing: {}", stdout);
}

#[test]
fn test_list_json_is_the_catalog() {
    let sandbox = Sandbox::new().with_web_group();
    let stdout = sandbox.roost_ok(&["list", "--json"]);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("list output should be valid JSON");

    let group = &value["categories"][0]["groups"][0];
    assert_eq!(group["name"], "Web");
    assert_eq!(group["shortcut"], "w");
    assert_eq!(group["projects"][0]["name"], "App");
    assert_eq!(group["projects"][0]["shortcut"], "w");
}

#[test]
fn test_cd_prints_only_the_folder() {
    let sandbox = Sandbox::new().with_web_group();
    let expected = sandbox.root().join("Work").join("Web").join("App");

    let by_group_shortcut = sandbox.roost_ok(&["cd", "W"]);
    assert_eq!(by_group_shortcut.trim(), expected.display().to_string());

    let by_name = sandbox.roost_ok(&["cd", "app"]);
    assert_eq!(by_name.trim(), expected.display().to_string());
}

#[test]
fn test_unknown_token_fails() {
    let sandbox = Sandbox::new().with_web_group();
    let output = sandbox.roost(&["cd", "nope"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("nope"));
}

#[test]
fn test_taken_shortcut_is_rejected() {
    let sandbox = Sandbox::new().with_web_group();
    let output = sandbox.roost(&["group", "add", "Work", "Tools", "--shortcut", "W"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Could not create group"), "stderr: {}", stderr);
    assert!(!sandbox.root().join("Work").join("Tools").exists());
}

#[test]
fn test_duplicate_category_name_is_case_insensitive() {
    let sandbox = Sandbox::new().with_web_group();
    let root = sandbox.root().display().to_string();
    let output = sandbox.roost(&["category", "add", "work", "--in", &root]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_evict_without_remote_keeps_folder() {
    let sandbox = Sandbox::new().with_web_group();
    let output = sandbox.roost(&["project", "evict", "App", "--yes"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("no remote link"));
    assert!(sandbox.root().join("Work").join("Web").join("App").is_dir());
}

#[test]
fn test_remove_project_keeps_folder() {
    let sandbox = Sandbox::new().with_web_group();
    let stdout = sandbox.roost_ok(&["project", "remove", "App"]);
    assert!(stdout.contains("Removed from catalog"), "stdout: {}", stdout);
    assert!(sandbox.root().join("Work").join("Web").join("App").is_dir());

    let listed = sandbox.roost_ok(&["list", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&listed).unwrap();
    assert_eq!(
        value["categories"][0]["groups"][0]["projects"]
            .as_array()
            .map(Vec::len),
        Some(0)
    );
}

#[test]
fn test_broken_config_warns_and_uses_defaults() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.home.path().join("config.toml"), "[git\nremote = ").unwrap();

    let output = sandbox.roost(&["list"]);
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("Could not load config"));
}

#[test]
fn test_completions_bash() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.roost_ok(&["completions", "bash"]);
    assert!(stdout.contains("roost"));
}
