//! Isolated test environment and fluent command wrapper.
//!
//! Each `TestEnv` owns a temp directory with its own book file, so tests
//! never touch the user's real data and can run in parallel.

#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary book file.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the book file
    book_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let book_path = temp_dir.path().join("book.json");
        Self {
            _temp_dir: temp_dir,
            book_path,
        }
    }

    /// Returns the path to the book file.
    pub fn book_path(&self) -> &Path {
        &self.book_path
    }

    /// Creates a RoloCommand configured for this test environment.
    pub fn cmd(&self) -> RoloCommand {
        RoloCommand::new().file(&self.book_path)
    }

    /// Adds a contact, asserting success.
    pub fn add_contact(&self, name: &str, phone: &str) {
        self.cmd().args(["add", name, phone]).assert().success();
    }

    /// Adds a note, asserting success.
    pub fn add_note(&self, title: &str, content: &str) {
        self.cmd().args(["note", title, content]).assert().success();
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent wrapper around `assert_cmd::Command` for the `rolo` binary.
pub struct RoloCommand {
    args: Vec<String>,
}

impl RoloCommand {
    /// Creates a new command for the `rolo` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--file` option to specify the book file.
    pub fn file(mut self, path: &Path) -> Self {
        self.args.push("--file".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("rolo").expect("Failed to find rolo binary");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }
}

impl Default for RoloCommand {
    fn default() -> Self {
        Self::new()
    }
}
