// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for fixture directories and bridge invocations

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

pub struct TestEnvironment {
    root: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create test directory");
        fs::create_dir_all(root.path().join("templates")).unwrap();
        Self { root }
    }

    /// Base directory passed as the bridge's first argument.
    pub fn basedir(&self) -> PathBuf {
        self.root.path().join("templates")
    }

    /// Write a template file under the base directory, returning its path.
    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.basedir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a JSON data file outside the base directory, returning its path.
    pub fn write_data(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

/// Create a pre-rendered template in a `mkstemp`-style temp file whose path
/// contains the `/tmp/tmp` marker. The file must outlive the invocation, so
/// the caller holds the returned handle.
pub fn temp_template(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("tmp")
        .tempfile_in("/tmp")
        .expect("Failed to create temp template");
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Invoke the bridge binary with the three positional arguments.
pub fn run_bridge(basedir: &Path, template: &str, data_file: &Path) -> Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .arg(basedir)
        .arg(template)
        .arg(data_file)
        .output()
        .expect("Failed to execute bridge")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
