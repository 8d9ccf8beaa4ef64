//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the test-results binary against report
//! fixtures and inspecting the results file it writes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the test-results binary
pub fn test_results_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("test-results"));
    cmd.env_remove("TEST_RESULTS_CONFIG");
    cmd.env_remove("TEST_RESULTS_LOG");
    cmd
}

/// Get path to a report fixture
pub fn report_fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join("reports")
        .join(name)
}

// =============================================================================
// RunBuilder
// =============================================================================

/// Builder for one invocation, run from inside a [`Project`].
pub struct RunBuilder<'a> {
    project: &'a Project,
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl<'a> RunBuilder<'a> {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Append a report fixture path.
    pub fn fixture(mut self, name: &str) -> Self {
        self.args
            .push(report_fixture(name).to_string_lossy().into_owned());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    fn command(self) -> Command {
        let mut cmd = test_results_cmd();
        cmd.args(&self.args).current_dir(self.project.path());
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

/// Captured output of a finished invocation.
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(stdout.contains(needle), "stdout lacks {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(stderr.contains(needle), "stderr lacks {needle:?}:\n{stderr}");
        self
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !stderr.contains(needle),
            "stderr should not contain {needle:?}:\n{stderr}"
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary working directory with helper methods.
///
/// Commands run with the project as their working directory, so a
/// `test-results.toml` written here is discovered.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Start a `compile` invocation.
    pub fn compile(&self) -> RunBuilder<'_> {
        self.run("compile")
    }

    /// Start a `combine` invocation.
    pub fn combine(&self) -> RunBuilder<'_> {
        self.run("combine")
    }

    fn run(&self, command: &str) -> RunBuilder<'_> {
        RunBuilder {
            project: self,
            args: vec![command.to_string()],
            envs: Vec::new(),
        }
    }

    /// Write test-results.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        self.file("test-results.toml", &content);
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }

    /// Parse a results file written into the project.
    pub fn results(&self, path: &str) -> Results {
        let raw = std::fs::read_to_string(self.dir.path().join(path)).unwrap();
        Results {
            raw: raw.clone(),
            root: serde_json::from_str(&raw).expect("valid JSON"),
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// Parsed results JSON.
pub struct Results {
    raw: String,
    root: serde_json::Value,
}

#[allow(dead_code)]
impl Results {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn reports(&self) -> &Vec<serde_json::Value> {
        self.root["testResults"].as_array().expect("testResults array")
    }

    /// The only report in the file.
    pub fn report(&self) -> &serde_json::Value {
        let reports = self.reports();
        assert_eq!(reports.len(), 1, "expected one report, got {}", reports.len());
        &reports[0]
    }
}

/// Names of the suites of `report`, sorted.
pub fn suite_names(report: &serde_json::Value) -> Vec<&str> {
    let mut names: Vec<&str> = report["suites"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    names
}

/// The suite of `report` named `name`.
pub fn suite<'a>(report: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    report["suites"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == name)
        .unwrap_or_else(|| panic!("no suite named {name:?}"))
}

/// The test of `suite` named `name`.
pub fn test<'a>(suite: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    suite["tests"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == name)
        .unwrap_or_else(|| panic!("no test named {name:?}"))
}
