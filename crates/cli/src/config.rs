// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles test-results.toml parsing with version validation and unknown key
//! warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::collect::CollectOptions;
use crate::error::{Error, Result};
use crate::parsers::registry::DEFAULT_DETECTION_ORDER;
use crate::parsers::{AUTO, ParserRegistry};
use crate::reader::{FileReader, MAX_FILE_SIZE};

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "test-results.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Interpretation settings.
    #[serde(default)]
    pub parse: ParseConfig,

    /// Input settings.
    #[serde(default)]
    pub read: ReadConfig,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            parse: ParseConfig::default(),
            read: ReadConfig::default(),
            unknown: BTreeMap::new(),
        }
    }
}

/// `[parse]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Interpreter name, or "auto".
    pub parser: String,

    /// Auto-detection order.
    pub detect: Vec<String>,

    /// Report name override.
    pub name: Option<String>,

    /// Prefix for every suite name.
    pub suite_prefix: Option<String>,

    /// Regroup suites by test file.
    pub group_by_file: bool,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            parser: AUTO.to_string(),
            detect: DEFAULT_DETECTION_ORDER.iter().map(|s| s.to_string()).collect(),
            name: None,
            suite_prefix: None,
            group_by_file: false,
            unknown: BTreeMap::new(),
        }
    }
}

/// `[read]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// Largest report file accepted, in bytes.
    pub max_file_size: u64,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            unknown: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Registry with the configured detection order.
    pub fn registry(&self) -> Result<ParserRegistry> {
        ParserRegistry::new().with_detection_order(self.parse.detect.as_slice())
    }

    pub fn reader(&self) -> FileReader {
        FileReader::with_max_size(self.read.max_file_size)
    }

    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            parser: self.parse.parser.clone(),
            name: self.parse.name.clone(),
            suite_prefix: self.parse.suite_prefix.clone(),
            group_by_file: self.parse.group_by_file,
        }
    }

    /// Dotted paths of every key this version does not understand.
    fn unknown_keys(&self) -> Vec<String> {
        let sections = [
            ("", &self.unknown),
            ("parse.", &self.parse.unknown),
            ("read.", &self.read.unknown),
        ];

        sections
            .iter()
            .flat_map(|(prefix, keys)| keys.keys().map(move |key| format!("{prefix}{key}")))
            .collect()
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config = parse_strict(content, path)?;

    for key in config.unknown_keys() {
        warn_unknown_key(path, &key);
    }

    Ok(config)
}

/// Parse config from string content without reporting unknown keys.
fn parse_strict(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "test-results: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
