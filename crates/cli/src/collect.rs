// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report collection pipeline.
//!
//! Reads each input, selects an interpreter, interprets, reshapes and merges
//! the results into one [`Collection`].

use std::path::{Path, PathBuf};

use crate::cache::FileCache;
use crate::error::{Error, Result};
use crate::model::{Collection, Report};
use crate::parsers::{AUTO, ParserRegistry};

/// How reports are interpreted and reshaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOptions {
    /// Interpreter name, or [`AUTO`] for content detection.
    pub parser: String,
    /// Report name override.
    pub name: Option<String>,
    /// Prefix applied to every suite name.
    pub suite_prefix: Option<String>,
    /// Regroup suites by test file.
    pub group_by_file: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            parser: AUTO.to_string(),
            name: None,
            suite_prefix: None,
            group_by_file: false,
        }
    }
}

/// Result of collecting a batch of inputs.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    /// Every successfully interpreted report, merged.
    pub collection: Collection,
    /// Inputs that could not be read or matched to an interpreter.
    pub failures: Vec<(PathBuf, Error)>,
}

impl CollectOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives inputs through the registry with a shared file cache.
pub struct Collector {
    registry: ParserRegistry,
    cache: FileCache,
    options: CollectOptions,
}

impl Collector {
    pub fn new(registry: ParserRegistry, cache: FileCache, options: CollectOptions) -> Self {
        Self {
            registry,
            cache,
            options,
        }
    }

    pub fn options(&self) -> &CollectOptions {
        &self.options
    }

    /// Mutable access to the cache, to seed in-memory inputs.
    pub fn cache_mut(&mut self) -> &mut FileCache {
        &mut self.cache
    }

    /// Interpret one input.
    ///
    /// Read failures and an unknown explicit parser are errors. Anything
    /// wrong with the document itself comes back as a report flagged as
    /// failed.
    pub fn collect(&mut self, path: &Path) -> Result<Report> {
        self.cache.read(path)?;

        let requested = self.options.parser.as_str();
        if requested != AUTO && !self.registry.contains(requested) {
            return Err(Error::ParserNotFound {
                name: requested.to_string(),
            });
        }

        let parser = self.registry.select(requested, path, &mut self.cache)?;
        let mut report = parser.parse_file(path, &mut self.cache);

        if let Some(name) = &self.options.name {
            report.rename(name.as_str());
        }
        if let Some(prefix) = &self.options.suite_prefix {
            report.prefix_suites(prefix);
        }
        if self.options.group_by_file {
            report.arrange_suites_by_test_file();
        }

        Ok(report)
    }

    /// Interpret and merge every input, recording per-input failures.
    pub fn collect_all<P: AsRef<Path>>(&mut self, paths: &[P]) -> CollectOutcome {
        let mut outcome = CollectOutcome::default();
        let mut reports = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            match self.collect(path) {
                Ok(report) => {
                    if report.is_error() {
                        tracing::warn!(path = %path.display(), "{}", report.status_message);
                    }
                    reports.push(report);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), "skipping input: {err}");
                    outcome.failures.push((path.to_path_buf(), err));
                }
            }
        }

        outcome.collection.combine_reports(reports);
        outcome
    }
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;
