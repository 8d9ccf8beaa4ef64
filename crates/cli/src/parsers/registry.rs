// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interpreter selection.

use std::path::Path;
use std::sync::Arc;

use super::{AUTO, ReportParser, all_parsers};
use crate::cache::FileCache;
use crate::error::{Error, Result};

/// Auto-detection order. Earlier entries win when several apply; the
/// generic interpreter accepts anything, so it goes last.
pub const DEFAULT_DETECTION_ORDER: &[&str] = &["rspec", "exunit", "mocha", "generic"];

/// Known interpreters plus the order in which detection tries them.
pub struct ParserRegistry {
    parsers: Vec<Arc<dyn ReportParser>>,
    detection: Vec<Arc<dyn ReportParser>>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        let parsers = all_parsers();
        let detection = DEFAULT_DETECTION_ORDER
            .iter()
            .filter_map(|name| parsers.iter().find(|p| p.name() == *name).cloned())
            .collect();
        Self { parsers, detection }
    }
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the detection order.
    ///
    /// Every name must be a known interpreter. Interpreters left out remain
    /// selectable by name.
    pub fn with_detection_order<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self> {
        let mut detection = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let parser = self.get(name).ok_or_else(|| Error::ParserNotFound {
                name: name.to_string(),
            })?;
            detection.push(parser);
        }
        self.detection = detection;
        Ok(self)
    }

    /// Interpreter registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ReportParser>> {
        self.parsers.iter().find(|p| p.name() == name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.iter().any(|p| p.name() == name)
    }

    /// Names in detection order.
    pub fn detection_order(&self) -> Vec<&'static str> {
        self.detection.iter().map(|p| p.name()).collect()
    }

    /// Pick the interpreter for `path`.
    ///
    /// An explicit `name` that matches a registered interpreter is returned
    /// without checking applicability. Otherwise the detection order is
    /// scanned and the first applicable interpreter wins.
    pub fn select(
        &self,
        name: &str,
        path: &Path,
        cache: &mut FileCache,
    ) -> Result<Arc<dyn ReportParser>> {
        if name != AUTO {
            if let Some(parser) = self.get(name) {
                tracing::info!(parser = name, path = %path.display(), "using requested parser");
                return Ok(parser);
            }
            tracing::info!(parser = name, path = %path.display(), "requested parser not found, detecting");
        }

        for parser in &self.detection {
            if parser.applicable_file(path, cache) {
                tracing::debug!(parser = parser.name(), path = %path.display(), "found applicable parser");
                return Ok(Arc::clone(parser));
            }
        }

        tracing::warn!(path = %path.display(), "no applicable parser found");
        Err(Error::ParserNotFound {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
