// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Framework interpreters.
//!
//! Each interpreter turns a parsed XML tree into a canonical [`Report`].
//! They share the JUnit-style baseline in [`junit`] and only override the
//! hooks where their dialect differs.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use crate::cache::FileCache;
use crate::model::{Report, Test};
use crate::xml::Element;

pub mod exunit;
pub mod generic;
pub mod golang;
pub mod junit;
pub mod mocha;
pub mod phpunit;
pub mod registry;
pub mod rspec;

pub use exunit::ExUnitParser;
pub use generic::GenericParser;
pub use golang::GolangParser;
pub use mocha::MochaParser;
pub use phpunit::PhpUnitParser;
pub use registry::ParserRegistry;
pub use rspec::RSpecParser;

/// Selection token asking for content-based detection.
pub const AUTO: &str = "auto";

/// Every interpreter name, in default detection order first.
pub const PARSER_NAMES: &[&str] = &["rspec", "exunit", "mocha", "generic", "phpunit", "golang"];

/// A framework interpreter.
pub trait ReportParser: Send + Sync {
    /// Identifier used for explicit selection and as the report framework.
    fn name(&self) -> &'static str;

    /// Display name, used for `"<title> Suite"` report names.
    fn title(&self) -> &'static str;

    /// Whether the document looks like this framework's output.
    fn applicable(&self, root: &Element) -> bool;

    /// Rewrite the tree before interpretation.
    fn prepare<'a>(&self, root: &'a Element) -> Cow<'a, Element> {
        Cow::Borrowed(root)
    }

    /// Suite name as stored in the report.
    fn suite_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Adjust a test after the baseline mapping.
    fn decorate_test(&self, _test: &mut Test, _element: &Element) {}

    /// Name given to reports without a name of their own.
    fn default_report_name(&self) -> String {
        format!("{} Suite", self.title())
    }

    /// Interpret a parsed document.
    fn parse(&self, root: &Element) -> Report {
        junit::build_report(self, root)
    }

    /// Interpret the document at `path`.
    ///
    /// Read and parse failures degrade into a report flagged as failed.
    fn parse_file(&self, path: &Path, cache: &mut FileCache) -> Report {
        match cache.tree(path) {
            Ok(root) => {
                let report = self.parse(&root);
                tracing::info!(
                    path = %path.display(),
                    parser = self.name(),
                    suites = report.suites.len(),
                    tests = report.summary.total,
                    "interpreted report"
                );
                report
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), parser = self.name(), "loading report failed: {err}");
                Report::errored(self.default_report_name(), self.name(), err.to_string())
            }
        }
    }

    /// Whether the document at `path` looks like this framework's output.
    ///
    /// By default an unloadable document is not applicable.
    fn applicable_file(&self, path: &Path, cache: &mut FileCache) -> bool {
        match cache.tree(path) {
            Ok(root) => {
                let applicable = self.applicable(&root);
                tracing::debug!(path = %path.display(), parser = self.name(), applicable, "checked applicability");
                applicable
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), parser = self.name(), "not applicable: {err}");
                false
            }
        }
    }
}

/// One instance of every interpreter, in [`PARSER_NAMES`] order.
pub fn all_parsers() -> Vec<Arc<dyn ReportParser>> {
    vec![
        Arc::new(RSpecParser),
        Arc::new(ExUnitParser),
        Arc::new(MochaParser),
        Arc::new(GenericParser),
        Arc::new(PhpUnitParser),
        Arc::new(GolangParser),
    ]
}

/// Look up an interpreter by name.
pub fn get_parser(name: &str) -> Option<Arc<dyn ReportParser>> {
    all_parsers().into_iter().find(|p| p.name() == name)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
