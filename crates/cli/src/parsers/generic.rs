// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Universal fallback for any JUnit-style document.

use std::path::Path;

use super::ReportParser;
use crate::cache::FileCache;
use crate::xml::Element;

pub struct GenericParser;

impl ReportParser for GenericParser {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn title(&self) -> &'static str {
        "Generic"
    }

    fn applicable(&self, _root: &Element) -> bool {
        true
    }

    /// Accepts without loading, so unreadable documents still reach
    /// `parse_file` and come back as errored reports.
    fn applicable_file(&self, _path: &Path, _cache: &mut FileCache) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "generic_tests.rs"]
mod tests;
