// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mocha (`mocha-junit-reporter`) reports.

use super::ReportParser;
use crate::xml::Element;

pub struct MochaParser;

impl ReportParser for MochaParser {
    fn name(&self) -> &'static str {
        "mocha"
    }

    fn title(&self) -> &'static str {
        "Mocha"
    }

    /// A `<testsuites>` root whose name mentions mocha, in any case.
    fn applicable(&self, root: &Element) -> bool {
        root.tag == "testsuites"
            && root
                .attr("name")
                .is_some_and(|name| name.to_lowercase().contains("mocha"))
    }
}

#[cfg(test)]
#[path = "mocha_tests.rs"]
mod tests;
