// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RSpec (`rspec_junit_formatter`) reports.

use super::ReportParser;
use crate::xml::Element;

pub struct RSpecParser;

impl ReportParser for RSpecParser {
    fn name(&self) -> &'static str {
        "rspec"
    }

    fn title(&self) -> &'static str {
        "RSpec"
    }

    /// A lone `<testsuite name="rspec">` root.
    fn applicable(&self, root: &Element) -> bool {
        root.tag == "testsuite" && root.attr("name") == Some("rspec")
    }
}

#[cfg(test)]
#[path = "rspec_tests.rs"]
mod tests;
