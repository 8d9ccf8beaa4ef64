// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ExUnit (`junit_formatter`) reports.
//!
//! Suites are named after Elixir modules (`Elixir.MyApp.UserTest`). The
//! `Elixir.` prefix is dropped from suite names, and the test classname
//! doubles as its package.

use super::ReportParser;
use crate::model::Test;
use crate::xml::Element;

const MODULE_PREFIX: &str = "Elixir.";

pub struct ExUnitParser;

impl ReportParser for ExUnitParser {
    fn name(&self) -> &'static str {
        "exunit"
    }

    fn title(&self) -> &'static str {
        "ExUnit"
    }

    /// Any suite named after an Elixir module.
    fn applicable(&self, root: &Element) -> bool {
        let is_module = |e: &Element| {
            e.tag == "testsuite"
                && e.attr("name")
                    .is_some_and(|name| name.starts_with(MODULE_PREFIX))
        };

        is_module(root) || root.descendants().any(is_module)
    }

    fn suite_name(&self, name: &str) -> String {
        name.strip_prefix(MODULE_PREFIX).unwrap_or(name).to_string()
    }

    fn decorate_test(&self, test: &mut Test, element: &Element) {
        if let Some(classname) = element.attr("classname") {
            test.classname = classname.to_string();
            test.package = classname.to_string();
        }
    }
}

#[cfg(test)]
#[path = "exunit_tests.rs"]
mod tests;
