// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Go test reports (`go-junit-report`, `gotestsum`).

use super::ReportParser;
use crate::xml::Element;

/// Property recorded by Go JUnit converters.
const GO_VERSION_PROPERTY: &str = "go.version";

pub struct GolangParser;

impl ReportParser for GolangParser {
    fn name(&self) -> &'static str {
        "golang"
    }

    fn title(&self) -> &'static str {
        "Golang"
    }

    /// Any suite carrying a `go.version` property.
    fn applicable(&self, root: &Element) -> bool {
        std::iter::once(root)
            .chain(root.descendants())
            .filter(|e| e.tag == "testsuite")
            .flat_map(|suite| suite.children_named("properties"))
            .flat_map(|props| props.children_named("property"))
            .any(|prop| prop.attr("name") == Some(GO_VERSION_PROPERTY))
    }
}

#[cfg(test)]
#[path = "golang_tests.rs"]
mod tests;
