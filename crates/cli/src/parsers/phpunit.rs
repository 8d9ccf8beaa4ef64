// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PHPUnit reports.
//!
//! PHPUnit nests `<testsuite>` elements as deep as the test class hierarchy
//! goes, with test cases only on the innermost suites. Before interpretation
//! the tree is flattened: every suite holding test cases is lifted to the top
//! level and renamed after its ancestry, joined with `\`.

use std::borrow::Cow;

use super::ReportParser;
use crate::xml::Element;

/// Joins nested suite names, mirroring PHP namespaces.
const SEPARATOR: char = '\\';

pub struct PhpUnitParser;

impl ReportParser for PhpUnitParser {
    fn name(&self) -> &'static str {
        "phpunit"
    }

    fn title(&self) -> &'static str {
        "PHPUnit"
    }

    /// Only selected explicitly.
    fn applicable(&self, _root: &Element) -> bool {
        false
    }

    fn prepare<'a>(&self, root: &'a Element) -> Cow<'a, Element> {
        match root.tag.as_str() {
            "testsuites" => {
                let mut flat = Element::new("testsuites");
                flat.attributes = root.attributes.clone();
                flat.children = flatten(root.children_named("testsuite"));
                Cow::Owned(flat)
            }
            "testsuite" => {
                let mut flat = Element::new("testsuites");
                flat.children = flatten(std::iter::once(root));
                Cow::Owned(flat)
            }
            _ => Cow::Borrowed(root),
        }
    }
}

/// Flatten top-level suites into the leaf suites that hold test cases.
pub fn flatten<'a>(suites: impl IntoIterator<Item = &'a Element>) -> Vec<Element> {
    let mut out = Vec::new();
    for suite in suites {
        let prefix = suite.attr("name").unwrap_or_default().to_string();
        flatten_suite(suite, prefix, &mut out);
    }
    tracing::debug!(suites = out.len(), "flattened nested suites");
    out
}

fn flatten_suite(suite: &Element, prefix: String, out: &mut Vec<Element>) {
    if suite.has_child("testcase") {
        let mut leaf = suite.clone();
        leaf.children.retain(|c| c.tag != "testsuite");
        leaf.attributes.insert("name".to_string(), prefix);
        out.push(leaf);
        return;
    }

    for nested in suite.children_named("testsuite") {
        let name = nested.attr("name").unwrap_or_default();
        flatten_suite(nested, format!("{prefix}{SEPARATOR}{name}"), out);
    }
}

#[cfg(test)]
#[path = "phpunit_tests.rs"]
mod tests;
