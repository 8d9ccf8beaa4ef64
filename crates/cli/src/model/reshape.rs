// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Post-interpretation reshaping of a report.
//!
//! Every operation here changes names that feed identity, so ids are
//! regenerated afterwards.

use super::{Report, Suite};

impl Report {
    /// Override the report name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.assign_ids();
    }

    /// Prefix every suite name with `prefix` and a space.
    pub fn prefix_suites(&mut self, prefix: &str) {
        for suite in &mut self.suites {
            suite.name = format!("{prefix} {}", suite.name);
        }
        self.assign_ids();
    }

    /// Regroup tests into one suite per test file.
    ///
    /// Tests without a file stay grouped under their original suite's name.
    /// Suites appear in first-seen order; tests keep their relative order.
    pub fn arrange_suites_by_test_file(&mut self) {
        let mut arranged: Vec<Suite> = Vec::new();

        for suite in std::mem::take(&mut self.suites) {
            for test in suite.tests {
                let name = if test.file.is_empty() {
                    suite.name.as_str()
                } else {
                    test.file.as_str()
                };

                match arranged.iter_mut().find(|s| s.name == name) {
                    Some(existing) => existing.tests.push(test),
                    None => arranged.push(Suite::new(name).with_test(test)),
                }
            }
        }

        tracing::debug!(suites = arranged.len(), "arranged suites by test file");

        self.suites = arranged;
        self.assign_ids();
        self.aggregate();
    }
}

#[cfg(test)]
#[path = "reshape_tests.rs"]
mod tests;
