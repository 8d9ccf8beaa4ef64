// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic, content-addressed identity.
//!
//! Ids chain Report → Suite → Test. Each id is a namespaced (version 3) UUID
//! whose namespace is the parent id and whose name is the entity's local
//! name, so equal content at the same tree position always yields equal ids
//! across independently produced reports.

use uuid::Uuid;

use super::{Report, Suite, Test};

/// Namespace for report ids.
pub const ROOT_NAMESPACE: Uuid = Uuid::nil();

/// Id of a top-level entity.
pub fn root_id(local_name: &str) -> String {
    Uuid::new_v3(&ROOT_NAMESPACE, local_name.as_bytes()).to_string()
}

/// Id of an entity below `parent_id`.
///
/// A parent id that is not a UUID falls back to the root namespace.
pub fn child_id(parent_id: &str, local_name: &str) -> String {
    let namespace = Uuid::parse_str(parent_id).unwrap_or(ROOT_NAMESPACE);
    Uuid::new_v3(&namespace, local_name.as_bytes()).to_string()
}

impl Report {
    /// `name`, suffixed with the framework when one is set.
    pub fn local_name(&self) -> String {
        format!("{}{}", self.name, self.framework)
    }

    /// Regenerate every id top-down.
    pub fn assign_ids(&mut self) {
        self.id = root_id(&self.local_name());
        for suite in &mut self.suites {
            suite.assign_ids(&self.id);
        }
    }
}

impl Suite {
    pub fn local_name(&self) -> &str {
        &self.name
    }

    /// Regenerate the suite id and every test id below it.
    pub fn assign_ids(&mut self, report_id: &str) {
        self.id = child_id(report_id, self.local_name());
        for test in &mut self.tests {
            test.assign_id(&self.id);
        }
    }
}

impl Test {
    /// `name`, qualified by classname, then by `Failure.` and `Error.` markers.
    ///
    /// The markers make a failing test distinct from a passing one with the
    /// same name, so a test's id changes when its outcome flips.
    pub fn local_name(&self) -> String {
        let mut local = self.name.clone();

        if !self.classname.is_empty() {
            local = format!("{}.{}", self.classname, local);
        }
        if self.failure.is_some() {
            local = format!("Failure.{local}");
        }
        if self.error.is_some() {
            local = format!("Error.{local}");
        }

        local
    }

    pub fn assign_id(&mut self, suite_id: &str) {
        self.id = child_id(suite_id, &self.local_name());
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
