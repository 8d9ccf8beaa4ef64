// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merge engine.
//!
//! Combines reports at three nested levels. Entities are matched by id only:
//! differing ids are appended, never combined. Merging never fails.

use super::{Collection, Report, State, Status, Suite, Test};

/// Whether `incoming` should take the place of `existing` (same id).
///
/// Anything supersedes a skip, a failure supersedes a pass, and an incoming
/// error always wins regardless of what it replaces.
// NOTE: the unconditional error override is kept as-is pending a decision on
// whether an error should also displace an earlier error or failure.
pub fn should_replace(existing: &Test, incoming: &Test) -> bool {
    existing.state == State::Skipped
        || (existing.state == State::Passed && incoming.state == State::Failed)
        || incoming.state == State::Error
}

impl Suite {
    /// Fold `other`'s tests into this suite.
    ///
    /// No-op when the ids differ. Tests end up sorted by id and the summary is
    /// re-aggregated.
    pub fn combine(&mut self, other: Suite) {
        if self.id != other.id {
            tracing::debug!(left = %self.id, right = %other.id, "suite ids differ, not combining");
            return;
        }

        for test in other.tests {
            match self.tests.iter().position(|t| t.id == test.id) {
                Some(idx) => {
                    if should_replace(&self.tests[idx], &test) {
                        self.tests[idx] = test;
                    }
                }
                None => self.tests.push(test),
            }
        }

        self.tests.sort_by(|a, b| a.id.cmp(&b.id));
        self.aggregate();
    }
}

impl Report {
    /// Fold `other`'s suites into this report.
    ///
    /// No-op when the ids differ. A failed interpretation on either side
    /// leaves the merged report flagged as failed.
    pub fn combine(&mut self, other: Report) {
        if self.id != other.id {
            tracing::debug!(left = %self.id, right = %other.id, "report ids differ, not combining");
            return;
        }

        if other.status == Status::Error && self.status == Status::Success {
            self.status = Status::Error;
            self.status_message = other.status_message;
        }

        for suite in other.suites {
            self.absorb_suite(suite);
        }

        self.suites.sort_by(|a, b| a.id.cmp(&b.id));
        self.aggregate();
    }

    /// Combine same-id suites within this report.
    ///
    /// Suites and their tests come out sorted by id.
    pub fn flatten(&mut self) {
        let suites = std::mem::take(&mut self.suites);
        for suite in suites {
            self.absorb_suite(suite);
        }
        self.suites.sort_by(|a, b| a.id.cmp(&b.id));
        for suite in &mut self.suites {
            suite.tests.sort_by(|a, b| a.id.cmp(&b.id));
        }
    }

    fn absorb_suite(&mut self, suite: Suite) {
        match self.suites.iter_mut().find(|s| s.id == suite.id) {
            Some(existing) => existing.combine(suite),
            None => self.suites.push(suite),
        }
    }
}

impl Collection {
    /// Fold a batch of reports into this collection.
    ///
    /// Each incoming report is flattened first, then combined with the
    /// same-id report already held or appended. Reports end up sorted by id
    /// and every report is re-aggregated.
    pub fn combine(&mut self, other: Collection) {
        self.combine_reports(other.reports);
    }

    pub fn combine_reports(&mut self, reports: impl IntoIterator<Item = Report>) {
        for mut report in reports {
            report.flatten();
            match self.reports.iter_mut().find(|r| r.id == report.id) {
                Some(existing) => existing.combine(report),
                None => self.reports.push(report),
            }
        }

        self.reports.sort_by(|a, b| a.id.cmp(&b.id));

        for report in &mut self.reports {
            report.aggregate();
        }

        tracing::debug!(reports = self.reports.len(), "combined results");
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
