// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical test report model.
//!
//! Every framework dialect is normalized into [`Report`] → [`Suite`] → [`Test`].
//! Summaries are always derived bottom-up from tests; they are never merged
//! field-by-field across mismatched children.

mod env;
mod identity;
mod merge;
mod reshape;

pub use env::CiEnv;
pub use identity::{ROOT_NAMESPACE, child_id, root_id};
pub use merge::should_replace;

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

/// Free-form suite properties (`<property name=".." value=".."/>`).
pub type Properties = BTreeMap<String, String>;

/// Outcome of a single test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Passed,
    Failed,
    Error,
    Skipped,
    Disabled,
}

/// Whether interpretation of a report succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Success,
    Error,
}

/// Failure or error detail attached to a test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Detail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub body: String,
}

/// Aggregated counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub total: u64,
    pub passed: u64,
    pub skipped: u64,
    pub error: u64,
    pub failed: u64,
    pub disabled: u64,
    #[serde(with = "nanos")]
    pub duration: Duration,
}

impl Summary {
    /// Count one test in the bucket matching its state.
    pub fn record(&mut self, state: State) {
        self.total += 1;
        match state {
            State::Passed => self.passed += 1,
            State::Failed => self.failed += 1,
            State::Error => self.error += 1,
            State::Skipped => self.skipped += 1,
            State::Disabled => self.disabled += 1,
        }
    }

    /// Field-wise sum, saturating at the maximum.
    pub fn merge(&mut self, other: &Summary) {
        self.total = self.total.saturating_add(other.total);
        self.passed = self.passed.saturating_add(other.passed);
        self.skipped = self.skipped.saturating_add(other.skipped);
        self.error = self.error.saturating_add(other.error);
        self.failed = self.failed.saturating_add(other.failed);
        self.disabled = self.disabled.saturating_add(other.disabled);
        self.duration = self.duration.saturating_add(other.duration);
    }
}

/// A single test case outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Test {
    pub id: String,
    pub file: String,
    pub classname: String,
    pub package: String,
    pub name: String,
    #[serde(with = "nanos")]
    pub duration: Duration,
    pub state: State,
    pub failure: Option<Detail>,
    pub error: Option<Detail>,
    pub system_out: String,
    pub system_err: String,
    /// Job metadata captured when the test was interpreted.
    #[serde(rename = "semaphore_env")]
    pub env: Option<CiEnv>,
}

impl Test {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_classname(mut self, classname: impl Into<String>) -> Self {
        self.classname = classname.into();
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Mark as failed with the given detail.
    pub fn with_failure(mut self, failure: Detail) -> Self {
        self.state = State::Failed;
        self.failure = Some(failure);
        self
    }

    /// Mark as errored with the given detail.
    pub fn with_error(mut self, error: Detail) -> Self {
        self.state = State::Error;
        self.error = Some(error);
        self
    }
}

/// A group of tests, mapped from a framework's `<testsuite>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Suite {
    pub id: String,
    pub name: String,
    pub is_skipped: bool,
    pub is_disabled: bool,
    pub timestamp: String,
    pub hostname: String,
    pub package: String,
    #[serde(deserialize_with = "null_default")]
    pub tests: Vec<Test>,
    #[serde(deserialize_with = "null_default")]
    pub properties: Properties,
    pub summary: Summary,
    pub system_out: String,
    pub system_err: String,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: append a test (does not re-aggregate).
    pub fn with_test(mut self, test: Test) -> Self {
        self.tests.push(test);
        self
    }

    /// Recompute the summary from the current tests.
    ///
    /// A previously known duration larger than the sum of test durations is
    /// kept: frameworks report suite setup/teardown time that belongs to no
    /// single test.
    pub fn aggregate(&mut self) {
        let mut summary = Summary::default();

        for test in &self.tests {
            summary.record(test.state);
            summary.duration = summary.duration.saturating_add(test.duration);
        }

        if self.summary.duration > summary.duration {
            summary.duration = self.summary.duration;
        }

        self.summary = summary;
    }
}

/// Canonical, normalized result of one interpreted report file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub name: String,
    pub framework: String,
    pub is_disabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub suites: Vec<Suite>,
    pub summary: Summary,
    pub status: Status,
    pub status_message: String,
}

impl Report {
    pub fn new(name: impl Into<String>, framework: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            framework: framework.into(),
            ..Self::default()
        }
    }

    /// A report whose interpretation failed. It carries no suites.
    pub fn errored(
        name: impl Into<String>,
        framework: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut report = Self::new(name, framework);
        report.status = Status::Error;
        report.status_message = message.into();
        report.assign_ids();
        report
    }

    /// Builder: append a suite (does not re-aggregate).
    pub fn with_suite(mut self, suite: Suite) -> Self {
        self.suites.push(suite);
        self
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// Re-aggregate every suite, then sum them.
    pub fn aggregate(&mut self) {
        let mut summary = Summary::default();

        for suite in &mut self.suites {
            suite.aggregate();
            summary.merge(&suite.summary);
        }

        self.summary = summary;
    }
}

/// Top-level set of reports, as exchanged in results JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "testResults", default, deserialize_with = "null_default")]
    pub reports: Vec<Report>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Sum of every report summary.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for report in &self.reports {
            summary.merge(&report.summary);
        }
        summary
    }
}

impl From<Report> for Collection {
    fn from(report: Report) -> Self {
        Self {
            reports: vec![report],
        }
    }
}

/// Read `null` as the type's default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Durations on the wire are integer nanoseconds.
mod nanos {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let nanos = i64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(u64::try_from(nanos).unwrap_or(0)))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
