// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JUnit-style baseline shared by every interpreter.
//!
//! Maps `<testsuites>`/`<testsuite>`/`<testcase>` onto the canonical model.
//! Numeric and boolean attributes are coerced leniently: a value that does
//! not parse is logged and read as zero or false.

use std::time::Duration;

use super::ReportParser;
use crate::model::{CiEnv, Detail, Properties, Report, State, Suite, Summary, Test};
use crate::xml::Element;

/// Build a report from a parsed document using `parser`'s hooks.
pub fn build_report<P: ReportParser + ?Sized>(parser: &P, root: &Element) -> Report {
    let root = parser.prepare(root);
    let env = CiEnv::from_env();

    let mut report = match root.tag.as_str() {
        "testsuites" => {
            tracing::debug!(parser = parser.name(), "root <testsuites> element found");
            let name = root
                .attr("name")
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| parser.default_report_name());

            let mut report = Report::new(name, parser.name());
            report.is_disabled = root.attr("disabled").is_some_and(parse_bool);
            report.summary = declared_summary(&root);
            report.suites = root
                .children_named("testsuite")
                .map(|node| build_suite(parser, node, &env))
                .collect();
            report
        }
        "testsuite" => {
            tracing::debug!(parser = parser.name(), "no root <testsuites> element found");
            Report::new(parser.default_report_name(), parser.name())
                .with_suite(build_suite(parser, &root, &env))
        }
        tag => {
            tracing::debug!(parser = parser.name(), tag, "invalid root element found");
            return Report::errored(
                parser.default_report_name(),
                parser.name(),
                format!("Invalid root element found: <{tag}>, must be one of <testsuites>, <testsuite>"),
            );
        }
    };

    let declared = report.summary;
    report.assign_ids();
    report.aggregate();

    if declared.total > 0 && declared.total != report.summary.total {
        tracing::debug!(
            declared = declared.total,
            counted = report.summary.total,
            "declared test count differs from test cases found"
        );
    }

    report
}

/// Counters a `<testsuites>` element declares about itself.
fn declared_summary(element: &Element) -> Summary {
    let count = |key| element.attr(key).map(parse_count).unwrap_or(0);

    let total = count("tests");
    let failed = count("failures");
    let error = count("errors");

    Summary {
        total,
        failed,
        error,
        passed: total.saturating_sub(error).saturating_sub(failed),
        duration: element.attr("time").map(parse_seconds).unwrap_or_default(),
        ..Summary::default()
    }
}

/// Map one `<testsuite>` element. The suite is aggregated but has no ids yet.
pub fn build_suite<P: ReportParser + ?Sized>(parser: &P, element: &Element, env: &CiEnv) -> Suite {
    let mut suite = Suite::new(parser.suite_name(element.attr("name").unwrap_or_default()));

    for (key, value) in &element.attributes {
        match key.as_str() {
            "time" => suite.summary.duration = parse_seconds(value),
            "disabled" => suite.is_disabled = parse_bool(value),
            "skipped" => suite.is_skipped = parse_bool(value),
            "timestamp" => suite.timestamp = value.clone(),
            "hostname" => suite.hostname = value.clone(),
            "package" => suite.package = value.clone(),
            _ => {}
        }
    }

    for node in &element.children {
        match node.tag.as_str() {
            "properties" => suite.properties.extend(properties(node)),
            "system-out" => suite.system_out = node.text.clone(),
            "system-err" => suite.system_err = node.text.clone(),
            "testcase" => suite.tests.push(build_test(parser, node, env)),
            _ => {}
        }
    }

    suite.aggregate();
    suite
}

/// Map one `<testcase>` element.
pub fn build_test<P: ReportParser + ?Sized>(parser: &P, element: &Element, env: &CiEnv) -> Test {
    let mut test = Test::new(element.attr("name").unwrap_or_default());
    test.env = Some(env.clone());

    for (key, value) in &element.attributes {
        match key.as_str() {
            "time" => test.duration = parse_seconds(value),
            "classname" => test.classname = value.clone(),
            "file" => test.file = value.strip_prefix("./").unwrap_or(value).to_string(),
            "package" => test.package = value.clone(),
            _ => {}
        }
    }

    for node in &element.children {
        match node.tag.as_str() {
            "failure" => {
                test.state = State::Failed;
                test.failure = Some(detail(node));
            }
            "error" => {
                test.state = State::Error;
                test.error = Some(detail(node));
            }
            "skipped" => test.state = State::Skipped,
            "system-out" => test.system_out = node.text.clone(),
            "system-err" => test.system_err = node.text.clone(),
            _ => {}
        }
    }

    parser.decorate_test(&mut test, element);
    test
}

fn detail(element: &Element) -> Detail {
    Detail {
        message: element.attr("message").unwrap_or_default().to_string(),
        kind: element.attr("type").unwrap_or_default().to_string(),
        body: element.text.clone(),
    }
}

/// `name`/`value` pairs of the `<property>` children of `element`.
pub fn properties(element: &Element) -> Properties {
    element
        .children_named("property")
        .map(|p| {
            (
                p.attr("name").unwrap_or_default().to_string(),
                p.attr("value").unwrap_or_default().to_string(),
            )
        })
        .collect()
}

/// Decimal seconds, converted exactly to nanoseconds.
///
/// Digits past nanosecond precision are truncated. Negative and malformed
/// values read as zero.
pub fn parse_seconds(value: &str) -> Duration {
    let trimmed = value.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        tracing::debug!(value, "duration parsing failed");
        return Duration::ZERO;
    }

    let secs = if whole.is_empty() {
        0
    } else {
        match whole.parse::<u64>() {
            Ok(secs) => secs,
            Err(err) => {
                tracing::debug!(value, "duration parsing failed: {err}");
                return Duration::ZERO;
            }
        }
    };

    let nanos = fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));

    Duration::new(secs, nanos)
}

/// Unsigned counter; anything else reads as zero.
pub fn parse_count(value: &str) -> u64 {
    value.trim().parse().unwrap_or_else(|err| {
        tracing::debug!(value, "integer parsing failed: {err}");
        0
    })
}

/// Boolean flag in any of the usual spellings; anything else is false.
pub fn parse_bool(value: &str) -> bool {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => true,
        "0" | "f" | "F" | "FALSE" | "false" | "False" => false,
        _ => {
            tracing::debug!(value, "boolean parsing failed");
            false
        }
    }
}

#[cfg(test)]
#[path = "junit_tests.rs"]
mod tests;
