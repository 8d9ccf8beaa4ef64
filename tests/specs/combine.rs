//! Behavioral specs for the combine command.
//!
//! Results files from parallel jobs merge by id; bad inputs are reported
//! without losing the rest.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

fn compile_into(temp: &Project, fixture: &str, out: &str) {
    temp.compile().fixture(fixture).args(&[out]).passes();
}

#[test]
fn combines_results_from_separate_jobs() {
    let temp = Project::empty();
    compile_into(&temp, "generic.xml", "job-1.json");
    compile_into(&temp, "generic-retry.xml", "job-2.json");

    temp.combine()
        .args(&["job-1.json", "job-2.json", "merged.json"])
        .passes();

    let results = temp.results("merged.json");
    let report = results.report();
    assert_eq!(suite_names(report), ["checkout"]);
    assert_eq!(report["summary"]["total"], 4);
    assert_eq!(report["summary"]["failed"], 1);
}

#[test]
fn combine_matches_compiling_together() {
    let temp = Project::empty();
    compile_into(&temp, "generic.xml", "job-1.json");
    compile_into(&temp, "generic-retry.xml", "job-2.json");
    temp.compile()
        .fixture("generic.xml")
        .fixture("generic-retry.xml")
        .args(&["together.json"])
        .passes();

    temp.combine()
        .args(&["job-2.json", "job-1.json", "merged.json"])
        .passes();

    let merged: serde_json::Value = serde_json::from_str(temp.results("merged.json").raw()).unwrap();
    let together: serde_json::Value =
        serde_json::from_str(temp.results("together.json").raw()).unwrap();
    assert_eq!(merged, together);
}

#[test]
fn combining_one_file_is_a_copy() {
    let temp = Project::empty();
    compile_into(&temp, "rspec.xml", "job.json");

    temp.combine().args(&["job.json", "copy.json"]).passes();

    assert_eq!(temp.results("copy.json").raw(), temp.results("job.json").raw());
}

#[test]
fn keeps_reports_of_different_frameworks() {
    let temp = Project::empty();
    compile_into(&temp, "rspec.xml", "rspec.json");
    compile_into(&temp, "mocha.xml", "mocha.json");

    temp.combine()
        .args(&["rspec.json", "mocha.json", "merged.json"])
        .passes();

    let results = temp.results("merged.json");
    let mut frameworks: Vec<&str> = results
        .reports()
        .iter()
        .map(|r| r["framework"].as_str().unwrap())
        .collect();
    frameworks.sort_unstable();
    assert_eq!(frameworks, ["mocha", "rspec"]);
}

#[test]
fn invalid_json_input_is_reported() {
    let temp = Project::empty();
    compile_into(&temp, "generic.xml", "job.json");
    temp.file("broken.json", "{ \"testResults\": [");

    temp.combine()
        .args(&["broken.json", "job.json", "merged.json"])
        .exits(1)
        .stderr_has("json error")
        .stderr_has("broken.json");

    assert_eq!(temp.results("merged.json").report()["name"], "Integration");
}

#[test]
fn missing_input_is_reported() {
    let temp = Project::empty();

    temp.combine()
        .args(&["absent.json", "merged.json"])
        .exits(1)
        .stderr_has("absent.json");

    assert!(temp.results("merged.json").reports().is_empty());
}

#[test]
fn accepts_foreign_results_with_nulls() {
    let temp = Project::empty();
    temp.file(
        "foreign.json",
        r#"{"testResults":[{"id":"r","name":"n","framework":"golang","suites":null,"summary":{"total":0}}]}"#,
    );

    temp.combine().args(&["foreign.json", "merged.json"]).passes();

    assert_eq!(temp.results("merged.json").report()["framework"], "golang");
}
