//! Behavioral specs for configuration.
//!
//! Tests that test-results correctly handles:
//! - Config discovery from the working directory
//! - Explicit config via -C and TEST_RESULTS_CONFIG
//! - Version validation and unknown key warnings

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn discovered_config_selects_interpreter() {
    let temp = Project::empty();
    temp.config("[parse]\nparser = \"phpunit\"\n");

    temp.compile().fixture("phpunit.xml").args(&["out.json"]).passes();

    assert_eq!(temp.results("out.json").report()["framework"], "phpunit");
}

#[test]
fn config_found_in_parent_directory() {
    let temp = Project::empty();
    temp.config("[parse]\nname = \"From Parent\"\n");
    temp.file("nested/deeper/.keep", "");

    let mut cmd = test_results_cmd();
    cmd.args(["compile"])
        .arg(report_fixture("generic.xml"))
        .arg("out.json")
        .current_dir(temp.path().join("nested/deeper"))
        .assert()
        .success();

    assert_eq!(
        temp.results("nested/deeper/out.json").report()["name"],
        "From Parent"
    );
}

#[test]
fn detection_order_is_configurable() {
    let temp = Project::empty();
    temp.config("[parse]\ndetect = [\"golang\", \"generic\"]\n");

    temp.compile().fixture("golang.xml").args(&["out.json"]).passes();

    assert_eq!(temp.results("out.json").report()["framework"], "golang");
}

#[test]
fn flags_override_config() {
    let temp = Project::empty();
    temp.config("[parse]\nname = \"Configured\"\nsuite_prefix = \"cfg\"\n");

    temp.compile()
        .args(&["-N", "Flag"])
        .fixture("generic.xml")
        .args(&["out.json"])
        .passes();

    let results = temp.results("out.json");
    assert_eq!(results.report()["name"], "Flag");
    assert_eq!(suite_names(results.report()), ["cfg checkout"]);
}

#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("ci/results.toml", "version = 1\n[parse]\nname = \"CI\"\n");

    temp.compile()
        .args(&["-C", "ci/results.toml"])
        .fixture("generic.xml")
        .args(&["out.json"])
        .passes();

    assert_eq!(temp.results("out.json").report()["name"], "CI");
}

#[test]
fn config_env_var_sets_path() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[parse]\nname = \"Env\"\n");
    let config_path = temp.path().join("custom.toml");

    temp.compile()
        .fixture("generic.xml")
        .args(&["out.json"])
        .env("TEST_RESULTS_CONFIG", config_path.to_str().unwrap())
        .passes();

    assert_eq!(temp.results("out.json").report()["name"], "Env");
}

#[test]
fn missing_explicit_config_is_config_error() {
    let temp = Project::empty();

    temp.compile()
        .args(&["-C", "absent.toml"])
        .fixture("generic.xml")
        .args(&["out.json"])
        .exits(2);
}

#[test]
fn unsupported_version_is_config_error() {
    let temp = Project::empty();
    temp.config("version = 2\n");

    temp.compile()
        .fixture("generic.xml")
        .args(&["out.json"])
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn unknown_detection_entry_is_config_error() {
    let temp = Project::empty();
    temp.config("[parse]\ndetect = [\"junit5\"]\n");

    temp.compile()
        .fixture("generic.xml")
        .args(&["out.json"])
        .exits(2)
        .stderr_has("parser not found: junit5");
}

#[test]
fn unknown_keys_warn_but_succeed() {
    let temp = Project::empty();
    temp.config("colour = \"auto\"\n[parse]\nstrict = true\n");

    temp.compile()
        .fixture("generic.xml")
        .args(&["out.json"])
        .passes()
        .stderr_has("unrecognized field `colour`")
        .stderr_has("unrecognized field `parse.strict`");
}

#[test]
fn max_file_size_rejects_large_inputs() {
    let temp = Project::empty();
    temp.config("[read]\nmax_file_size = 16\n");

    temp.compile()
        .fixture("generic.xml")
        .args(&["out.json"])
        .exits(1)
        .stderr_has("file too large");
}
