//! Command-line tests for `run-unit-tests`.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("run-unit-tests").unwrap();
    cmd.env_remove("UNITTESTING_CONFIG").env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_passing_suite_exits_zero() {
    cmd()
        .args(["--module", "test_unit_testing_two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 tests in 1 suites, 0 failed"));
}

#[test]
fn test_all_suites_report_failures() {
    cmd()
        .arg("--return")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("test_unit_testing_one.test_false : "))
        .stdout(predicate::str::contains("6 tests in 3 suites, 2 failed"));
}

#[test]
fn test_failure_records_need_return() {
    cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("test_unit_testing_one.test_false : ").not())
        .stdout(predicate::str::contains("6 tests in 3 suites, 2 failed"));
}

#[test]
fn test_config_file_enables_return() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "explicit_return = true").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("test_unit_testing_one.test_false : "));
}

#[test]
fn test_raise_keeps_json_format() {
    let output = cmd()
        .args(["--raise", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["failures"].as_array().unwrap().len(), 2);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("2 failed: \n"));
}

#[test]
fn test_raise_prints_aggregate_error() {
    cmd()
        .arg("--raise")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("2 failed: "))
        .stderr(predicate::str::contains(
            "test_unit_testing_one.test_three_compare_different_ints_as_equal",
        ));
}

#[test]
fn test_unknown_suite_is_usage_error() {
    cmd()
        .args(["--module", "test_unit_testing_nine"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown suite `test_unit_testing_nine`"));
}

#[test]
fn test_list_shows_resolved_methods() {
    cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  TestClassOne::test_correct"))
        .stdout(predicate::str::contains("  TestClassTwo::test_shared"))
        .stdout(predicate::str::contains("TestClassTwoExtended::test_shared").not());
}

#[test]
fn test_json_report() {
    let output = cmd()
        .args(["--module", "test_unit_testing_one", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["modules"][0]["name"], "test_unit_testing_one");
    assert_eq!(report["failures"].as_array().unwrap().len(), 2);
}

#[test]
fn test_config_file_enables_raise() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "explicit_raise = true").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("2 failed: "));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "explicit_raise = \"sometimes\"").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config"));
}
