//! End-to-end CLI tests over `tests/fixtures/`.
//!
//! Each fixture directory holds a `project.assets.json`, an optional `lockdiag.toml` and the
//! `expected.report.json` (timestamps and tool version normalized). The CLI runs from inside
//! the fixture directory so the config file is picked up from its default path.

use assert_cmd::Command;
use lockdiag_test_util::normalize_nondeterministic;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn lockdiag_cmd() -> Command {
    Command::cargo_bin("lockdiag").expect("lockdiag binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("lockdiag-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `lockdiag report` on a fixture; returns exit code, stderr and the parsed report.
fn run_report_on_fixture(fixture_name: &str) -> (i32, String, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = lockdiag_cmd()
        .current_dir(&fixture_path)
        .arg("report")
        .arg("--assets-file")
        .arg("project.assets.json")
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("run lockdiag");

    let exit_code = output.status.code().unwrap_or(-1);
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let report_content = std::fs::read_to_string(&report_path).expect("read report");
    let report: Value = serde_json::from_str(&report_content).expect("parse report JSON");

    (exit_code, stderr, report)
}

fn load_expected_report(fixture_name: &str) -> Value {
    let path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let content = std::fs::read_to_string(&path).expect("read expected report");
    serde_json::from_str(&content).expect("parse expected report")
}

fn assert_reports_match(actual: Value, fixture_name: &str) {
    let actual = normalize_nondeterministic(actual);
    let expected = normalize_nondeterministic(load_expected_report(fixture_name));

    assert_eq!(
        actual,
        expected,
        "report mismatch for fixture '{}'.\n\nActual:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual).unwrap()
    );
}

fn log_lines(stderr: &str) -> Vec<&str> {
    stderr
        .lines()
        .filter(|l| {
            ["[ERROR]: ", "[WARNING]: ", "[INFO]: "]
                .iter()
                .any(|tag| l.starts_with(tag))
        })
        .collect()
}

#[test]
fn fixture_clean_passes() {
    let (exit_code, stderr, report) = run_report_on_fixture("clean");
    assert_eq!(exit_code, 0);
    assert!(log_lines(&stderr).is_empty());
    assert_reports_match(report, "clean");
}

#[test]
fn fixture_multi_target_fans_out_and_logs_once() {
    let (exit_code, stderr, report) = run_report_on_fixture("multi_target");
    assert_eq!(exit_code, 0);
    assert_eq!(
        log_lines(&stderr),
        vec![
            "[WARNING]: LibA 1.2.0 was not found. An approximate best match of LibA 1.2.3 was resolved.",
            "[INFO]: Unable to resolve LibZ (>= 1.0.0).",
            "[INFO]: Foreign code",
        ]
    );
    assert_reports_match(report, "multi_target");
}

#[test]
fn fixture_warn_as_error_escalates_listed_codes() {
    let (exit_code, stderr, report) = run_report_on_fixture("warn_as_error");
    assert_eq!(exit_code, 0, "a completed pass exits 0 even when it fails");

    let lines = log_lines(&stderr);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines.iter().filter(|l| l.starts_with("[ERROR]")).count(), 4);
    assert_reports_match(report, "warn_as_error");
}

#[test]
fn fixture_no_warn_suppresses_listed_codes() {
    let (exit_code, stderr, report) = run_report_on_fixture("no_warn");
    assert_eq!(exit_code, 0);
    assert_eq!(log_lines(&stderr).len(), 3);
    assert_reports_match(report, "no_warn");
}

#[test]
fn fixture_strict_profile_escalates_warnings() {
    let (exit_code, _, report) = run_report_on_fixture("strict_profile");
    assert_eq!(exit_code, 0);
    assert_reports_match(report, "strict_profile");
}
