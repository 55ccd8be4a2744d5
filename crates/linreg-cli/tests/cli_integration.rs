//! End-to-end runs of the `linreg` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn linreg() -> Command {
    Command::cargo_bin("linreg").expect("Failed to find linreg binary")
}

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

const SALARY: &str = "YearsExperience , Salary\n\
1.1,39343\n\
1.3,46205\n\
1.5,37731\n\
2.0,43525\n\
2.2,39891\n\
2.9,56642\n\
3.0,60150\n\
3.2,54445\n\
3.7,57189\n\
3.9,63218\n";

// ============================================================================
// Invocation
// ============================================================================

#[test]
fn no_arguments_prints_usage() {
    linreg().assert().failure().code(2).stderr(predicate::str::contains("Usage"));
}

#[test]
fn two_arguments_prints_usage_without_touching_the_file() {
    // the path does not exist; a usage error must come before any file access
    linreg()
        .args(["/nonexistent/data.csv", "x"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Error loading file").not());
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn unreadable_file_reports_cause() {
    linreg()
        .args(["/nonexistent/data.csv", "x", "y", "--no-plot"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error loading file:"));
}

#[test]
fn missing_column_lists_available() {
    let file = csv_file(SALARY);
    linreg()
        .arg(file.path())
        .args(["Age", "Salary", "--no-plot"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'Age' or 'Salary'"))
        .stderr(predicate::str::contains("Available columns: YearsExperience, Salary"));
}

#[test]
fn non_numeric_fails_unless_dropped() {
    let file = csv_file("x,y\n0,0\n1,oops\n1,1\n2,2\n");
    linreg()
        .arg(file.path())
        .args(["x", "y", "--no-plot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not numeric"));

    linreg()
        .arg(file.path())
        .args(["x", "y", "--no-plot", "--drop-invalid", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slope = 1.00"))
        .stderr(predicate::str::contains("dropped 1 rows"));
}

#[test]
fn single_row_is_insufficient() {
    let file = csv_file("x,y\n1,2\n");
    linreg()
        .arg(file.path())
        .args(["x", "y", "--no-plot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enough numeric data"));
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn two_point_report() {
    let file = csv_file("x,y\n0,0\n1,1\n");
    linreg()
        .arg(file.path())
        .args(["x", "y", "--no-plot"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Linear Regression Results:\nSlope = 1.00\ny-intercept = 0.00\nR-squared = 1.000\nMSE = 0.00",
        ));
}

#[test]
fn swapped_columns_on_a_perfect_line() {
    let file = csv_file("a,b\n1,3\n2,5\n3,7\n4,9\n");
    linreg()
        .arg(file.path())
        .args(["a", "b", "--no-plot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slope = 2.00"))
        .stdout(predicate::str::contains("y-intercept = 1.00"))
        .stdout(predicate::str::contains("R-squared = 1.000"));

    linreg()
        .arg(file.path())
        .args(["b", "a", "--no-plot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slope = 0.50"))
        .stdout(predicate::str::contains("y-intercept = -0.50"))
        .stdout(predicate::str::contains("R-squared = 1.000"));
}

#[test]
fn json_report() {
    let file = csv_file(SALARY);
    let output = linreg()
        .arg(file.path())
        .args(["YearsExperience", "Salary", "--no-plot", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["x_column"], "YearsExperience");
    assert_eq!(json["n"], 10);
    let r2 = json["r_squared"].as_f64().unwrap();
    assert!(r2 > 0.0 && r2 < 1.0);
    assert!(json["slope"].as_f64().unwrap() > 0.0);
}

#[test]
fn semicolon_delimiter() {
    let file = csv_file("x;y\n0;1\n1;3\n2;5\n");
    linreg()
        .arg(file.path())
        .args(["x", "y", "--no-plot", "-d", ";"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slope = 2.00"));
}

#[test]
fn writes_svg_plot() {
    let file = csv_file(SALARY);
    let dir = tempdir().unwrap();
    let plot = dir.path().join("salary.svg");

    linreg()
        .arg(file.path())
        .args(["YearsExperience", "Salary", "-o"])
        .arg(&plot)
        .assert()
        .success()
        .stdout(predicate::str::contains("R-squared = "));

    assert!(plot.exists());
}
