//! Integration tests for the shipping discounts CLI.
//!
//! These tests run the actual binary and verify output against expected files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_cli(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("shipping-discounts").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn temp_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_sample_month_with_budget_exhaustion() {
    let output = run_cli(&[&test_data_path("sample_input.txt")]);
    let expected = fs::read_to_string(test_data_path("expected_output.txt")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_sample_with_ignored_marker() {
    let output = run_cli(&[&test_data_path("sample_input.txt"), "--mark-ignored"]);
    let expected = fs::read_to_string(test_data_path("expected_output_marked.txt")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_malformed_lines_reproduced_verbatim() {
    let output = run_cli(&[&test_data_path("malformed_input.txt")]);
    let expected = fs::read_to_string(test_data_path("expected_malformed.txt")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_reference_example() {
    let input = temp_input("2024-08-09 S LP\n2024-08-10 L LP\n2024-08-11 L LP\n2024-08-12 L LP\n");
    let output = run_cli(&[input.path().to_str().unwrap()]);

    assert_eq!(
        output,
        "2024-08-09 S LP 1.50 -\n\
         2024-08-10 L LP 6.90 -\n\
         2024-08-11 L LP 6.90 -\n\
         2024-08-12 L LP 0.00 6.90\n"
    );
}

#[test]
fn test_one_output_line_per_input_line() {
    let input = temp_input("2024-08-09 S LP\n\nnonsense\r\n2024-08-10 M MR\n");
    let output = run_cli(&[input.path().to_str().unwrap()]);

    assert_eq!(output.lines().count(), 4);
    assert_eq!(output, "2024-08-09 S LP 1.50 -\n\nnonsense\n2024-08-10 M MR 3.00 -\n");
}

#[test]
fn test_default_input_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.txt"), "2024-08-09 S MR\n").unwrap();

    let mut cmd = Command::cargo_bin("shipping-discounts").unwrap();
    cmd.current_dir(dir.path())
        .assert()
        .success()
        .stdout("2024-08-09 S MR 1.50 0.50\n");
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("shipping-discounts").unwrap();
    cmd.arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_logs_do_not_reach_stdout() {
    let input = temp_input("bad line\n2024-08-09 S MR\n");

    let mut cmd = Command::cargo_bin("shipping-discounts").unwrap();
    cmd.env("RUST_LOG", "debug")
        .arg(input.path())
        .assert()
        .success()
        .stdout("bad line\n2024-08-09 S MR 1.50 0.50\n")
        .stderr(predicate::str::contains("ignored"));
}

#[test]
fn test_money_has_two_decimal_places() {
    let output = run_cli(&[&test_data_path("sample_input.txt")]);

    for line in output.lines() {
        let parts: Vec<&str> = line.split(' ').collect();
        if parts.len() != 5 {
            continue;
        }
        for part in &parts[3..5] {
            if *part == "-" {
                continue;
            }
            let dot_pos = part.find('.').expect("decimal point");
            assert_eq!(part.len() - dot_pos - 1, 2, "Expected 2 decimal places in: {}", part);
        }
    }
}

#[test]
fn test_non_utf8_line_does_not_stop_the_run() {
    let mut input = NamedTempFile::new().unwrap();
    input
        .write_all(b"2024-08-09 S MR\n\xff\xfe bad\n2024-08-10 M MR\n")
        .unwrap();

    let mut cmd = Command::cargo_bin("shipping-discounts").unwrap();
    cmd.arg(input.path())
        .assert()
        .success()
        .stdout("2024-08-09 S MR 1.50 0.50\n\u{FFFD}\u{FFFD} bad\n2024-08-10 M MR 3.00 -\n");
}
