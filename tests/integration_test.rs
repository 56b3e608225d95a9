//! Integration tests for the pharma ledger CLI.
//!
//! These tests run the actual binary with scripted stdin and check stdout.

use assert_cmd::Command;
use predicates::prelude::*;

/// Run the binary with the given stdin and return stdout
fn run_shell(script: &str) -> String {
    let mut cmd = Command::cargo_bin("pharma-ledger").unwrap();
    let assert = cmd.write_stdin(script).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Returns `true` for the dashed line printed under the table header
fn is_separator(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '-')
}

/// Lines of the last table printed by option 2, header and separator excluded
///
/// The header shares its line with the menu prompt, so rows are located
/// from the separator instead.
fn table_rows(output: &str) -> Vec<String> {
    let lines: Vec<&str> = output.lines().collect();
    let separator = lines
        .iter()
        .rposition(|l| is_separator(l))
        .expect("no table in output");
    assert!(lines[separator - 1].contains("Transaction ID"));

    lines[separator + 1..]
        .iter()
        .take_while(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_exit_option() {
    let mut cmd = Command::cargo_bin("pharma-ledger").unwrap();
    cmd.write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pharma Supply Chain Management System:"))
        .stdout(predicate::str::ends_with("Exiting...\n"));
}

#[test]
fn test_empty_input_exits_cleanly() {
    let mut cmd = Command::cargo_bin("pharma-ledger").unwrap();
    cmd.write_stdin("").assert().success();
}

#[test]
fn test_view_shows_only_genesis_initially() {
    let output = run_shell("2\n5\n");
    let rows = table_rows(&output);

    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("0 "));
    assert!(rows[0].contains("Genesis"));
    assert!(rows[0].contains("Pharma"));
}

#[test]
fn test_view_table_layout() {
    let output = run_shell("2\n5\n");

    assert!(output.contains("Select an option: Transaction ID "));
    let separator = output.lines().find(|l| is_separator(l)).unwrap();
    assert_eq!(separator.len(), 103);
}

#[test]
fn test_add_then_view() {
    let output = run_shell("1\nT1\nD1\nAcme\nClinic\n2\n5\n");

    assert!(output.contains("Transaction added: T1"));
    let rows = table_rows(&output);
    assert_eq!(rows.len(), 2);
    assert!(rows[1].starts_with("T1 "));
    assert!(rows[1].contains("Acme"));
    assert!(rows[1].contains("Clinic"));
}

#[test]
fn test_duplicate_id_overwrites() {
    let output = run_shell("1\nT1\nD1\nA\nB\n1\nT1\nD2\nC\nD\n2\n5\n");
    let rows = table_rows(&output);

    let t1_rows: Vec<&String> = rows.iter().filter(|r| r.starts_with("T1 ")).collect();
    assert_eq!(t1_rows.len(), 1);
    assert!(t1_rows[0].contains("D2"));
}

#[test]
fn test_remove_existing_and_missing() {
    let output = run_shell("1\nT1\nD1\nA\nB\n3\nT1\n3\nmissing\n2\n5\n");

    assert!(output.contains("Transaction with ID T1 removed."));
    assert!(output.contains("Transaction ID not found."));
    assert_eq!(table_rows(&output).len(), 1);
}

#[test]
fn test_validate_after_inserts() {
    let output = run_shell("1\nT1\nD1\nA\nB\n1\nT2\nD2\nB\nC\n4\n5\n");
    assert!(output.contains("Ledger is valid."));
}

#[test]
fn test_invalid_and_non_numeric_options() {
    let output = run_shell("7\nabc\n\n5\n");
    assert_eq!(output.matches("Invalid option. Please try again.").count(), 3);
    assert!(output.ends_with("Exiting...\n"));
}

#[test]
fn test_checksum_column_is_four_digits() {
    let output = run_shell("1\nT1\nD1\nA\nB\n2\n5\n");

    for row in table_rows(&output) {
        let checksum = row.split_whitespace().last().unwrap();
        assert_eq!(checksum.len(), 4, "bad checksum in: {}", row);
        assert!(checksum.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_nothing_is_logged_to_stdout() {
    let mut cmd = Command::cargo_bin("pharma-ledger").unwrap();
    cmd.env("RUST_LOG", "debug")
        .write_stdin("1\nT1\nD1\nA\nB\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted transaction").not());
}
