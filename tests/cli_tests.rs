//! Integration tests for the Factbox CLI
//!
//! These tests run the actual binary and verify output. None of them reach
//! the network: they exercise the dispatch fallbacks and the loop's exit
//! paths, which resolve before any handler performs I/O.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get the binary to test
fn factbox_cmd() -> Command {
    Command::cargo_bin("factbox").unwrap()
}

#[test]
fn test_help_flag() {
    factbox_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ask natural-language questions about the world",
        ))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("repl"));
}

#[test]
fn test_version_flag() {
    factbox_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("factbox"));
}

// ============================================================================
// REPL exit paths
// ============================================================================

#[test]
fn test_repl_bye_prints_farewell() {
    factbox_cmd()
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the fact database!"))
        .stdout(predicate::str::contains("So long!"));
}

#[test]
fn test_repl_eof_prints_farewell() {
    factbox_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("So long!"));
}

#[test]
fn test_repl_unmatched_query() {
    factbox_cmd()
        .write_stdin("what time is it?\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand"));
}

#[test]
fn test_repl_uppercase_bye_still_exits() {
    // Normalization lowercases before matching.
    factbox_cmd()
        .write_stdin("BYE\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("So long!"));
}

// ============================================================================
// One-shot ask
// ============================================================================

#[test]
fn test_ask_unmatched_query() {
    factbox_cmd()
        .args(["ask", "what time is it?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand"));
}

#[test]
fn test_ask_bye_prints_nothing() {
    factbox_cmd()
        .args(["ask", "bye"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_lang_reports_error_with_fix() {
    factbox_cmd()
        .args(["--lang", "not a language", "ask", "bye"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Fix:"));
}
