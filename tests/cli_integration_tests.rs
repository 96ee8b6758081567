#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("ziglint").expect("binary should exist")
}

fn long_line(length: usize) -> String {
    let mut s = "a".repeat(length);
    s.push('\n');
    s
}

// ============================================================================
// Exit Code Contract
// ============================================================================

#[test]
fn clean_directory_exits_success() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("main.zig"),
        "const std = @import(\"std\");\n",
    )
    .unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn long_line_reports_fault_and_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("ziglint.json"),
        r#"{"max_line_length": {"limit": 80, "severity": "error"}}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("a.zig"), long_line(200)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            ":1:80: error: line is too long (200 characters)",
        ));
}

#[test]
fn warnings_are_printed_but_do_not_affect_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("ziglint.json"),
        r#"{"max_line_length": {"limit": 80, "severity": "warning"}}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("a.zig"), long_line(120)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(": warning: line is too long"));
}

#[test]
fn exit_code_counts_error_faults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.zig"), long_line(150)).unwrap();
    fs::write(temp_dir.path().join("b.zig"), long_line(150)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg("--no-config")
        .assert()
        .code(2);
}

#[test]
fn missing_path_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    cmd()
        .arg(temp_dir.path().join("does-not-exist"))
        .arg("--no-config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn invalid_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("ziglint.json"),
        r#"{"max_line_len": 80}"#,
    )
    .unwrap();
    // over the default limit of 100, so the fallback config still flags it
    fs::write(temp_dir.path().join("a.zig"), long_line(150)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("using default configuration"));
}

#[test]
fn cli_max_line_length_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.zig"), long_line(90)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg("--no-config")
        .arg("--max-line-length")
        .arg("80")
        .assert()
        .code(1);
}

#[test]
fn banned_phrase_config_is_honored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("ziglint.json"),
        r#"{"banned_comment_phrases": {"error": ["FIXME"]}}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("a.zig"),
        "const x = 1; // FIXME later\n",
    )
    .unwrap();

    cmd()
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("banned phrase \"FIXME\""));
}

// ============================================================================
// Ignore Patterns
// ============================================================================

#[test]
fn ignore_file_excludes_directories() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("vendor")).unwrap();
    fs::write(temp_dir.path().join(".ziglintignore"), "vendor\n").unwrap();
    fs::write(temp_dir.path().join("vendor/bad.zig"), long_line(150)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg("--no-config")
        .assert()
        .success();
}

#[test]
fn include_pattern_overrides_exclude() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("vendor")).unwrap();
    fs::write(temp_dir.path().join(".ziglintignore"), "vendor\n").unwrap();
    fs::write(temp_dir.path().join("vendor/bad.zig"), long_line(150)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg("--no-config")
        .arg("-I")
        .arg("vendor/bad.zig")
        .assert()
        .code(1);
}

#[test]
fn directly_named_file_bypasses_ignore_rules() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".ziglintignore"), "bad.zig\n").unwrap();
    let file = temp_dir.path().join("bad.zig");
    fs::write(&file, long_line(150)).unwrap();

    cmd().arg(&file).arg("--no-config").assert().code(1);
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn duplicate_arguments_are_linted_once() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.zig"), long_line(150)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg(temp_dir.path())
        .arg("--no-config")
        .assert()
        .code(1);
}

// ============================================================================
// Suppression and Output
// ============================================================================

#[test]
fn trailing_directive_suppresses_its_own_line() {
    let temp_dir = TempDir::new().unwrap();
    let mut content = "a".repeat(150);
    content.push_str(" // ziglint: ignore\n");
    fs::write(temp_dir.path().join("a.zig"), content).unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg("--no-config")
        .assert()
        .success();
}

#[test]
fn standalone_directive_suppresses_the_next_line() {
    let temp_dir = TempDir::new().unwrap();
    let mut content = String::from("// ziglint: ignore\n");
    content.push_str(&long_line(150));
    fs::write(temp_dir.path().join("a.zig"), content).unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg("--no-config")
        .assert()
        .success();
}

#[test]
fn quiet_mode_suppresses_output_but_keeps_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.zig"), long_line(150)).unwrap();

    cmd()
        .arg(temp_dir.path())
        .arg("--no-config")
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
