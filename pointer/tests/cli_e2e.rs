// End-to-end tests for the `pointer` binary: run it as a subprocess against
// temporary files and check stdout, stderr and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_input(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create temp input");
    f.write_all(contents.as_bytes()).expect("write temp input");
    f
}

fn pointer_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pointer").expect("binary should be built");
    cmd.env_remove("POINTER_LOG");
    cmd
}

#[test]
fn points_at_offset_with_defaults() {
    let input = write_input("abc\ndef\nghi");
    pointer_cmd()
        .args(["pointer", "--offset", "5"])
        .arg(input.path())
        .assert()
        .success()
        .stdout("def\n ^\n\n");
}

#[test]
fn offset_defaults_to_start_of_file() {
    let input = write_input("abc\ndef\nghi");
    pointer_cmd()
        .arg("pointer")
        .arg(input.path())
        .assert()
        .success()
        .stdout("abc\n^\n\n");
}

#[test]
fn shows_context_and_custom_glyph() {
    let input = write_input("abc\ndef\nghi");
    pointer_cmd()
        .args(["pt", "-o", "5", "-c", "1", "-p", "|"])
        .arg(input.path())
        .assert()
        .success()
        .stdout("abc\ndef\n |\nghi\n");
}

#[test]
fn byte_unit_counts_utf8_bytes() {
    let input = write_input("héllo");
    pointer_cmd()
        .args(["pointer", "--unit", "bytes", "--offset", "3"])
        .arg(input.path())
        .assert()
        .success()
        .stdout("héllo\n  ^\n\n");
}

#[test]
fn offset_out_of_bounds_fails() {
    let input = write_input("abc");
    pointer_cmd()
        .args(["pointer", "--offset", "4"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Offset 4 is beyond input length 3"));
}

#[test]
fn missing_file_fails() {
    pointer_cmd()
        .args(["pointer", "does/not/exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read does/not/exist.txt"));
}

#[test]
fn multi_char_pointer_is_rejected() {
    let input = write_input("abc");
    pointer_cmd()
        .args(["pointer", "--pointer", "^^"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one character"));
}

#[test]
fn negative_context_is_rejected() {
    let input = write_input("abc");
    pointer_cmd()
        .args(["pointer", "--context", "-1"])
        .arg(input.path())
        .assert()
        .failure();
}

#[test]
fn no_arguments_prints_help() {
    pointer_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn verbose_logs_resolved_location() {
    let input = write_input("abc\ndef\nghi");
    pointer_cmd()
        .args(["--verbose", "pointer", "--offset", "5"])
        .arg(input.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(":2:2"));
}
