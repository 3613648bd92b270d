//! Integration tests for the slopmeter CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn slopmeter() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("slopmeter"))
}

const HUMAN_TEXT: &str =
    "The cat sat quietly on the old wooden fence and watched the birds fly.";

#[test]
fn test_version() {
    slopmeter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("slopmeter"));
}

#[test]
fn test_help() {
    slopmeter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("local linguistic heuristics"));
}

#[test]
fn test_no_args_shows_info() {
    slopmeter().assert().success().stdout(predicate::str::contains("slopmeter"));
}

#[test]
fn test_analyze_human_text() {
    slopmeter()
        .args(["analyze", HUMAN_TEXT])
        .assert()
        .success()
        .stdout(predicate::str::contains("Very likely human-written"))
        .stdout(predicate::str::contains("AI score: 0%"))
        .stdout(predicate::str::contains("Words: 14"));
}

#[test]
fn test_analyze_short_text_fails() {
    slopmeter()
        .args(["analyze", "too short"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("at least 50 characters"));
}

#[test]
fn test_analyze_short_text_json() {
    let output = slopmeter().args(["--json", "analyze", "too short"]).assert().failure().code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["length"], 9);
}

#[test]
fn test_analyze_json_output() {
    let output = slopmeter().args(["--json", "analyze", HUMAN_TEXT]).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["score"], 0.0);
    assert_eq!(json["verdict_label"], "Very likely human-written");
    assert_eq!(json["severity"], "low");
    assert_eq!(json["word_count"], 14);
    assert_eq!(json["signal_count"], 0);
}

#[test]
fn test_analyze_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{HUMAN_TEXT}").unwrap();

    slopmeter()
        .args(["analyze", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Very likely human-written"));
}

#[test]
fn test_analyze_from_stdin() {
    slopmeter()
        .arg("analyze")
        .write_stdin(HUMAN_TEXT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Very likely human-written"));
}

#[test]
fn test_analyze_missing_file_fails() {
    slopmeter()
        .args(["analyze", "--file", "does/not/exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_detected_signals_are_listed() {
    let text = "Here is what I bought at the market today:\n- apples\n- fresh bread\n- a jar of honey";
    slopmeter()
        .args(["analyze", text])
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected signals:"))
        .stdout(predicate::str::contains("Very organized/systematic structure"));
}

#[test]
fn test_version_subcommand_json() {
    let output = slopmeter().args(["--json", "version"]).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["version"].is_string());
}
