// ABOUTME: Integration tests for the slotfill CLI binary.
// ABOUTME: Tests file and stdin input, output files, custom markup flags and JSON reports.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Vaults</title></head>
<body>
<div id="content-inventory">loading…</div>
<content cid="inventory"><ul><li>vault-1</li></ul></content>
<content cid="orphan">nowhere to go</content>
</body>
</html>"#;

fn slotfill_cmd() -> Command {
    Command::cargo_bin("slotfill").unwrap()
}

#[test]
fn relocates_file_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    fs::write(&html_path, PAGE).unwrap();

    slotfill_cmd()
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<div id="content-inventory"><ul><li>vault-1</li></ul></div>"#,
        ))
        .stdout(predicate::str::contains("loading").not());
}

#[test]
fn reads_stdin_when_no_input() {
    slotfill_cmd()
        .write_stdin(r#"<body><p id="content-a">?</p><content cid="a">piped</content></body>"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<p id="content-a">piped</p>"#));
}

#[test]
fn writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    let out_path = temp_dir.path().join("out.html");
    fs::write(&html_path, PAGE).unwrap();

    slotfill_cmd()
        .arg(&html_path)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("<li>vault-1</li></ul></div>"));
}

#[test]
fn custom_markup_flags() {
    slotfill_cmd()
        .args(["--tag", "aside", "--attr", "data-key", "--prefix", "slot-"])
        .write_stdin(
            r#"<body><section id="slot-x"></section><aside data-key="x"><b>custom</b></aside></body>"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<section id="slot-x"><b>custom</b></section>"#,
        ));
}

#[test]
fn report_file_lists_skips() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    let report_path = temp_dir.path().join("report.json");
    fs::write(&html_path, PAGE).unwrap();

    slotfill_cmd()
        .arg(&html_path)
        .arg("--report-file")
        .arg(&report_path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["indexed"], 2);
    assert_eq!(report["relocated"][0]["cid"], "inventory");
    assert_eq!(report["skipped"][0]["cid"], "orphan");
    assert_eq!(report["skipped"][0]["reason"], "missing_slot");
}

#[test]
fn report_flag_prints_json_to_stderr() {
    slotfill_cmd()
        .arg("--report")
        .write_stdin(r#"<body><content cid="a">x</content></body>"#)
        .assert()
        .success()
        .stderr(predicate::str::contains("\"reason\": \"missing_slot\""));
}

#[test]
fn missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    slotfill_cmd()
        .arg(temp_dir.path().join("nope.html"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: reading"));
}

#[test]
fn invalid_tag_fails() {
    slotfill_cmd()
        .args(["--tag", "div.fragment"])
        .write_stdin("<body></body>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid options"));
}
