//! CLI Contract Tests
//!
//! Exit codes, JSON output, and the error log.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_adcampaign-cli"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run adcampaign-cli")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn write_campaign(dir: &TempDir, ads: Value) -> PathBuf {
    let path = dir.path().join("campaign.json");
    let doc = json!({
        "name": "Campaign Demo",
        "startDate": "2024-05-20",
        "endDate": "2024-06-20",
        "ads": ads,
    });
    fs::write(&path, doc.to_string()).unwrap();
    path
}

fn demo_ads() -> Value {
    json!([{
        "type": "video",
        "fileUrl": "sin-url",
        "clickUrl": "sin-url",
        "subtype": "instream",
        "duration": 30
    }])
}

fn log_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn cli_formats_lists_every_format() {
    let output = cli(&["formats"]);
    assert!(output.status.success());

    let formats = stdout_json(&output);
    let names: Vec<_> = formats
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["format"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["video", "display", "social"]);
}

#[test]
fn cli_build_ad_outputs_lowercased_ad() {
    let payload = r#"{"type": "Video", "subtype": "instream", "fileUrl": "A", "clickUrl": "B"}"#;
    let output = cli(&["build-ad", "--payload", payload]);
    assert!(output.status.success());

    let ad = stdout_json(&output);
    assert_eq!(ad["format"], "video");
    assert_eq!(ad["fileUrl"], "a");
    assert_eq!(ad["duration"], 5);
}

#[test]
fn cli_build_ad_exit_codes() {
    let bad_subtype = r#"{"type": "display", "subtype": "banner", "width": 300, "height": 250}"#;
    let output = cli(&["build-ad", "--payload", bad_subtype]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_json(&output)["success"], false);

    let output = cli(&["build-ad", "--payload", "{not json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_campaign_applies_rename_and_subtype() {
    let dir = TempDir::new().unwrap();
    let file = write_campaign(&dir, demo_ads());
    let log = dir.path().join("error.log");

    let output = cli(&[
        "--error-log",
        path_str(&log),
        "campaign",
        "--file",
        path_str(&file),
        "--rename",
        "Spring Launch",
        "--subtype",
        "outstream",
    ]);
    assert!(output.status.success());

    let result = stdout_json(&output);
    assert_eq!(result["success"], true);
    assert_eq!(result["summary"]["name"], "Spring Launch");
    assert_eq!(result["summary"]["video"], 1);
    assert_eq!(result["campaign"]["ads"][0]["subtype"], "outstream");
    assert!(!log.exists());
}

#[test]
fn cli_rejects_long_rename_and_logs_it() {
    let dir = TempDir::new().unwrap();
    let file = write_campaign(&dir, demo_ads());
    let log = dir.path().join("error.log");
    let long_name = "n".repeat(251);

    let output = cli(&[
        "--error-log",
        path_str(&log),
        "campaign",
        "--file",
        path_str(&file),
        "--rename",
        &long_name,
    ]);
    assert_eq!(output.status.code(), Some(2));

    let lines = log_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("maximum is 250"));
}

#[test]
fn cli_rejects_foreign_subtype_and_logs_it() {
    let dir = TempDir::new().unwrap();
    let file = write_campaign(&dir, demo_ads());
    let log = dir.path().join("error.log");

    let output = cli(&[
        "--error-log",
        path_str(&log),
        "campaign",
        "--file",
        path_str(&file),
        "--subtype",
        "facebook",
    ]);
    assert_eq!(output.status.code(), Some(2));

    let lines = log_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("'facebook'"));
}

#[test]
fn cli_subtype_on_empty_campaign_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_campaign(&dir, json!([]));
    let log = dir.path().join("error.log");

    let output = cli(&[
        "--error-log",
        path_str(&log),
        "campaign",
        "--file",
        path_str(&file),
        "--subtype",
        "bogus",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["success"], false);

    let lines = log_lines(&log);
    assert_eq!(lines, ["No ad at index 0, campaign has 0"]);
}

#[test]
fn cli_error_log_appends_one_line_per_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let log = dir.path().join("error.log");

    for _ in 0..2 {
        let output = cli(&[
            "--error-log",
            path_str(&log),
            "campaign",
            "--file",
            path_str(&missing),
        ]);
        assert_eq!(output.status.code(), Some(1));
    }

    let lines = log_lines(&log);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.starts_with("IO error:")));
}
