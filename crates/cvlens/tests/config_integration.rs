//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, and `analyze` to check
//! that configured gates and limits take effect.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// Write the placeholder resume into `dir` as `resume.json`.
fn write_template(dir: &Path) {
    let output = cmd().arg("template").output().expect("failed to run template");
    assert!(output.status.success());
    fs::write(dir.join("resume.json"), &output.stdout).unwrap();
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".cvlens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".cvlens.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("applications").join("2026");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join("cvlens.toml"), "min_ats_score = 60").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["min_ats_score"], 60);
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should find parent config"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();

    fs::write(tmp.path().join(".cvlens.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("cvlens.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".cvlens.yaml"),
        "log_level: warn\nmin_job_match_score: 65\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
    assert_eq!(json["config"]["min_job_match_score"], 65);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".cvlens.json"),
        r#"{"log_level": "error", "max_input_bytes": 2048}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
    assert_eq!(json["config"]["max_input_bytes"], 2048);
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join(".cvlens.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".cvlens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "closer config should win"
    );
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();

    fs::write(tmp.path().join(".cvlens.toml"), "min_ats_score = 40").unwrap();

    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "min_ats_score = 80").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["config"]["min_ats_score"], 80,
        "--config should override discovered config"
    );
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".cvlens.toml"), "min_ats_score = 40").unwrap();

    let output = cmd()
        .env("CVLENS_MIN_ATS_SCORE", "75")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_ats_score"], 75);
}

// =============================================================================
// Configured Gates & Limits
// =============================================================================

#[test]
fn configured_min_ats_score_gates_analyze() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path());
    fs::write(tmp.path().join(".cvlens.toml"), "min_ats_score = 90").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "resume.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 90"));
}

#[test]
fn cli_min_score_overrides_config() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path());
    fs::write(tmp.path().join(".cvlens.toml"), "min_ats_score = 90").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "analyze",
            "resume.json",
            "--min-score",
            "10",
        ])
        .assert()
        .success();
}

#[test]
fn configured_input_limit_rejects_large_resume() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path());
    fs::write(tmp.path().join(".cvlens.toml"), "max_input_bytes = 64").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "resume.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_input_limit_allows_large_resume() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path());
    fs::write(
        tmp.path().join(".cvlens.toml"),
        "max_input_bytes = 64\ndisable_input_limit = true\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "resume.json"])
        .assert()
        .success();
}

#[test]
fn log_dir_from_config_creates_log_file() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    fs::write(
        tmp.path().join(".cvlens.toml"),
        format!("log_level = \"debug\"\nlog_dir = {:?}\n", logs.to_str().unwrap()),
    )
    .unwrap();

    info_json(tmp.path());

    let entries: Vec<_> = fs::read_dir(&logs)
        .expect("log directory should be created")
        .filter_map(Result::ok)
        .collect();
    assert!(
        entries
            .iter()
            .any(|e| e.file_name().to_string_lossy().starts_with("cvlens.log")),
        "expected a cvlens.log file"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".cvlens.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration").or(predicate::str::contains("config")));
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".cvlens.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".cvlens.toml"),
        "log_level = \"info\"\nunknown_field = \"should be ignored\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();

    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("resumes");
    fs::create_dir_all(&src).unwrap();

    fs::write(parent.join(".cvlens.toml"), r#"log_level = "error""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default, boundary stops search"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "should not find config beyond boundary"
    );
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("resumes");
    fs::create_dir_all(&src).unwrap();

    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".cvlens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "config next to .git should be found"
    );
}
