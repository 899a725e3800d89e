#[path = "common/mod.rs"]
mod common;

use common::TriageTest;
use std::fs;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let triage = TriageTest::new();

    let output = triage.run_success(&["config", "show"]);
    assert!(output.contains("api.url"));
    assert!(output.contains("http://localhost:8000"));
    assert!(output.contains("request.timeout"));
    assert!(output.contains("30"));
    assert!(output.contains("Config file:"));
}

#[test]
fn test_config_set_and_get_api_url() {
    let triage = TriageTest::new();

    triage.run_success(&["config", "set", "api.url", "http://tickets.example.com:9000"]);
    let output = triage.run_success(&["config", "get", "api.url"]);
    assert!(output.contains("http://tickets.example.com:9000"));
}

#[test]
fn test_config_set_writes_yaml_file() {
    let triage = TriageTest::new();

    triage.run_success(&["config", "set", "request.timeout", "60"]);
    let contents = fs::read_to_string(triage.config_path()).expect("config file should exist");
    assert!(contents.contains("request_timeout: 60"));
}

#[test]
fn test_config_set_timeout_roundtrip() {
    let triage = TriageTest::new();

    triage.run_success(&["config", "set", "request.timeout", "60"]);
    let output = triage.run_success(&["config", "get", "request.timeout"]);
    assert!(output.contains("60"));
}

#[test]
fn test_config_set_invalid_url_fails() {
    let triage = TriageTest::new();

    let stderr = triage.run_failure(&["config", "set", "api.url", "not a url"]);
    assert!(stderr.contains("invalid value"), "got: {stderr}");
}

#[test]
fn test_config_set_non_numeric_timeout_fails() {
    let triage = TriageTest::new();

    let stderr = triage.run_failure(&["config", "set", "request.timeout", "soon"]);
    assert!(stderr.contains("Expected a number of seconds"), "got: {stderr}");
}

#[test]
fn test_config_set_unknown_key_lists_valid_keys() {
    let triage = TriageTest::new();

    let stderr = triage.run_failure(&["config", "set", "api.token", "abc"]);
    assert!(stderr.contains("unknown config key"), "got: {stderr}");
    assert!(stderr.contains("api.url, request.timeout"), "got: {stderr}");
}

#[test]
fn test_config_underscore_key_suggests_dot_notation() {
    let triage = TriageTest::new();

    let stderr = triage.run_failure(&["config", "set", "api_url", "http://x.example.com"]);
    assert!(stderr.contains("Use dot notation: 'api.url'"), "got: {stderr}");
}

#[test]
fn test_config_show_json() {
    let triage = TriageTest::new();

    let output = triage.run_success(&["config", "show", "--json"]);
    let parsed: serde_json::Value =
        serde_json::from_str(&output).expect("config show --json should print valid JSON");
    assert_eq!(
        parsed["api"]["url"],
        serde_json::json!("http://localhost:8000")
    );
    assert_eq!(parsed["request"]["timeout"], serde_json::json!(30));
}

#[test]
fn test_config_get_unknown_key_fails() {
    let triage = TriageTest::new();

    let stderr = triage.run_failure(&["config", "get", "api.token"]);
    assert!(stderr.contains("unknown config key"), "got: {stderr}");
}
