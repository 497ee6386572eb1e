//! Integration tests for `scrolly check`.

mod common;

use common::{SITE_YAML, hotkeys_file, scrolly_cmd};
use predicates::prelude::*;

/// `j` is bound in `navigation.next` and again in `custom`.
const SHADOWED_YAML: &str = "enabled: true\nnavigation:\n  next: [j]\ncustom:\n  j: chart\n";

#[test]
fn test_check_valid_file() {
    let (_dir, path) = hotkeys_file(SITE_YAML);
    scrolly_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            ": ok (enabled, 7 navigation keys, 2 sections, 2 steps, 1 custom)",
        ));
}

#[test]
fn test_check_reports_shadowed_bindings() {
    let (_dir, path) = hotkeys_file(SHADOWED_YAML);
    scrolly_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: key 'j' in custom is shadowed by navigation.next",
        ));
}

#[test]
fn test_check_deny_shadowed_fails() {
    let (_dir, path) = hotkeys_file(SHADOWED_YAML);
    scrolly_cmd()
        .args(["check", "--deny-shadowed"])
        .arg(&path)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("1 shadowed hotkey binding(s)"));
}

#[test]
fn test_check_parse_error_is_validation_error() {
    let (_dir, path) = hotkeys_file("navigation: [oops");
    scrolly_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid hotkey configuration"));
}

#[test]
fn test_check_negative_step_is_validation_error() {
    let (_dir, path) = hotkeys_file("enabled: true\nsteps:\n  m: -1\n");
    scrolly_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("negative index -1"));
}

#[test]
fn test_check_missing_file_is_not_found() {
    scrolly_cmd()
        .args(["check", "does-not-exist/hotkeys.yaml"])
        .assert()
        .code(4);
}

#[test]
fn test_check_json_output() {
    let (_dir, path) = hotkeys_file(SITE_YAML);
    let output = scrolly_cmd()
        .args(["check", "--output", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["enabled"], true);
    assert_eq!(report["sections"], 2);
    assert_eq!(report["shadowed"].as_array().unwrap().len(), 0);
}
