//! Shared test utilities for scrolly integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: `SCROLLY_*` variables from the host are cleared.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `scrolly` command for integration testing.
pub fn scrolly_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("scrolly");
    cmd.env_remove("SCROLLY_SITE_DIR")
        .env_remove("SCROLLY_LIB_DIR")
        .env_remove("SCROLLY_PORT")
        .env_remove("SCROLLY_BASE_URL")
        .env_remove("SCROLLY_METRICS_BIND")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to `hotkeys.yaml` in a fresh temporary directory.
pub fn hotkeys_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("hotkeys.yaml");
    std::fs::write(&path, contents).expect("write hotkeys.yaml");
    (dir, path)
}

pub const SITE_YAML: &str = r#"
enabled: true
navigation:
  next: [j, ArrowDown]
  previous: [k]
  first: Home
  last: End
  top: ["0"]
  fullscreen: [f]
sections:
  intro: i
  outro: o
steps:
  1: 0
  2: 1
custom:
  c: chart
scroll:
  behavior: instant
  block: start
"#;
