//! Check command implementation.
//!
//! Parses a hotkey configuration file, rejects bindings that can never
//! match and reports bindings shadowed by a higher-priority category.

use anyhow::{Context, Result};
use scrolly_config::keybind::{find_shadowed, validate};
use scrolly_config::{ConfigSource, FileConfigSource, HotkeyConfig, NavAction};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::OutputFormat;

/// Shadowed bindings found while `--deny-shadowed` is set.
#[derive(Debug, Error)]
#[error("{count} shadowed hotkey binding(s)")]
pub struct ShadowedBindings {
    pub count: usize,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    path: String,
    enabled: bool,
    navigation_keys: usize,
    sections: usize,
    steps: usize,
    custom: usize,
    shadowed: Vec<String>,
}

impl CheckReport {
    fn new(path: &Path, config: &HotkeyConfig) -> Self {
        Self {
            path: path.display().to_string(),
            enabled: config.enabled,
            navigation_keys: NavAction::ALL
                .iter()
                .map(|action| config.navigation.keys(*action).len())
                .sum(),
            sections: config.sections.len(),
            steps: config.steps.len(),
            custom: config.custom.len(),
            shadowed: find_shadowed(config).iter().map(ToString::to_string).collect(),
        }
    }

    fn render_text(&self) -> String {
        let mut out = format!(
            "{}: ok ({}, {} navigation keys, {} sections, {} steps, {} custom)\n",
            self.path,
            if self.enabled { "enabled" } else { "disabled" },
            self.navigation_keys,
            self.sections,
            self.steps,
            self.custom,
        );
        for shadowed in &self.shadowed {
            out.push_str(&format!("warning: {}\n", shadowed));
        }
        out
    }
}

pub async fn run(file: PathBuf, deny_shadowed: bool, output: OutputFormat) -> Result<()> {
    let config = FileConfigSource::new(&file)
        .load()
        .await
        .with_context(|| format!("Invalid hotkey configuration {}", file.display()))?;
    validate(&config).with_context(|| format!("Invalid hotkey bindings in {}", file.display()))?;

    let report = CheckReport::new(&file, &config);
    match output {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if deny_shadowed && !report.shadowed.is_empty() {
        return Err(ShadowedBindings {
            count: report.shadowed.len(),
        }
        .into());
    }
    Ok(())
}
