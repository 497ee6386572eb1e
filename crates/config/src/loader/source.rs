//! Configuration source providers.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::types::HotkeyConfig;

/// A single place a hotkey configuration can be loaded from.
///
/// Implementations make exactly one attempt per call and report every
/// failure as a [`ConfigError`]; the loader decides what happens next.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Name used in logs and metrics (e.g. `site`, `default`).
    fn name(&self) -> &str;

    /// Load and parse the configuration.
    async fn load(&self) -> Result<HotkeyConfig, ConfigError>;
}

/// Parse YAML text fetched from a named source.
pub fn parse_source_text(source_name: &str, text: &str) -> Result<HotkeyConfig, ConfigError> {
    HotkeyConfig::from_yaml_str(text).map_err(|source| ConfigError::Parse {
        source_name: source_name.to_string(),
        source,
    })
}

/// Loads configuration from a YAML file on disk.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    name: String,
    path: PathBuf,
}

impl FileConfigSource {
    /// Create a file source named after the file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
        }
    }

    /// Override the name reported in logs.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<HotkeyConfig, ConfigError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ConfigError::Read {
                path: self.path.clone(),
                source,
            })?;
        parse_source_text(&self.name, &text)
    }
}

/// Returns a fixed configuration. Never fails.
#[derive(Debug, Clone)]
pub struct StaticConfigSource {
    name: String,
    config: HotkeyConfig,
}

impl StaticConfigSource {
    pub fn new(name: impl Into<String>, config: HotkeyConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

#[async_trait]
impl ConfigSource for StaticConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<HotkeyConfig, ConfigError> {
        Ok(self.config.clone())
    }
}
