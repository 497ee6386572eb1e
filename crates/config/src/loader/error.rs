//! Error types for configuration sources.
//!
//! Responsibilities:
//! - Define error variants for every way a configuration source can fail.
//!
//! Does NOT handle:
//! - Recovering from failures (the loader falls through to the next source).
//!
//! Invariants:
//! - Every variant names the source that failed.
//! - Unavailability and parse failures are distinct variants but handled identically.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration from a single source.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{source_name} configuration unavailable: HTTP {status}")]
    Unavailable { source_name: String, status: u16 },

    #[error("Failed to fetch {source_name} configuration: {message}")]
    Fetch {
        source_name: String,
        message: String,
    },

    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {source_name} configuration")]
    Parse {
        source_name: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Returns true if the source could not be reached or returned a non-OK status.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable { .. } | Self::Fetch { .. } | Self::Read { .. }
        )
    }

    /// A short label for metrics and structured logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "unavailable",
            Self::Fetch { .. } => "fetch",
            Self::Read { .. } => "read",
            Self::Parse { .. } => "parse",
        }
    }
}
