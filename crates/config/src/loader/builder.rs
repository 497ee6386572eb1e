//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Hold an ordered list of configuration sources and a fallback value.
//! - Try each source once and return the first success with its origin.
//! - Report shadowed bindings of the winning configuration.
//!
//! Does NOT handle:
//! - Source-specific retrieval (delegated to `ConfigSource` implementations).
//!
//! Invariants / Assumptions:
//! - Sources added first have the highest priority.
//! - The first source failing is expected (sites rarely override); it is logged at info.
//! - Later failures are logged at warn.

use std::fmt;

use tracing::{debug, info, warn};

use super::source::ConfigSource;
use crate::keybind::find_shadowed;
use crate::types::HotkeyConfig;

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// A named source returned the configuration.
    Source(String),
    /// Every source failed; the fallback value was used.
    Fallback,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(name) => write!(f, "{}", name),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A configuration together with the source that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: HotkeyConfig,
    pub origin: ConfigOrigin,
}

/// Loads a hotkey configuration from ranked sources.
///
/// # Example
///
/// ```rust,ignore
/// use scrolly_config::{ConfigLoader, FileConfigSource};
///
/// let loaded = ConfigLoader::new()
///     .with_source(FileConfigSource::new("site/hotkeys.yaml").with_name("site"))
///     .with_source(FileConfigSource::new("lib/hotkeys.default.yaml").with_name("default"))
///     .load()
///     .await;
/// ```
pub struct ConfigLoader {
    sources: Vec<Box<dyn ConfigSource>>,
    fallback: HotkeyConfig,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("sources", &self.source_names())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl ConfigLoader {
    /// Create a loader with no sources and the hardcoded fallback.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            fallback: HotkeyConfig::fallback(),
        }
    }

    /// Append a source with lower priority than those already added.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Append an already boxed source.
    pub fn with_boxed_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Replace the value used when every source fails.
    pub fn with_fallback(mut self, fallback: HotkeyConfig) -> Self {
        self.fallback = fallback;
        self
    }

    /// Source names in priority order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Load the first configuration any source provides.
    ///
    /// Never fails: when every source fails the fallback is returned.
    pub async fn load(&self) -> LoadedConfig {
        for (rank, source) in self.sources.iter().enumerate() {
            match source.load().await {
                Ok(config) => {
                    info!(source = source.name(), "Loaded hotkey configuration");
                    report_shadowed(&config);
                    return LoadedConfig {
                        config,
                        origin: ConfigOrigin::Source(source.name().to_string()),
                    };
                }
                Err(e) if rank == 0 => {
                    info!(
                        source = source.name(),
                        kind = e.kind(),
                        error = %e,
                        "Hotkey configuration source unavailable, trying next"
                    );
                }
                Err(e) => {
                    warn!(
                        source = source.name(),
                        kind = e.kind(),
                        error = %e,
                        "Hotkey configuration source failed"
                    );
                }
            }
        }

        warn!("Could not load hotkey configuration, using hardcoded defaults");
        LoadedConfig {
            config: self.fallback.clone(),
            origin: ConfigOrigin::Fallback,
        }
    }
}

fn report_shadowed(config: &HotkeyConfig) {
    let shadowed = find_shadowed(config);
    if shadowed.is_empty() {
        debug!("No shadowed hotkey bindings");
    }
    for binding in shadowed {
        warn!(key = %binding.key, "Hotkey binding never fires: {}", binding);
    }
}
