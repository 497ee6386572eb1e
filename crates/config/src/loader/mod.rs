//! Layered configuration loader.
//!
//! Responsibilities:
//! - Define the `ConfigSource` provider trait and its file and static providers.
//! - Try sources in priority order and return the first successful configuration.
//! - Fall back to a fixed configuration when every source fails.
//!
//! Does NOT handle:
//! - HTTP retrieval of configuration (see client crate).
//! - Applying a loaded configuration to keypresses (see hotkeys crate).
//!
//! Invariants / Assumptions:
//! - Each source is tried at most once per load; there are no retries.
//! - Exactly one source wins per load; values are never merged across sources.
//! - Loading never fails; source failures are logged, not returned.

mod builder;
mod error;
mod source;

pub use builder::{ConfigLoader, ConfigOrigin, LoadedConfig};
pub use error::ConfigError;
pub use source::{ConfigSource, FileConfigSource, StaticConfigSource, parse_source_text};
