//! Hotkey configuration for scrolly presentations.
//!
//! This crate provides the hotkey configuration model, the hardcoded
//! fallback configuration, binding validation, and a layered loader that
//! tries configuration sources in priority order.

pub mod constants;
pub mod keybind;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ConfigOrigin, ConfigSource, FileConfigSource, LoadedConfig,
    StaticConfigSource, parse_source_text,
};
pub use types::{
    HotkeyConfig, KeyId, NavAction, NavigationKeys, ScrollBehavior, ScrollBlock, ScrollOptions,
};
