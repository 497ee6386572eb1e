//! Configuration type definitions for scrolly hotkeys.
//!
//! Responsibilities:
//! - Define the hotkey configuration record and its categories.
//! - Define key identifiers and scroll options with their defaults.
//! - Provide the hardcoded fallback configuration.
//!
//! Does NOT handle:
//! - Loading configuration from sources (see `loader` module).
//! - Detecting conflicting bindings (see `keybind` module at crate root).
//! - Resolving keypresses into navigation targets (see hotkeys crate).
//!
//! Invariants:
//! - Absent fields deserialize to empty categories, never to fallback values.
//! - `sections` preserves the mapping order of the source document.
//! - Key identifiers are compared exactly (case-sensitive).

mod hotkeys;
mod key;
mod scroll;

pub use hotkeys::{HotkeyConfig, NavAction, NavigationKeys};
pub use key::KeyId;
pub use scroll::{ScrollBehavior, ScrollBlock, ScrollOptions};
