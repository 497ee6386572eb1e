//! Hotkey binding validation.
//!
//! Responsibilities:
//! - Detect keys that can never fire because a higher-priority category claims them.
//! - Reject bindings that can never match (empty keys, negative step indexes).
//!
//! Does NOT handle:
//! - Runtime key event matching (see hotkeys crate).
//! - Deciding which binding wins (priority order is fixed; this module only reports it).

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::types::{HotkeyConfig, KeyId, NavAction};

/// Errors reported by strict binding validation.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    /// A binding uses an empty key identifier
    #[error("Empty key identifier in {category}")]
    EmptyKey {
        /// Category holding the empty key
        category: BindingCategory,
    },

    /// A step binding points before the first step
    #[error("Step hotkey '{key}' maps to negative index {index}")]
    NegativeStepIndex {
        /// The bound key
        key: String,
        /// The configured index
        index: i64,
    },

    /// A custom binding has no marker value to look up
    #[error("Custom hotkey '{key}' has an empty marker value")]
    EmptyMarker {
        /// The bound key
        key: String,
    },
}

/// The category a binding belongs to, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum BindingCategory {
    /// A `navigation` action
    Navigation(NavAction),
    /// A `sections` entry, by section name
    Section(String),
    /// A `steps` entry
    Step,
    /// A `custom` entry
    Custom,
}

impl fmt::Display for BindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigation(action) => write!(f, "navigation.{}", action),
            Self::Section(name) => write!(f, "sections.{}", name),
            Self::Step => write!(f, "steps"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// A binding that never fires because an earlier binding claims the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedBinding {
    /// The contested key
    pub key: KeyId,
    /// The binding that handles the key
    pub winner: BindingCategory,
    /// The binding that is never consulted for this key
    pub shadowed: BindingCategory,
}

impl fmt::Display for ShadowedBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key '{}' in {} is shadowed by {}",
            self.key, self.shadowed, self.winner
        )
    }
}

/// All bindings in the order the resolver evaluates them.
fn bindings_in_priority_order(config: &HotkeyConfig) -> Vec<(KeyId, BindingCategory)> {
    let mut bindings = Vec::new();
    for action in NavAction::ALL {
        for key in config.navigation.keys(action) {
            bindings.push((key.clone(), BindingCategory::Navigation(action)));
        }
    }
    for (section, key) in &config.sections {
        bindings.push((key.clone(), BindingCategory::Section(section.clone())));
    }
    for key in config.steps.keys() {
        bindings.push((key.clone(), BindingCategory::Step));
    }
    for key in config.custom.keys() {
        bindings.push((key.clone(), BindingCategory::Custom));
    }
    bindings
}

/// Find every binding that is shadowed by a higher-priority binding of the same key.
///
/// A key listed twice under the same navigation action is not reported.
///
/// # Examples
///
/// ```
/// use scrolly_config::HotkeyConfig;
/// use scrolly_config::keybind::find_shadowed;
///
/// let mut config = HotkeyConfig::fallback();
/// config.custom.insert("ArrowDown".into(), "chart".to_string());
///
/// let shadowed = find_shadowed(&config);
/// assert_eq!(shadowed.len(), 1);
/// assert_eq!(shadowed[0].key.as_str(), "ArrowDown");
/// ```
pub fn find_shadowed(config: &HotkeyConfig) -> Vec<ShadowedBinding> {
    let mut winners: HashMap<KeyId, BindingCategory> = HashMap::new();
    let mut shadowed = Vec::new();

    for (key, category) in bindings_in_priority_order(config) {
        match winners.get(&key) {
            Some(winner) if *winner == category => {}
            Some(winner) => shadowed.push(ShadowedBinding {
                key,
                winner: winner.clone(),
                shadowed: category,
            }),
            None => {
                winners.insert(key, category);
            }
        }
    }

    shadowed
}

/// Validate that every binding can match something.
///
/// Shadowed bindings are not errors; use [`find_shadowed`] to report them.
pub fn validate(config: &HotkeyConfig) -> Result<(), KeybindError> {
    for (key, category) in bindings_in_priority_order(config) {
        if key.is_empty() {
            return Err(KeybindError::EmptyKey { category });
        }
    }

    for (key, index) in &config.steps {
        if *index < 0 {
            return Err(KeybindError::NegativeStepIndex {
                key: key.to_string(),
                index: *index,
            });
        }
    }

    for (key, marker) in &config.custom {
        if marker.is_empty() {
            return Err(KeybindError::EmptyMarker {
                key: key.to_string(),
            });
        }
    }

    Ok(())
}
