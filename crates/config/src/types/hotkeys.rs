//! The hotkey configuration record.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;

use super::key::{KeyId, scalar_text};
use super::scroll::ScrollOptions;

/// A navigation action bound through the `navigation` category.
///
/// Declaration order is the evaluation order used by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Move to the next step, or the outro after the last step
    Next,
    /// Move to the previous step, or the intro before the first step
    Previous,
    /// Jump to the first step
    First,
    /// Jump to the last step
    Last,
    /// Scroll the page back to the top
    Top,
    /// Toggle fullscreen presentation
    Fullscreen,
}

impl NavAction {
    /// All actions in evaluation order.
    pub const ALL: [NavAction; 6] = [
        NavAction::Next,
        NavAction::Previous,
        NavAction::First,
        NavAction::Last,
        NavAction::Top,
        NavAction::Fullscreen,
    ];
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Previous => write!(f, "previous"),
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
            Self::Top => write!(f, "top"),
            Self::Fullscreen => write!(f, "fullscreen"),
        }
    }
}

/// Keys bound to each navigation action. Any listed key triggers the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationKeys {
    #[serde(default, deserialize_with = "key_list")]
    pub next: Vec<KeyId>,
    #[serde(default, deserialize_with = "key_list")]
    pub previous: Vec<KeyId>,
    #[serde(default, deserialize_with = "key_list")]
    pub first: Vec<KeyId>,
    #[serde(default, deserialize_with = "key_list")]
    pub last: Vec<KeyId>,
    #[serde(default, deserialize_with = "key_list")]
    pub top: Vec<KeyId>,
    #[serde(default, deserialize_with = "key_list")]
    pub fullscreen: Vec<KeyId>,
}

impl NavigationKeys {
    /// Keys bound to a single action.
    pub fn keys(&self, action: NavAction) -> &[KeyId] {
        match action {
            NavAction::Next => &self.next,
            NavAction::Previous => &self.previous,
            NavAction::First => &self.first,
            NavAction::Last => &self.last,
            NavAction::Top => &self.top,
            NavAction::Fullscreen => &self.fullscreen,
        }
    }

    /// The first action, in evaluation order, bound to `key`.
    pub fn action_for(&self, key: &str) -> Option<NavAction> {
        NavAction::ALL
            .into_iter()
            .find(|action| self.keys(*action).iter().any(|k| k == key))
    }
}

/// Hotkey configuration for a presentation.
///
/// A configuration is always replaced wholesale; values from different
/// sources are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Gates all hotkey processing. Absent means disabled.
    #[serde(default, deserialize_with = "nullable")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub navigation: NavigationKeys,
    /// Section name -> key, evaluated in mapping order.
    #[serde(default, deserialize_with = "text_keyed")]
    pub sections: IndexMap<String, KeyId>,
    /// Key -> zero-based step index.
    #[serde(default, deserialize_with = "nullable")]
    pub steps: IndexMap<KeyId, i64>,
    /// Key -> value of the `data-hotkey` marker attribute.
    #[serde(default, deserialize_with = "text_valued")]
    pub custom: IndexMap<KeyId, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollOptions>,
}

impl HotkeyConfig {
    /// The hardcoded configuration used when no source can be loaded.
    pub fn fallback() -> Self {
        let keys = |names: &[&str]| names.iter().map(|k| KeyId::from(*k)).collect::<Vec<_>>();
        Self {
            enabled: true,
            navigation: NavigationKeys {
                next: keys(&["ArrowDown", "ArrowRight"]),
                previous: keys(&["ArrowUp", "ArrowLeft"]),
                first: keys(&["Home"]),
                last: keys(&["End"]),
                top: keys(&["0"]),
                fullscreen: keys(&["f"]),
            },
            sections: IndexMap::new(),
            steps: IndexMap::new(),
            custom: IndexMap::new(),
            scroll: Some(ScrollOptions::default()),
        }
    }

    /// Parse a configuration from YAML text.
    ///
    /// An empty document parses to a disabled, empty configuration.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Option<Self>>(text).map(Option::unwrap_or_default)
    }

    /// Serialize the configuration to YAML text.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Scroll options with `smooth`/`center` applied when none are configured.
    pub fn scroll_options(&self) -> ScrollOptions {
        self.scroll.unwrap_or_default()
    }

    /// The first section, in mapping order, bound to `key`.
    pub fn section_for(&self, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(_, hotkey)| *hotkey == key)
            .map(|(section, _)| section.as_str())
    }

    /// The step index bound to `key`, if `key` is defined in `steps`.
    pub fn step_for(&self, key: &str) -> Option<i64> {
        self.steps.get(key).copied()
    }

    /// The marker value bound to `key`, if `key` is defined in `custom`.
    pub fn custom_for(&self, key: &str) -> Option<&str> {
        self.custom.get(key).map(String::as_str)
    }
}

/// A YAML scalar kept in its textual form, usable as a map key.
#[derive(PartialEq, Eq, Hash)]
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        scalar_text(deserializer).map(Text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(KeyId),
    Many(Vec<KeyId>),
}

/// `null` (an empty YAML value) deserializes to the type's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn key_list<'de, D>(deserializer: D) -> Result<Vec<KeyId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(key)) => vec![key],
        Some(OneOrMany::Many(keys)) => keys,
    })
}

fn text_keyed<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let map: Option<IndexMap<Text, V>> = Option::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(Text(k), v)| (k, v))
        .collect())
}

fn text_valued<'de, D, K>(deserializer: D) -> Result<IndexMap<K, String>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de> + Eq + Hash,
{
    let map: Option<IndexMap<K, Text>> = Option::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(k, Text(v))| (k, v))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScrollBehavior, ScrollBlock};

    const FULL: &str = r#"
enabled: true
navigation:
  next: [ArrowDown, j]
  previous: [ArrowUp, k]
  first: [Home]
  last: [End]
  top: ['0']
  fullscreen: [f]
sections:
  outro: o
  intro: i
steps:
  1: 0
  2: 1
custom:
  c: chart
  x: 42
scroll:
  behavior: instant
  block: start
"#;

    #[test]
    fn test_parse_full_config() {
        let config = HotkeyConfig::from_yaml_str(FULL).unwrap();
        assert!(config.enabled);
        assert_eq!(config.navigation.next, vec![KeyId::from("ArrowDown"), KeyId::from("j")]);
        assert_eq!(config.step_for("1"), Some(0));
        assert_eq!(config.step_for("2"), Some(1));
        assert_eq!(config.custom_for("c"), Some("chart"));
        assert_eq!(config.custom_for("x"), Some("42"));
        assert_eq!(config.scroll_options().behavior, ScrollBehavior::Instant);
        assert_eq!(config.scroll_options().block, ScrollBlock::Start);
    }

    #[test]
    fn test_sections_keep_document_order() {
        let config = HotkeyConfig::from_yaml_str(FULL).unwrap();
        let names: Vec<&str> = config.sections.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["outro", "intro"]);
    }

    #[test]
    fn test_first_section_wins_for_duplicate_key() {
        let config = HotkeyConfig::from_yaml_str(
            "enabled: true\nsections:\n  charts: c\n  credits: c\n",
        )
        .unwrap();
        assert_eq!(config.section_for("c"), Some("charts"));
    }

    #[test]
    fn test_missing_enabled_means_disabled() {
        let config = HotkeyConfig::from_yaml_str("navigation:\n  next: [n]\n").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.navigation.action_for("n"), Some(NavAction::Next));
    }

    #[test]
    fn test_absent_categories_are_empty_not_fallback() {
        let config = HotkeyConfig::from_yaml_str("enabled: true").unwrap();
        assert!(config.navigation.next.is_empty());
        assert!(config.sections.is_empty());
        assert!(config.scroll.is_none());
        assert_eq!(config.scroll_options(), ScrollOptions::default());
    }

    #[test]
    fn test_null_categories_are_empty() {
        let config =
            HotkeyConfig::from_yaml_str("enabled: true\nsections:\nsteps:\ncustom:\nnavigation:\n")
                .unwrap();
        assert!(config.sections.is_empty());
        assert!(config.steps.is_empty());
        assert!(config.custom.is_empty());
        assert_eq!(config.navigation, NavigationKeys::default());
    }

    #[test]
    fn test_single_key_instead_of_list() {
        let config = HotkeyConfig::from_yaml_str("navigation:\n  next: n\n").unwrap();
        assert_eq!(config.navigation.next, vec![KeyId::from("n")]);
    }

    #[test]
    fn test_empty_document_is_disabled() {
        let config = HotkeyConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(config, HotkeyConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(HotkeyConfig::from_yaml_str("navigation: [unclosed").is_err());
        assert!(HotkeyConfig::from_yaml_str("enabled: maybe").is_err());
    }

    #[test]
    fn test_fallback_bindings() {
        let config = HotkeyConfig::fallback();
        assert!(config.enabled);
        assert_eq!(config.navigation.action_for("ArrowDown"), Some(NavAction::Next));
        assert_eq!(config.navigation.action_for("ArrowRight"), Some(NavAction::Next));
        assert_eq!(config.navigation.action_for("ArrowUp"), Some(NavAction::Previous));
        assert_eq!(config.navigation.action_for("ArrowLeft"), Some(NavAction::Previous));
        assert_eq!(config.navigation.action_for("Home"), Some(NavAction::First));
        assert_eq!(config.navigation.action_for("End"), Some(NavAction::Last));
        assert_eq!(config.navigation.action_for("0"), Some(NavAction::Top));
        assert_eq!(config.navigation.action_for("f"), Some(NavAction::Fullscreen));
        assert_eq!(config.navigation.action_for("q"), None);
        assert!(config.sections.is_empty());
        assert!(config.steps.is_empty());
        assert!(config.custom.is_empty());
        assert_eq!(config.scroll, Some(ScrollOptions::default()));
    }

    #[test]
    fn test_action_for_uses_evaluation_order() {
        let mut nav = NavigationKeys::default();
        nav.last.push(KeyId::from("x"));
        nav.next.push(KeyId::from("x"));
        assert_eq!(nav.action_for("x"), Some(NavAction::Next));
    }

    #[test]
    fn test_yaml_round_trip_preserves_fallback() {
        let yaml = HotkeyConfig::fallback().to_yaml_string().unwrap();
        let parsed = HotkeyConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, HotkeyConfig::fallback());
    }

    #[test]
    fn test_bundled_default_matches_fallback() {
        let bundled =
            HotkeyConfig::from_yaml_str(crate::constants::BUNDLED_DEFAULT_YAML).unwrap();
        assert_eq!(bundled, HotkeyConfig::fallback());
    }

    #[test]
    fn test_nav_action_display() {
        let names: Vec<String> = NavAction::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            names,
            vec!["next", "previous", "first", "last", "top", "fullscreen"]
        );
    }
}
