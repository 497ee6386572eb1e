//! Key resolver.
//!
//! Responsibilities:
//! - Decide which hotkey category, if any, claims a keypress.
//! - Compute the navigation intent for the claimed binding.
//!
//! Does NOT handle:
//! - Performing the navigation (see `executor`).
//! - Gating on listener state (see `controller`).
//!
//! Invariants:
//! - Categories are evaluated in the order navigation (next, previous, first,
//!   last, top, fullscreen), sections, steps, custom. The first category that
//!   matches claims the key and later categories are never evaluated.
//! - A claimed key may still produce `Intent::None` when its target is missing.
//! - A disabled configuration claims nothing.

use scrolly_config::{HotkeyConfig, NavAction};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::document::{Document, INTRO_SECTION, MARKER_ATTRIBUTE, OUTRO_SECTION, section_class};
use crate::locator::StepPosition;

/// The configured binding that claimed a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", content = "value", rename_all = "snake_case")]
pub enum Binding {
    Navigation(NavAction),
    /// Bound through `sections`; carries the section name.
    Section(String),
    /// Bound through `steps`; carries the configured index.
    Step(i64),
    /// Bound through `custom`; carries the marker value.
    Custom(String),
}

impl Binding {
    /// Low-cardinality label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Navigation(NavAction::Next) => "next",
            Self::Navigation(NavAction::Previous) => "previous",
            Self::Navigation(NavAction::First) => "first",
            Self::Navigation(NavAction::Last) => "last",
            Self::Navigation(NavAction::Top) => "top",
            Self::Navigation(NavAction::Fullscreen) => "fullscreen",
            Self::Section(_) => "section",
            Self::Step(_) => "step",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigation(action) => write!(f, "navigation.{}", action),
            Self::Section(name) => write!(f, "sections.{}", name),
            Self::Step(index) => write!(f, "steps[{}]", index),
            Self::Custom(value) => write!(f, "custom.{}", value),
        }
    }
}

/// What a claimed key asks the viewport to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent<E> {
    /// Nothing to do (missing target).
    None,
    /// Scroll an element into view.
    ScrollTo(E),
    /// Scroll the page to its top.
    ScrollToTop,
    /// Enter or leave fullscreen.
    ToggleFullscreen,
}

impl<E> Intent<E> {
    fn target(element: Option<E>) -> Self {
        element.map_or(Self::None, Self::ScrollTo)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Outcome of resolving one keypress.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<E> {
    /// The binding that claimed the key, or `None` if no category matched.
    pub binding: Option<Binding>,
    pub intent: Intent<E>,
}

impl<E> Resolution<E> {
    /// A key no category matched.
    pub fn unclaimed() -> Self {
        Self {
            binding: None,
            intent: Intent::None,
        }
    }

    fn claimed_by(binding: Binding, intent: Intent<E>) -> Self {
        Self {
            binding: Some(binding),
            intent,
        }
    }

    /// Whether the key was claimed. A claimed key suppresses the host's
    /// default handling even when the intent is `Intent::None`.
    pub fn claimed(&self) -> bool {
        self.binding.is_some()
    }
}

/// Resolve `key` against `config` for the document state in `position`.
pub fn resolve_key<D>(
    key: &str,
    config: &HotkeyConfig,
    position: &StepPosition<D::Element>,
    doc: &D,
) -> Resolution<D::Element>
where
    D: Document,
{
    if !config.enabled {
        return Resolution::unclaimed();
    }

    let resolution = resolve_enabled(key, config, position, doc);
    debug!(
        key = %key,
        binding = ?resolution.binding,
        current = ?position.current,
        steps = position.len(),
        has_target = !resolution.intent.is_none(),
        "Resolved hotkey"
    );
    resolution
}

fn resolve_enabled<D: Document>(
    key: &str,
    config: &HotkeyConfig,
    position: &StepPosition<D::Element>,
    doc: &D,
) -> Resolution<D::Element> {
    if let Some(action) = config.navigation.action_for(key) {
        let intent = navigation_intent(action, position, doc);
        return Resolution::claimed_by(Binding::Navigation(action), intent);
    }

    if let Some(section) = config.section_for(key) {
        let target = doc.query_by_class(&section_class(section));
        return Resolution::claimed_by(
            Binding::Section(section.to_string()),
            Intent::target(target),
        );
    }

    if let Some(index) = config.step_for(key) {
        let target = usize::try_from(index).ok().and_then(|i| position.step(i));
        return Resolution::claimed_by(Binding::Step(index), Intent::target(target));
    }

    // An empty marker value is treated as unbound.
    if let Some(value) = config.custom_for(key).filter(|v| !v.is_empty()) {
        let target = doc.query_by_attribute(MARKER_ATTRIBUTE, value);
        return Resolution::claimed_by(Binding::Custom(value.to_string()), Intent::target(target));
    }

    Resolution::unclaimed()
}

fn navigation_intent<D: Document>(
    action: NavAction,
    position: &StepPosition<D::Element>,
    doc: &D,
) -> Intent<D::Element> {
    match action {
        NavAction::Next => match (position.current, position.last_index()) {
            (Some(current), Some(last)) if current < last => {
                Intent::target(position.step(current + 1))
            }
            (Some(_), Some(_)) => {
                Intent::target(doc.query_by_class(&section_class(OUTRO_SECTION)))
            }
            // No active step: left as a no-op.
            _ => Intent::None,
        },
        NavAction::Previous => match position.current {
            Some(0) => Intent::target(doc.query_by_class(&section_class(INTRO_SECTION))),
            Some(current) => Intent::target(position.step(current - 1)),
            None => Intent::target(position.first()),
        },
        NavAction::First => Intent::target(position.first()),
        NavAction::Last => Intent::target(position.last()),
        NavAction::Top => Intent::ScrollToTop,
        NavAction::Fullscreen => Intent::ToggleFullscreen,
    }
}
