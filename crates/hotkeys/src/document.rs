//! Document and viewport capabilities.
//!
//! Responsibilities:
//! - Define the queries navigation needs from a document (`Document`).
//! - Define the effects navigation performs on a viewport (`Viewport`).
//! - Name the class and attribute conventions presentations follow.
//!
//! Does NOT handle:
//! - Any concrete document model (see `memory` for the in-memory one).
//!
//! Invariants:
//! - Queries return elements in document order.
//! - Queries never mutate the document.

use scrolly_config::{ScrollBehavior, ScrollOptions};
use std::fmt;
use thiserror::Error;

/// Class carried by every step element.
pub const STEP_CLASS: &str = "step";

/// Class carried by the currently active step.
pub const ACTIVE_CLASS: &str = "is-active";

/// Prefix of section classes (`scrolly-intro`, `scrolly-outro`, ...).
pub const SECTION_CLASS_PREFIX: &str = "scrolly-";

/// Section name of the region before the first step.
pub const INTRO_SECTION: &str = "intro";

/// Section name of the region after the last step.
pub const OUTRO_SECTION: &str = "outro";

/// Attribute matched against `custom` hotkey values.
pub const MARKER_ATTRIBUTE: &str = "data-hotkey";

/// The class addressing a named section.
pub fn section_class(section: &str) -> String {
    format!("{}{}", SECTION_CLASS_PREFIX, section)
}

/// Read-only queries over a presentation document.
pub trait Document {
    /// Handle to an element of this document.
    type Element: Clone + PartialEq + fmt::Debug;

    /// All elements carrying `class`, in document order.
    fn query_all_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// The first element carrying `class`.
    fn query_by_class(&self, class: &str) -> Option<Self::Element> {
        self.query_all_by_class(class).into_iter().next()
    }

    /// The first element whose attribute `name` equals `value`.
    fn query_by_attribute(&self, name: &str, value: &str) -> Option<Self::Element>;

    /// Whether `element` carries `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
}

/// Effects a navigation performs on the visible page.
pub trait Viewport<E> {
    /// Scroll `element` into view.
    fn scroll_into_view(&mut self, element: &E, options: ScrollOptions);

    /// Scroll the page to its top.
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    /// Whether the page is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Ask the host to enter fullscreen. Hosts may refuse.
    fn request_fullscreen(&mut self) -> Result<(), EnvironmentError>;

    /// Leave fullscreen.
    fn exit_fullscreen(&mut self) -> Result<(), EnvironmentError>;
}

/// Failures reported by a viewport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// The host refused to enter fullscreen (e.g. no user gesture).
    #[error("Fullscreen request rejected: {0}")]
    FullscreenRejected(String),

    /// The host does not support fullscreen.
    #[error("Fullscreen is not supported")]
    FullscreenUnsupported,
}
