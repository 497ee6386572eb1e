//! In-memory document and viewport.
//!
//! A flat element list with classes and attributes, plus a viewport that
//! records the effects applied to it. Used by the `press` command to
//! simulate a presentation and by tests.

use scrolly_config::{ScrollBehavior, ScrollBlock, ScrollOptions};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::document::{
    ACTIVE_CLASS, Document, EnvironmentError, INTRO_SECTION, OUTRO_SECTION, SECTION_CLASS_PREFIX,
    STEP_CLASS, Viewport, section_class,
};

/// Handle to an element of a `MemoryDocument`; its position in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
struct Element {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

/// A document held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// An intro section, `steps` step elements and an outro section.
    pub fn presentation(steps: usize) -> Self {
        let mut doc = Self::new();
        doc.push_section(INTRO_SECTION);
        for _ in 0..steps {
            doc.push_step();
        }
        doc.push_section(OUTRO_SECTION);
        doc
    }

    /// Append an element carrying `classes`.
    pub fn push_element(&mut self, classes: &[&str]) -> ElementId {
        self.elements.push(Element {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attributes: BTreeMap::new(),
        });
        ElementId(self.elements.len() - 1)
    }

    /// Append a step element.
    pub fn push_step(&mut self) -> ElementId {
        self.push_element(&[STEP_CLASS])
    }

    /// Append a named section element (class `scrolly-<name>`).
    pub fn push_section(&mut self, name: &str) -> ElementId {
        self.push_element(&[section_class(name).as_str()])
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(id.0)
            && !element.classes.iter().any(|c| c == class)
        {
            element.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.classes.retain(|c| c != class);
        }
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Make step `index` the only active step. Out of range clears the
    /// active step.
    pub fn activate_step(&mut self, index: usize) {
        let steps = self.steps();
        for step in &steps {
            self.remove_class(*step, ACTIVE_CLASS);
        }
        if let Some(step) = steps.get(index) {
            self.add_class(*step, ACTIVE_CLASS);
        }
    }

    /// Make `id` the only active step, as the scroll observer would after
    /// scrolling to it. Non-step elements leave the active step unchanged.
    pub fn activate(&mut self, id: ElementId) {
        if let Some(index) = self.steps().iter().position(|s| *s == id) {
            self.activate_step(index);
        }
    }

    pub fn steps(&self) -> Vec<ElementId> {
        self.query_all_by_class(STEP_CLASS)
    }

    pub fn intro(&self) -> Option<ElementId> {
        self.query_by_class(&section_class(INTRO_SECTION))
    }

    pub fn outro(&self) -> Option<ElementId> {
        self.query_by_class(&section_class(OUTRO_SECTION))
    }

    /// A short human-readable name for `id`: its attribute marker, section
    /// or step index.
    pub fn describe(&self, id: ElementId) -> String {
        let Some(element) = self.elements.get(id.0) else {
            return id.to_string();
        };
        if let Some(index) = self.steps().iter().position(|s| *s == id) {
            return format!("step {}", index);
        }
        if let Some(section) = element
            .classes
            .iter()
            .find_map(|c| c.strip_prefix(SECTION_CLASS_PREFIX))
        {
            return format!("section {}", section);
        }
        match element.attributes.iter().next() {
            Some((name, value)) => format!("[{}=\"{}\"]", name, value),
            None => id.to_string(),
        }
    }
}

impl Document for MemoryDocument {
    type Element = ElementId;

    fn query_all_by_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.classes.iter().any(|c| c == class))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn query_by_attribute(&self, name: &str, value: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element.attributes.get(name).is_some_and(|v| v == value))
            .map(ElementId)
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.elements
            .get(element.0)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }
}

/// An effect recorded by `MemoryViewport`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewportEvent<E> {
    ScrolledIntoView {
        element: E,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    },
    ScrolledToTop {
        behavior: ScrollBehavior,
    },
    EnteredFullscreen,
    ExitedFullscreen,
}

/// A viewport that records every effect instead of performing it.
#[derive(Debug, Clone)]
pub struct MemoryViewport<E = ElementId> {
    events: Vec<ViewportEvent<E>>,
    fullscreen: bool,
    allow_fullscreen: bool,
}

impl<E> Default for MemoryViewport<E> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            fullscreen: false,
            allow_fullscreen: true,
        }
    }
}

impl<E> MemoryViewport<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A viewport whose host refuses fullscreen requests.
    pub fn denying_fullscreen() -> Self {
        Self {
            allow_fullscreen: false,
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[ViewportEvent<E>] {
        &self.events
    }

    pub fn last_event(&self) -> Option<&ViewportEvent<E>> {
        self.events.last()
    }

    /// Remove and return the recorded events.
    pub fn take_events(&mut self) -> Vec<ViewportEvent<E>> {
        std::mem::take(&mut self.events)
    }
}

impl<E: Clone> Viewport<E> for MemoryViewport<E> {
    fn scroll_into_view(&mut self, element: &E, options: ScrollOptions) {
        self.events.push(ViewportEvent::ScrolledIntoView {
            element: element.clone(),
            behavior: options.behavior,
            block: options.block,
        });
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.events.push(ViewportEvent::ScrolledToTop { behavior });
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), EnvironmentError> {
        if !self.allow_fullscreen {
            return Err(EnvironmentError::FullscreenRejected(
                "permission denied".to_string(),
            ));
        }
        self.fullscreen = true;
        self.events.push(ViewportEvent::EnteredFullscreen);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), EnvironmentError> {
        self.fullscreen = false;
        self.events.push(ViewportEvent::ExitedFullscreen);
        Ok(())
    }
}
