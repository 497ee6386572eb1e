//! Keyboard navigation for scrolly presentations.
//!
//! This crate turns keypresses into navigation through a presentation's
//! step sequence. The document and the viewport are injected capabilities,
//! so the same logic drives a browser binding, a headless simulation or
//! tests.

pub mod controller;
pub mod document;
pub mod executor;
pub mod locator;
pub mod memory;
pub mod resolver;

pub use controller::{ControlCommand, HotkeyController, KeyOutcome, UnknownCommand};
pub use document::{Document, EnvironmentError, Viewport};
pub use locator::StepPosition;
pub use memory::{ElementId, MemoryDocument, MemoryViewport, ViewportEvent};
pub use resolver::{Binding, Intent, Resolution, resolve_key};
