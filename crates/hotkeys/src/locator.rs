//! Step locator.
//!
//! Finds the step sequence and the active step of a document. The result is
//! a snapshot: it is recomputed on every keypress because the document can
//! change between events.

use crate::document::{ACTIVE_CLASS, Document, STEP_CLASS};

/// The steps of a document and the index of the active one.
#[derive(Debug, Clone, PartialEq)]
pub struct StepPosition<E> {
    /// Step elements in document order.
    pub steps: Vec<E>,
    /// Index of the active step, or `None` when no step is active.
    pub current: Option<usize>,
}

impl<E: Clone + PartialEq> StepPosition<E> {
    /// Locate the steps and the first active step of `doc`.
    pub fn locate<D>(doc: &D) -> Self
    where
        D: Document<Element = E>,
    {
        let steps = doc.query_all_by_class(STEP_CLASS);
        let current = steps.iter().position(|step| doc.has_class(step, ACTIVE_CLASS));
        Self { steps, current }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the document has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the last step, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    /// The step at `index`, if it exists.
    pub fn step(&self, index: usize) -> Option<E> {
        self.steps.get(index).cloned()
    }

    pub fn first(&self) -> Option<E> {
        self.steps.first().cloned()
    }

    pub fn last(&self) -> Option<E> {
        self.steps.last().cloned()
    }
}
