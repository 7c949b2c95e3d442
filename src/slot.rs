//! Slots: fixed target regions, each expecting one answer.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::choice::{Choice, ChoiceId};
use crate::error::{DragnetError, Result};
use crate::geom::Rect;

/// Position of a slot in creation (document) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub usize);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A drop target bound to an expected value.
#[derive(Debug, Clone)]
pub struct Slot {
    id: SlotId,
    region: Rect,
    expected: String,
    placeholder: String,
    bound: Option<ChoiceId>,
    bound_value: Option<String>,
}

impl Slot {
    /// Create an empty slot. `region` is the anchor element's client rect at
    /// construction time and never changes afterwards.
    #[must_use]
    pub fn new(id: SlotId, expected: impl Into<String>, region: Rect) -> Self {
        Self {
            id,
            region,
            expected: expected.into(),
            placeholder: String::new(),
            bound: None,
            bound_value: None,
        }
    }

    /// Text shown in the slot until it is filled.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> SlotId {
        self.id
    }

    #[must_use]
    pub fn region(&self) -> Rect {
        self.region
    }

    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Current slot text; empty once filled.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Id of the choice dropped here, if any.
    #[must_use]
    pub fn choice(&self) -> Option<ChoiceId> {
        self.bound
    }

    /// Value of the choice dropped here, if any.
    #[must_use]
    pub fn filled_value(&self) -> Option<&str> {
        self.bound_value.as_deref()
    }

    #[must_use]
    pub fn has_choice(&self) -> bool {
        self.bound.is_some()
    }

    /// Whether a choice occupying `bounds` touches or overlaps this slot.
    #[must_use]
    pub fn overlaps(&self, bounds: &Rect) -> bool {
        self.region.intersects(bounds)
    }

    /// Bind `choice` to this slot permanently: clears the placeholder and
    /// locks the choice.
    ///
    /// # Errors
    ///
    /// [`DragnetError::DoubleFillAttempt`] if the slot already holds a choice,
    /// [`DragnetError::ChoiceAlreadyPlaced`] if the choice sits in another
    /// slot. Nothing is modified on error.
    pub fn fill(&mut self, choice: &mut Choice) -> Result<()> {
        if self.bound.is_some() {
            return Err(DragnetError::DoubleFillAttempt { slot: self.id });
        }
        if choice.is_placed() {
            return Err(DragnetError::ChoiceAlreadyPlaced { choice: choice.id() });
        }
        self.placeholder.clear();
        self.bound = Some(choice.id());
        self.bound_value = Some(choice.value().to_string());
        choice.mark_placed();
        Ok(())
    }

    /// Whether the bound choice carries exactly the expected value.
    ///
    /// # Errors
    ///
    /// [`DragnetError::EvaluateBeforeFill`] if the slot is empty.
    pub fn is_correct(&self) -> Result<bool> {
        self.bound_value
            .as_deref()
            .map(|value| value == self.expected)
            .ok_or(DragnetError::EvaluateBeforeFill { slot: self.id })
    }
}
