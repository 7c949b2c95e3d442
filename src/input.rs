//! Input model: pointer buttons, drag tracking modes, and the gesture state.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! A single pointer drives the whole widget, so at most one gesture is ever
//! in flight.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::choice::ChoiceId;
use crate::consts::ANCHOR_OFFSET_X;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// How a dragged choice follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DragTracking {
    /// Move by the pointer delta since the previous event; the grab point
    /// stays under the cursor.
    #[default]
    Relative,
    /// Place the choice's anchor at a fixed offset up-left of the cursor.
    Anchored {
        /// Horizontal distance from the anchor to the cursor.
        offset_x: f64,
        /// Vertical distance from the anchor to the cursor.
        offset_y: f64,
    },
}

impl DragTracking {
    /// Anchored tracking with the default cursor offset.
    #[must_use]
    pub fn anchored() -> Self {
        Self::Anchored { offset_x: ANCHOR_OFFSET_X, offset_y: 0.0 }
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A choice is following the pointer.
    Dragging {
        /// Id of the choice being dragged.
        id: ChoiceId,
    },
}

impl InputState {
    /// The choice being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<ChoiceId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id } => Some(*id),
        }
    }
}
