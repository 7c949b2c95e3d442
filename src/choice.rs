//! Draggable choices.
//!
//! A `Choice` is a label carrying one candidate answer. It knows where it is
//! and whether a drag is in progress, but nothing about slots: deciding where
//! a released choice lands is the coordinator's job.

#[cfg(test)]
#[path = "choice_test.rs"]
mod choice_test;

use uuid::Uuid;

use crate::geom::Point;
use crate::input::DragTracking;

/// Unique identifier for a choice.
pub type ChoiceId = Uuid;

/// Pointer context captured at pointer-down and advanced on every move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Client position of the previous pointer event in this gesture.
    pub last_pointer: Point,
}

/// A draggable label.
#[derive(Debug, Clone)]
pub struct Choice {
    id: ChoiceId,
    value: String,
    origin: Point,
    position: Point,
    rest: Point,
    placed: bool,
    drag: Option<DragAnchor>,
}

impl Choice {
    /// Create an unplaced choice resting at its staging position.
    #[must_use]
    pub fn new(value: impl Into<String>, origin: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
            origin,
            position: origin,
            rest: origin,
            placed: false,
            drag: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Staging position the choice was spawned at.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Current text anchor position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag at `pointer`. Returns false, leaving the choice untouched,
    /// if it is already placed.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.placed {
            return false;
        }
        self.rest = self.position;
        self.drag = Some(DragAnchor { last_pointer: pointer });
        true
    }

    /// Follow the pointer during a drag. Returns false when no drag is active.
    ///
    /// Relative tracking applies the delta since the previous pointer event,
    /// so the grab point stays under the cursor. Anchored tracking snaps the
    /// choice to a fixed offset from the cursor.
    pub fn update_position(&mut self, pointer: Point, tracking: DragTracking) -> bool {
        let Some(anchor) = self.drag.as_mut() else {
            return false;
        };
        self.position = match tracking {
            DragTracking::Relative => {
                let dx = pointer.x - anchor.last_pointer.x;
                let dy = pointer.y - anchor.last_pointer.y;
                self.position.translate(dx, dy)
            }
            DragTracking::Anchored { offset_x, offset_y } => pointer.translate(-offset_x, -offset_y),
        };
        anchor.last_pointer = pointer;
        true
    }

    /// Finish the gesture. Returns whether a drag was actually released.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Put the choice back where the last drag started, or at its origin if
    /// it has never been dragged. Also ends any drag in progress.
    pub fn reset_position(&mut self) {
        self.position = self.rest;
        self.drag = None;
    }

    /// Lock the choice in place. Idempotent.
    pub fn mark_placed(&mut self) {
        self.placed = true;
        self.drag = None;
    }
}
