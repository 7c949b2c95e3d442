//! Client-space geometry: points, axis-aligned rectangles, and the seam
//! through which the engine asks a renderer how large a choice is.
//!
//! Everything here is in client (CSS) pixels, the space that
//! `getBoundingClientRect` and pointer events report in. The engine never
//! converts between spaces; the host hands it client coordinates only.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::consts::{GLYPH_ADVANCE, LABEL_HEIGHT, LABEL_WIDTH};

/// A point in client space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Axis-aligned rectangle in client space.
///
/// Always normalised: `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Build a rectangle from two opposite edges on each axis, in any order.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Build a rectangle from its top-left corner and size. Negative sizes
    /// extend left/up from the origin.
    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_edges(x, y, x + width, y + height)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Closed-interval intersection test. Rectangles that only share an edge
    /// or a corner count as intersecting.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right && self.right >= other.left && self.top <= other.bottom && self.bottom >= other.top
    }

    /// Area shared by both rectangles. Zero when they are disjoint or only touch.
    #[must_use]
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.right.min(other.right) - self.left.max(other.left);
        let h = self.bottom.min(other.bottom) - self.top.max(other.top);
        if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
    }

    /// Whether `pt` lies inside or on the boundary of this rectangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x <= self.right && pt.y >= self.top && pt.y <= self.bottom
    }

    /// The same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

/// Source of choice bounding boxes.
///
/// In a browser this is the rendered element's client rect; elsewhere it is a
/// model of how labels are laid out. Slot regions are captured once when the
/// slot is created and do not go through the provider.
pub trait GeometryProvider {
    /// Bounding box of `choice` drawn at its current position.
    fn choice_bounds(&self, choice: &Choice) -> Rect;
}

/// Fixed-size label boxes.
///
/// A choice's position is its text anchor: the left end of the baseline, as
/// for an SVG `<text>` element. The box extends `height` above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelGeometry {
    pub width: f64,
    pub height: f64,
}

impl Default for LabelGeometry {
    fn default() -> Self {
        Self { width: LABEL_WIDTH, height: LABEL_HEIGHT }
    }
}

impl GeometryProvider for LabelGeometry {
    fn choice_bounds(&self, choice: &Choice) -> Rect {
        let p = choice.position();
        Rect::from_edges(p.x, p.y - self.height, p.x + self.width, p.y)
    }
}

/// Label boxes whose width grows with the number of characters in the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextGeometry {
    pub advance: f64,
    pub height: f64,
}

impl Default for TextGeometry {
    fn default() -> Self {
        Self { advance: GLYPH_ADVANCE, height: LABEL_HEIGHT }
    }
}

impl GeometryProvider for TextGeometry {
    #[allow(clippy::cast_precision_loss)]
    fn choice_bounds(&self, choice: &Choice) -> Rect {
        let p = choice.position();
        let width = choice.value().chars().count() as f64 * self.advance;
        Rect::from_edges(p.x, p.y - self.height, p.x + width, p.y)
    }
}
