//! Drag-and-drop labeling engine for exercises embedded in a vector graphic.
//!
//! Labels pulled out of placeholder markup become draggable choices that the
//! user drops onto blank slots. Once every slot holds a choice the exercise is
//! scored as a whole. This crate owns the state of that exercise: slot and
//! choice bookkeeping, overlap detection, the pointer gesture state machine,
//! and scoring. The host page is responsible only for wiring DOM events to the
//! [`engine::Coordinator`] and applying the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::Coordinator`] state machine and host actions |
//! | [`slot`] | Fixed target regions bound to an expected value |
//! | [`choice`] | Draggable labels and their drag anchors |
//! | [`input`] | Pointer buttons and the gesture state |
//! | [`geom`] | Points, rectangles, and the geometry provider seam |
//! | [`markup`] | Scanning `{answer}` placeholder text |
//! | [`config`] | Widget configuration from JSON or data attributes |
//! | [`error`] | Error type shared by the crate |
//! | [`consts`] | Default layout values and markup names |
//! | `dom` | Browser geometry provider (`web` feature) |

pub mod choice;
pub mod config;
pub mod consts;
#[cfg(feature = "web")]
pub mod dom;
pub mod engine;
pub mod error;
pub mod geom;
pub mod input;
pub mod markup;
pub mod slot;

pub use error::{DragnetError, Result};
