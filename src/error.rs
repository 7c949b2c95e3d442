//! Error type for the dragnet engine.

use crate::choice::ChoiceId;
use crate::slot::SlotId;

/// Errors raised by slot, choice, markup, and configuration operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DragnetError {
    /// Text meant to carry an embedded answer has no `{answer}` span.
    #[error("no embedded answer in markup: {text:?}")]
    MalformedAnswerMarkup { text: String },
    /// A slot that already holds a choice was asked to take another.
    #[error("slot {slot} is already filled")]
    DoubleFillAttempt { slot: SlotId },
    /// Correctness was queried on a slot with no choice.
    #[error("slot {slot} has no choice to evaluate")]
    EvaluateBeforeFill { slot: SlotId },
    /// A choice that is already placed was offered to a slot.
    #[error("choice {choice} is already placed")]
    ChoiceAlreadyPlaced { choice: ChoiceId },
    /// No choice with this id exists.
    #[error("unknown choice: {0}")]
    UnknownChoice(ChoiceId),
    /// The answer pattern does not compile or lacks a capture group.
    #[error("invalid answer pattern: {0}")]
    InvalidAnswerPattern(String),
    /// A configuration value could not be interpreted.
    #[error("config parse error: {0}")]
    ConfigParse(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DragnetError>;
