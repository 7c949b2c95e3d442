//! Embedded-answer markup.
//!
//! Exercise authors write the answer straight into a label, e.g.
//! `"The {capital} of France is Paris"`. Scanning lifts `capital` out as the
//! expected value and the whole label is replaced by the placeholder, so the
//! slot reads `"--"` until a choice is dropped on it. The rewritten element
//! is the drop target, so hosts measure it after writing the placeholder.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use regex::Regex;

use crate::error::{DragnetError, Result};

/// First `{...}` span with no nested braces; group 1 is the answer.
///
/// Deliberately not the greedy `\{(.+)\}`: `"{a} and {b}"`
/// yields `a` rather than `a} and {b`.
pub const DEFAULT_ANSWER_PATTERN: &str = r"\{([^{}]+)\}";

/// A label whose answer was extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerMarkup {
    /// The captured answer, used as the slot's expected value.
    pub answer: String,
    /// Text the label element shows until filled: the placeholder alone.
    pub rewritten: String,
}

/// An extracted answer together with the position of its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLabel {
    /// Index of the text in the scanned sequence.
    pub index: usize,
    pub markup: AnswerMarkup,
}

/// Compiled answer pattern plus the placeholder it is replaced with.
#[derive(Debug, Clone)]
pub struct AnswerScanner {
    pattern: Regex,
    placeholder: String,
}

impl AnswerScanner {
    /// Compile `pattern`. Its first capture group is the answer.
    ///
    /// # Errors
    ///
    /// [`DragnetError::InvalidAnswerPattern`] if the pattern does not compile
    /// or has no capture group.
    pub fn new(pattern: &str, placeholder: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| DragnetError::InvalidAnswerPattern(e.to_string()))?;
        if pattern.captures_len() < 2 {
            return Err(DragnetError::InvalidAnswerPattern(format!("{pattern} has no capture group")));
        }
        Ok(Self { pattern, placeholder: placeholder.into() })
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Extract the answer from `text`. The whole label is rewritten to the
    /// placeholder; any surrounding text is dropped.
    ///
    /// # Errors
    ///
    /// [`DragnetError::MalformedAnswerMarkup`] if `text` has no answer span.
    pub fn parse(&self, text: &str) -> Result<AnswerMarkup> {
        let malformed = || DragnetError::MalformedAnswerMarkup { text: text.to_string() };
        let caps = self.pattern.captures(text).ok_or_else(malformed)?;
        let answer = caps.get(1).map(|m| m.as_str()).filter(|a| !a.is_empty()).ok_or_else(malformed)?;
        Ok(AnswerMarkup { answer: answer.to_string(), rewritten: self.placeholder.clone() })
    }

    /// Parse every text in order, skipping those without an answer span.
    pub fn scan<'a, I>(&self, texts: I) -> Vec<ScannedLabel>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts
            .into_iter()
            .enumerate()
            .filter_map(|(index, text)| match self.parse(text) {
                Ok(markup) => Some(ScannedLabel { index, markup }),
                Err(e) => {
                    tracing::debug!(index, error = %e, "skipping label");
                    None
                }
            })
            .collect()
    }
}

/// Parse `text` with the default `{answer}` pattern.
///
/// # Errors
///
/// [`DragnetError::MalformedAnswerMarkup`] if `text` has no answer span.
pub fn parse_answer(text: &str, placeholder: &str) -> Result<AnswerMarkup> {
    AnswerScanner::new(DEFAULT_ANSWER_PATTERN, placeholder)?.parse(text)
}
