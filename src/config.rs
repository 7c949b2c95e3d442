//! Widget configuration, from a JSON blob or from data attributes on the
//! host `<svg>` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub use crate::input::DragTracking;
use crate::consts::{PLACEHOLDER_TEXT, STAGING_ROW_HEIGHT, STAGING_X};
use crate::error::{DragnetError, Result};
use crate::geom::Point;
use crate::markup::{AnswerScanner, DEFAULT_ANSWER_PATTERN};

pub const ATTR_REUSE: &str = "data-dragnet-reuse";
pub const ATTR_MATCH: &str = "data-dragnet-match";
pub const ATTR_TRACKING: &str = "data-dragnet-tracking";
pub const ATTR_STAGING_X: &str = "data-dragnet-staging-x";
pub const ATTR_ROW_HEIGHT: &str = "data-dragnet-row-height";
pub const ATTR_PLACEHOLDER: &str = "data-dragnet-placeholder";
pub const ATTR_PATTERN: &str = "data-dragnet-pattern";

/// Which open slot wins when a released choice overlaps several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The earliest slot in creation order.
    #[default]
    FirstMatch,
    /// The slot sharing the most area with the choice; ties go to the earliest.
    LargestOverlap,
}

/// Where freshly spawned choices are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StagingLayout {
    /// Horizontal position shared by every staged choice.
    pub x: f64,
    /// Vertical step between consecutive choices.
    pub row_height: f64,
}

impl Default for StagingLayout {
    fn default() -> Self {
        Self { x: STAGING_X, row_height: STAGING_ROW_HEIGHT }
    }
}

impl StagingLayout {
    /// Staging position of the `index`th choice. The first row sits one row
    /// below the top so its baseline is visible.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, index: usize) -> Point {
        Point::new(self.x, self.row_height * (index + 1) as f64)
    }
}

/// Per-widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragnetConfig {
    /// Keep every answer available after use: dragging a staged choice
    /// leaves a fresh copy behind, and a miss discards the dragged copy.
    pub reuse_answers: bool,
    pub match_policy: MatchPolicy,
    pub tracking: DragTracking,
    pub staging: StagingLayout,
    /// Text left in a slot whose answer was lifted out of the markup.
    pub placeholder: String,
    /// Regex locating the embedded answer; group 1 is the answer.
    pub answer_pattern: String,
}

impl Default for DragnetConfig {
    fn default() -> Self {
        Self {
            reuse_answers: false,
            match_policy: MatchPolicy::default(),
            tracking: DragTracking::default(),
            staging: StagingLayout::default(),
            placeholder: PLACEHOLDER_TEXT.to_string(),
            answer_pattern: DEFAULT_ANSWER_PATTERN.to_string(),
        }
    }
}

impl DragnetConfig {
    /// Parse a JSON config object; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`DragnetError::ConfigParse`] if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DragnetError::ConfigParse(e.to_string()))
    }

    /// Build config from data attributes read through `lookup`.
    ///
    /// Recognised:
    /// - `data-dragnet-reuse`: `true` / `false` (empty counts as `true`)
    /// - `data-dragnet-match`: `first` (default) or `largest`
    /// - `data-dragnet-tracking`: `relative` (default) or `anchored`
    /// - `data-dragnet-staging-x`, `data-dragnet-row-height`: numbers
    /// - `data-dragnet-placeholder`: placeholder text
    /// - `data-dragnet-pattern`: answer regex
    ///
    /// Unparsable numbers fall back to their defaults.
    ///
    /// # Errors
    ///
    /// [`DragnetError::ConfigParse`] for an unknown keyword value.
    pub fn from_attributes<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let reuse_answers = parse_bool(ATTR_REUSE, lookup(ATTR_REUSE).as_deref())?;
        let match_policy = parse_match_policy(lookup(ATTR_MATCH).as_deref())?;
        let tracking = parse_tracking(lookup(ATTR_TRACKING).as_deref())?;
        let staging = StagingLayout {
            x: parse_f64(lookup(ATTR_STAGING_X).as_deref(), defaults.staging.x),
            row_height: parse_f64(lookup(ATTR_ROW_HEIGHT).as_deref(), defaults.staging.row_height),
        };
        let placeholder = lookup(ATTR_PLACEHOLDER).unwrap_or(defaults.placeholder);
        let answer_pattern = lookup(ATTR_PATTERN).unwrap_or(defaults.answer_pattern);

        Ok(Self { reuse_answers, match_policy, tracking, staging, placeholder, answer_pattern })
    }

    /// Compile the answer scanner described by this config.
    ///
    /// # Errors
    ///
    /// [`DragnetError::InvalidAnswerPattern`] if `answer_pattern` is unusable.
    pub fn scanner(&self) -> Result<AnswerScanner> {
        AnswerScanner::new(&self.answer_pattern, self.placeholder.clone())
    }
}

fn parse_bool(key: &str, raw: Option<&str>) -> Result<bool> {
    match raw.map(str::trim) {
        None | Some("false" | "0") => Ok(false),
        Some("" | "true" | "1") => Ok(true),
        Some(other) => Err(DragnetError::ConfigParse(format!("{key}: expected true or false, got '{other}'"))),
    }
}

fn parse_f64(raw: Option<&str>, default: f64) -> f64 {
    match raw.map(|v| v.trim().parse::<f64>()) {
        Some(Ok(v)) if v.is_finite() => v,
        _ => default,
    }
}

fn parse_match_policy(raw: Option<&str>) -> Result<MatchPolicy> {
    match raw.unwrap_or("first") {
        "first" => Ok(MatchPolicy::FirstMatch),
        "largest" => Ok(MatchPolicy::LargestOverlap),
        other => Err(DragnetError::ConfigParse(format!(
            "unsupported match policy '{other}' (expected 'first' or 'largest')"
        ))),
    }
}

fn parse_tracking(raw: Option<&str>) -> Result<DragTracking> {
    match raw.unwrap_or("relative") {
        "relative" => Ok(DragTracking::Relative),
        "anchored" => Ok(DragTracking::anchored()),
        other => Err(DragnetError::ConfigParse(format!(
            "unsupported tracking mode '{other}' (expected 'relative' or 'anchored')"
        ))),
    }
}
