//! Shared constants for the dragnet crate.

// ── Staging layout ──────────────────────────────────────────────

/// Horizontal position of the staging column, in client pixels.
pub const STAGING_X: f64 = 500.0;

/// Vertical distance between stacked choices; choice `i` sits at `(i + 1)` rows.
pub const STAGING_ROW_HEIGHT: f64 = 25.0;

// ── Dragging ────────────────────────────────────────────────────

/// Horizontal distance from the cursor to a choice's anchor in anchored tracking.
pub const ANCHOR_OFFSET_X: f64 = 30.0;

// ── Label measurement ───────────────────────────────────────────

/// Default label box width used when no renderer measures choices.
pub const LABEL_WIDTH: f64 = 60.0;

/// Default label box height (roughly one line of 16px text).
pub const LABEL_HEIGHT: f64 = 18.0;

/// Per-character advance used by width-per-value measurement.
pub const GLYPH_ADVANCE: f64 = 8.0;

// ── Markup ──────────────────────────────────────────────────────

/// Text shown in a slot whose answer was lifted out of the markup.
pub const PLACEHOLDER_TEXT: &str = "--";

/// Attribute recording the expected answer on a scanned slot element.
pub const LABEL_DATA_ATTRIBUTE: &str = "data-dragnet-label";

/// Attribute carrying the expected answer on a pre-tagged slot element.
pub const SLOT_VALUE_ATTRIBUTE: &str = "data-value";

/// Prefix for the DOM id of a spawned choice element.
pub const CHOICE_ID_PREFIX: &str = "dragnet-choice-";
