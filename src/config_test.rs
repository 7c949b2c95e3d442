#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_widget_layout() {
    let cfg = DragnetConfig::default();
    assert!(!cfg.reuse_answers);
    assert_eq!(cfg.match_policy, MatchPolicy::FirstMatch);
    assert_eq!(cfg.tracking, DragTracking::Relative);
    assert_eq!(cfg.staging, StagingLayout { x: 500.0, row_height: 25.0 });
    assert_eq!(cfg.placeholder, "--");
    assert_eq!(cfg.answer_pattern, DEFAULT_ANSWER_PATTERN);
}

#[test]
fn staging_positions_stack_one_row_apart() {
    let layout = StagingLayout::default();
    assert_eq!(layout.position(0), Point::new(500.0, 25.0));
    assert_eq!(layout.position(1), Point::new(500.0, 50.0));
    assert_eq!(layout.position(4), Point::new(500.0, 125.0));
}

// =============================================================
// JSON
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(DragnetConfig::from_json("{}").unwrap(), DragnetConfig::default());
}

#[test]
fn from_json_partial_override() {
    let cfg = DragnetConfig::from_json(
        r#"{ "reuse_answers": true, "match_policy": "largest_overlap", "staging": { "x": 10, "row_height": 30 } }"#,
    )
    .unwrap();
    assert!(cfg.reuse_answers);
    assert_eq!(cfg.match_policy, MatchPolicy::LargestOverlap);
    assert_eq!(cfg.staging.position(0), Point::new(10.0, 30.0));
    assert_eq!(cfg.placeholder, "--");
}

#[test]
fn from_json_tracking() {
    let cfg = DragnetConfig::from_json(r#"{ "tracking": { "mode": "anchored", "offset_x": 30, "offset_y": 0 } }"#)
        .unwrap();
    assert_eq!(cfg.tracking, DragTracking::anchored());
}

#[test]
fn from_json_rejects_unknown_policy() {
    let err = DragnetConfig::from_json(r#"{ "match_policy": "closest" }"#).unwrap_err();
    assert!(matches!(err, DragnetError::ConfigParse(_)));
}

#[test]
fn from_json_rejects_garbage() {
    assert!(matches!(DragnetConfig::from_json("not json"), Err(DragnetError::ConfigParse(_))));
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = DragnetConfig { reuse_answers: true, tracking: DragTracking::anchored(), ..Default::default() };
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(DragnetConfig::from_json(&json).unwrap(), cfg);
}

// =============================================================
// Attributes
// =============================================================

#[test]
fn no_attributes_is_default() {
    assert_eq!(DragnetConfig::from_attributes(attrs(&[])).unwrap(), DragnetConfig::default());
}

#[test]
fn attributes_override_everything() {
    let cfg = DragnetConfig::from_attributes(attrs(&[
        (ATTR_REUSE, "true"),
        (ATTR_MATCH, "largest"),
        (ATTR_TRACKING, "anchored"),
        (ATTR_STAGING_X, "620"),
        (ATTR_ROW_HEIGHT, " 40 "),
        (ATTR_PLACEHOLDER, "???"),
        (ATTR_PATTERN, r"\[(\w+)\]"),
    ]))
    .unwrap();
    assert!(cfg.reuse_answers);
    assert_eq!(cfg.match_policy, MatchPolicy::LargestOverlap);
    assert_eq!(cfg.tracking, DragTracking::anchored());
    assert_eq!(cfg.staging, StagingLayout { x: 620.0, row_height: 40.0 });
    assert_eq!(cfg.placeholder, "???");
    assert_eq!(cfg.answer_pattern, r"\[(\w+)\]");
}

#[test]
fn bare_reuse_attribute_enables_reuse() {
    let cfg = DragnetConfig::from_attributes(attrs(&[(ATTR_REUSE, "")])).unwrap();
    assert!(cfg.reuse_answers);
}

#[test]
fn reuse_false_and_zero() {
    for raw in ["false", "0"] {
        let cfg = DragnetConfig::from_attributes(attrs(&[(ATTR_REUSE, raw)])).unwrap();
        assert!(!cfg.reuse_answers, "{raw}");
    }
}

#[test]
fn reuse_garbage_is_error() {
    let err = DragnetConfig::from_attributes(attrs(&[(ATTR_REUSE, "yes please")])).unwrap_err();
    assert!(matches!(err, DragnetError::ConfigParse(msg) if msg.contains(ATTR_REUSE)));
}

#[test]
fn unknown_match_policy_is_error() {
    let err = DragnetConfig::from_attributes(attrs(&[(ATTR_MATCH, "best")])).unwrap_err();
    assert!(matches!(err, DragnetError::ConfigParse(msg) if msg.contains("best")));
}

#[test]
fn unknown_tracking_is_error() {
    assert!(DragnetConfig::from_attributes(attrs(&[(ATTR_TRACKING, "sticky")])).is_err());
}

#[test]
fn bad_numbers_fall_back_to_defaults() {
    let cfg = DragnetConfig::from_attributes(attrs(&[(ATTR_STAGING_X, "wide"), (ATTR_ROW_HEIGHT, "NaN")])).unwrap();
    assert_eq!(cfg.staging, StagingLayout::default());
}

// =============================================================
// Scanner
// =============================================================

#[test]
fn scanner_uses_configured_placeholder() {
    let cfg = DragnetConfig { placeholder: "__".into(), ..Default::default() };
    let m = cfg.scanner().unwrap().parse("x {y} z").unwrap();
    assert_eq!(m.rewritten, "__");
}

#[test]
fn scanner_reports_bad_pattern() {
    let cfg = DragnetConfig { answer_pattern: "(".into(), ..Default::default() };
    assert!(matches!(cfg.scanner(), Err(DragnetError::InvalidAnswerPattern(_))));
}
