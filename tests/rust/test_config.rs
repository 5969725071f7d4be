use super::*;
use crate::layout::types::GridCell;

#[test]
fn test_defaults() {
    let c = LayoutConfig::default();
    assert_eq!(c.margin, 40.0);
    assert_eq!(c.cell_padding, 20.0);
    assert_eq!((c.grid_cols, c.grid_rows), (4, 3));
    assert_eq!(c.breakout_chance, 0.3);
    assert_eq!(c.collision_threshold, 0.6);
    assert_eq!(c.max_retries, 8);
    assert_eq!(c.clear_delay(), Duration::from_millis(100));
    assert_eq!(c.busy_window(), Duration::from_millis(600));
    assert_eq!(c.anchors.len(), 7);
    assert!(c.validate().is_ok());
}

#[test]
fn test_new_equals_default() {
    assert_eq!(LayoutConfig::new(), LayoutConfig::default());
}

#[test]
fn test_calm_disables_randomness_only() {
    let c = LayoutConfig::calm();
    assert_eq!(c.jitter_cap_x, 0.0);
    assert_eq!(c.jitter_cap_y, 0.0);
    assert_eq!(c.breakout_chance, 0.0);
    assert_eq!(c.margin, 40.0);
    assert_eq!(c.max_retries, 8);
}

#[test]
fn test_from_json_partial() {
    let c = LayoutConfig::from_json(r#"{"margin": 16, "max_retries": 3}"#).unwrap();
    assert_eq!(c.margin, 16.0);
    assert_eq!(c.max_retries, 3);
    assert_eq!(c.grid_cols, 4);
    assert_eq!(c.anchors, AnchorTable::default());
}

#[test]
fn test_from_json_anchor_table() {
    let c = LayoutConfig::from_json(r#"{"anchors": [{"col": 1, "row": 2}]}"#).unwrap();
    assert_eq!(c.anchors.cells(), &[GridCell::new(1, 2)]);
}

#[test]
fn test_from_json_rejects_bad_syntax() {
    let err = LayoutConfig::from_json("{margin: 1").unwrap_err();
    assert!(matches!(err, ScatterError::Json(_)));
}

#[test]
fn test_validate_rejects_empty_grid() {
    let c = LayoutConfig {
        grid_cols: 0,
        ..LayoutConfig::default()
    };
    assert!(matches!(c.validate(), Err(ScatterError::InvalidConfig(_))));
}

#[test]
fn test_validate_rejects_probability_out_of_range() {
    let err = LayoutConfig::from_json(r#"{"breakout_chance": 1.5}"#).unwrap_err();
    assert!(err.to_string().contains("breakout_chance"));
    let c = LayoutConfig {
        collision_threshold: -0.1,
        ..LayoutConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn test_validate_rejects_negative_margin() {
    let c = LayoutConfig {
        margin: -1.0,
        ..LayoutConfig::default()
    };
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("margin"));
}

#[test]
fn test_validate_rejects_zero_chaos_stride() {
    let c = LayoutConfig {
        chaos_stride: 0,
        ..LayoutConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn test_from_file_missing_is_io_error() {
    let err = LayoutConfig::from_file("/nonexistent/window-scatter.json").unwrap_err();
    assert!(matches!(err, ScatterError::Io(_)));
}
