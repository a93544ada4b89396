use super::*;

#[test]
fn defaults_match_the_production_setup() {
    let cfg = OverlayConfig::default();
    assert_eq!(cfg.line_spacing, 1.0);
    assert_eq!(cfg.emphasis_scale, 1.5);
    assert_eq!(cfg.hours_per_frame, 0.98);
    // 0.98 renders as "1.0" at one decimal place, as the pipeline always did.
    assert_eq!(cfg.time_template, "Time Estimate (1.0 hr/frame): X dd Y hr");
}

#[test]
fn corner_accessor_maps_all_four() {
    let cfg = OverlayConfig::default();
    assert_eq!(cfg.spec(Corner::TopLeft).size, cfg.top_left.size);
    assert_eq!(cfg.spec(Corner::TopRight).size, cfg.top_right.size);
    assert_eq!(cfg.spec(Corner::BottomLeft).size, cfg.bottom_left.size);
    assert_eq!(cfg.spec(Corner::BottomRight).size, cfg.bottom_right.size);
}

#[test]
fn config_round_trips_through_json() {
    let cfg = OverlayConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: OverlayConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.top_left.lines, cfg.top_left.lines);
    assert_eq!(back.hours_per_frame, cfg.hours_per_frame);
}

#[test]
fn from_path_reads_a_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overlay.json");
    let mut cfg = OverlayConfig::default();
    cfg.hours_per_frame = 1.31;
    std::fs::write(&path, serde_json::to_vec(&cfg).unwrap()).unwrap();

    let loaded = OverlayConfig::from_path(&path).unwrap();
    assert_eq!(loaded.hours_per_frame, 1.31);
}

#[test]
fn missing_lines_field_defaults_to_empty() {
    let json = r#"{
        "font_path": "RobotoCondensed.ttf",
        "size": 32.0,
        "color": [0, 0, 0, 255],
        "offset_x": 15,
        "offset_y": 10
    }"#;
    let spec: LabelSpec = serde_json::from_str(json).unwrap();
    assert!(spec.lines.is_empty());
}
