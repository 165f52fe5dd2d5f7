use narwhal_axis::api::{AXIS_FRAME_JSON_SCHEMA_V1, AxisConfig, AxisFrame, LabelAlign, YAxis};
use narwhal_axis::core::PlotGeometry;

fn sample_frame() -> AxisFrame {
    let mut axis = YAxis::new(AxisConfig::default().with_min(3.0), PlotGeometry::default())
        .expect("axis init");
    axis.set_data([[10.0, 20.0, 30.0]]);
    axis.render().expect("render")
}

#[test]
fn config_loads_camel_case_options() {
    let config = AxisConfig::from_json_str(
        r#"{ "smartAxis": false, "ticks": 4, "min": null, "max": 100, "labels": { "align": "top" } }"#,
    )
    .expect("parse config");

    assert!(!config.smart_axis);
    assert_eq!(config.ticks, Some(4));
    assert_eq!(config.min, None);
    assert_eq!(config.max, Some(100.0));
    assert_eq!(config.labels.align, LabelAlign::Top);
    assert!(config.labels.formatter.is_none());
}

#[test]
fn empty_config_json_keeps_defaults() {
    let config = AxisConfig::from_json_str("{}").expect("parse config");

    assert!(config.smart_axis);
    assert_eq!(config.outer_tick_size, 6.0);
    assert_eq!(config.labels.align, LabelAlign::Middle);
}

#[test]
fn malformed_config_json_is_rejected() {
    assert!(AxisConfig::from_json_str(r#"{ "ticks": -1 }"#).is_err());
    assert!(AxisConfig::from_json_str("not json").is_err());
}

#[test]
fn config_json_round_trips_without_formatter() {
    let config = AxisConfig::default()
        .with_max(10.0)
        .with_label_formatter(|value, _, _| format!("{value}%"));
    let json = config.to_json_pretty().expect("serialize");
    let restored = AxisConfig::from_json_str(&json).expect("parse");

    assert!(json.contains("\"smartAxis\""));
    assert_eq!(restored.max, Some(10.0));
    assert!(restored.labels.formatter.is_none());
}

#[test]
fn frame_contract_v1_round_trips() {
    let frame = sample_frame();
    let json = frame.to_json_contract_v1_pretty().expect("serialize");
    let restored = AxisFrame::from_json_compat_str(&json).expect("parse");

    assert!(json.contains(&format!("\"schema_version\": {AXIS_FRAME_JSON_SCHEMA_V1}")));
    assert_eq!(restored, frame);
}

#[test]
fn frame_parser_accepts_bare_frames() {
    let frame = sample_frame();
    let json = frame.to_json_pretty().expect("serialize");

    assert_eq!(AxisFrame::from_json_compat_str(&json).expect("parse"), frame);
}

#[test]
fn frame_parser_rejects_unknown_schema_versions() {
    let frame = sample_frame();
    let json = frame
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");

    assert!(AxisFrame::from_json_compat_str(&json).is_err());
}
