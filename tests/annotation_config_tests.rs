use markline_rs::annotation::{AnnotationGroup, AnnotationKind, AnnotationSpec};
use markline_rs::render::Color;

#[test]
fn default_spec_inherits_everything() {
    let spec = AnnotationSpec::default();

    assert_eq!(spec.kind, AnnotationKind::Average);
    assert_eq!(spec.custom_value, 0.0);
    assert_eq!(spec.fill_color, None);
    assert_eq!(spec.stroke_color, None);
    assert_eq!(spec.font_color, None);
    assert_eq!(spec.stroke_width, 0.0);
    assert!(!spec.hide_value);
    assert!(!spec.ignore_dashed);
    assert!(!spec.ignore_arrow);
    assert_eq!(spec.start_index, 0);
    assert_eq!(spec.end_index, 0);
}

#[test]
fn from_kinds_builds_one_spec_per_kind_in_order() {
    let group = AnnotationGroup::from_kinds(&[
        AnnotationKind::Maximum,
        AnnotationKind::Average,
        AnnotationKind::Minimum,
    ]);

    let kinds: Vec<_> = group.iter().map(|spec| spec.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AnnotationKind::Maximum,
            AnnotationKind::Average,
            AnnotationKind::Minimum
        ]
    );
}

#[test]
fn group_json_parses_kinds_and_overrides() {
    let json = r#"{
  "specs": [
    { "kind": "maximum" },
    {
      "kind": "custom",
      "custom_value": 80.0,
      "stroke_color": { "red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 },
      "above_color": { "red": 1.0, "green": 0.5, "blue": 0.0, "alpha": 0.25 },
      "hide_value": true,
      "ignore_arrow": true
    }
  ]
}"#;

    let group = AnnotationGroup::from_json_str(json).expect("parse config");

    assert_eq!(group.len(), 2);
    assert_eq!(group.specs[0].kind, AnnotationKind::Maximum);
    assert_eq!(group.specs[0].stroke_color, None);

    let custom = &group.specs[1];
    assert_eq!(custom.kind, AnnotationKind::Custom);
    assert_eq!(custom.custom_value, 80.0);
    assert_eq!(custom.stroke_color, Some(Color::rgb(1.0, 0.0, 0.0)));
    assert_eq!(custom.above_color, Some(Color::rgba(1.0, 0.5, 0.0, 0.25)));
    assert_eq!(custom.below_color, None);
    assert!(custom.hide_value);
    assert!(custom.ignore_arrow);
}

#[test]
fn group_json_with_unknown_kind_parses_as_other() {
    let json = r#"{ "specs": [ { "kind": "p99" } ] }"#;

    let group = AnnotationGroup::from_json_str(json).expect("parse config");
    assert_eq!(group.specs[0].kind, AnnotationKind::Other);
}

#[test]
fn group_json_rejects_malformed_input() {
    assert!(AnnotationGroup::from_json_str("{ not json").is_err());
}

#[test]
fn spec_builders_compose() {
    let spec = AnnotationSpec::custom(42.5)
        .with_span(2, 5)
        .with_stroke_width(1.5)
        .with_solid_stroke()
        .with_below_color(Color::rgba(0.0, 0.0, 1.0, 0.2));

    assert_eq!(spec.kind, AnnotationKind::Custom);
    assert_eq!(spec.custom_value, 42.5);
    assert_eq!(spec.start_index, 2);
    assert_eq!(spec.end_index, 5);
    assert_eq!(spec.stroke_width, 1.5);
    assert!(spec.ignore_dashed);
    assert_eq!(spec.below_color, Some(Color::rgba(0.0, 0.0, 1.0, 0.2)));
}

#[test]
fn group_round_trips_through_json() {
    let group = AnnotationGroup::new()
        .with_spec(AnnotationSpec::new(AnnotationKind::Maximum))
        .with_spec(AnnotationSpec::custom(99.9).with_font_color(Color::rgb(0.2, 0.2, 0.2)));

    let json = serde_json::to_string(&group).expect("serialize");
    let parsed = AnnotationGroup::from_json_str(&json).expect("parse back");
    assert_eq!(parsed, group);
}
