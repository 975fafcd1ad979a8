use markline_rs::annotation::{AnnotationGroup, AnnotationSpec, GroupedFormatter, ValueFormatter};
use markline_rs::core::{AxisBand, CoordinateMapper, SeriesSummary};
use markline_rs::render::{Color, RecordingPainter};
use markline_rs::{MarkLineRenderer, MarkLineRequest};
use proptest::prelude::*;

proptest! {
    #[test]
    fn custom_annotations_always_land_on_the_mapped_value(
        value in -10_000.0f64..10_000.0,
        max in 10_000.0f64..20_000.0,
        height in 50.0f64..2_000.0
    ) {
        let mapper = AxisBand::new(-10_000.0, max, height).expect("valid band");
        let mut painter = RecordingPainter::new(800.0);
        {
            let mut renderer = MarkLineRenderer::new(&mut painter);
            renderer.add(MarkLineRequest::new(
                Color::rgb(0.3, 0.3, 0.3),
                AnnotationGroup::new()
                    .with_spec(AnnotationSpec::custom(value).with_hidden_value()),
                SeriesSummary::new(1.0, -1.0, 0.0),
                &mapper,
                &[],
            ));
            renderer.render().expect("render");
        }

        let line = painter.mark_lines().next().expect("line");
        prop_assert!((line.y - mapper.offset(value)).abs() <= 1e-9);
    }

    #[test]
    fn grouped_integer_labels_parse_back_to_the_value(value in -9_999_999i64..9_999_999) {
        let formatter = GroupedFormatter::default();
        let text = formatter.format(value as f64);

        let parsed: f64 = text.replace(',', "").parse().expect("numeric label");
        prop_assert_eq!(parsed, value as f64);
    }

    #[test]
    fn grouped_labels_never_carry_runs_longer_than_three_digits(
        value in 0.0f64..1e12
    ) {
        let formatter = GroupedFormatter::default();
        let text = formatter.format(value);
        let int_part = text.split('.').next().expect("integer part");

        for run in int_part.split(',') {
            prop_assert!(run.len() <= 3, "digit run too long in {}", text);
        }
    }

    #[test]
    fn axis_band_round_trips_within_tolerance(
        min in -1_000.0f64..0.0,
        span in 1.0f64..10_000.0,
        height in 10.0f64..5_000.0,
        t in 0.0f64..1.0
    ) {
        let band = AxisBand::new(min, min + span, height).expect("valid band");
        let value = min + span * t;

        let recovered = band
            .value_at_offset(band.offset(value))
            .expect("invert offset");
        prop_assert!((recovered - value).abs() <= span * 1e-9);
    }
}
