use criterion::{Criterion, criterion_group, criterion_main};
use markline_rs::annotation::{AnnotationGroup, AnnotationKind, AnnotationSpec};
use markline_rs::core::{AxisBand, SeriesSummary};
use markline_rs::render::{Color, RecordingPainter};
use markline_rs::{MarkLineRenderer, MarkLineRequest};
use std::hint::black_box;

fn bench_render_pass_100_annotations(c: &mut Criterion) {
    let mapper = AxisBand::new(0.0, 10_000.0, 720.0).expect("valid band");
    let summary = SeriesSummary::new(9_500.0, 120.0, 4_807.5);

    let mut group = AnnotationGroup::from_kinds(&[
        AnnotationKind::Maximum,
        AnnotationKind::Minimum,
        AnnotationKind::Average,
    ]);
    for i in 0..97 {
        group.push(AnnotationSpec::custom(f64::from(i) * 97.0));
    }

    c.bench_function("mark_line_render_pass_100", |b| {
        b.iter(|| {
            let mut painter = RecordingPainter::new(1_280.0);
            let mut renderer = MarkLineRenderer::new(&mut painter);
            renderer.add(MarkLineRequest::new(
                Color::rgb(0.2, 0.4, 0.8),
                black_box(group.clone()),
                summary,
                &mapper,
                &[],
            ));
            renderer.render().expect("render pass");
        })
    });
}

fn bench_summary_from_samples_10k(c: &mut Criterion) {
    let samples: Vec<f64> = (0..10_000)
        .map(|i| {
            if i % 37 == 0 {
                f64::NAN
            } else {
                (f64::from(i) * 0.73).sin() * 500.0 + 1_000.0
            }
        })
        .collect();

    c.bench_function("summary_from_samples_10k", |b| {
        b.iter(|| SeriesSummary::from_samples(black_box(&samples)))
    });
}

criterion_group!(
    benches,
    bench_render_pass_100_annotations,
    bench_summary_from_samples_10k
);
criterion_main!(benches);
