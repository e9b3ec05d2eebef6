use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use golf_shot_tracker::core::geodesy::{
    bearing, destination, distance, quadratic_control_point, sample_quadratic_path,
};
use golf_shot_tracker::core::{AnnotationIndex, Annotation, AnnotationId, AnnotationKind};
use golf_shot_tracker::GeoPoint;
use std::hint::black_box;

const TEE: GeoPoint = GeoPoint::new(-37.8402, 145.0999);
const GREEN: GeoPoint = GeoPoint::new(-37.8384, 145.1001);

fn build_points(count: usize) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| destination(TEE, (i % 400) as f64 + 0.5, (i * 37 % 360) as f64))
        .collect()
}

fn bench_primitives(c: &mut Criterion) {
    let points = build_points(1024);

    c.bench_function("distance_batch_1024", |b| {
        b.iter(|| {
            let total: f64 = points.iter().map(|p| distance(black_box(*p), GREEN)).sum();
            black_box(total)
        })
    });

    c.bench_function("bearing_destination_roundtrip_1024", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for p in &points {
                let heading = bearing(black_box(*p), GREEN);
                acc += destination(*p, 150.0, heading).latitude;
            }
            black_box(acc)
        })
    });
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");
    let end = destination(TEE, 180.0, 12.0);
    let control = quadratic_control_point(TEE, end, bearing(TEE, GREEN), 27.0);

    for &samples in &[16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("sample", samples), &samples, |b, &n| {
            b.iter(|| black_box(sample_quadratic_path(TEE, control, end, n)).len())
        });
    }

    group.finish();
}

fn bench_annotation_pick(c: &mut Criterion) {
    let annotations: Vec<Annotation> = build_points(2_000)
        .into_iter()
        .enumerate()
        .map(|(i, location)| Annotation {
            id: AnnotationId(i as u64),
            kind: AnnotationKind::MeasurementPin,
            location,
        })
        .collect();
    let index = AnnotationIndex::from_annotations(TEE, annotations);
    let queries = build_points(256);

    c.bench_function("annotation_pick_256", |b| {
        b.iter(|| {
            let hits = queries
                .iter()
                .filter(|q| index.pick(black_box(**q), 7.0).is_some())
                .count();
            black_box(hits)
        })
    });
}

criterion_group!(
    geodesy_benches,
    bench_primitives,
    bench_curve_sampling,
    bench_annotation_pick
);
criterion_main!(geodesy_benches);
