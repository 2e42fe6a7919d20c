use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::chart::{CelestialBody, OverlapResolver, OverlapSettings};

fn cluster(count: usize, start: f64, step: f64) -> Vec<CelestialBody> {
    (0..count)
        .map(|i| CelestialBody::at_longitude(format!("body_{}", i), start + (i as f64) * step))
        .collect()
}

fn bench_resolve_spread(c: &mut Criterion) {
    let resolver = OverlapResolver::default();
    let bodies = cluster(12, 0.0, 30.0);

    c.bench_function("resolve_spread", |b| {
        b.iter(|| resolver.resolve(black_box(&bodies)))
    });
}

fn bench_resolve_cluster(c: &mut Criterion) {
    let resolver = OverlapResolver::new(OverlapSettings::with_min_spacing(6.0));
    // Wraps through 0 and never fully converges
    let bodies = cluster(10, 355.0, 1.5);

    c.bench_function("resolve_dense_cluster", |b| {
        b.iter(|| resolver.resolve(black_box(&bodies)))
    });
}

criterion_group!(benches, bench_resolve_spread, bench_resolve_cluster);
criterion_main!(benches);
