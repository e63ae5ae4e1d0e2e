//! Criterion benchmarks for the oriented-box pipeline.
//! Focus sizes: points per side in {2, 8, 32, 128, 512}.

use boxsticker::obb::{convex_hull, min_area_rect, GeomCfg};
use boxsticker::pipeline::process_object;
use boxsticker::sample::{draw_rect_cloud, CloudCfg, ReplayToken};
use boxsticker::MarkerSpec;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn cloud(k: usize, index: u64) -> Vec<nalgebra::Vector2<f64>> {
    let cfg = CloudCfg {
        points_per_side: k,
        jitter: 0.5,
        interior: k,
        ..CloudCfg::default()
    };
    draw_rect_cloud(cfg, ReplayToken::new(43, index)).1
}

fn bench_obb(c: &mut Criterion) {
    let mut group = c.benchmark_group("obb");
    let cfg = GeomCfg::default();
    for &k in &[2usize, 8, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("convex_hull", k), &k, |b, &k| {
            b.iter_batched(
                || cloud(k, 0),
                |pts| {
                    let _hull = convex_hull(&pts, cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("min_area_rect", k), &k, |b, &k| {
            let hull = convex_hull(&cloud(k, 1), cfg).unwrap();
            b.iter(|| min_area_rect(&hull, cfg).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("process_object", k), &k, |b, &k| {
            let marker = MarkerSpec::default();
            b.iter_batched(
                || cloud(k, 2),
                |pts| {
                    let _geo = process_object(&pts, &marker, cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_obb);
criterion_main!(benches);
