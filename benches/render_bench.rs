// Benchmark suite for rendering performance
//
// Compares the sequential and parallel renderers for each filter on the
// two-triangle scene.
//
// Run with: cargo bench --bench render_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use point_raster::{render, render_parallel, scenes, Filter, RenderSettings, Resolution};

/// Sequential vs parallel, per filter, at 16 samples per pixel
fn benchmark_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_filters");
    let scene = scenes::two_triangles_shared();

    for filter in Filter::ALL {
        let settings = RenderSettings {
            resolution: Resolution::new(200, 150),
            filter,
            spp: 16,
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::new("sequential", filter), &settings, |b, s| {
            b.iter(|| render(black_box(&scene), black_box(s)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", filter), &settings, |b, s| {
            b.iter(|| render_parallel(black_box(&scene), black_box(s)))
        });
    }

    group.finish();
}

/// Cost of adding samples: the implicit scene evaluates a quartic per sample
fn benchmark_spp(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_spp");
    let scene = scenes::implicit_polynomial();

    for spp in [1, 4, 16] {
        let settings = RenderSettings {
            resolution: Resolution::new(200, 150),
            filter: Filter::Gaussian,
            spp,
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::from_parameter(spp), &settings, |b, s| {
            b.iter(|| render_parallel(black_box(&scene), black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_filters, benchmark_spp);
criterion_main!(benches);
