//! Line rasterization benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridcast::raster::line_points;

fn bench_line_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");

    group.bench_function("horizontal_1k", |b| {
        b.iter(|| black_box(line_points(0, 0, black_box(1000), 0)))
    });

    group.bench_function("diagonal_1k", |b| {
        b.iter(|| black_box(line_points(0, 0, black_box(1000), 1000)))
    });

    group.bench_function("shallow_1k", |b| {
        b.iter(|| black_box(line_points(0, 0, black_box(1000), 137)))
    });

    group.bench_function("reversed_shallow_1k", |b| {
        b.iter(|| black_box(line_points(black_box(1000), 137, 0, 0)))
    });

    group.finish();
}

fn bench_octant_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");

    let targets: Vec<(i32, i32)> = (0..360)
        .step_by(15)
        .map(|deg: i32| {
            let rad = (deg as f64).to_radians();
            ((rad.cos() * 500.0) as i32, (rad.sin() * 500.0) as i32)
        })
        .collect();

    group.bench_function("octant_sweep_500", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &(x, y) in &targets {
                total += line_points(0, 0, black_box(x), black_box(y)).len();
            }
            black_box(total)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_line_shapes, bench_octant_sweep);
criterion_main!(benches);
