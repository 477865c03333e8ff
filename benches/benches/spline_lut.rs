// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use groundcover_spline::{PiecewiseSpline, interpolate};
use kurbo::Point;

/// A wavy control polyline over `[0, width]` with `n` knots.
fn gen_wave_points(n: usize, width: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64 / (n - 1) as f64 * width;
        // Deterministic bumps without pulling in a trig dependency.
        let phase = (i * 7919) % 13;
        let y = (phase as f64 - 6.0) * 3.5;
        out.push(Point::new(x, y));
    }
    out
}

fn dense_spline(knots: usize, samples_per_span: usize) -> PiecewiseSpline {
    let points = gen_wave_points(knots, 1000.0);
    interpolate(&points, samples_per_span).expect("wave points are distinct")
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    for &knots in &[16usize, 64, 256] {
        let points = gen_wave_points(knots, 1000.0);
        group.throughput(Throughput::Elements(knots as u64));
        group.bench_function(format!("catmull_rom_k{}", knots), |b| {
            b.iter(|| {
                let spline = interpolate(black_box(&points), 10).unwrap();
                black_box(spline.spans().len());
            })
        });
    }
    group.finish();
}

fn bench_eval_spline(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_spline");
    for &knots in &[16usize, 64, 256] {
        let spline = dense_spline(knots, 10);
        group.throughput(Throughput::Elements(4096));
        group.bench_function(format!("span_scan_k{}", knots), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for q in 0..4096 {
                    let x = q as f64 * (1000.0 / 4096.0);
                    acc += spline.eval_at(x);
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

fn bench_eval_lut(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_lut");
    for &knots in &[16usize, 64, 256] {
        let lut = dense_spline(knots, 10).lut_by_x(1024);
        group.throughput(Throughput::Elements(4096));
        group.bench_function(format!("nearest_k{}", knots), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for q in 0..4096 {
                    let x = q as f64 * (1000.0 / 4096.0);
                    acc += lut.nearest(x);
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

fn bench_build_lut(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_lut");
    let spline = dense_spline(64, 10);
    for &samples in &[256usize, 1024, 4096] {
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_function(format!("by_x_s{}", samples), |b| {
            b.iter_batched(
                || spline.clone(),
                |s| {
                    let lut = s.lut_by_x(samples);
                    black_box(lut.samples().len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_interpolate,
    bench_eval_spline,
    bench_eval_lut,
    bench_build_lut,
);
criterion_main!(benches);
