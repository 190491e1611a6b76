// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for loop timeline construction and per-frame sampling.
//!
//! Strips are synthetic but shaped like real project galleries: a few dozen
//! fixed-height items with varying widths.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marquee_loop::{ItemMeasure, LoopConfig, LoopTimeline, TweenVars};

fn strip(n: usize) -> Vec<ItemMeasure> {
    let mut offset = 0.0;
    (0..n)
        .map(|i| {
            // Widths cycle through a plausible mix of portrait and landscape.
            let width = 300.0 + (i % 5) as f64 * 137.0;
            let m = ItemMeasure::resting(offset, width);
            offset += width;
            m
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_build");
    for n in [5_usize, 20, 100] {
        let items = strip(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                LoopTimeline::build(black_box(items), 1600.0, LoopConfig::default())
            });
        });
    }
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_sample");
    for n in [5_usize, 20, 100] {
        let items = strip(n);
        let mut tl = LoopTimeline::build(&items, 1600.0, LoopConfig::default())
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                tl.advance(0.016);
                black_box(tl.x_percents_now())
            });
        });
    }
    group.finish();
}

fn bench_closest_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_index");
    for n in [5_usize, 20, 100] {
        let items = strip(n);
        let mut tl = LoopTimeline::build(&items, 1600.0, LoopConfig::default())
            .unwrap();
        tl.to_index(
            (n / 2) as isize,
            TweenVars {
                duration: Some(0.0),
                ..TweenVars::default()
            },
        );
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(tl.closest_index(false)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_sample, bench_closest_index);
criterion_main!(benches);
