// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the drag gesture pipeline: scrub, release, and throw
//! decay at a typical 60 Hz frame cadence.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use marquee_drag::{DragConfig, DragController, DragUpdate};

const LABELS: [f64; 5] = [0.0, 0.2, 0.4, 0.6, 0.8];

fn bench_scrub(c: &mut Criterion) {
    c.bench_function("drag_scrub_frame", |b| {
        let mut controller = DragController::new(DragConfig::default());
        controller.press(Point::new(1000.0, 0.0), 0.0, 0.0, 2000.0, true);
        let mut t = 0.0;
        let mut x = 1000.0;
        b.iter(|| {
            t += 0.016;
            x -= 3.0;
            black_box(controller.drag(Point::new(x, 0.0), t))
        });
    });
}

fn bench_release_and_throw(c: &mut Criterion) {
    c.bench_function("drag_release_throw_to_rest", |b| {
        b.iter(|| {
            let mut controller = DragController::new(DragConfig::default());
            controller.press(Point::new(1000.0, 0.0), 0.0, 0.0, 2000.0, true);
            for i in 1..=5 {
                controller.drag(Point::new(1000.0 - f64::from(i) * 40.0, 0.0), f64::from(i) * 0.016);
            }
            controller.release(Point::new(800.0, 0.0), 0.08, &LABELS);
            let mut frames = 0_u32;
            loop {
                match controller.tick(0.016) {
                    DragUpdate::Settled(p) => break black_box((p, frames)),
                    DragUpdate::Idle => break black_box((0.0, frames)),
                    _ => frames += 1,
                }
            }
        });
    });
}

criterion_group!(benches, bench_scrub, bench_release_and_throw);
criterion_main!(benches);
