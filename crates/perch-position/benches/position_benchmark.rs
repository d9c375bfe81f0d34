//! Positioning benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perch_core::{Placement, Rect, Viewport};
use perch_position::{compute_position, PositionOptions};

fn position_no_overflow(c: &mut Criterion) {
    let reference = Rect::new(400.0, 300.0, 120.0, 32.0);
    let floating = Rect::from_size(240.0, 180.0);
    let viewport = Viewport::new(1280.0, 800.0);
    let options = PositionOptions::default().with_offset(4.0);

    c.bench_function("position_no_overflow", |b| {
        b.iter(|| {
            compute_position(
                black_box(&reference),
                black_box(&floating),
                black_box(viewport),
                black_box(&options),
            )
        })
    });
}

fn position_flip_and_shift(c: &mut Criterion) {
    let reference = Rect::new(1200.0, 760.0, 60.0, 30.0);
    let floating = Rect::from_size(240.0, 180.0);
    let viewport = Viewport::new(1280.0, 800.0);
    let options = PositionOptions::default().with_offset(4.0);

    c.bench_function("position_flip_and_shift", |b| {
        b.iter(|| {
            compute_position(
                black_box(&reference),
                black_box(&floating),
                black_box(viewport),
                black_box(&options),
            )
        })
    });
}

fn position_all_placements(c: &mut Criterion) {
    let reference = Rect::new(20.0, 20.0, 80.0, 24.0);
    let floating = Rect::from_size(160.0, 120.0);
    let viewport = Viewport::new(375.0, 667.0);

    c.bench_function("position_all_placements", |b| {
        b.iter(|| {
            for placement in Placement::ALL {
                let options = PositionOptions::new(placement);
                black_box(compute_position(&reference, &floating, viewport, &options));
            }
        })
    });
}

criterion_group!(benches, position_no_overflow, position_flip_and_shift, position_all_placements);
criterion_main!(benches);
