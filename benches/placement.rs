use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::Vec2;
use linelabel::{LineLayout, LinePlacement, Placement, Point};
use std::hint::black_box;

/// A zigzag polyline with gentle bends, long enough to carry many labels.
fn zigzag(points: usize) -> Vec<Point> {
    (0..points)
        .map(|i| {
            let x = i as f32 * 24.0;
            let y = if i % 2 == 0 { 0.0 } else { 9.0 };
            Vec2::new(x, y)
        })
        .collect()
}

fn first_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_placement");
    for n in [16usize, 256, 2048] {
        let points = zigzag(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let placement = LinePlacement::new(
                    black_box(Vec2::new(18.0, 6.0)),
                    points,
                    LineLayout::default(),
                );
                black_box(placement.is_discarded())
            });
        });
    }
    group.finish();
}

fn advance_to_exhaustion(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_to_exhaustion");
    for n in [16usize, 256, 2048] {
        let points = zigzag(n);
        let layout = LineLayout {
            placement: Placement::Corner,
            segment_sizes: vec![6.0, 6.0, 6.0],
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let mut count = 0usize;
                let mut placement = Some(LinePlacement::new(
                    black_box(Vec2::new(18.0, 6.0)),
                    points,
                    layout.clone(),
                ));
                while let Some(current) = placement {
                    count += current.candidates().len();
                    placement = current.advance();
                }
                black_box(count)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, first_placement, advance_to_exhaustion);
criterion_main!(benches);
