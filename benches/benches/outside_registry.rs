// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_overlay::outside::{Lifeline, OutsideRegistry, RectBoundary};

fn gen_boundaries(count: usize) -> Vec<RectBoundary> {
    (0..count)
        .map(|i| {
            let x = (i % 16) as f64 * 80.0;
            let y = (i / 16) as f64 * 60.0;
            RectBoundary::new([
                Rect::from_origin_size((x, y), (60.0, 20.0)),
                Rect::from_origin_size((x, y + 24.0), (120.0, 80.0)),
            ])
        })
        .collect()
}

fn bench_pointer_down(c: &mut Criterion) {
    let mut group = c.benchmark_group("outside_registry");
    for &n in &[1usize, 4, 16, 64] {
        let boundaries = gen_boundaries(n);
        let mut registry: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        for (i, b) in boundaries.iter().cloned().enumerate() {
            let _ = registry.register(i as u32, b);
        }
        group.bench_function(format!("pointer_down_n{}", n), |b| {
            b.iter(|| black_box(registry.pointer_down(&Point::new(30.0, 30.0)).outside));
        });

        // Owned entries whose owners are all gone: pointer down prunes them.
        group.bench_function(format!("prune_dead_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut registry: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
                    let lifelines: Vec<Lifeline> = (0..n).map(|_| Lifeline::new()).collect();
                    for (i, (b, l)) in boundaries.iter().cloned().zip(&lifelines).enumerate() {
                        let _ = registry.register_owned(i as u32, b, l);
                    }
                    registry
                },
                |mut registry| black_box(registry.pointer_down(&Point::new(30.0, 30.0)).outside),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pointer_down);
criterion_main!(benches);
