// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{Placement, PlacementOptions, compute_position};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Triggers scattered over the viewport, so a share of them sit near an edge
/// and exercise flipping and clamping.
fn gen_triggers(count: usize, viewport: Rect) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let w = 20.0 + rng.next_f64() * 100.0;
            let h = 16.0 + rng.next_f64() * 24.0;
            let x = rng.next_f64() * (viewport.width() - w);
            let y = rng.next_f64() * (viewport.height() - h);
            Rect::from_origin_size((x, y), (w, h))
        })
        .collect()
}

fn bench_compute_position(c: &mut Criterion) {
    let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let triggers = gen_triggers(1024, viewport);
    let mut group = c.benchmark_group("compute_position");
    group.throughput(Throughput::Elements(triggers.len() as u64));
    for side in Placement::ALL {
        let options = PlacementOptions::new(side);
        for (label, size) in [
            ("small", Size::new(120.0, 32.0)),
            ("large", Size::new(480.0, 360.0)),
        ] {
            group.bench_function(format!("{side:?}_{label}"), |b| {
                b.iter(|| {
                    for &t in &triggers {
                        black_box(compute_position(t, size, &options, viewport));
                    }
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_compute_position);
criterion_main!(benches);
