// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip timeline.
//!
//! Drive a hover tooltip with a virtual clock: enter, show after the delay,
//! leave and re-enter within the hide delay, then leave for good.
//! Transitions are logged through `tracing`.
//!
//! Run:
//! - `cargo run -p understory_overlay_demos --example tooltip_timeline`

use core::time::Duration;

use tracing_subscriber::filter::LevelFilter;
use understory_overlay::outside::{OutsideRegistry, RectBoundary};
use understory_overlay::overlay::{Overlay, OverlayConfig};
use understory_overlay::types::Delays;
use understory_overlay::visibility::{VisibilityChange, VisibilityEvent};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .init();

    let ms = Duration::from_millis;
    let mut registry: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
    let config = OverlayConfig::tooltip().with_delays(Delays::new(ms(200), ms(100)));
    let mut tip = Overlay::new(1, config);

    let script = [
        (0, Some(VisibilityEvent::PointerEnter)),
        (150, None),
        (200, None),
        (400, Some(VisibilityEvent::PointerLeave)),
        (450, Some(VisibilityEvent::PointerEnter)),
        (600, None),
        (700, Some(VisibilityEvent::PointerLeave)),
        (800, None),
    ];

    let mut changes = Vec::new();
    for (t, event) in script {
        let now = ms(t);
        let update = match event {
            Some(event) => tip.dispatch(event, now, &mut registry, RectBoundary::default),
            None => tip.advance(now, &mut registry, RectBoundary::default),
        };
        println!(
            "t={t:>4}ms {:<14} state={:?} visible={}",
            event.map_or("(tick)".into(), |e| format!("{e:?}")),
            tip.state(),
            tip.is_visible()
        );
        changes.extend(update.change);
    }

    // Shown once, hidden once; the re-entry at 450ms never hid it.
    assert_eq!(
        changes,
        vec![VisibilityChange::Shown, VisibilityChange::Hidden]
    );
}
