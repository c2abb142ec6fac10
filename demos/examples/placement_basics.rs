// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Place a tooltip on each side of a trigger, then move the trigger into a
//! corner and watch the main axis flip and the cross axis clamp.
//!
//! Run:
//! - `cargo run -p understory_overlay_demos --example placement_basics`

use kurbo::{Point, Rect, Size};
use understory_placement::{Placement, PlacementOptions, arrow_offset, compute_position};

fn main() {
    let viewport = Rect::new(0.0, 0.0, 500.0, 500.0);
    let floating = Size::new(100.0, 40.0);

    let centered = Rect::from_origin_size((200.0, 200.0), (50.0, 20.0));
    println!("== Centered trigger ==");
    for side in Placement::ALL {
        let out = compute_position(centered, floating, &PlacementOptions::new(side), viewport);
        println!("  {side:?}: origin {:?} (actual {:?})", out.origin, out.placement);
        assert_eq!(out.placement, side);
    }

    // No room above: flips below, and the left edge is clamped to the viewport.
    let corner = Rect::from_origin_size((10.0, 10.0), (50.0, 20.0));
    let out = compute_position(
        corner,
        floating,
        &PlacementOptions::new(Placement::Top),
        viewport,
    );
    let arrow = arrow_offset(corner, floating, &out, 6.0);
    println!("== Corner trigger ==");
    println!(
        "  requested Top -> {:?} at {:?}, arrow at {arrow}",
        out.placement, out.origin
    );
    assert_eq!(out.placement, Placement::Bottom);
    assert_eq!(out.origin, Point::new(0.0, 38.0));

    // Not measured yet: provisional result at the trigger center.
    let out = compute_position(
        corner,
        Size::ZERO,
        &PlacementOptions::new(Placement::Top),
        viewport,
    );
    println!("== Unmeasured ==\n  {:?}", out);
    assert!(out.provisional);
}
