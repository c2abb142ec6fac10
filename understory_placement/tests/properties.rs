// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the placement calculator.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_placement::{Placement, PlacementOptions, compute_position, fits};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 500.0, 500.0);

fn placement() -> impl Strategy<Value = Placement> {
    prop_oneof![
        Just(Placement::Top),
        Just(Placement::Bottom),
        Just(Placement::Left),
        Just(Placement::Right),
    ]
}

fn trigger() -> impl Strategy<Value = Rect> {
    (0.0..450.0_f64, 0.0..450.0_f64, 0.0..50.0_f64, 0.0..50.0_f64)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size((x, y), (w, h)))
}

proptest! {
    #[test]
    fn same_inputs_same_output(
        t in trigger(),
        w in 0.0..600.0_f64,
        h in 0.0..600.0_f64,
        p in placement(),
        gap in -10.0..20.0_f64,
    ) {
        let options = PlacementOptions::new(p).with_gap(gap);
        let a = compute_position(t, Size::new(w, h), &options, VIEWPORT);
        let b = compute_position(t, Size::new(w, h), &options, VIEWPORT);
        prop_assert_eq!(a, b);
    }

    // Elements that fit in the viewport always stay on the cross axis.
    #[test]
    fn cross_axis_stays_inside_viewport(
        t in trigger(),
        w in 1.0..500.0_f64,
        h in 1.0..500.0_f64,
        p in placement(),
    ) {
        let out = compute_position(t, Size::new(w, h), &PlacementOptions::new(p), VIEWPORT);
        prop_assert!(!out.provisional);
        match out.placement {
            Placement::Top | Placement::Bottom => {
                prop_assert!(out.origin.x >= VIEWPORT.x0);
                prop_assert!(out.origin.x + w <= VIEWPORT.x1 + 1e-9);
            }
            Placement::Left | Placement::Right => {
                prop_assert!(out.origin.y >= VIEWPORT.y0);
                prop_assert!(out.origin.y + h <= VIEWPORT.y1 + 1e-9);
            }
        }
    }

    // A flip only ever lands on the opposite side, and only when that side fits.
    #[test]
    fn flips_only_to_a_fitting_opposite(
        t in trigger(),
        w in 1.0..300.0_f64,
        h in 1.0..300.0_f64,
        p in placement(),
        gap in 0.0..20.0_f64,
    ) {
        let size = Size::new(w, h);
        let out = compute_position(t, size, &PlacementOptions::new(p).with_gap(gap), VIEWPORT);
        if out.placement != p {
            prop_assert_eq!(out.placement, p.opposite());
            prop_assert!(!fits(t, size, p, gap, VIEWPORT));
            prop_assert!(fits(t, size, p.opposite(), gap, VIEWPORT));
        }
        if fits(t, size, p, gap, VIEWPORT) {
            prop_assert_eq!(out.placement, p);
        }
    }
}
