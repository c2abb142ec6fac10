// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement computation: candidate, flip, and clamp.

use kurbo::{Point, Rect, Size, Vec2};

use crate::types::{Axis, Placement, PlacementOptions, Positioned};

/// Compute where to put a floating element of size `floating` next to `trigger`.
///
/// All inputs share one coordinate space; the usual choice is document
/// coordinates, with `viewport` being the visible region after scrolling
/// (see [`viewport_rect`]).
///
/// ## Algorithm
///
/// 1. The candidate for the requested side sits `gap` away from the trigger
///    edge on the main axis and is centered on the trigger on the cross axis.
/// 2. If the candidate overflows the viewport edge in the direction of the
///    placement, the opposite side is used when flipping is enabled and the
///    opposite candidate fits on the main axis. Otherwise the main
///    coordinate is clamped to the overflowed viewport edge, inset by `gap`.
/// 3. The cross coordinate is clamped into `[start, end - size]` of the
///    viewport. The start edge wins when the floating element is larger than
///    the viewport. Cross-axis overflow never flips.
///
/// Negative and NaN sizes and gaps are treated as zero. A floating element
/// with zero width or height yields a [provisional](Positioned::provisional)
/// result at the trigger center.
///
/// ## Example
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use understory_placement::{Placement, PlacementOptions, compute_position};
///
/// let trigger = Rect::from_origin_size((10.0, 10.0), (50.0, 20.0));
/// let viewport = Rect::new(0.0, 0.0, 500.0, 500.0);
/// let options = PlacementOptions::new(Placement::Top).with_gap(8.0);
///
/// let out = compute_position(trigger, Size::new(100.0, 40.0), &options, viewport);
/// // Not enough room above: flipped below and clamped to the left edge.
/// assert_eq!(out.placement, Placement::Bottom);
/// assert_eq!(out.origin, Point::new(0.0, 38.0));
/// ```
pub fn compute_position(
    trigger: Rect,
    floating: Size,
    options: &PlacementOptions,
    viewport: Rect,
) -> Positioned {
    let trigger = sanitize_rect(trigger);
    let floating = sanitize_size(floating);
    let viewport = viewport.abs();
    let gap = non_negative(options.gap);
    let requested = options.placement;

    if floating.width <= 0.0 || floating.height <= 0.0 {
        return Positioned {
            origin: trigger.center(),
            placement: requested,
            provisional: true,
        };
    }

    let mut placement = requested;
    let mut origin = candidate(trigger, floating, requested, gap);
    if overflows_main(origin, floating, requested, viewport) {
        let opposite = requested.opposite();
        let flipped = candidate(trigger, floating, opposite, gap);
        if options.flip && fits_main(flipped, floating, opposite, viewport) {
            placement = opposite;
            origin = flipped;
        } else {
            origin = clamp_main(origin, floating, requested, gap, viewport);
        }
    }
    origin = clamp_cross(origin, floating, placement.axis().cross(), viewport);

    Positioned {
        origin,
        placement,
        provisional: false,
    }
}

/// [`compute_position`] with the floating element given as a measured rect.
///
/// Only the size of `floating` is used; its current origin is irrelevant.
/// Flipping is enabled.
pub fn compute_position_rect(
    trigger: Rect,
    floating: Rect,
    placement: Placement,
    gap: f64,
    viewport: Rect,
) -> Positioned {
    let options = PlacementOptions::new(placement).with_gap(gap);
    compute_position(trigger, floating.size(), &options, viewport)
}

/// Whether the candidate for `placement` fits inside `viewport` on the main axis.
///
/// This is the test used to decide whether a flip to `placement` is viable.
pub fn fits(trigger: Rect, floating: Size, placement: Placement, gap: f64, viewport: Rect) -> bool {
    let trigger = sanitize_rect(trigger);
    let floating = sanitize_size(floating);
    let origin = candidate(trigger, floating, placement, non_negative(gap));
    fits_main(origin, floating, placement, viewport.abs())
}

/// The visible region in document coordinates: `size` at the current scroll offset.
pub fn viewport_rect(scroll: Vec2, size: Size) -> Rect {
    Rect::from_origin_size(scroll.to_point(), sanitize_size(size))
}

fn candidate(trigger: Rect, floating: Size, placement: Placement, gap: f64) -> Point {
    let center_x = trigger.x0 + (trigger.width() - floating.width) / 2.0;
    let center_y = trigger.y0 + (trigger.height() - floating.height) / 2.0;
    match placement {
        Placement::Top => Point::new(center_x, trigger.y0 - floating.height - gap),
        Placement::Bottom => Point::new(center_x, trigger.y1 + gap),
        Placement::Left => Point::new(trigger.x0 - floating.width - gap, center_y),
        Placement::Right => Point::new(trigger.x1 + gap, center_y),
    }
}

/// Main-axis overflow past the viewport edge the placement points at.
fn overflows_main(origin: Point, floating: Size, placement: Placement, viewport: Rect) -> bool {
    match placement {
        Placement::Top => origin.y < viewport.y0,
        Placement::Bottom => origin.y + floating.height > viewport.y1,
        Placement::Left => origin.x < viewport.x0,
        Placement::Right => origin.x + floating.width > viewport.x1,
    }
}

fn fits_main(origin: Point, floating: Size, placement: Placement, viewport: Rect) -> bool {
    let (start, size, lo, hi) = axis_span(origin, floating, placement.axis(), viewport);
    start >= lo && start + size <= hi
}

fn clamp_main(
    origin: Point,
    floating: Size,
    placement: Placement,
    gap: f64,
    viewport: Rect,
) -> Point {
    match placement {
        Placement::Top => Point::new(origin.x, viewport.y0 + gap),
        Placement::Bottom => Point::new(origin.x, viewport.y1 - floating.height - gap),
        Placement::Left => Point::new(viewport.x0 + gap, origin.y),
        Placement::Right => Point::new(viewport.x1 - floating.width - gap, origin.y),
    }
}

fn clamp_cross(origin: Point, floating: Size, cross: Axis, viewport: Rect) -> Point {
    let (start, size, lo, hi) = axis_span(origin, floating, cross, viewport);
    // Upper bound first so the start edge wins for oversized elements.
    let clamped = start.min(hi - size).max(lo);
    match cross {
        Axis::Horizontal => Point::new(clamped, origin.y),
        Axis::Vertical => Point::new(origin.x, clamped),
    }
}

/// `(start, size, viewport_start, viewport_end)` along `axis`.
fn axis_span(origin: Point, floating: Size, axis: Axis, viewport: Rect) -> (f64, f64, f64, f64) {
    match axis {
        Axis::Horizontal => (origin.x, floating.width, viewport.x0, viewport.x1),
        Axis::Vertical => (origin.y, floating.height, viewport.y0, viewport.y1),
    }
}

/// Clamp negative and NaN values to zero.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}

pub(crate) fn sanitize_size(size: Size) -> Size {
    Size::new(non_negative(size.width), non_negative(size.height))
}

fn sanitize_rect(rect: Rect) -> Rect {
    Rect::from_origin_size(rect.origin(), sanitize_size(rect.size()))
}
