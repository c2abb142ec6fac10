// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow alignment for placed floating elements.

use kurbo::{Rect, Size};

use crate::compute::{non_negative, sanitize_size};
use crate::types::{Axis, Positioned};

/// Cross-axis offset at which an arrow should point at the trigger center.
///
/// The offset is measured from the floating element's start edge (left edge
/// for top/bottom placements, top edge for left/right placements) and is
/// clamped into `[padding, size - padding]` so the arrow never leaves the
/// floating element's body. When the element is too small for the padding,
/// the arrow is centered.
///
/// The arrow sits on the floating element's edge facing the trigger, which is
/// the side opposite [`Positioned::placement`].
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Placement, PlacementOptions, arrow_offset, compute_position};
///
/// let trigger = Rect::from_origin_size((10.0, 10.0), (50.0, 20.0));
/// let floating = Size::new(100.0, 40.0);
/// let viewport = Rect::new(0.0, 0.0, 500.0, 500.0);
/// let out = compute_position(trigger, floating, &PlacementOptions::new(Placement::Top), viewport);
///
/// // The element was shifted to x = 0, so the arrow moves left to stay on the trigger.
/// assert_eq!(arrow_offset(trigger, floating, &out, 6.0), 35.0);
/// ```
pub fn arrow_offset(trigger: Rect, floating: Size, positioned: &Positioned, padding: f64) -> f64 {
    let floating = sanitize_size(floating);
    let padding = non_negative(padding);
    let center = trigger.center();
    let (offset, extent) = match positioned.placement.axis() {
        Axis::Vertical => (center.x - positioned.origin.x, floating.width),
        Axis::Horizontal => (center.y - positioned.origin.y, floating.height),
    };
    if extent < 2.0 * padding {
        return extent / 2.0;
    }
    offset.min(extent - padding).max(padding)
}
