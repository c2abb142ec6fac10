// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: sides, axes, options, and results.

use kurbo::{Point, Rect, Size};

/// Side of the trigger on which a floating element is placed.
///
/// The side requested by the caller may differ from the side the calculator
/// resolves to; see [`Positioned::placement`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Placement {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    #[default]
    Bottom,
    /// To the left of the trigger.
    Left,
    /// To the right of the trigger.
    Right,
}

impl Placement {
    /// All four sides, in declaration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The side across the trigger from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The main axis: the axis along which the floating element is offset
    /// from the trigger.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Whether this side sits at the start (top or left) of its axis.
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Top | Self::Left)
    }
}

/// A layout axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Options for [`compute_position`](crate::compute_position).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementOptions {
    /// Requested side.
    pub placement: Placement,
    /// Distance between the trigger edge and the floating element edge along
    /// the main axis. Negative or NaN values are treated as zero.
    pub gap: f64,
    /// Flip to the opposite side when the requested side overflows the
    /// viewport on the main axis and the opposite side fits.
    ///
    /// When `false`, main-axis overflow is always clamped.
    pub flip: bool,
}

impl PlacementOptions {
    /// Default distance between trigger and floating element.
    pub const DEFAULT_GAP: f64 = 8.0;

    /// Options for `placement` with the default gap and flipping enabled.
    pub const fn new(placement: Placement) -> Self {
        Self {
            placement,
            gap: Self::DEFAULT_GAP,
            flip: true,
        }
    }

    /// Replace the gap.
    #[must_use]
    pub const fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Enable or disable flipping.
    #[must_use]
    pub const fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self::new(Placement::default())
    }
}

/// Result of a placement computation.
///
/// A `Positioned` is a snapshot derived from one trigger rect, one floating
/// size, and one set of options. It is never adjusted in place; when the
/// inputs change (scroll, resize, content change) compute a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Positioned {
    /// Top-left corner of the floating element, in the same coordinate space
    /// as the trigger and viewport.
    pub origin: Point,
    /// The side actually used. Differs from the requested side after a flip;
    /// use it to orient an arrow.
    pub placement: Placement,
    /// True when the floating element had no measurable size and `origin` is
    /// just the trigger center.
    ///
    /// Render the floating element invisibly, measure it, and compute again.
    pub provisional: bool,
}

impl Positioned {
    /// The floating element's rect at this position.
    pub fn rect(&self, floating: Size) -> Rect {
        Rect::from_origin_size(self.origin, floating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for p in Placement::ALL {
            assert_eq!(p.opposite().opposite(), p);
            assert_ne!(p.opposite(), p);
            assert_eq!(p.opposite().axis(), p.axis());
        }
    }

    #[test]
    fn axes_and_start_sides() {
        assert_eq!(Placement::Top.axis(), Axis::Vertical);
        assert_eq!(Placement::Right.axis(), Axis::Horizontal);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
        assert!(Placement::Top.is_start());
        assert!(Placement::Left.is_start());
        assert!(!Placement::Bottom.is_start());
        assert!(!Placement::Right.is_start());
    }

    #[test]
    fn default_options() {
        let o = PlacementOptions::default();
        assert_eq!(o.placement, Placement::Bottom);
        assert_eq!(o.gap, 8.0);
        assert!(o.flip);
        let o = PlacementOptions::new(Placement::Left)
            .with_gap(2.0)
            .with_flip(false);
        assert_eq!(o.placement, Placement::Left);
        assert_eq!(o.gap, 2.0);
        assert!(!o.flip);
    }

    #[test]
    fn positioned_rect_uses_origin_and_size() {
        let p = Positioned {
            origin: Point::new(3.0, 4.0),
            placement: Placement::Top,
            provisional: false,
        };
        assert_eq!(
            p.rect(Size::new(10.0, 20.0)),
            Rect::new(3.0, 4.0, 13.0, 24.0)
        );
    }
}
