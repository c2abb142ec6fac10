// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: Kurbo-native positioning for floating elements.
//!
//! Tooltips, popovers, and menus all need the same piece of geometry: given the
//! trigger's box, the floating element's measured size, a requested side, and
//! the visible region, decide where the floating element goes.
//!
//! - Places the floating element on the requested side, `gap` away from the
//!   trigger and centered on it.
//! - Flips to the opposite side when the requested side overflows the viewport
//!   on the main axis and the opposite side fits.
//! - Clamps the cross axis so the element stays inside the viewport. Cross-axis
//!   overflow never flips.
//! - Reports the side actually used, for orienting an arrow.
//!
//! ## Not a layout engine
//!
//! This crate does not measure anything. Upstream code measures the trigger and
//! the floating element (for instance from a box tree or the DOM) and passes
//! snapshots in. When any of them changes, compute again.
//!
//! ## Two-phase layout
//!
//! A floating element that has not been measured yet has no size. In that case
//! [`compute_position`] returns a [provisional](Positioned::provisional) result
//! at the trigger center. Render the element invisibly, measure it, then
//! compute again.
//!
//! ## API overview
//!
//! - [`compute_position`]: the calculator.
//! - [`compute_position_rect`]: same, taking the floating element as a rect.
//! - [`fits`]: whether a side fits on its main axis.
//! - [`arrow_offset`]: where an arrow should sit on the placed element.
//! - [`viewport_rect`]: the visible region in document coordinates.
//! - [`Placement`], [`Axis`], [`PlacementOptions`], [`Positioned`].
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_placement::{Placement, PlacementOptions, compute_position};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let trigger = Rect::from_origin_size((300.0, 300.0), (80.0, 24.0));
//!
//! let out = compute_position(
//!     trigger,
//!     Size::new(120.0, 32.0),
//!     &PlacementOptions::new(Placement::Top),
//!     viewport,
//! );
//! assert_eq!(out.placement, Placement::Top);
//! assert_eq!(out.origin, Point::new(280.0, 260.0));
//! assert!(!out.provisional);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod arrow;
mod compute;
mod types;

pub use arrow::arrow_offset;
pub use compute::{compute_position, compute_position_rect, fits, viewport_rect};
pub use types::{Axis, Placement, PlacementOptions, Positioned};
