// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_overlay --heading-base-level=0

//! Understory Overlay: headless show/hide and dismissal logic for floating elements.
//!
//! ## Overview
//!
//! Tooltips, popovers, and menus differ in how they look, but share the same
//! behavior underneath. This crate is that shared behavior, with no rendering:
//!
//! - [`visibility`]: a per-overlay state machine (`Closed → PendingOpen → Open → PendingClose`)
//!   with show/hide delays, re-entry without flicker, and click toggling.
//! - [`outside`]: one registry behind a single global pointer-down listener that reports
//!   which open overlays a press landed outside of.
//! - [`overlay`]: glue that combines the two with [`understory_placement`] and presets for
//!   tooltips, popovers, and menus.
//!
//! ## Inputs and outputs
//!
//! The crate takes pre-measured rects, pre-resolved press targets, and a
//! monotonic timestamp with each event. It returns positions, visible-flag
//! changes, and whether the global listener should be attached. It does not
//! own a clock or schedule callbacks: timers are deadlines that the caller
//! fires with `advance(now)`.
//!
//! ## Lifetime
//!
//! Dropping an overlay drops its pending timers. An overlay's outside-press
//! entry is tied to it, so a dropped overlay never receives another close
//! request, and the registry reports the listener `Detach` from its next
//! press or prune. Attach and detach always alternate.
//!
//! ## Workflow
//!
//! 1) Create one [`OutsideRegistry`](crate::outside::OutsideRegistry) for the
//!    window and one [`Overlay`](crate::overlay::Overlay) per floating element.
//! 2) Feed trigger events (enter, leave, focus, blur, click) into
//!    [`Overlay::dispatch`](crate::overlay::Overlay::dispatch) with the current time.
//! 3) When [`Overlay::next_deadline`](crate::overlay::Overlay::next_deadline)
//!    passes, call [`Overlay::advance`](crate::overlay::Overlay::advance).
//! 4) After the floating element is measured, call
//!    [`Overlay::reposition`](crate::overlay::Overlay::reposition) and apply the origin.
//! 5) On a global pointer down, ask the registry which overlays to close, apply
//!    its listener change, and dispatch [`OutsidePointerDown`](crate::visibility::VisibilityEvent::OutsidePointerDown) to each.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use understory_overlay::outside::{OutsideRegistry, RectBoundary};
//! use understory_overlay::overlay::{Overlay, OverlayKind};
//! use understory_overlay::visibility::{VisibilityChange, VisibilityEvent};
//!
//! let mut registry: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
//! let mut tip = Overlay::with_kind(1, OverlayKind::Tooltip);
//! let ms = Duration::from_millis;
//!
//! tip.dispatch(VisibilityEvent::PointerEnter, ms(0), &mut registry, RectBoundary::default);
//! let update = tip.advance(ms(200), &mut registry, RectBoundary::default);
//! assert_eq!(update.change, Some(VisibilityChange::Shown));
//!
//! let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
//! let trigger = Rect::from_origin_size((400.0, 300.0), (100.0, 30.0));
//! let placed = tip.reposition(trigger, Size::new(180.0, 40.0), viewport);
//! assert_eq!(placed.origin.y, 252.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod outside;
pub mod overlay;
pub mod types;
pub mod visibility;
