// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay: one floating element's placement, visibility, and outside-press membership.
//!
//! ## Overview
//!
//! [`Overlay`] is the glue a presentational component (tooltip, popover, menu)
//! delegates to. It owns a [`VisibilityController`], remembers the last
//! [`Positioned`] result, and keeps its entry in a shared [`OutsideRegistry`]
//! in sync with its visibility:
//!
//! - When it becomes visible and closes on outside presses, it registers its boundary.
//! - When it becomes hidden or unmounts, it unregisters.
//!
//! Entries are tied to the overlay with a [`Lifeline`], so dropping an overlay
//! without unmounting still removes it from outside-press checks, and the
//! registry reports the listener `Detach` on its next press or prune. Its
//! timers live inside the controller and go away with it.
//!
//! Rendering is left to the caller: apply [`Overlay::positioned`] as the
//! floating element's absolute offset and mount or show it according to
//! [`Overlay::is_visible`].
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Size};
//! use understory_overlay::outside::{ListenerChange, OutsideRegistry, RectBoundary};
//! use understory_overlay::overlay::{Overlay, OverlayConfig};
//! use understory_overlay::visibility::{VisibilityChange, VisibilityEvent};
//!
//! let mut registry: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
//! let mut menu = Overlay::new(7, OverlayConfig::menu());
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let trigger = Rect::from_origin_size((20.0, 20.0), (60.0, 24.0));
//! let size = Size::new(160.0, 120.0);
//! let placed = menu.reposition(trigger, size, viewport);
//!
//! let boundary = || RectBoundary::new([trigger, placed.rect(size)]);
//! let update = menu.dispatch(VisibilityEvent::Toggle, Duration::ZERO, &mut registry, boundary);
//! assert_eq!(update.change, Some(VisibilityChange::Shown));
//! assert_eq!(update.listener, Some(ListenerChange::Attach));
//!
//! // A press elsewhere closes the menu and detaches the global listener.
//! for id in registry.pointer_down(&Point::new(700.0, 500.0)).outside {
//!     assert_eq!(id, menu.id());
//!     let update = menu.dispatch(
//!         VisibilityEvent::OutsidePointerDown,
//!         Duration::ZERO,
//!         &mut registry,
//!         boundary,
//!     );
//!     assert_eq!(update.listener, Some(ListenerChange::Detach));
//! }
//! assert!(!menu.is_visible());
//! ```

use core::time::Duration;

use kurbo::{Rect, Size};
use understory_placement::{Placement, PlacementOptions, Positioned, compute_position};

use crate::outside::{Lifeline, ListenerChange, OutsideRegistry};
use crate::types::{Delays, InteractionMode, VisibilityConfig};
use crate::visibility::{VisibilityChange, VisibilityController, VisibilityEvent, VisibilityState};

/// The floating components that share this core.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverlayKind {
    /// Hover/focus label, shown after a delay above the trigger.
    Tooltip,
    /// Click-toggled panel below the trigger.
    Popover,
    /// Click-toggled list of actions below the trigger.
    Menu,
}

/// Everything an [`Overlay`] needs besides geometry.
///
/// The default is a hover overlay below the trigger that ignores outside presses.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// Requested side, gap, and flip behavior.
    pub placement: PlacementOptions,
    /// Triggers and delays.
    pub visibility: VisibilityConfig,
    /// Register with the [`OutsideRegistry`] while visible.
    pub close_on_outside: bool,
}

impl OverlayConfig {
    /// Tooltip preset: hover or focus, top, gap 8, show after 200 ms, hide at once.
    pub fn tooltip() -> Self {
        Self {
            placement: PlacementOptions::new(Placement::Top),
            visibility: VisibilityConfig::for_mode(InteractionMode::Hover),
            close_on_outside: false,
        }
    }

    /// Popover preset: click, bottom, gap 8, closes on outside press.
    pub fn popover() -> Self {
        Self {
            placement: PlacementOptions::new(Placement::Bottom),
            visibility: VisibilityConfig::for_mode(InteractionMode::Click),
            close_on_outside: true,
        }
    }

    /// Menu preset: click, bottom, gap 4, closes on outside press.
    pub fn menu() -> Self {
        Self {
            placement: PlacementOptions::new(Placement::Bottom).with_gap(4.0),
            visibility: VisibilityConfig::for_mode(InteractionMode::Click),
            close_on_outside: true,
        }
    }

    /// The preset for `kind`.
    pub fn for_kind(kind: OverlayKind) -> Self {
        match kind {
            OverlayKind::Tooltip => Self::tooltip(),
            OverlayKind::Popover => Self::popover(),
            OverlayKind::Menu => Self::menu(),
        }
    }

    /// Switch interaction mode, keeping delays.
    #[must_use]
    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.visibility.triggers = mode.triggers();
        self
    }

    /// Replace the requested side.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement.placement = placement;
        self
    }

    /// Replace the gap.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.placement.gap = gap;
        self
    }

    /// Replace the delays.
    #[must_use]
    pub fn with_delays(mut self, delays: Delays) -> Self {
        self.visibility.delays = delays;
        self
    }

    /// Enable or disable closing on outside presses.
    #[must_use]
    pub fn with_close_on_outside(mut self, close: bool) -> Self {
        self.close_on_outside = close;
        self
    }
}

/// Result of driving an [`Overlay`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct OverlayUpdate {
    /// Change of the visible flag.
    pub change: Option<VisibilityChange>,
    /// Change to apply to the global pointer-down listener.
    pub listener: Option<ListenerChange>,
}

impl OverlayUpdate {
    /// True if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.change.is_none() && self.listener.is_none()
    }
}

/// One floating element.
#[derive(Debug)]
pub struct Overlay<Id> {
    id: Id,
    config: OverlayConfig,
    controller: VisibilityController,
    positioned: Option<Positioned>,
    lifeline: Lifeline,
}

impl<Id: Copy + Eq> Overlay<Id> {
    /// A closed overlay identified by `id` in the outside registry.
    pub fn new(id: Id, config: OverlayConfig) -> Self {
        Self {
            id,
            config,
            controller: VisibilityController::new(config.visibility),
            positioned: None,
            lifeline: Lifeline::new(),
        }
    }

    /// A closed overlay with the preset for `kind`.
    pub fn with_kind(id: Id, kind: OverlayKind) -> Self {
        Self::new(id, OverlayConfig::for_kind(kind))
    }

    /// Registry id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Triggers, delays, and placement take effect for the next transition and
    /// the next [`reposition`](Self::reposition). Registry membership follows
    /// `close_on_outside` at once; `boundary` is only called when a visible
    /// overlay has to join.
    pub fn set_config<B>(
        &mut self,
        config: OverlayConfig,
        registry: &mut OutsideRegistry<Id, B>,
        boundary: impl FnOnce() -> B,
    ) -> OverlayUpdate {
        self.config = config;
        self.controller.set_config(config.visibility);
        let registered = registry.contains(&self.id);
        let listener = match (self.is_visible() && config.close_on_outside, registered) {
            (true, false) => registry.register_owned(self.id, boundary(), &self.lifeline),
            (false, true) => registry.unregister(&self.id),
            _ => None,
        };
        OverlayUpdate {
            change: None,
            listener,
        }
    }

    /// Visibility state.
    pub fn state(&self) -> VisibilityState {
        self.controller.state()
    }

    /// Whether the floating element should be shown.
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    /// When [`advance`](Self::advance) should next be called, if a timer is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.controller.next_deadline()
    }

    /// Last computed position, if any.
    pub fn positioned(&self) -> Option<Positioned> {
        self.positioned
    }

    /// Compute and remember the floating element's position.
    ///
    /// Call this after measuring, and again whenever the trigger, the floating
    /// element, or the viewport changes. A [provisional](Positioned::provisional)
    /// result means the floating element still needs measuring.
    pub fn reposition(&mut self, trigger: Rect, floating: Size, viewport: Rect) -> Positioned {
        let positioned = compute_position(trigger, floating, &self.config.placement, viewport);
        #[cfg(feature = "tracing")]
        if positioned.placement != self.config.placement.placement {
            tracing::debug!(
                requested = ?self.config.placement.placement,
                actual = ?positioned.placement,
                "overlay flipped"
            );
        }
        self.positioned = Some(positioned);
        positioned
    }

    /// Apply an event at time `now` and keep `registry` in sync.
    ///
    /// `boundary` is only called when the overlay registers.
    pub fn dispatch<B>(
        &mut self,
        event: VisibilityEvent,
        now: Duration,
        registry: &mut OutsideRegistry<Id, B>,
        boundary: impl FnOnce() -> B,
    ) -> OverlayUpdate {
        let change = self.controller.dispatch(event, now);
        self.sync(change, registry, boundary)
    }

    /// Fire an expired timer at time `now` and keep `registry` in sync.
    pub fn advance<B>(
        &mut self,
        now: Duration,
        registry: &mut OutsideRegistry<Id, B>,
        boundary: impl FnOnce() -> B,
    ) -> OverlayUpdate {
        let change = self.controller.advance(now);
        self.sync(change, registry, boundary)
    }

    /// Replace this overlay's boundary in `registry` if it is registered.
    ///
    /// Call after [`reposition`](Self::reposition) while visible.
    pub fn update_boundary<B>(&self, registry: &mut OutsideRegistry<Id, B>, boundary: B) -> bool {
        registry.update(&self.id, boundary)
    }

    /// Cancel timers, hide, and leave the registry. The overlay stays inert afterwards.
    pub fn unmount<B>(&mut self, registry: &mut OutsideRegistry<Id, B>) -> OverlayUpdate {
        let change = self.controller.unmount();
        OverlayUpdate {
            change,
            listener: registry.unregister(&self.id),
        }
    }

    fn sync<B>(
        &mut self,
        change: Option<VisibilityChange>,
        registry: &mut OutsideRegistry<Id, B>,
        boundary: impl FnOnce() -> B,
    ) -> OverlayUpdate {
        let listener = match change {
            Some(VisibilityChange::Shown) if self.config.close_on_outside => {
                registry.register_owned(self.id, boundary(), &self.lifeline)
            }
            Some(VisibilityChange::Hidden) => registry.unregister(&self.id),
            _ => None,
        };
        OverlayUpdate { change, listener }
    }
}
