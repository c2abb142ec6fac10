// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility controller: a delayed show/hide state machine per overlay.
//!
//! ## States
//!
//! `Closed → PendingOpen → Open → PendingClose → Closed`. The pending states
//! hold a single timer deadline; there is never more than one pending timer,
//! so arming a show timer cancels a hide timer and vice versa.
//!
//! | Current | Event | Next |
//! |---|---|---|
//! | `Closed` | enter / focus | `PendingOpen` (show timer armed) |
//! | `PendingOpen` | leave / blur | `Closed` (show timer canceled) |
//! | `PendingOpen` | show timer fires | `Open` |
//! | `Open` | leave / blur | `PendingClose` (hide timer armed) |
//! | `PendingClose` | enter / focus | `Open` (hide timer canceled) |
//! | `PendingClose` | hide timer fires | `Closed` |
//! | any | outside press / dismiss / unmount | `Closed` (timers canceled) |
//! | `Closed` / `Open` | toggle | `Open` / `Closed` |
//!
//! Every other combination is a no-op. A zero delay skips the pending state.
//!
//! ## Time
//!
//! The controller never schedules anything. Timers are deadlines on a
//! caller-supplied monotonic clock, given as a [`Duration`] since any fixed
//! epoch. Ask [`VisibilityController::next_deadline`] when to wake up and call
//! [`VisibilityController::advance`] with the current time to fire an expired
//! timer. Dropping the controller drops its timers with it.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_overlay::types::VisibilityConfig;
//! use understory_overlay::visibility::{VisibilityChange, VisibilityController, VisibilityEvent};
//!
//! let ms = Duration::from_millis;
//! let mut tip = VisibilityController::new(VisibilityConfig::default());
//!
//! assert_eq!(tip.dispatch(VisibilityEvent::PointerEnter, ms(0)), None);
//! assert_eq!(tip.next_deadline(), Some(ms(200)));
//! assert_eq!(tip.advance(ms(199)), None);
//! assert_eq!(tip.advance(ms(200)), Some(VisibilityChange::Shown));
//! assert!(tip.is_visible());
//!
//! // Default hide delay is zero: leaving hides immediately.
//! assert_eq!(tip.dispatch(VisibilityEvent::PointerLeave, ms(500)), Some(VisibilityChange::Hidden));
//! ```

use core::time::Duration;

use crate::types::{Triggers, VisibilityConfig};

/// Visibility state of one overlay.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum VisibilityState {
    /// Hidden, no timer pending.
    #[default]
    Closed,
    /// Hidden, show timer pending.
    PendingOpen,
    /// Shown, no timer pending.
    Open,
    /// Shown, hide timer pending.
    PendingClose,
}

impl VisibilityState {
    /// Whether the overlay is shown in this state.
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Open | Self::PendingClose)
    }
}

/// Input to [`VisibilityController::dispatch`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VisibilityEvent {
    /// Pointer entered the trigger or the floating element.
    PointerEnter,
    /// Pointer left the trigger or the floating element.
    PointerLeave,
    /// The trigger gained keyboard focus.
    Focus,
    /// The trigger lost keyboard focus.
    Blur,
    /// The trigger was clicked.
    Toggle,
    /// A pointer press landed outside the trigger and the floating element.
    OutsidePointerDown,
    /// An explicit request to close, such as the Escape key.
    Dismiss,
    /// The owning component is going away. The controller becomes inert.
    Unmount,
}

impl VisibilityEvent {
    /// The trigger source this event belongs to, if any.
    ///
    /// Events without a source are always honored.
    pub const fn source(self) -> Option<Triggers> {
        match self {
            Self::PointerEnter | Self::PointerLeave => Some(Triggers::HOVER),
            Self::Focus | Self::Blur => Some(Triggers::FOCUS),
            Self::Toggle => Some(Triggers::CLICK),
            Self::OutsidePointerDown | Self::Dismiss | Self::Unmount => None,
        }
    }
}

/// Visible-flag change produced by a transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VisibilityChange {
    /// The overlay became visible.
    Shown,
    /// The overlay became hidden.
    Hidden,
}

/// Kind of a pending timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TimerKind {
    /// Fires the transition to `Open`.
    Show,
    /// Fires the transition to `Closed`.
    Hide,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct PendingTimer {
    kind: TimerKind,
    deadline: Duration,
}

/// Delayed show/hide state machine for one overlay.
///
/// See the [module docs](self) for the transition table.
#[derive(Clone, Debug)]
pub struct VisibilityController {
    config: VisibilityConfig,
    state: VisibilityState,
    // Non-empty exactly in the pending states.
    timer: Option<PendingTimer>,
    unmounted: bool,
}

impl VisibilityController {
    /// Create a closed controller.
    pub fn new(config: VisibilityConfig) -> Self {
        Self {
            config,
            state: VisibilityState::Closed,
            timer: None,
            unmounted: false,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// A pending timer keeps its deadline; new delays apply from the next
    /// transition.
    pub fn set_config(&mut self, config: VisibilityConfig) {
        self.config = config;
    }

    /// Current state.
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Whether the overlay should be shown.
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Whether [`VisibilityEvent::Unmount`] was dispatched.
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// The pending timer, if any.
    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.timer.map(|t| t.kind)
    }

    /// When the pending timer fires, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.map(|t| t.deadline)
    }

    /// Apply an event at time `now`.
    ///
    /// Returns the change of the visible flag, if the event caused one.
    /// Events from disabled trigger sources and events after unmount are
    /// ignored.
    pub fn dispatch(&mut self, event: VisibilityEvent, now: Duration) -> Option<VisibilityChange> {
        use VisibilityEvent::*;
        use VisibilityState::*;

        if self.unmounted {
            return None;
        }
        if let Some(source) = event.source()
            && !self.config.triggers.intersects(source)
        {
            return None;
        }

        match (self.state, event) {
            (_, Unmount) => {
                self.unmounted = true;
                self.close()
            }
            (_, OutsidePointerDown | Dismiss) => self.close(),
            (Closed, PointerEnter | Focus) => self.arm(TimerKind::Show, now),
            (PendingOpen, PointerLeave | Blur) => {
                self.timer = None;
                self.set_state(Closed);
                None
            }
            (Open, PointerLeave | Blur) => self.arm(TimerKind::Hide, now),
            (PendingClose, PointerEnter | Focus) => {
                self.timer = None;
                self.set_state(Open);
                None
            }
            (Closed | PendingOpen, Toggle) => self.open(),
            (Open | PendingClose, Toggle) => self.close(),
            (PendingOpen | Open, PointerEnter | Focus)
            | (Closed | PendingClose, PointerLeave | Blur) => None,
        }
    }

    /// Fire the pending timer if its deadline is at or before `now`.
    pub fn advance(&mut self, now: Duration) -> Option<VisibilityChange> {
        if self.unmounted {
            return None;
        }
        let timer = self.timer.filter(|t| t.deadline <= now)?;
        match timer.kind {
            TimerKind::Show => self.open(),
            TimerKind::Hide => self.close(),
        }
    }

    /// Close and become inert. Same as dispatching [`VisibilityEvent::Unmount`].
    pub fn unmount(&mut self) -> Option<VisibilityChange> {
        self.dispatch(VisibilityEvent::Unmount, Duration::ZERO)
    }

    fn arm(&mut self, kind: TimerKind, now: Duration) -> Option<VisibilityChange> {
        let delay = match kind {
            TimerKind::Show => self.config.delays.show,
            TimerKind::Hide => self.config.delays.hide,
        };
        if delay.is_zero() {
            return match kind {
                TimerKind::Show => self.open(),
                TimerKind::Hide => self.close(),
            };
        }
        let deadline = now.saturating_add(delay);
        // Replacing the slot cancels whatever was pending.
        self.timer = Some(PendingTimer { kind, deadline });
        #[cfg(feature = "tracing")]
        tracing::trace!(?kind, ?deadline, "armed overlay timer");
        self.set_state(match kind {
            TimerKind::Show => VisibilityState::PendingOpen,
            TimerKind::Hide => VisibilityState::PendingClose,
        });
        None
    }

    fn open(&mut self) -> Option<VisibilityChange> {
        self.timer = None;
        let was_visible = self.is_visible();
        self.set_state(VisibilityState::Open);
        (!was_visible).then_some(VisibilityChange::Shown)
    }

    fn close(&mut self) -> Option<VisibilityChange> {
        self.timer = None;
        let was_visible = self.is_visible();
        self.set_state(VisibilityState::Closed);
        was_visible.then_some(VisibilityChange::Hidden)
    }

    fn set_state(&mut self, next: VisibilityState) {
        #[cfg(feature = "tracing")]
        if next != self.state {
            tracing::trace!(from = ?self.state, to = ?next, "overlay visibility transition");
        }
        self.state = next;
    }
}
