// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration types: triggers, interaction modes, and delays.

use core::time::Duration;

bitflags::bitflags! {
    /// Input sources that may open or close an overlay.
    ///
    /// Events from a source that is not enabled are ignored by the
    /// [`VisibilityController`](crate::visibility::VisibilityController).
    /// Dismissal (outside press, [`Dismiss`](crate::visibility::VisibilityEvent::Dismiss))
    /// and unmount are always honored.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Triggers: u8 {
        /// Pointer enter/leave on the trigger or floating element.
        const HOVER = 0b0000_0001;
        /// Keyboard focus entering/leaving the trigger.
        const FOCUS = 0b0000_0010;
        /// Click on the trigger toggles the overlay.
        const CLICK = 0b0000_0100;
    }
}

impl Default for Triggers {
    fn default() -> Self {
        InteractionMode::default().triggers()
    }
}

/// How an overlay is opened.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InteractionMode {
    /// Opens on hover or focus after a delay (tooltips).
    #[default]
    Hover,
    /// Toggles on click with no delay (menus, popovers).
    Click,
}

impl InteractionMode {
    /// The trigger set used by this mode.
    pub const fn triggers(self) -> Triggers {
        match self {
            Self::Hover => Triggers::HOVER.union(Triggers::FOCUS),
            Self::Click => Triggers::CLICK,
        }
    }
}

/// Show and hide delays.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delays {
    /// Time between entering the trigger and showing the overlay.
    pub show: Duration,
    /// Time between leaving and hiding the overlay. Re-entering within this
    /// window keeps the overlay open.
    pub hide: Duration,
}

impl Delays {
    /// Default show delay.
    pub const DEFAULT_SHOW: Duration = Duration::from_millis(200);
    /// Default hide delay.
    pub const DEFAULT_HIDE: Duration = Duration::ZERO;
    /// No delay in either direction.
    pub const NONE: Self = Self {
        show: Duration::ZERO,
        hide: Duration::ZERO,
    };

    /// Delays from durations.
    pub const fn new(show: Duration, hide: Duration) -> Self {
        Self { show, hide }
    }

    /// Delays from fractional milliseconds.
    ///
    /// Negative and NaN values become zero; values too large for a
    /// [`Duration`] saturate.
    pub fn from_millis_f64(show: f64, hide: f64) -> Self {
        Self {
            show: duration_from_millis_f64(show),
            hide: duration_from_millis_f64(hide),
        }
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SHOW, Self::DEFAULT_HIDE)
    }
}

fn duration_from_millis_f64(ms: f64) -> Duration {
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
}

/// Configuration of a [`VisibilityController`](crate::visibility::VisibilityController).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisibilityConfig {
    /// Enabled input sources.
    pub triggers: Triggers,
    /// Show/hide delays; only used by hover and focus.
    pub delays: Delays,
}

impl VisibilityConfig {
    /// Configuration for `mode` with default delays.
    pub fn for_mode(mode: InteractionMode) -> Self {
        Self {
            triggers: mode.triggers(),
            delays: Delays::default(),
        }
    }

    /// Replace the delays.
    #[must_use]
    pub const fn with_delays(mut self, delays: Delays) -> Self {
        self.delays = delays;
        self
    }

    /// Replace the trigger set.
    #[must_use]
    pub const fn with_triggers(mut self, triggers: Triggers) -> Self {
        self.triggers = triggers;
        self
    }
}
