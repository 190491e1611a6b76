// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for loop construction.

/// Baseline travel rate in pixels per second at `speed = 1.0`.
pub(crate) const BASE_PIXELS_PER_SECOND: f64 = 100.0;

/// Repeat policy for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Loop forever.
    #[default]
    Infinite,
    /// Wrap this many times, then freeze at the cycle boundary.
    Finite(u32),
}

/// Percent-offset snapping policy.
///
/// Some layout engines shift flex items by a pixel back and forth as widths
/// alternate, so offsets written as percentages are snapped to a unit before
/// being stored. `None` disables snapping at the loop splice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Snap {
    /// Keep raw values.
    None,
    /// Snap to the nearest multiple of the unit (whole percents by default).
    #[default]
    Unit,
    /// Snap to the nearest multiple of a custom step.
    Step(f64),
}

impl Snap {
    /// Applies the snapping policy to a percent value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::None => value,
            Self::Unit => value.round(),
            Self::Step(step) if step > 0.0 => (value / step).round() * step,
            Self::Step(_) => value,
        }
    }
}

/// Configuration for [`LoopTimeline::build`](crate::LoopTimeline::build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    /// Speed multiplier; `1.0` travels at roughly 100 pixels per second.
    pub speed: f64,
    /// Repeat policy.
    pub repeat: Repeat,
    /// Start paused.
    pub paused: bool,
    /// Start reversed (items travel rightward).
    pub reversed: bool,
    /// Treat the item nearest the container's center as current, rather than
    /// the one nearest its left edge.
    pub center: bool,
    /// Extra pixels appended after the last item before the loop wraps.
    pub padding_right: f64,
    /// Percent-offset snapping policy.
    pub snap: Snap,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            repeat: Repeat::Infinite,
            paused: false,
            reversed: false,
            center: false,
            padding_right: 0.0,
            snap: Snap::Unit,
        }
    }
}

impl LoopConfig {
    /// Effective travel rate in pixels per second.
    #[must_use]
    pub fn pixels_per_second(&self) -> f64 {
        self.speed.max(0.0) * BASE_PIXELS_PER_SECOND
    }
}
