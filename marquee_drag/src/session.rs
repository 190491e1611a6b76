// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single drag gesture mapped onto the timeline's progress axis.

use kurbo::Point;

use crate::velocity::VelocityTracker;

/// Tunables for drag and throw behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Exponential decay strength of an inertial throw; higher stops sooner.
    pub resistance: f64,
    /// Release velocities below this (pixels per second) settle in place
    /// instead of throwing.
    pub min_velocity: f64,
    /// Quantize the throw's resting position to the nearest item-start
    /// label.
    pub drag_snap: bool,
    /// Pointer travel (pixels) under which a release is treated as a spike:
    /// the computed velocity is distrusted and the last known snap is kept.
    /// Empirical, deliberately tunable.
    pub spike_threshold: f64,
    /// Pointer travel (pixels) under which the whole gesture counts as a
    /// tap rather than a drag.
    pub tap_threshold: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            resistance: 10.0,
            min_velocity: 50.0,
            drag_snap: true,
            spike_threshold: 10.0,
            tap_threshold: 3.0,
        }
    }
}

/// Ephemeral state of one pointer gesture.
///
/// Created on press, destroyed on release; a session never outlives its
/// gesture. Only the horizontal pointer component matters.
#[derive(Debug, Clone)]
pub struct DragSession {
    press_x: f64,
    last_x: f64,
    start_progress: f64,
    /// Progress per pixel: `1 / total_width`.
    ratio: f64,
    was_playing: bool,
    tracker: VelocityTracker,
}

impl DragSession {
    /// Starts a gesture at `point`, capturing the timeline's progress and
    /// establishing the pixel-to-progress ratio.
    ///
    /// Returns `None` for degenerate content widths, where scrubbing is
    /// meaningless.
    #[must_use]
    pub fn press(
        point: Point,
        now: f64,
        progress: f64,
        total_width: f64,
        was_playing: bool,
    ) -> Option<Self> {
        if total_width.is_nan() || total_width <= 0.0 {
            return None;
        }
        let mut tracker = VelocityTracker::new();
        tracker.push(now, 0.0);
        Some(Self {
            press_x: point.x,
            last_x: point.x,
            start_progress: progress,
            ratio: 1.0 / total_width,
            was_playing,
            tracker,
        })
    }

    /// Feeds a pointer move and returns the scrubbed progress in `[0, 1)`.
    pub fn drag(&mut self, point: Point, now: f64) -> f64 {
        self.tracker.push(now, point.x - self.last_x);
        self.last_x = point.x;
        self.progress_at(point.x)
    }

    /// Progress the timeline should show for a pointer at `x`.
    #[must_use]
    pub fn progress_at(&self, x: f64) -> f64 {
        wrap01(self.start_progress + (self.press_x - x) * self.ratio)
    }

    /// Total pointer travel since press, in pixels (signed).
    #[must_use]
    pub fn total_travel(&self) -> f64 {
        self.last_x - self.press_x
    }

    /// Progress captured at press time.
    #[must_use]
    pub fn start_progress(&self) -> f64 {
        self.start_progress
    }

    /// The pixel-to-progress ratio for this gesture.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Whether the timeline was playing when the gesture began.
    #[must_use]
    pub fn was_playing(&self) -> bool {
        self.was_playing
    }

    /// Resolves the release velocity in progress units per second.
    ///
    /// Dragging leftward (negative pixel velocity) advances progress, so the
    /// sign is inverted by the ratio mapping.
    pub fn release_velocity(&mut self, now: f64) -> Option<f64> {
        let pixels_per_second = self.tracker.resolve(now)?;
        Some(-pixels_per_second * self.ratio)
    }
}

/// Folds progress into `[0, 1)`.
#[must_use]
pub(crate) fn wrap01(p: f64) -> f64 {
    let wrapped = p.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
