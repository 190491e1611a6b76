// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-velocity estimation from a short window of movement samples.

use smallvec::SmallVec;

/// Seconds of history kept for velocity resolution.
const SAMPLE_WINDOW: f64 = 0.09;
/// A pointer that has rested this long releases with no velocity.
const IDLE_CUTOFF: f64 = 0.065;
/// Hard cap on resolved velocity magnitude, in pixels per second.
const MAX_VELOCITY: f64 = 6000.0;

/// Tracks recent horizontal movement to estimate throw velocity on release.
///
/// Samples older than the window are pruned; resolution weights newer
/// samples more heavily and damps toward zero as the pointer idles before
/// release, so a drag that stops moving does not still "throw".
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[(f64, f64); 8]>,
    last_sample_time: Option<f64>,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a horizontal movement of `dx` pixels ending at `now`.
    pub fn push(&mut self, now: f64, dx: f64) {
        let Some(last) = self.last_sample_time.replace(now) else {
            return;
        };
        let dt = now - last;
        if dt <= 0.0 {
            return;
        }
        let v = clamp_velocity(dx / dt);
        self.samples.push((now, v));
        self.prune(now);
    }

    /// Resolves the release velocity in pixels per second, or `None` when
    /// there is nothing meaningful to throw with.
    pub fn resolve(&mut self, now: f64) -> Option<f64> {
        self.prune(now);
        if self.samples.is_empty() {
            return None;
        }
        let idle = self
            .last_sample_time
            .map_or(f64::INFINITY, |last| (now - last).max(0.0));

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for &(timestamp, v) in &self.samples {
            let age = (now - timestamp).clamp(0.0, SAMPLE_WINDOW);
            let weight = SAMPLE_WINDOW - age;
            if weight > 0.0 {
                weighted_sum += v * weight;
                total_weight += weight;
            }
        }
        if total_weight <= f64::EPSILON {
            self.samples.clear();
            return None;
        }

        let damping = (1.0 - idle / IDLE_CUTOFF).clamp(0.0, 1.0);
        let v = clamp_velocity(weighted_sum / total_weight * damping);
        (v != 0.0).then_some(v)
    }

    /// Drops all history.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.last_sample_time = None;
    }

    fn prune(&mut self, now: f64) {
        self.samples.retain(|(timestamp, _)| now - *timestamp <= SAMPLE_WINDOW);
    }
}

fn clamp_velocity(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    v.clamp(-MAX_VELOCITY, MAX_VELOCITY)
}
