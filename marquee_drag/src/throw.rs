// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertial throw: exponential decay of release velocity into a resting
//! progress.

use crate::session::wrap01;

/// Resting positions closer than this (in progress units, scaled by content
/// width at the call site) are considered settled.
const SETTLE_EPSILON: f64 = 1e-4;
/// Safety cap so a throw can never animate forever on pathological input.
const MAX_THROW_SECONDS: f64 = 10.0;

/// An in-flight inertial throw on the progress axis.
///
/// The progress approaches its resting target along `rest - (rest - from) *
/// exp(-k * t)`, which is the closed form of velocity decaying at rate `k`.
/// The target is kept unwrapped so motion continues smoothly through the
/// cycle boundary; sampled values are folded into `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throw {
    from: f64,
    /// Unwrapped resting progress.
    rest: f64,
    decay: f64,
    elapsed: f64,
}

impl Throw {
    /// Starts a throw from `progress` with the given velocity in progress
    /// units per second.
    ///
    /// `resistance` shapes the decay rate; the natural resting point is
    /// `progress + velocity / decay`. When `snap_labels` is provided, the
    /// resting point is quantized to the nearest label (in progress units,
    /// measured the shorter way around the cycle).
    #[must_use]
    pub fn new(
        progress: f64,
        velocity: f64,
        resistance: f64,
        snap_labels: Option<&[f64]>,
    ) -> Self {
        let decay = decay_rate(resistance);
        let natural_rest = progress + velocity / decay;
        let rest = match snap_labels {
            Some(labels) => snap_to_labels(natural_rest, labels),
            None => natural_rest,
        };
        Self {
            from: progress,
            rest,
            decay,
            elapsed: 0.0,
        }
    }

    /// A throw that glides to an explicit unwrapped resting progress,
    /// used by the short-drag spike guard.
    #[must_use]
    pub fn to_rest(progress: f64, rest: f64, resistance: f64) -> Self {
        Self {
            from: progress,
            rest,
            decay: decay_rate(resistance),
            elapsed: 0.0,
        }
    }

    /// Advances by `dt` seconds and returns the wrapped progress.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);
        wrap01(self.sample())
    }

    /// The unwrapped resting progress this throw is decaying toward.
    #[must_use]
    pub fn rest(&self) -> f64 {
        self.rest
    }

    /// Returns `true` when the throw has effectively settled.
    #[must_use]
    pub fn is_done(&self) -> bool {
        if self.elapsed >= MAX_THROW_SECONDS {
            return true;
        }
        (self.rest - self.sample()).abs() < SETTLE_EPSILON
    }

    /// The final wrapped progress.
    #[must_use]
    pub fn final_progress(&self) -> f64 {
        wrap01(self.rest)
    }

    fn sample(&self) -> f64 {
        if self.elapsed >= MAX_THROW_SECONDS {
            return self.rest;
        }
        self.rest - (self.rest - self.from) * (-self.decay * self.elapsed).exp()
    }
}

fn decay_rate(resistance: f64) -> f64 {
    // resistance 10 decays at 5/s, settling in roughly a second.
    (resistance * 0.5).max(0.5)
}

/// Quantizes an unwrapped progress to the nearest label, measuring distance
/// the shorter way around the cycle and preserving the unwrapped winding.
fn snap_to_labels(progress: f64, labels: &[f64]) -> f64 {
    if labels.is_empty() {
        return progress;
    }
    let wrapped = wrap01(progress);
    let mut best = 0.0;
    let mut closest = f64::INFINITY;
    for &label in labels {
        let mut diff = label - wrapped;
        if diff > 0.5 {
            diff -= 1.0;
        } else if diff < -0.5 {
            diff += 1.0;
        }
        if diff.abs() < closest {
            closest = diff.abs();
            best = diff;
        }
    }
    progress + best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(mut throw: Throw) -> f64 {
        let mut p = 0.0;
        for _ in 0..10_000 {
            p = throw.advance(0.016);
            if throw.is_done() {
                break;
            }
        }
        assert!(throw.is_done(), "throw never settled");
        p
    }

    #[test]
    fn rests_at_progress_plus_velocity_over_decay() {
        let throw = Throw::new(0.2, 0.5, 10.0, None);
        // decay = 5.0, so the natural rest is 0.2 + 0.1.
        assert!((throw.rest() - 0.3).abs() < 1e-12);
        let landed = run_to_rest(throw);
        assert!((landed - 0.3).abs() < 1e-3);
    }

    #[test]
    fn motion_is_monotonic_toward_rest() {
        let mut throw = Throw::new(0.1, 0.2, 10.0, None);
        let mut last = 0.1;
        while !throw.is_done() {
            let p = throw.advance(0.016);
            assert!(p >= last - 1e-12, "{p} regressed past {last}");
            last = p;
        }
    }

    #[test]
    fn snap_quantizes_to_the_nearest_label() {
        let labels = [0.0, 0.25, 0.5, 0.75];
        let throw = Throw::new(0.2, 0.3, 10.0, Some(&labels));
        // Natural rest 0.26 snaps to 0.25.
        assert!((throw.rest() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn snap_wraps_through_the_cycle_boundary() {
        let labels = [0.0, 0.25, 0.5, 0.75];
        let throw = Throw::new(0.9, 0.3, 10.0, Some(&labels));
        // Natural rest 0.96: the closest label is 0.0, approached from
        // below (unwrapped 1.0), not by rewinding to 0.75.
        assert!((throw.rest() - 1.0).abs() < 1e-12);
        assert!((throw.final_progress() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn negative_velocity_throws_backwards() {
        let throw = Throw::new(0.1, -0.3, 10.0, None);
        assert!((throw.rest() - 0.04).abs() < 1e-12);
        assert!((throw.final_progress() - 0.04).abs() < 1e-12);
    }

    #[test]
    fn spike_guard_glide_reaches_the_forced_target() {
        let throw = Throw::to_rest(0.31, 0.25, 10.0);
        let landed = run_to_rest(throw);
        assert!((landed - 0.25).abs() < 1e-3);
    }

    #[test]
    fn pathological_decay_still_terminates() {
        let mut throw = Throw::new(0.0, 0.4, 0.0, None);
        for _ in 0..100_000 {
            throw.advance(0.016);
            if throw.is_done() {
                break;
            }
        }
        assert!(throw.is_done());
    }
}
