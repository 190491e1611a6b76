// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playhead tweens used by index navigation.

/// Easing applied to a playhead tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    /// Constant velocity, matching the loop's own motion.
    #[default]
    None,
    /// Symmetric ease-in/ease-out (quadratic).
    PowerInOut,
}

impl Ease {
    /// Maps a linear ratio in `[0, 1]` to an eased ratio.
    #[must_use]
    pub fn eval(self, ratio: f64) -> f64 {
        let r = ratio.clamp(0.0, 1.0);
        match self {
            Self::None => r,
            Self::PowerInOut => {
                if r < 0.5 {
                    2.0 * r * r
                } else {
                    1.0 - 2.0 * (1.0 - r) * (1.0 - r)
                }
            }
        }
    }
}

/// Optional overrides for a playhead tween.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TweenVars {
    /// Tween duration in seconds. Defaults to the time distance travelled,
    /// so the playhead moves at its normal rate. Zero jumps instantly.
    pub duration: Option<f64>,
    /// Easing function.
    pub ease: Ease,
}

/// An in-flight tween of the timeline's playhead.
///
/// `to` is kept unwrapped so the playhead can travel through the cycle
/// boundary; the timeline wraps sampled values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tween {
    pub(crate) from: f64,
    pub(crate) to: f64,
    pub(crate) duration: f64,
    pub(crate) elapsed: f64,
    pub(crate) ease: Ease,
}

impl Tween {
    pub(crate) fn new(from: f64, to: f64, vars: TweenVars) -> Self {
        let duration = vars.duration.unwrap_or((to - from).abs()).max(0.0);
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            ease: vars.ease,
        }
    }

    /// Advances by `dt` seconds and returns the unwrapped playhead time.
    pub(crate) fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);
        if self.is_done() {
            return self.to;
        }
        let ratio = self.ease.eval(self.elapsed / self.duration);
        self.from + (self.to - self.from) * ratio
    }

    pub(crate) fn is_done(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ease_is_identity() {
        assert_eq!(Ease::None.eval(0.25), 0.25);
        assert_eq!(Ease::None.eval(-1.0), 0.0);
        assert_eq!(Ease::None.eval(2.0), 1.0);
    }

    #[test]
    fn power_in_out_is_symmetric_and_bounded() {
        let e = Ease::PowerInOut;
        assert_eq!(e.eval(0.0), 0.0);
        assert_eq!(e.eval(1.0), 1.0);
        assert!((e.eval(0.5) - 0.5).abs() < 1e-12);
        let early = e.eval(0.25);
        let late = e.eval(0.75);
        assert!((early + late - 1.0).abs() < 1e-12);
        assert!(early < 0.25);
    }

    #[test]
    fn default_duration_is_time_distance() {
        let tween = Tween::new(2.0, 6.0, TweenVars::default());
        assert_eq!(tween.duration, 4.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween = Tween::new(
            0.0,
            5.0,
            TweenVars {
                duration: Some(0.0),
                ease: Ease::None,
            },
        );
        assert!(tween.is_done());
        assert_eq!(tween.advance(0.016), 5.0);
    }

    #[test]
    fn advance_interpolates_toward_target() {
        let mut tween = Tween::new(0.0, 10.0, TweenVars::default());
        let mid = tween.advance(5.0);
        assert!((mid - 5.0).abs() < 1e-12);
        assert_eq!(tween.advance(5.0), 10.0);
        assert!(tween.is_done());
    }
}
