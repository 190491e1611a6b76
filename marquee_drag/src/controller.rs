// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture lifecycle: press, scrub, release, throw, settle.

use kurbo::Point;

use crate::session::{DragConfig, DragSession, wrap01};
use crate::throw::Throw;

/// What the timeline should do after a drag controller call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Nothing to apply.
    Idle,
    /// Scrub to this progress (active gesture).
    Scrub(f64),
    /// The gesture was a tap, not a drag.
    Tap,
    /// An inertial throw is in flight; show this progress.
    Throwing(f64),
    /// The gesture (or its throw) came to rest at this progress.
    Settled(f64),
}

/// Owns the session/throw lifecycle for one marquee instance.
///
/// The controller also carries the two pieces of cross-gesture state the
/// loop needs: the last snap position (for the short-drag spike guard) and
/// the play-state restoration flag consumed when a throw settles.
#[derive(Debug, Clone)]
pub struct DragController {
    config: DragConfig,
    session: Option<DragSession>,
    throw: Option<Throw>,
    last_snap: f64,
    resume_on_settle: bool,
}

impl DragController {
    /// Creates a controller with the given tunables.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            session: None,
            throw: None,
            last_snap: 0.0,
            resume_on_settle: false,
        }
    }

    /// Current tunables.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Replaces the tunables; takes effect from the next gesture.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }

    /// Returns `true` while a pointer is captured.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` while an inertial throw is decaying.
    #[must_use]
    pub fn is_throwing(&self) -> bool {
        self.throw.is_some()
    }

    /// Begins a gesture, interrupting any in-flight throw.
    ///
    /// Returns `false` when the gesture cannot scrub (degenerate width).
    pub fn press(
        &mut self,
        point: Point,
        now: f64,
        progress: f64,
        total_width: f64,
        was_playing: bool,
    ) -> bool {
        self.throw = None;
        self.resume_on_settle = false;
        self.session = DragSession::press(point, now, progress, total_width, was_playing);
        self.session.is_some()
    }

    /// Feeds a pointer move; returns the scrub target while captured.
    pub fn drag(&mut self, point: Point, now: f64) -> DragUpdate {
        match &mut self.session {
            Some(session) => DragUpdate::Scrub(session.drag(point, now)),
            None => DragUpdate::Idle,
        }
    }

    /// Ends the gesture at `point`, deciding between tap, settle, and throw.
    ///
    /// `labels` are item-start positions as progress fractions, used for
    /// snap quantization.
    pub fn release(&mut self, point: Point, now: f64, labels: &[f64]) -> DragUpdate {
        let Some(mut session) = self.session.take() else {
            return DragUpdate::Idle;
        };
        let progress = session.drag(point, now);
        let travel = session.total_travel().abs();

        if travel < self.config.tap_threshold {
            self.resume_on_settle = session.was_playing();
            return DragUpdate::Tap;
        }

        let snap_labels = self.config.drag_snap.then_some(labels);

        // A press-and-release in the middle of a throw can report a huge
        // instantaneous velocity. When the pointer barely moved, distrust it
        // and glide back to the last known snap instead.
        if travel < self.config.spike_threshold {
            let rest = nearest_winding(progress, self.last_snap);
            return self.start_throw(
                Throw::to_rest(progress, rest, self.config.resistance),
                session.was_playing(),
                progress,
            );
        }

        let velocity = session.release_velocity(now).unwrap_or(0.0);
        let pixel_velocity = velocity.abs() * (1.0 / session.ratio());
        if pixel_velocity < self.config.min_velocity {
            // Not a throw. Settle in place, or glide onto the nearest label.
            match snap_labels {
                Some(labels) if !labels.is_empty() => {
                    let rest = nearest_winding(progress, nearest_label(progress, labels));
                    return self.start_throw(
                        Throw::to_rest(progress, rest, self.config.resistance),
                        session.was_playing(),
                        progress,
                    );
                }
                _ => {
                    self.resume_on_settle = session.was_playing();
                    self.last_snap = progress;
                    return DragUpdate::Settled(progress);
                }
            }
        }

        let throw = Throw::new(progress, velocity, self.config.resistance, snap_labels);
        self.start_throw(throw, session.was_playing(), progress)
    }

    /// Advances an in-flight throw by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> DragUpdate {
        let Some(mut throw) = self.throw.take() else {
            return DragUpdate::Idle;
        };
        let progress = throw.advance(dt);
        if throw.is_done() {
            let final_progress = throw.final_progress();
            self.last_snap = final_progress;
            DragUpdate::Settled(final_progress)
        } else {
            self.throw = Some(throw);
            DragUpdate::Throwing(progress)
        }
    }

    /// Consumes the "resume playback" flag set when a gesture settles.
    pub fn take_resume(&mut self) -> bool {
        core::mem::take(&mut self.resume_on_settle)
    }

    /// Aborts any gesture or throw without settling (e.g. a rebuild while
    /// the pointer is captured simply ends the session early).
    pub fn cancel(&mut self) {
        self.session = None;
        self.throw = None;
        self.resume_on_settle = false;
    }

    fn start_throw(&mut self, throw: Throw, was_playing: bool, progress: f64) -> DragUpdate {
        self.resume_on_settle = was_playing;
        self.throw = Some(throw);
        DragUpdate::Throwing(wrap01(progress))
    }
}

/// The label (wrapped) closest to `progress`, the shorter way around.
fn nearest_label(progress: f64, labels: &[f64]) -> f64 {
    let wrapped = wrap01(progress);
    let mut best = wrapped;
    let mut closest = f64::INFINITY;
    for &label in labels {
        let mut d = (label - wrapped).abs();
        if d > 0.5 {
            d = 1.0 - d;
        }
        if d < closest {
            closest = d;
            best = label;
        }
    }
    best
}

/// Rewinds a wrapped target onto the winding nearest to `from`, so a glide
/// crosses the cycle boundary instead of sweeping the long way around.
fn nearest_winding(from: f64, target_wrapped: f64) -> f64 {
    let base = wrap01(target_wrapped);
    let mut diff = base - wrap01(from);
    if diff > 0.5 {
        diff -= 1.0;
    } else if diff < -0.5 {
        diff += 1.0;
    }
    from + diff
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [f64; 4] = [0.0, 0.25, 0.5, 0.75];

    fn controller() -> DragController {
        DragController::new(DragConfig::default())
    }

    fn settle(c: &mut DragController) -> f64 {
        for _ in 0..10_000 {
            if let DragUpdate::Settled(p) = c.tick(0.016) {
                return p;
            }
        }
        panic!("throw never settled");
    }

    #[test]
    fn tap_is_not_a_drag() {
        let mut c = controller();
        assert!(c.press(Point::new(100.0, 0.0), 0.0, 0.3, 2000.0, true));
        c.drag(Point::new(101.0, 0.0), 0.01);
        assert_eq!(
            c.release(Point::new(101.0, 0.0), 0.02, &LABELS),
            DragUpdate::Tap
        );
        assert!(!c.is_throwing());
        assert!(c.take_resume());
    }

    #[test]
    fn slow_drag_with_snap_glides_to_nearest_label() {
        let mut c = controller();
        c.press(Point::new(1000.0, 0.0), 0.0, 0.0, 2000.0, false);
        // 560 px leftward, slowly: progress 0.28, nearest label 0.25.
        for i in 1..=28 {
            c.drag(Point::new(1000.0 - i as f64 * 20.0, 0.0), i as f64 * 0.5);
        }
        let update = c.release(Point::new(440.0, 0.0), 14.5, &LABELS);
        assert!(matches!(update, DragUpdate::Throwing(_)));
        let landed = settle(&mut c);
        assert!((landed - 0.25).abs() < 1e-3, "landed {landed}");
    }

    #[test]
    fn slow_drag_without_snap_settles_in_place() {
        let mut c = DragController::new(DragConfig {
            drag_snap: false,
            ..DragConfig::default()
        });
        c.press(Point::new(1000.0, 0.0), 0.0, 0.0, 2000.0, true);
        for i in 1..=28 {
            c.drag(Point::new(1000.0 - i as f64 * 20.0, 0.0), i as f64 * 0.5);
        }
        let update = c.release(Point::new(440.0, 0.0), 14.5, &LABELS);
        let DragUpdate::Settled(p) = update else {
            panic!("expected settle, got {update:?}");
        };
        assert!((p - 0.28).abs() < 1e-12);
        assert!(c.take_resume());
        assert!(!c.take_resume());
    }

    #[test]
    fn fast_drag_throws_beyond_the_release_point() {
        let mut c = DragController::new(DragConfig {
            drag_snap: false,
            ..DragConfig::default()
        });
        c.press(Point::new(1000.0, 0.0), 0.0, 0.0, 2000.0, false);
        // 40 px per 16 ms is 2500 px/s leftward.
        for i in 1..=5 {
            c.drag(Point::new(1000.0 - i as f64 * 40.0, 0.0), i as f64 * 0.016);
        }
        let released_at = 200.0 / 2000.0;
        c.release(Point::new(800.0, 0.0), 5.0 * 0.016, &LABELS);
        let landed = settle(&mut c);
        assert!(landed > released_at, "landed {landed}");
    }

    #[test]
    fn short_drag_spike_returns_to_last_snap() {
        let mut c = controller();
        // Establish a snap at 0.25 with a real gesture.
        c.press(Point::new(1000.0, 0.0), 0.0, 0.0, 2000.0, false);
        for i in 1..=28 {
            c.drag(Point::new(1000.0 - i as f64 * 20.0, 0.0), i as f64 * 0.5);
        }
        c.release(Point::new(440.0, 0.0), 14.5, &LABELS);
        settle(&mut c);

        // A 5 px nudge mid-throw must not trust its spiky velocity.
        c.press(Point::new(500.0, 0.0), 20.0, 0.25, 2000.0, false);
        c.drag(Point::new(495.0, 0.0), 20.001);
        let update = c.release(Point::new(495.0, 0.0), 20.002, &LABELS);
        assert!(matches!(update, DragUpdate::Throwing(_)));
        let landed = settle(&mut c);
        assert!((landed - 0.25).abs() < 1e-3, "landed {landed}");
    }

    #[test]
    fn press_interrupts_a_throw() {
        let mut c = controller();
        c.press(Point::new(1000.0, 0.0), 0.0, 0.0, 2000.0, false);
        for i in 1..=5 {
            c.drag(Point::new(1000.0 - i as f64 * 40.0, 0.0), i as f64 * 0.016);
        }
        c.release(Point::new(800.0, 0.0), 5.0 * 0.016, &LABELS);
        assert!(c.is_throwing());
        c.press(Point::new(700.0, 0.0), 1.0, 0.15, 2000.0, false);
        assert!(!c.is_throwing());
        assert!(c.is_dragging());
    }

    #[test]
    fn cancel_ends_everything_without_resume() {
        let mut c = controller();
        c.press(Point::new(100.0, 0.0), 0.0, 0.0, 2000.0, true);
        c.cancel();
        assert!(!c.is_dragging());
        assert_eq!(c.tick(0.016), DragUpdate::Idle);
        assert!(!c.take_resume());
    }
}
