// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cyclic loop timeline.
//!
//! Construction mirrors the classic seamless-loop recipe: each item gets two
//! constant-velocity segments, one tweening it from its natural position to
//! the wrap point and one re-splicing it from the far side back to its
//! natural position. Looping wraps the playhead time modulo the cycle
//! duration instead of resetting positions, so there is never a visible jump.

use crate::config::{LoopConfig, Repeat};
use crate::cursor::{IndexCursor, closest_label};
use crate::geometry::{ItemMeasure, LoopState, wrap_progress, wrap_time};
use crate::tween::{Tween, TweenVars};

/// Per-item sampling keypoints, all in percent-of-own-width.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    /// Offset at the cycle start (and end).
    start_percent: f64,
    /// Offset at the instant the item fully leaves the strip.
    exit_percent: f64,
    /// Offset it re-enters from on the opposite side, exactly one total
    /// content width away from the exit.
    reentry_percent: f64,
    /// Seconds from cycle start until the item has fully left.
    exit_time: f64,
}

/// A seamless horizontal loop over measured items.
///
/// Playback, index navigation, and drag scrubbing all drive the same wrapped
/// playhead; sampling an item at any time yields its percent offset.
#[derive(Debug, Clone)]
pub struct LoopTimeline {
    state: LoopState,
    tracks: Vec<Track>,
    times: Vec<f64>,
    duration: f64,
    time: f64,
    paused: bool,
    reversed: bool,
    remaining_cycles: Option<u32>,
    tween: Option<Tween>,
    cursor: IndexCursor,
}

impl LoopTimeline {
    /// Builds the loop from item measurements.
    ///
    /// `container_width` is the visible width of the wrapper, used only for
    /// center alignment. Returns `None` for an empty item list. A single
    /// item, or a zero speed, degenerates to a static zero-duration loop.
    #[must_use]
    pub fn build(items: &[ItemMeasure], container_width: f64, config: LoopConfig) -> Option<Self> {
        let state = LoopState::measure(items, config.snap, config.padding_right)?;
        let pps = config.pixels_per_second();
        let is_static = items.len() == 1 || pps <= 0.0 || state.total_width <= 0.0;

        let mut tracks = Vec::with_capacity(items.len());
        let mut labels = Vec::with_capacity(items.len());
        let duration = if is_static {
            0.0
        } else {
            state.total_width / pps
        };

        for (i, item) in items.iter().enumerate() {
            let width = state.widths[i];
            let start_percent = state.x_percents[i];
            if is_static {
                tracks.push(Track {
                    start_percent,
                    exit_percent: start_percent,
                    reentry_percent: start_percent,
                    exit_time: 0.0,
                });
                labels.push(0.0);
                continue;
            }

            let cur_x = (start_percent / 100.0) * width;
            let distance_to_start =
                item.offset_left + cur_x - state.start_x + state.space_before[0];
            let distance_to_loop = distance_to_start + width * item.scale_x;
            let percent_of = |px: f64| {
                if width > 0.0 {
                    config.snap.apply((px / width) * 100.0)
                } else {
                    0.0
                }
            };
            tracks.push(Track {
                start_percent,
                exit_percent: percent_of(cur_x - distance_to_loop),
                reentry_percent: percent_of(cur_x - distance_to_loop + state.total_width),
                exit_time: distance_to_loop / pps,
            });
            labels.push(distance_to_start / pps);
        }

        // "Arrival at start" instants, optionally shifted so the current item
        // is the one nearest the container's center.
        let times = if config.center && !is_static {
            let time_offset = duration * (container_width / 2.0) / state.total_width;
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let half_item = duration * state.widths[i] / 2.0 / state.total_width;
                    wrap_time(label + half_item - time_offset, duration)
                })
                .collect()
        } else {
            labels
                .iter()
                .map(|label| wrap_time(*label, duration))
                .collect()
        };

        let remaining_cycles = match config.repeat {
            Repeat::Infinite => None,
            Repeat::Finite(n) => Some(n),
        };

        let mut timeline = Self {
            state,
            tracks,
            times,
            duration,
            time: 0.0,
            paused: config.paused,
            reversed: config.reversed,
            remaining_cycles,
            tween: None,
            cursor: IndexCursor::default(),
        };
        timeline.cursor.current = closest_label(&timeline.times, 0.0, timeline.duration);
        Some(timeline)
    }

    /// Number of items on the track.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if the track has no items. Never true for a built
    /// timeline; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Full cycle duration in seconds. Zero for degenerate loops.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Total content width of one cycle, in pixels.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.state.total_width
    }

    /// The layout state bundle this timeline was built from.
    #[must_use]
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// Start-label time per item, in seconds.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Start-label positions as progress fractions in `[0, 1)`.
    #[must_use]
    pub fn label_progresses(&self) -> Vec<f64> {
        if self.duration <= 0.0 {
            return vec![0.0; self.times.len()];
        }
        self.times.iter().map(|t| t / self.duration).collect()
    }

    /// Samples the percent offset of item `index` at an arbitrary time.
    ///
    /// Time wraps modulo the duration, so `t` and `t + duration` always
    /// produce identical offsets.
    #[must_use]
    pub fn x_percent_at(&self, index: usize, t: f64) -> f64 {
        let Some(track) = self.tracks.get(index) else {
            return 0.0;
        };
        if self.duration <= 0.0 {
            return track.start_percent;
        }
        let t = wrap_time(t, self.duration);
        if t < track.exit_time {
            if track.exit_time <= 0.0 {
                return track.start_percent;
            }
            let ratio = t / track.exit_time;
            track.start_percent + (track.exit_percent - track.start_percent) * ratio
        } else {
            let tail = self.duration - track.exit_time;
            if tail <= 0.0 {
                return track.start_percent;
            }
            let ratio = (t - track.exit_time) / tail;
            track.reentry_percent + (track.start_percent - track.reentry_percent) * ratio
        }
    }

    /// Samples every item at the current playhead.
    #[must_use]
    pub fn x_percents_now(&self) -> Vec<f64> {
        (0..self.tracks.len())
            .map(|i| self.x_percent_at(i, self.time))
            .collect()
    }

    /// Advances the playhead by `dt` seconds.
    ///
    /// An active tween drives the playhead regardless of the paused flag;
    /// otherwise motion respects pause, reverse, and the repeat budget.
    pub fn advance(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        if let Some(mut tween) = self.tween.take() {
            let t = tween.advance(dt);
            self.time = wrap_time(t, self.duration);
            if !tween.is_done() {
                self.tween = Some(tween);
            }
            return;
        }
        if self.paused || self.duration <= 0.0 || dt == 0.0 {
            return;
        }
        // Free-running motion moves the playhead past labels, so the cursor
        // re-resolves on the next query. Navigation tweens pin it instead.
        self.cursor.dirty = true;

        let direction = if self.reversed { -1.0 } else { 1.0 };
        let mut t = self.time + dt * direction;
        if self.reversed {
            while t < 0.0 {
                if self.consume_cycle() {
                    t += self.duration;
                } else {
                    t = 0.0;
                    self.paused = true;
                    break;
                }
            }
        } else {
            while t >= self.duration {
                if self.consume_cycle() {
                    t -= self.duration;
                } else {
                    t = self.duration;
                    self.paused = true;
                    break;
                }
            }
        }
        self.time = t;
    }

    /// Current playhead time in `[0, duration]`.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Jumps the playhead, wrapping into the cycle.
    pub fn set_time(&mut self, t: f64) {
        self.time = wrap_time(t, self.duration);
        self.cursor.dirty = true;
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            0.0
        } else {
            self.time / self.duration
        }
    }

    /// Jumps to a progress fraction, folding into `[0, 1)`.
    pub fn set_progress(&mut self, progress: f64) {
        if self.duration > 0.0 {
            self.time = wrap_progress(progress) * self.duration;
            self.cursor.dirty = true;
        }
    }

    /// Drag scrubbing: overwrite any in-flight tween and jump the playhead.
    pub fn scrub_progress(&mut self, progress: f64) {
        self.tween = None;
        self.set_progress(progress);
    }

    /// Cancels an in-flight playhead tween, freezing at the current time.
    pub fn kill_tween(&mut self) {
        self.tween = None;
    }

    /// Returns `true` while an index-navigation tween is running.
    #[must_use]
    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    /// Pauses playback.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes playback.
    pub fn play(&mut self) {
        self.paused = false;
    }

    /// Flips between paused and playing, returning the new paused flag.
    pub fn toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Current paused flag.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Sets the travel direction.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Current reverse flag.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Index of the item whose start label is closest to the playhead,
    /// measuring time-distance the shorter way around the cycle.
    pub fn closest_index(&mut self, set_current: bool) -> usize {
        let index = closest_label(&self.times, self.time, self.duration);
        if set_current {
            self.cursor.current = index;
            self.cursor.dirty = false;
        }
        index
    }

    /// The current item index, lazily re-resolved after a throw.
    pub fn current(&mut self) -> usize {
        if self.cursor.dirty {
            self.closest_index(true)
        } else {
            self.cursor.current
        }
    }

    /// Marks the cursor unresolved (e.g. after a drag-driven throw).
    pub fn mark_index_dirty(&mut self) {
        self.cursor.dirty = true;
    }

    /// Animates to the next item.
    pub fn next(&mut self, vars: TweenVars) {
        let target = self.current() as isize + 1;
        self.to_index(target, vars);
    }

    /// Animates to the previous item.
    pub fn previous(&mut self, vars: TweenVars) {
        let target = self.current() as isize - 1;
        self.to_index(target, vars);
    }

    /// Animates to a zero-based item index, always travelling the shorter
    /// rotational direction.
    pub fn to_index(&mut self, index: isize, vars: TweenVars) {
        if self.tracks.is_empty() {
            return;
        }
        let n = self.tracks.len() as isize;
        let cur = self.current() as isize;
        let mut index = index;
        if (index - cur).abs() > n / 2 {
            index += if index > cur { -n } else { n };
        }
        // rem_euclid with a positive modulus is non-negative.
        let new_index = index.rem_euclid(n) as usize;
        let mut target = self.times[new_index];
        // If the naive target sits on the wrong side of the playhead for the
        // travel direction, go around through the cycle boundary instead.
        if (target > self.time) != (index > cur) && index != cur {
            target += self.duration * if index > cur { 1.0 } else { -1.0 };
        }
        self.cursor.current = new_index;
        self.cursor.dirty = false;
        if vars.duration == Some(0.0) || self.duration <= 0.0 {
            self.tween = None;
            self.time = wrap_time(target, self.duration);
        } else {
            self.tween = Some(Tween::new(self.time, target, vars));
        }
    }

    fn consume_cycle(&mut self) -> bool {
        match &mut self.remaining_cycles {
            None => true,
            Some(0) => false,
            Some(n) => {
                *n -= 1;
                true
            }
        }
    }
}
