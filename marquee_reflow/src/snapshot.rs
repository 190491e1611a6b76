// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playback-state capture and restore across rebuilds.

use marquee_loop::LoopTimeline;

/// The playback state a rebuild must carry across timelines.
///
/// A rebuild replaces the timeline wholesale; the only state that survives
/// is the normalized progress and the paused/reversed flags. Progress is
/// stored as a fraction so it transfers cleanly between timelines whose
/// durations differ after a reflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    /// Normalized playhead position in `[0, 1)`.
    pub progress: f64,
    /// Whether the strip was travelling rightward.
    pub reversed: bool,
    /// Whether playback was paused.
    pub paused: bool,
}

impl PlaybackSnapshot {
    /// Reads the playback state off an existing timeline.
    #[must_use]
    pub fn capture(timeline: &LoopTimeline) -> Self {
        Self {
            progress: timeline.progress(),
            reversed: timeline.is_reversed(),
            paused: timeline.is_paused(),
        }
    }

    /// Applies the captured state to a freshly built timeline.
    pub fn restore(&self, timeline: &mut LoopTimeline) {
        timeline.set_reversed(self.reversed);
        timeline.set_progress(self.progress);
        if self.paused {
            timeline.pause();
        } else {
            timeline.play();
        }
    }
}
