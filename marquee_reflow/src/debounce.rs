// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce over host-supplied timestamps.

/// Default quiet period in seconds before a burst is considered settled.
pub const DEFAULT_DELAY: f64 = 0.02;

/// Collapses a burst of notifications into a single trailing trigger.
///
/// Resize events arrive at high frequency while a window edge is being
/// dragged; only the settled final geometry should trigger a rebuild.
/// Each [`note`](Self::note) pushes the deadline out; [`poll`](Self::poll)
/// reports `true` exactly once after the burst has been quiet for the
/// configured delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debouncer {
    delay: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period in seconds.
    #[must_use]
    pub fn new(delay: f64) -> Self {
        Self {
            delay: delay.max(0.0),
            deadline: None,
        }
    }

    /// Records a notification at `now`, extending the quiet period.
    pub fn note(&mut self, now: f64) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` once the burst has settled; arms again on the next
    /// [`note`](Self::note).
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while a trigger is armed but has not fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarms any pending trigger.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
