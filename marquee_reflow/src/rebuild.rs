// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebuild causes and their scheduling policy.

use crate::debounce::Debouncer;

bitflags::bitflags! {
    /// Why a timeline rebuild was requested.
    ///
    /// Causes accumulate until the rebuild runs, so a resize burst that also
    /// saw a late media load reports both bits in one trigger.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RebuildCause: u8 {
        /// The viewport geometry changed.
        const RESIZE = 0b0000_0001;
        /// Media finished loading late and changed layout.
        const MEDIA  = 0b0000_0010;
        /// The host explicitly requested a refresh.
        const MANUAL = 0b0000_0100;
    }
}

/// Accumulates rebuild requests and decides when the rebuild should run.
///
/// Resize requests are debounced; media and manual requests fire on the
/// next poll. Causes noted during the same burst are merged into a single
/// trigger.
#[derive(Debug, Clone)]
pub struct RebuildScheduler {
    pending: RebuildCause,
    debouncer: Debouncer,
    immediate: bool,
}

impl RebuildScheduler {
    /// Creates a scheduler with the given resize quiet period in seconds.
    #[must_use]
    pub fn new(resize_delay: f64) -> Self {
        Self {
            pending: RebuildCause::empty(),
            debouncer: Debouncer::new(resize_delay),
            immediate: false,
        }
    }

    /// Records a rebuild request at `now`.
    pub fn note(&mut self, cause: RebuildCause, now: f64) {
        self.pending |= cause;
        if cause.intersects(RebuildCause::MEDIA | RebuildCause::MANUAL) {
            self.immediate = true;
        }
        if cause.contains(RebuildCause::RESIZE) {
            self.debouncer.note(now);
        }
    }

    /// Returns the accumulated causes once a rebuild is due, clearing them.
    pub fn poll(&mut self, now: f64) -> Option<RebuildCause> {
        let due = core::mem::take(&mut self.immediate) | self.debouncer.poll(now);
        if due && !self.pending.is_empty() {
            self.debouncer.cancel();
            Some(core::mem::replace(&mut self.pending, RebuildCause::empty()))
        } else {
            None
        }
    }

    /// Returns `true` while a rebuild request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drops any outstanding request (e.g. on unmount).
    pub fn cancel(&mut self) {
        self.pending = RebuildCause::empty();
        self.immediate = false;
        self.debouncer.cancel();
    }
}

impl Default for RebuildScheduler {
    fn default() -> Self {
        Self::new(crate::debounce::DEFAULT_DELAY)
    }
}
