// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media readiness gate: fan-out/fan-in readiness over a group of elements.
//!
//! Each element resolves individually — videos on decoded metadata, images on
//! load or error — or degrades to ready once its deadline passes. The group
//! is ready only when every element is. The gate never reports failure; a
//! broken asset simply stops blocking its siblings.
//!
//! Time is host-driven: the host calls [`ReadinessGate::poll`] with monotonic
//! timestamps in seconds. Nothing here sleeps or schedules.

use crate::kind::MediaKind;

/// Default per-element readiness deadline, in seconds.
pub const DEFAULT_TIMEOUT: f64 = 2.0;

/// Options for a [`ReadinessGate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateOptions {
    /// Per-element deadline in seconds before a silent element degrades to
    /// ready.
    pub timeout: f64,
    /// When `true`, a video queues a muted-play command at its individual
    /// readiness rather than waiting for the whole group.
    pub play_on_ready: bool,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            play_on_ready: false,
        }
    }
}

/// Side-effect command queued by the gate for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCommand {
    /// Start the video at this index, muted.
    PlayMuted(usize),
}

/// Overall gate status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// At least one element has not resolved yet.
    Pending,
    /// Every element is ready (loaded, errored, or timed out).
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Waiting { deadline: f64 },
    Ready,
}

/// Tracks readiness of a group of media elements.
///
/// Event methods are idempotent: anything reported after an element resolved
/// is ignored, and [`ReadinessGate::poll`] never regresses from ready.
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    kinds: Vec<MediaKind>,
    slots: Vec<Slot>,
    play_on_ready: bool,
    commands: Vec<GateCommand>,
}

impl ReadinessGate {
    /// Creates a gate over `kinds.len()` elements, with deadlines measured
    /// from `now`.
    ///
    /// An empty group is immediately ready.
    #[must_use]
    pub fn new(kinds: &[MediaKind], now: f64, opts: GateOptions) -> Self {
        let deadline = now + opts.timeout.max(0.0);
        Self {
            kinds: kinds.to_vec(),
            slots: vec![Slot::Waiting { deadline }; kinds.len()],
            play_on_ready: opts.play_on_ready,
            commands: Vec::new(),
        }
    }

    /// Number of elements tracked by this gate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the gate tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// A video at `index` reported decoded dimensions.
    ///
    /// Dimensions are accepted as advisory; even zero/non-finite values
    /// resolve the element (sizing has its own fallback), but only a video
    /// with plausible dimensions queues a play command.
    pub fn metadata_loaded(&mut self, index: usize, width: f64, height: f64) {
        if !self.resolve(index) {
            return;
        }
        let plausible = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if self.play_on_ready && plausible && self.kinds.get(index) == Some(&MediaKind::Video) {
            self.commands.push(GateCommand::PlayMuted(index));
        }
    }

    /// The element at `index` finished loading.
    pub fn loaded(&mut self, index: usize) {
        self.resolve(index);
    }

    /// The element at `index` failed to load or decode.
    ///
    /// Failure degrades to ready; the item keeps its layout slot.
    pub fn failed(&mut self, index: usize) {
        self.resolve(index);
    }

    /// Expires overdue deadlines and reports the group status.
    pub fn poll(&mut self, now: f64) -> GateStatus {
        for slot in &mut self.slots {
            if let Slot::Waiting { deadline } = *slot
                && now >= deadline
            {
                *slot = Slot::Ready;
            }
        }
        if self.is_ready() {
            GateStatus::Ready
        } else {
            GateStatus::Pending
        }
    }

    /// Returns `true` when every element has resolved.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slots.iter().all(|s| *s == Slot::Ready)
    }

    /// Returns `true` when the element at `index` has resolved.
    #[must_use]
    pub fn is_element_ready(&self, index: usize) -> bool {
        self.slots.get(index) == Some(&Slot::Ready)
    }

    /// Drains queued side-effect commands, oldest first.
    pub fn drain_commands(&mut self) -> Vec<GateCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Marks the element ready. Returns `false` if it was already resolved
    /// or the index is out of range.
    fn resolve(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ Slot::Waiting { .. }) => {
                *slot = Slot::Ready;
                true
            }
            _ => false,
        }
    }
}
