// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events and media commands surfaced to the hosting UI.

use marquee_reflow::RebuildCause;

/// Something the hosting UI may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeEvent {
    /// The user tapped the strip while this item was current (e.g. to open
    /// a lightbox at that index).
    MediaClicked(usize),
    /// The timeline was rebuilt for these reasons.
    Rebuilt(RebuildCause),
}

/// A playback instruction for one media element, applied by the host.
///
/// Visibility-driven pause/resume of individual videos runs independently
/// of the user-facing playback toggle and never flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    /// Start this video muted (early-start during readiness).
    PlayMuted(usize),
    /// Resume this video (it re-entered the viewport).
    Play(usize),
    /// Pause this video (it left the viewport).
    Pause(usize),
}
