// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index cursor: which item is "current" on the cyclic track.

/// Tracks the current item index across playback, navigation, and drags.
///
/// After a drag-driven throw the resting index is not yet confirmed, so the
/// cursor is marked dirty and lazily re-resolved against the start labels on
/// the next query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct IndexCursor {
    pub(crate) current: usize,
    pub(crate) dirty: bool,
}

/// Index of the label closest to `value` on a cycle of length `wrap`,
/// measuring distance the shorter way around.
#[must_use]
pub(crate) fn closest_label(labels: &[f64], value: f64, wrap: f64) -> usize {
    let mut closest = f64::INFINITY;
    let mut index = 0;
    for (i, label) in labels.iter().enumerate().rev() {
        let mut d = (label - value).abs();
        if wrap > 0.0 && d > wrap / 2.0 {
            d = wrap - d;
        }
        if d < closest {
            closest = d;
            index = i;
        }
    }
    index
}
