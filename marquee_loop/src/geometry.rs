// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured item geometry and the per-build layout state bundle.

use crate::config::Snap;

/// One strip item's geometry, measured by the host against the shared
/// wrapper element.
///
/// The engine never reads elements itself; the host snapshots layout into
/// this record whenever the loop is (re)built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMeasure {
    /// Layout offset of the element from the wrapper's left edge, in pixels,
    /// excluding any transform.
    pub offset_left: f64,
    /// Rendered width in pixels.
    pub width: f64,
    /// Current translation along x in pixels (from a previous build), if any.
    pub x_px: f64,
    /// Current percent-of-own-width translation (from a previous build).
    pub x_percent: f64,
    /// Gap between this element and the previous one (or the wrapper's left
    /// edge for the first), in pixels.
    pub space_before: f64,
    /// Horizontal scale factor applied to the element.
    pub scale_x: f64,
}

impl ItemMeasure {
    /// A measurement for an untransformed element at rest.
    #[must_use]
    pub fn resting(offset_left: f64, width: f64) -> Self {
        Self {
            offset_left,
            width,
            x_px: 0.0,
            x_percent: 0.0,
            space_before: 0.0,
            scale_x: 1.0,
        }
    }
}

/// Layout state computed from one round of measurements.
///
/// Rebuilt atomically on every reflow; never mutated piecemeal.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopState {
    /// Rendered width per item, in pixels.
    pub widths: Vec<f64>,
    /// Snapped percent-of-own-width offset per item.
    pub x_percents: Vec<f64>,
    /// Gap before each item, in pixels.
    pub space_before: Vec<f64>,
    /// Reference start position (first item's layout offset), in pixels.
    pub start_x: f64,
    /// Total content width of one full cycle, in pixels.
    pub total_width: f64,
}

impl LoopState {
    /// Builds the state bundle from measurements.
    ///
    /// Returns `None` for an empty item list; loop construction over zero
    /// items is a no-op by contract.
    #[must_use]
    pub fn measure(items: &[ItemMeasure], snap: Snap, padding_right: f64) -> Option<Self> {
        let first = items.first()?;
        let last = items[items.len() - 1];

        let widths: Vec<f64> = items.iter().map(|m| m.width).collect();
        let x_percents: Vec<f64> = items
            .iter()
            .map(|m| {
                let px_as_percent = if m.width > 0.0 {
                    (m.x_px / m.width) * 100.0
                } else {
                    0.0
                };
                snap.apply(px_as_percent + m.x_percent)
            })
            .collect();
        let space_before: Vec<f64> = items.iter().map(|m| m.space_before).collect();

        let start_x = first.offset_left;
        let n = items.len();
        let total_width = last.offset_left + (x_percents[n - 1] / 100.0) * widths[n - 1] - start_x
            + space_before[0]
            + last.width * last.scale_x
            + padding_right;

        Some(Self {
            widths,
            x_percents,
            space_before,
            start_x,
            total_width,
        })
    }

    /// Number of items in the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Returns `true` when the strip has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Wraps a time into `[0, duration)`. Degenerate durations collapse to zero.
#[must_use]
pub(crate) fn wrap_time(t: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    let wrapped = t.rem_euclid(duration);
    // rem_euclid can return `duration` itself when t is a tiny negative.
    if wrapped >= duration { 0.0 } else { wrapped }
}

/// Folds a progress value into `[0, 1)`.
#[must_use]
pub(crate) fn wrap_progress(p: f64) -> f64 {
    let wrapped = p.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
