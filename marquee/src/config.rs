// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing configuration and its mapping onto the subsystem crates.

use marquee_drag::DragConfig;
use marquee_loop::{LoopConfig, Repeat};

/// Viewport width in pixels below which the mobile display height applies.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Tunables for one marquee instance.
///
/// These mirror the knobs the hosting UI exposes; each maps onto a loop,
/// drag, or layout parameter. `gap` is a layout hint: the host lays items
/// out with that much spacing and the loop reads it back as the measured
/// space before each item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeConfig {
    /// Strip height in pixels on narrow viewports.
    pub mobile_height: f64,
    /// Strip height in pixels on wide viewports.
    pub desktop_height: f64,
    /// Speed multiplier; `1.0` is roughly 100 pixels per second.
    pub speed: f64,
    /// Inertial deceleration strength.
    pub resistance: f64,
    /// Pixels-per-second release speed below which a drag settles in place.
    pub min_velocity: f64,
    /// Repeat policy for the loop.
    pub repeat: Repeat,
    /// Spacing between items, in pixels.
    pub gap: f64,
    /// Whether pointer drags scrub the strip.
    pub draggable: bool,
    /// Whether a released drag glides onto the nearest item start.
    pub drag_snap: bool,
    /// Whether the current item is the one nearest the container's center.
    pub center: bool,
    /// Extra pixels after the last item before the loop wraps.
    pub padding_right: f64,
    /// Whether videos start muted as soon as they are individually ready.
    pub play_on_ready: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            mobile_height: 250.0,
            desktop_height: 500.0,
            speed: 0.5,
            resistance: 10.0,
            min_velocity: 50.0,
            repeat: Repeat::Finite(5),
            gap: 0.0,
            draggable: true,
            drag_snap: true,
            center: true,
            padding_right: 0.0,
            play_on_ready: true,
        }
    }
}

impl MarqueeConfig {
    /// The display height for a viewport of the given width.
    #[must_use]
    pub fn display_height(&self, viewport_width: f64) -> f64 {
        if viewport_width < MOBILE_BREAKPOINT {
            self.mobile_height
        } else {
            self.desktop_height
        }
    }

    /// The loop-builder parameters this configuration implies.
    #[must_use]
    pub fn loop_config(&self, paused: bool) -> LoopConfig {
        LoopConfig {
            speed: self.speed,
            repeat: self.repeat,
            paused,
            center: self.center,
            padding_right: self.padding_right,
            ..LoopConfig::default()
        }
    }

    /// The drag-controller parameters this configuration implies.
    #[must_use]
    pub fn drag_config(&self) -> DragConfig {
        DragConfig {
            resistance: self.resistance,
            min_velocity: self.min_velocity,
            drag_snap: self.drag_snap,
            ..DragConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_selects_the_display_height() {
        let config = MarqueeConfig::default();
        assert_eq!(config.display_height(375.0), 250.0);
        assert_eq!(config.display_height(1440.0), 500.0);
    }

    #[test]
    fn loop_config_carries_the_speed_and_alignment() {
        let config = MarqueeConfig {
            speed: 1.0,
            center: false,
            ..MarqueeConfig::default()
        };
        let lc = config.loop_config(true);
        assert_eq!(lc.pixels_per_second(), 100.0);
        assert!(lc.paused);
        assert!(!lc.center);
    }

    #[test]
    fn drag_config_carries_the_inertia_knobs() {
        let config = MarqueeConfig {
            resistance: 4.0,
            drag_snap: false,
            ..MarqueeConfig::default()
        };
        let dc = config.drag_config();
        assert_eq!(dc.resistance, 4.0);
        assert!(!dc.drag_snap);
    }
}
