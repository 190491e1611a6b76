// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container sizer: pins strip containers to deterministic pixel widths.
//!
//! Fixed-height, variable-width strip items need known widths before any loop
//! math runs, and flex/max-width clamping is unreliable mid-transition. The
//! sizer therefore computes each container's width explicitly from its media
//! child's intrinsic aspect ratio at the configured display height.
//!
//! Measurements taken immediately after a readiness-driven DOM change are not
//! trustworthy; layout needs two frame ticks to settle. The host calls
//! [`ContainerSizer::frame_tick`] once per frame and only feeds measurements
//! once [`ContainerSizer::ready`] reports `true`.

/// Frame ticks to wait before measurements are considered settled.
const SETTLE_TICKS: u8 = 2;

/// One container's measurement snapshot, taken by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMeasure {
    /// Currently rendered width of the media child, in pixels.
    pub rendered_width: f64,
    /// Intrinsic dimensions of the media child (natural size for images,
    /// decoded size for videos), when known.
    pub intrinsic: Option<(f64, f64)>,
}

impl ContainerMeasure {
    /// A measurement with no intrinsic dimensions, only a rendered width.
    #[must_use]
    pub fn rendered(width: f64) -> Self {
        Self {
            rendered_width: width,
            intrinsic: None,
        }
    }
}

/// Computes deterministic container widths at a fixed display height.
#[derive(Debug, Clone)]
pub struct ContainerSizer {
    display_height: f64,
    pending_ticks: u8,
    last_widths: Vec<f64>,
}

impl ContainerSizer {
    /// Creates a sizer for the given display height in pixels.
    #[must_use]
    pub fn new(display_height: f64) -> Self {
        Self {
            display_height,
            pending_ticks: SETTLE_TICKS,
            last_widths: Vec::new(),
        }
    }

    /// Advances one animation-frame tick.
    pub fn frame_tick(&mut self) {
        self.pending_ticks = self.pending_ticks.saturating_sub(1);
    }

    /// Returns `true` once layout has had enough frames to settle.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.pending_ticks == 0
    }

    /// Restarts the settle wait, e.g. after a rebuild re-enters the DOM.
    pub fn reset(&mut self) {
        self.pending_ticks = SETTLE_TICKS;
    }

    /// Returns the configured display height.
    #[must_use]
    pub fn display_height(&self) -> f64 {
        self.display_height
    }

    /// Changes the display height (responsive mobile/desktop switch).
    pub fn set_display_height(&mut self, height: f64) {
        self.display_height = height;
    }

    /// Computes one width per container.
    ///
    /// Preference order: intrinsic ratio scaled to the display height, then
    /// the rendered width, then the slot's last known non-zero width. The
    /// last fallback guards against transient zero geometry mid-transition,
    /// which would otherwise collapse an item and poison percent-offset math
    /// downstream.
    pub fn size(&mut self, containers: &[ContainerMeasure]) -> Vec<f64> {
        let mut widths = Vec::with_capacity(containers.len());
        for (i, c) in containers.iter().enumerate() {
            let from_ratio = c.intrinsic.and_then(|(w, h)| {
                let usable = w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0;
                usable.then(|| (self.display_height * (w / h)).round())
            });
            let rendered = (c.rendered_width.is_finite() && c.rendered_width > 0.0)
                .then(|| c.rendered_width.round());
            let width = from_ratio
                .or(rendered)
                .or_else(|| self.last_widths.get(i).copied().filter(|w| *w > 0.0))
                .unwrap_or(0.0);
            widths.push(width);
        }
        self.last_widths = widths.clone();
        widths
    }
}
