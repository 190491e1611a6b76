// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Loop: a seamless horizontal loop timeline over measured items.
//!
//! Given an ordered list of already-sized item measurements, this crate
//! builds a cyclic, constant-velocity timeline that moves items leftward and
//! re-splices any item that scrolls past the strip edge back to the opposite
//! side, with no visible seam: an item's offset at time `t` equals its offset
//! at `t + duration`.
//!
//! The crate is headless. The host measures items against a shared wrapper,
//! feeds the measurements into [`LoopTimeline::build`], advances the timeline
//! with frame deltas, and writes the sampled per-item percent offsets back to
//! its elements. Layered on the cyclic track are:
//!
//! - playback controls (pause/play/toggle, reverse, finite or infinite
//!   repeat),
//! - an index cursor (`current`, `next`, `previous`, `to_index`) that always
//!   travels the shorter rotational direction,
//! - playhead tweens used by index navigation and restored after drag
//!   scrubbing.
//!
//! ## Minimal example
//!
//! ```rust
//! use marquee_loop::{ItemMeasure, LoopConfig, LoopTimeline};
//!
//! let items: Vec<ItemMeasure> = (0..4)
//!     .map(|i| ItemMeasure::resting(i as f64 * 400.0, 400.0))
//!     .collect();
//! let mut tl = LoopTimeline::build(&items, 1200.0, LoopConfig::default())
//!     .expect("non-empty item list");
//!
//! // 1600 px of content at the default 100 px/s.
//! assert!((tl.duration() - 16.0).abs() < 1e-9);
//!
//! let before = tl.x_percent_at(2, 5.0);
//! let after = tl.x_percent_at(2, 5.0 + tl.duration());
//! assert!((before - after).abs() < 1e-9);
//!
//! tl.advance(0.5);
//! let _offsets: Vec<f64> = tl.x_percents_now();
//! ```

mod config;
mod cursor;
mod geometry;
mod timeline;
mod tween;

pub use config::{LoopConfig, Repeat, Snap};
pub use geometry::{ItemMeasure, LoopState};
pub use timeline::LoopTimeline;
pub use tween::{Ease, TweenVars};
