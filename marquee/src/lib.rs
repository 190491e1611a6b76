// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee: a host-driven, seamless horizontal media strip.
//!
//! This crate wires the subsystem crates into one instance per strip, in a
//! strictly sequential startup pipeline: the readiness gate resolves, the
//! container sizer pins widths, the loop timeline is built, and from then
//! on every host frame advances the loop and yields the offsets to write.
//! Resize and manual refresh requests tear the timeline down and rebuild
//! it while preserving playback state.
//!
//! The host owns the elements and the clock. It forwards media load events
//! and pointer input, calls [`Marquee::frame`] with timestamps in seconds
//! and fresh measurements, applies the returned width/offset writes, and
//! drains [`MarqueeEvent`]s and [`MediaCommand`]s.
//!
//! ## Minimal example
//!
//! ```
//! use marquee::{HostMeasurements, Marquee, MarqueeConfig};
//! use marquee_loop::ItemMeasure;
//! use marquee_media::{ContainerMeasure, MediaItem};
//!
//! let items = vec![MediaItem::new("one.png"), MediaItem::new("two.png")];
//! let mut marquee = Marquee::new(&items, MarqueeConfig::default(), 0.0);
//! marquee.media_loaded(0);
//! marquee.media_loaded(1);
//!
//! let containers = [ContainerMeasure::rendered(400.0); 2];
//! let measured_items = [
//!     ItemMeasure::resting(0.0, 400.0),
//!     ItemMeasure::resting(400.0, 400.0),
//! ];
//! let measured = HostMeasurements {
//!     viewport_width: 1280.0,
//!     container_width: 800.0,
//!     containers: &containers,
//!     items: &measured_items,
//! };
//! for i in 0..4 {
//!     marquee.frame(f64::from(i) * 0.016, 0.016, &measured);
//! }
//! assert!(marquee.is_running());
//! ```

pub mod config;
pub mod controller;
pub mod events;

pub use config::{MOBILE_BREAKPOINT, MarqueeConfig};
pub use controller::{FrameOutput, HostMeasurements, Marquee};
pub use events::{MarqueeEvent, MediaCommand};
