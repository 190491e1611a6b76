// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Reflow: rebuild coordination for loop timelines under resize.
//!
//! Percent-based offsets computed at one viewport width do not survive an
//! arbitrary reflow, so the strategy here is always a full rebuild: capture
//! playback state, tear the old timeline (and its subscriptions) down,
//! re-measure, rebuild, restore. This crate supplies the coordination
//! pieces around that cycle:
//!
//! - [`Debouncer`](debounce::Debouncer) collapses a burst of resize
//!   notifications into a single rebuild once they go quiet.
//! - [`RebuildScheduler`](rebuild::RebuildScheduler) accumulates rebuild
//!   causes, debouncing resize while passing manual requests through.
//! - [`PlaybackSnapshot`](snapshot::PlaybackSnapshot) captures progress and
//!   the paused/reversed flags, and restores them onto a fresh timeline.
//! - [`Teardown`](teardown::Teardown) collects disposal handles registered
//!   at subscription time and runs each exactly once.
//!
//! Like the rest of the workspace this is host-driven: the host feeds
//! timestamps in seconds and performs the actual re-measurement.
//!
//! ## Minimal example
//!
//! ```
//! use marquee_reflow::{RebuildCause, RebuildScheduler};
//!
//! let mut scheduler = RebuildScheduler::default();
//! scheduler.note(RebuildCause::RESIZE, 0.0);
//! scheduler.note(RebuildCause::RESIZE, 0.01);
//! assert_eq!(scheduler.poll(0.015), None); // still inside the quiet period
//! assert_eq!(scheduler.poll(0.05), Some(RebuildCause::RESIZE));
//! assert_eq!(scheduler.poll(0.06), None); // fires once per burst
//! ```

pub mod debounce;
pub mod rebuild;
pub mod snapshot;
pub mod teardown;

pub use debounce::Debouncer;
pub use rebuild::{RebuildCause, RebuildScheduler};
pub use snapshot::PlaybackSnapshot;
pub use teardown::Teardown;
