// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Drag: pointer scrubbing and inertial throws for loop timelines.
//!
//! This crate converts pointer gestures into progress values on a cyclic
//! timeline's `[0, 1)` axis:
//!
//! - [`DragSession`](session::DragSession) maps pointer travel to wrapped
//!   progress via the pixel-to-progress ratio `1 / total_width`, so dragging
//!   past either end continues seamlessly into the opposite side.
//! - [`VelocityTracker`](velocity::VelocityTracker) keeps a short window of
//!   timestamped movement samples and resolves a release velocity with
//!   time-weighted averaging and idle damping.
//! - [`Throw`](throw::Throw) decays that velocity exponentially into a
//!   resting progress, optionally quantized to the nearest item-start label.
//! - [`DragController`](controller::DragController) owns the session/throw
//!   lifecycle and the guard against velocity spikes on very short drags.
//!
//! Everything is headless and host-driven: the host feeds pointer positions
//! (as [`kurbo::Point`]) with timestamps in seconds and applies the returned
//! progress to its timeline.

pub mod controller;
pub mod session;
pub mod throw;
pub mod velocity;

pub use controller::{DragController, DragUpdate};
pub use session::{DragConfig, DragSession};
pub use throw::Throw;
pub use velocity::VelocityTracker;
