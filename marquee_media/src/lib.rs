// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Media: readiness gating and deterministic sizing for media strips.
//!
//! This crate provides the two layout-preparation stages that must run before
//! a horizontal loop can be built over a strip of media elements:
//!
//! - [`ReadinessGate`](ready::ReadinessGate): waits until every element in a
//!   group reports usable intrinsic dimensions, with a bounded per-element
//!   timeout so one slow or broken asset cannot stall the group.
//! - [`ContainerSizer`](sizer::ContainerSizer): pins each item container to a
//!   deterministic pixel width derived from the media's intrinsic aspect
//!   ratio at a fixed display height.
//!
//! The crate is headless and host-driven: it never touches elements itself.
//! The host forwards load/metadata/error events into the gate, drives time by
//! polling with monotonic timestamps in seconds, and applies the widths the
//! sizer computes. A group where an asset never loads still settles; failure
//! degrades to "ready" rather than surfacing an error.
//!
//! ## Minimal example
//!
//! ```rust
//! use marquee_media::kind::MediaKind;
//! use marquee_media::ready::{GateOptions, GateStatus, ReadinessGate};
//!
//! let kinds = [MediaKind::Image, MediaKind::Video];
//! let mut gate = ReadinessGate::new(&kinds, 0.0, GateOptions::default());
//!
//! gate.loaded(0);
//! assert_eq!(gate.poll(0.1), GateStatus::Pending);
//!
//! // The video never reports metadata; it times out instead of hanging.
//! assert_eq!(gate.poll(2.05), GateStatus::Ready);
//! ```

pub mod kind;
pub mod ready;
pub mod sizer;

pub use kind::{MediaItem, MediaKind};
pub use ready::{GateCommand, GateOptions, GateStatus, ReadinessGate};
pub use sizer::{ContainerMeasure, ContainerSizer};
