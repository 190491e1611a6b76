// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disposal handles for subscriptions tied to one timeline's lifetime.

use core::fmt;

/// Collects disposal handles and runs each exactly once.
///
/// Anything subscribed while a timeline is alive (resize listeners,
/// pointer capture, visibility observers) registers its undo here. Both
/// unmount and a reflow rebuild call [`dispose_all`](Self::dispose_all)
/// before a replacement timeline exists, so two timelines never drive the
/// same elements. Dropping the collector disposes anything outstanding.
#[derive(Default)]
pub struct Teardown {
    handles: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a disposal handle.
    pub fn defer(&mut self, handle: impl FnOnce() + 'static) {
        self.handles.push(Box::new(handle));
    }

    /// Runs every outstanding handle, oldest first. Idempotent.
    pub fn dispose_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle();
        }
    }

    /// The number of handles not yet disposed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` when nothing is awaiting disposal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teardown")
            .field("handles", &self.handles.len())
            .finish()
    }
}
