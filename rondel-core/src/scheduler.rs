//! Deferred visibility scheduling.
//!
//! Items that scroll out of the window must stay visible (and in the layout)
//! while the host's slide animation runs; only once the transition duration
//! has elapsed are they actually hidden. At most one pass is pending at a
//! time: a newer transition replaces the old pass outright, and destroying
//! the carousel cancels it, so a stale deadline can never mutate items the
//! carousel no longer owns.

use std::time::{Duration, Instant};

use crate::window::SlideWindow;

/// A hide/reveal pass waiting for its transition deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityPass {
    /// Window snapshot the pass will enforce.
    pub window: SlideWindow,
    pub deadline: Instant,
}

/// Single-slot scheduler for the deferred visibility pass.
#[derive(Debug, Default)]
pub struct VisibilityScheduler {
    pending: Option<VisibilityPass>,
}

impl VisibilityScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace any pending pass with one for `window`, due after `delay`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, window: SlideWindow) {
        self.pending = Some(VisibilityPass {
            window,
            deadline: now + delay,
        });
    }

    /// Hand out the pending pass once its deadline has been reached.
    pub fn due(&mut self, now: Instant) -> Option<VisibilityPass> {
        match self.pending {
            Some(pass) if now >= pass.deadline => {
                self.pending = None;
                Some(pass)
            }
            _ => None,
        }
    }

    /// Drop the pending pass without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
