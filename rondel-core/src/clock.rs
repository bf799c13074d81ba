//! Time source abstraction so deferred-pass behavior is deterministic in tests.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Trait for providing time in tests and production.
pub trait Clock: Send + Sync {
    /// Get the current instant.
    fn now(&self) -> Instant;

    /// Clone the clock into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Clock>;
}

/// Production clock backed by the system's monotonic time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn clone_box(&self) -> Box<dyn Clock> {
        Box::new(*self)
    }
}

/// Virtual clock for deterministic tests; time only moves when a test calls
/// [`advance`](VirtualClock::advance). Clones share the same underlying time.
#[derive(Clone, Debug)]
pub struct VirtualClock {
    instant: Arc<Mutex<Instant>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self {
            instant: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Advance time by `duration`.
    pub fn advance(&self, duration: Duration) {
        *self.instant.lock() += duration;
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Instant {
        *self.instant.lock()
    }

    fn clone_box(&self) -> Box<dyn Clock> {
        Box::new(self.clone())
    }
}
