//! Local clock and the cached local-vs-server time offset.
//!
//! The offset is `local_now - server_time` in milliseconds. Signed requests
//! stamp themselves with `local_now - offset` to land inside the exchange's
//! accepted skew window.
//!
//! # Concurrency
//!
//! [`TimeOffset`] is an atomic cell. Concurrent measurements race and the
//! last writer wins; there is no ordering between them. Readers always see a
//! whole value written by some measurement (or the initial zero).

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of the local wall-clock time in Unix milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub const fn new(now_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(now_millis),
        }
    }

    pub fn set(&self, now_millis: i64) {
        self.now.store(now_millis, Ordering::Release);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::Acquire)
    }
}

/// Shared handle to the measured time offset.
///
/// Clones share the same cell, so a signer holding a clone observes every
/// later measurement.
#[derive(Debug, Clone, Default)]
pub struct TimeOffset {
    millis: Arc<AtomicI64>,
}

impl TimeOffset {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(millis)),
        }
    }

    pub fn get(&self) -> i64 {
        self.millis.load(Ordering::Acquire)
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::Release);
    }

    /// Estimated server time given the local `now`.
    pub fn server_time_at(&self, local_now_millis: i64) -> i64 {
        local_now_millis.wrapping_sub(self.get())
    }
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}
