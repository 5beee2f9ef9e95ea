//! Injectable time source and id allocation.
//!
//! # Responsibility
//! - Give every store one way to read "now" in epoch milliseconds.
//! - Hand out unique, creation-time-derived integer ids.
//!
//! # Invariants
//! - `IdAllocator` ids are strictly increasing, even when the clock stalls
//!   or moves backwards.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Epoch milliseconds.
pub type EpochMs = i64;

/// Time source used by the chat session and note store.
pub trait Clock {
    fn now_ms(&self) -> EpochMs;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMs {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as EpochMs)
            .unwrap_or(0)
    }
}

/// Hand-driven clock for tests and deterministic embedders.
///
/// Clones share the same instant, so a test can keep one handle and pass
/// another into the component under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start_ms: EpochMs) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    /// Moves time forward by `delta_ms`.
    pub fn advance(&self, delta_ms: EpochMs) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }

    pub fn set(&self, now_ms: EpochMs) {
        self.now.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> EpochMs {
        self.now.load(Ordering::SeqCst)
    }
}

/// Allocates ids from the creation time, bumped past the last id handed out.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: Option<i64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, now_ms: EpochMs) -> i64 {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, IdAllocator, ManualClock};

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();
        handle.advance(250);
        assert_eq!(clock.now_ms(), 1_250);
        clock.set(10);
        assert_eq!(handle.now_ms(), 10);
    }

    #[test]
    fn ids_follow_time_and_never_repeat() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next(5_000), 5_000);
        assert_eq!(ids.next(5_000), 5_001);
        assert_eq!(ids.next(4_000), 5_002);
        assert_eq!(ids.next(9_000), 9_000);
    }
}
