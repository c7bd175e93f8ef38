//! Wall-clock sources used for token expiry.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// A source of the current time in whole seconds since the Unix epoch.
///
/// The session only ever compares expiry instants against this clock, so
/// tests can swap in a [`ManualClock`] to step over expiry boundaries.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Current time as Unix epoch seconds.
    fn now_epoch_secs(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```
/// use shopware_admin::auth::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(600);
/// assert_eq!(clock.now_epoch_secs(), 1_600);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at `epoch_secs`.
    pub fn new(epoch_secs: i64) -> Self {
        Self {
            now: AtomicI64::new(epoch_secs),
        }
    }

    /// Jump to an absolute instant.
    pub fn set(&self, epoch_secs: i64) {
        self.now.store(epoch_secs, Ordering::SeqCst);
    }

    /// Move forward by `secs`.
    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_epoch_secs(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_epoch_secs() > 1_577_836_800);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new(10);
        assert_eq!(clock.now_epoch_secs(), 10);
        clock.advance(5);
        assert_eq!(clock.now_epoch_secs(), 15);
        clock.set(100);
        assert_eq!(clock.now_epoch_secs(), 100);
    }
}
