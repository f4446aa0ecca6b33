//! Retry backoff.
//!
//! The schedule is fixed: after the failed attempt with index `i` (from 0)
//! the fetcher waits `2^i` seconds, so 1s, 2s, 4s, ... The wait goes through
//! a [`Sleeper`] so tests can observe it without sleeping.

use std::cell::RefCell;
use std::time::Duration;

/// Number of attempts used when the caller does not choose one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Delay after the failed attempt `attempt_index`.
pub fn backoff_delay(attempt_index: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt_index))
}

/// Blocks the caller between attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records requested delays instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_double_from_one_second() {
        let delays: Vec<u64> = (0..5).map(|i| backoff_delay(i).as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(backoff_delay(200), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn recording_sleeper_keeps_order() {
        let sleeper = RecordingSleeper::new();
        sleeper.sleep(Duration::from_secs(1));
        sleeper.sleep(Duration::from_secs(2));
        assert_eq!(
            sleeper.delays(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }

    #[test]
    fn thread_sleeper_waits_at_least_requested() {
        let start = std::time::Instant::now();
        ThreadSleeper.sleep(Duration::from_millis(10));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
