use std::time::{Duration, Instant};

/// Deferred close armed by an item selection when a delay is configured.
///
/// There is no background thread: the host loop polls [`AutoCloseTimer::is_due`]
/// from its tick handler. Dropping the handle cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoCloseTimer {
    deadline: Instant,
}

impl AutoCloseTimer {
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Self { deadline: now + delay }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
