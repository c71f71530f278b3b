use std::io;
use std::time::{Duration, Instant};

/// Point in time after which no blocking socket call of the run may continue.
///
/// Every connect, send and receive asks the deadline for the time left and
/// uses it as the socket timeout, so the whole scenario is bounded by one
/// wall-clock budget.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Deadline {
            expires_at: Instant::now() + timeout,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Time left, or a `TimedOut` error once the deadline has passed.
    ///
    /// Never returns a zero duration: std socket timeouts reject zero.
    pub fn remaining(&self) -> io::Result<Duration> {
        let left = self.expires_at.saturating_duration_since(Instant::now());

        if left.is_zero() {
            return Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "Checker deadline expired",
            ));
        }

        Ok(left)
    }
}
