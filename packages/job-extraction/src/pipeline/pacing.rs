//! Pacing between successive external calls.
//!
//! Both the analyzer and the scraper talk to rate-limited services one
//! request at a time. The pacer spaces request starts at least `interval`
//! apart using the governor crate.

use governor::{Quota, RateLimiter};
use std::time::Duration;

type DefaultRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// Spaces calls at least `interval` apart. The first call never waits.
///
/// The interval is measured between call starts, not from the end of one
/// call to the start of the next. A call that runs longer than the
/// interval is followed immediately by the next one.
pub struct Pacer {
    limiter: Option<DefaultRateLimiter>,
    interval: Duration,
}

impl Pacer {
    /// Create a pacer. A zero interval disables pacing.
    pub fn new(interval: Duration) -> Self {
        Self {
            limiter: Quota::with_period(interval).map(RateLimiter::direct),
            interval,
        }
    }

    /// A pacer that never waits.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }

    /// Wait until the next call is allowed.
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}
