//! Wall-clock budget for cooperative search loops.

use std::time::{Duration, Instant};

/// A point in time after which search loops stop at their next check.
///
/// Loops poll [`Deadline::expired`] between moves, never inside one, so a
/// tour is always left fully updated.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tour_route::local_search::Deadline;
///
/// assert!(Deadline::after(Duration::ZERO).expired());
/// assert!(!Deadline::unbounded().expired());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
}

impl Deadline {
    /// Starts a budget of `limit` from now.
    pub fn after(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// A budget that never runs out.
    pub fn unbounded() -> Self {
        Self::after(Duration::MAX)
    }

    /// Returns `true` once the budget is spent.
    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }

    /// Time since the budget started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
