//! Wall-clock source used to timestamp domain events.

use chrono::{DateTime, Utc};

/// Source of event timestamps. Injected into every mutating call so tests
/// can pin time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
