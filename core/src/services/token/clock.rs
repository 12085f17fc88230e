//! Injectable time source for token expiry computation

use chrono::{DateTime, Utc};

/// Time source used when stamping claims
///
/// Injectable so tests can mint tokens at arbitrary points in time.
pub trait Clock: Send + Sync {
    /// Current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
