use std::time::SystemTime;

#[cfg(test)]
use mockall::automock;

/// Wall-clock collaborator.
///
/// The registry never reads `SystemTime::now()` directly; expiration checks
/// and placement timestamps go through this seam so tests can pin the clock.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// Production clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
