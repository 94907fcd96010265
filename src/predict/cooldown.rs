use std::time::Duration;
use std::time::SystemTime;

/// Minimum spacing between two opened predictions.
///
/// `last` survives restarts through the tracker's ledger. A `last` in the
/// future (clock stepped back) keeps the gate closed until the clock catches up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    window: Duration,
    last: Option<SystemTime>,
}

impl Cooldown {
    pub fn new(window: Duration, last: Option<SystemTime>) -> Self {
        Self { window, last }
    }
    pub fn window(&self) -> Duration {
        self.window
    }
    pub fn last(&self) -> Option<SystemTime> {
        self.last
    }
    pub fn ready(&self, now: SystemTime) -> bool {
        self.remaining(now).is_none()
    }
    /// Time left before the next prediction may open.
    pub fn remaining(&self, now: SystemTime) -> Option<Duration> {
        let last = self.last?;
        match now.duration_since(last) {
            Ok(elapsed) if elapsed >= self.window => None,
            Ok(elapsed) => Some(self.window - elapsed),
            Err(_) => Some(self.window),
        }
    }
    pub fn stamp(&mut self, now: SystemTime) {
        self.last = Some(now);
    }
    pub fn clear(&mut self) {
        self.last = None;
    }
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }
}
