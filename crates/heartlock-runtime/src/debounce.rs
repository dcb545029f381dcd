//! Trailing-edge debounce for viewport resize notifications

use std::time::Duration;

/// Fires once `delay` has passed without a further `notify`
///
/// Continuous drag-resizes keep pushing the deadline out, so the expensive
/// rebuild runs once when the user lets go.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record a resize at `now`, restarting the quiet period
    pub fn notify(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once per quiet period, when it has elapsed
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
