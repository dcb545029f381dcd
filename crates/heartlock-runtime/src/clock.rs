//! Frame clock driven by host timestamps

use std::time::Duration;
use tracing::debug;

/// Tracks frame timing from the timestamps the host passes to each frame callback
pub struct FrameClock {
    /// Total elapsed animation time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Frames ticked so far
    pub frame_count: u64,
    /// Per-frame budget in seconds (one display refresh)
    pub frame_budget: f64,
    /// Frames whose delta exceeded `frame_budget`
    pub frames_over_budget: u64,
    /// Timestamp of the previous tick
    last: Option<Duration>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
            frame_budget: 1.0 / 60.0,
            frames_over_budget: 0,
            last: None,
        }
    }
}

impl FrameClock {
    /// Create a new frame clock with a 60Hz budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame clock with a custom budget in milliseconds
    pub fn with_budget_ms(budget_ms: f64) -> Self {
        Self {
            frame_budget: budget_ms / 1000.0,
            ..Self::default()
        }
    }

    /// Advance the clock. Call once per frame with the host timestamp.
    pub fn tick(&mut self, now: Duration) {
        self.frame_count += 1;

        let Some(last) = self.last.replace(now) else {
            self.delta_time = 0.0;
            return;
        };

        // Clamp so a backgrounded tab doesn't report one enormous frame
        self.delta_time = now.saturating_sub(last).as_secs_f64().min(0.25);
        self.total_time += self.delta_time;

        if self.delta_time > self.frame_budget {
            self.frames_over_budget += 1;
            debug!(
                frame = self.frame_count,
                delta_ms = self.delta_time * 1000.0,
                "frame over budget"
            );
        }
    }

    /// Average frames per second since the first tick
    pub fn average_fps(&self) -> f64 {
        if self.total_time <= 0.0 {
            0.0
        } else {
            (self.frame_count.saturating_sub(1)) as f64 / self.total_time
        }
    }
}
