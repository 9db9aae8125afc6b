//! Fixed-timestep pacing for the frame loop.

use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's budget.
///
/// A frame that overruns its budget is not compensated for later.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    /// Creates a pacer for `fps` frames per second, rounding the budget down
    /// to whole milliseconds. `fps == 0` disables pacing.
    pub fn new(fps: u32) -> Self {
        let budget = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(u64::from(1000 / fps))
        };
        Self { budget }
    }

    /// Time budget of one frame.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the budget after `elapsed`, if any.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Blocks until the frame that started at `frame_start` has used its budget.
    pub fn wait(&self, frame_start: Instant) {
        if let Some(rest) = self.remaining(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
