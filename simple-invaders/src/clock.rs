//! Frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Limits the game loop to a target frame rate and measures the time between frames.
#[derive(Debug)]
pub struct FrameClock {
    time_step: Duration,
    last: Instant,
}

impl FrameClock {
    /// Create a clock for the given frames per second. The first frame is measured from now.
    ///
    /// # Panics
    ///
    /// Panics when `fps` is 0.
    pub fn new(fps: u32) -> FrameClock {
        assert!(fps > 0);

        FrameClock {
            time_step: Duration::from_secs(1) / fps,
            last: Instant::now(),
        }
    }

    /// The frame budget.
    pub fn time_step(&self) -> Duration {
        self.time_step
    }

    /// Sleep out the rest of the current frame, then return the time since the previous tick.
    ///
    /// A frame that already overran its budget does not sleep at all.
    pub fn tick(&mut self) -> Duration {
        let delay = pacing_delay(self.time_step, self.last.elapsed());
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;

        dt
    }
}

/// How long to sleep so that a frame which took `elapsed` lasts `time_step`; never negative.
pub fn pacing_delay(time_step: Duration, elapsed: Duration) -> Duration {
    time_step.saturating_sub(elapsed)
}
