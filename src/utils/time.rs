use std::time::{Duration, Instant};

/// The longest simulation step a single tick may consume. A frame that
/// arrives later than this (breakpoint, tab in background, pause menu)
/// is treated as one max-length step instead of a teleport.
const MAX_DELTA: Duration = Duration::from_millis(100);

/// Timer for tracking frame timing and elapsed time.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick, clamped to [`MAX_DELTA`]
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Updates the timer; called by the host once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = (now - self.last_update).min(MAX_DELTA);
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    /// Delta of the last tick in seconds, the unit [`World::tick`] takes.
    ///
    /// [`World::tick`]: crate::world::World::tick
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_clamped_after_a_stall() {
        let mut timer = Timer::new();
        timer.last_update = Instant::now() - Duration::from_secs(5);
        timer.tick();
        assert_eq!(timer.delta, MAX_DELTA);
        assert_eq!(timer.frame_count, 1);
    }
}
