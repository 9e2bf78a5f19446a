//! Time management utilities

use std::time::Instant;

/// High-precision timer for frame timing
///
/// Reads the wall clock, so it belongs in hosts and loops. Simulation code should
/// be fed the resulting delta instead of owning one of these.
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Repeating timer advanced by explicit deltas
///
/// Fires once each time the accumulated time crosses `interval`. Leftover time
/// carries into the next period.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    interval: f32,
    elapsed: f32,
}

impl IntervalTimer {
    /// Create a timer firing every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Advance by `delta` seconds, returning `true` if the interval elapsed
    pub fn tick(&mut self, delta: f32) -> bool {
        self.elapsed += delta.max(0.0);
        if self.elapsed > self.interval {
            self.elapsed %= self.interval;
            true
        } else {
            false
        }
    }

    /// Time accumulated towards the next firing
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Restart the current period
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_fires_after_period() {
        let mut timer = IntervalTimer::new(1.0);
        let fired: usize = (0..59).filter(|_| timer.tick(1.0 / 60.0)).count();
        assert_eq!(fired, 0);

        assert!(timer.tick(0.1));
        assert!(timer.elapsed() < 1.0);
    }

    #[test]
    fn test_interval_ignores_negative_delta() {
        let mut timer = IntervalTimer::new(0.5);
        assert!(!timer.tick(-3.0));
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn test_interval_reset() {
        let mut timer = IntervalTimer::new(1.0);
        timer.tick(0.75);
        timer.reset();
        assert!(!timer.tick(0.75));
    }

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        timer.update();
        timer.update();
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.total_time() >= 0.0);
    }
}
