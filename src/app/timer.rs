//! Frame timing

use std::time::{Duration, Instant};

/// Measures time between frames and since startup
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    start: Instant,
    last: Instant,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Seconds since the previous mark; starts a new interval
    pub fn mark(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now - self.last;
        self.last = now;
        frame_time.as_secs_f32()
    }

    /// Time since the timer was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_restarts_the_interval() {
        let mut timer = FrameTimer::new();
        std::thread::sleep(Duration::from_millis(5));

        let first = timer.mark();
        let second = timer.mark();
        assert!(first >= 0.005);
        assert!(second < first);
        assert!(timer.elapsed().as_secs_f32() >= first);
    }
}
