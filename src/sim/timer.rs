//! Simulated elapsed-time timer
//!
//! Accumulates frame deltas instead of reading the wall clock, so the spawn
//! cadence and restart wait are reproducible under test.

use serde::{Deserialize, Serialize};

/// Slack when comparing against a deadline, absorbs rounding in `1/fps` deltas
const DEADLINE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElapsedTimer {
    /// Summed in f64 so thousands of f32 frame deltas do not drift
    elapsed: f64,
}

impl ElapsedTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += f64::from(dt.max(0.0));
    }

    /// Seconds since the last restart
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    /// At least `seconds` have passed since the last restart
    pub fn has_reached(&self, seconds: f32) -> bool {
        self.elapsed + DEADLINE_EPSILON >= f64::from(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_and_restarts() {
        let mut timer = ElapsedTimer::new();
        timer.advance(0.25);
        timer.advance(0.5);
        assert_eq!(timer.elapsed(), 0.75);

        // Negative deltas never rewind
        timer.advance(-1.0);
        assert_eq!(timer.elapsed(), 0.75);

        timer.restart();
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn sixty_fps_reaches_deadline_on_the_exact_frame() {
        let dt = 1.0f32 / 60.0;
        let mut timer = ElapsedTimer::new();
        for _ in 0..149 {
            timer.advance(dt);
        }
        assert!(!timer.has_reached(2.5));
        timer.advance(dt);
        assert!(timer.has_reached(2.5));

        timer.restart();
        for _ in 0..300 {
            timer.advance(dt);
        }
        assert!(timer.has_reached(5.0));
    }

    #[test]
    fn thirty_and_144_fps_hit_whole_seconds() {
        for fps in [30u32, 144] {
            let dt = 1.0 / fps as f32;
            let mut timer = ElapsedTimer::new();
            for _ in 0..fps * 3 - 1 {
                timer.advance(dt);
            }
            assert!(!timer.has_reached(3.0), "{fps} fps early");
            timer.advance(dt);
            assert!(timer.has_reached(3.0), "{fps} fps late");
        }
    }
}
