use bevy::prelude::*;

use crate::REFERENCE_FRAME_RATE;

/// Time source for one animation tick.
pub trait FrameClock {
    /// Seconds since the loop started.
    fn elapsed_secs(&self) -> f32;
    /// Seconds since the previous tick.
    fn delta_secs(&self) -> f32;

    /// Number of reference frames covered by the last delta.
    fn frames(&self) -> f32 {
        self.delta_secs() * REFERENCE_FRAME_RATE
    }
}

impl FrameClock for Time {
    fn elapsed_secs(&self) -> f32 {
        Time::elapsed_secs(self)
    }

    fn delta_secs(&self) -> f32 {
        Time::delta_secs(self)
    }
}

/// Hand-stepped clock for driving the animation loop deterministically.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    elapsed: f32,
    delta: f32,
}

impl ManualClock {
    /// Advance by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.delta = delta;
        self.elapsed += delta;
    }
}

impl FrameClock for ManualClock {
    fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    fn delta_secs(&self) -> f32 {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_accumulates() {
        let mut clock = ManualClock::default();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.elapsed_secs(), 0.75);
        assert_eq!(clock.delta_secs(), 0.25);
        assert!((clock.frames() - 15.0).abs() < 1e-5);
    }
}
