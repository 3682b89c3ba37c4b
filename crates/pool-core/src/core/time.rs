//! Frame cadence helper.
//!
//! The simulation step is frame-coupled: velocities are distance per frame
//! and [`step_balls`](crate::core::physics::step_balls) takes no delta time.
//! Hosts that tick once per rendered frame need nothing else. Hosts with
//! their own clock use `FrameClock` to turn variable wall-clock deltas into
//! a whole number of frames at a nominal cadence.

/// Accumulates wall-clock time and releases it as whole simulation frames.
pub struct FrameClock {
    frame_dt: f32,
    accumulator: f32,
}

/// Cap on frames released per tick, so a long stall cannot snowball.
const MAX_FRAMES_PER_TICK: u32 = 10;

impl FrameClock {
    pub fn new(fps: f32) -> Self {
        Self {
            frame_dt: 1.0 / fps,
            accumulator: 0.0,
        }
    }

    /// The conventional 60 fps cadence the constants were tuned against.
    pub fn standard() -> Self {
        Self::new(60.0)
    }

    /// Feed elapsed wall-clock seconds; returns how many frames to step.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed;
        self.accumulator = self
            .accumulator
            .min(self.frame_dt * MAX_FRAMES_PER_TICK as f32);
        let frames = (self.accumulator / self.frame_dt) as u32;
        self.accumulator -= frames as f32 * self.frame_dt;
        frames
    }

    /// Seconds per frame at the nominal cadence.
    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_frame_releases_one() {
        let mut clock = FrameClock::standard();
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn partial_frames_accumulate() {
        let mut clock = FrameClock::standard();
        assert_eq!(clock.advance(0.008), 0);
        assert_eq!(clock.advance(0.010), 1);
    }

    #[test]
    fn stall_is_capped() {
        let mut clock = FrameClock::standard();
        assert_eq!(clock.advance(2.0), 10);
    }

    #[test]
    fn custom_cadence() {
        let mut clock = FrameClock::new(30.0);
        assert!((clock.frame_dt() - 1.0 / 30.0).abs() < 1e-6);
        assert_eq!(clock.advance(0.12), 3);
    }
}
