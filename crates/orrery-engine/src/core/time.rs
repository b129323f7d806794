/// Fixed timestep accumulator.
/// Game logic runs at a consistent rate regardless of display refresh.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// Upper bound on logic steps per frame (a stalled tab must not replay seconds of spin).
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

}

/// Wall-clock time as seen by game logic.
///
/// Seconds since the Unix epoch, kept in f64: at ~1.7e9 s an f32 would only
/// resolve steps of about two minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    now: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new(now: f64) -> Self {
        Self { now, frame: 0 }
    }

    /// Record the wall-clock time of a new frame.
    pub fn advance(&mut self, now: f64) {
        self.now = now;
        self.frame += 1;
    }

    /// Seconds since the Unix epoch at the current frame.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
