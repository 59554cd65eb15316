use std::time::Instant;

/// One tick produced by a [`FrameClock`].
#[derive(Debug, Copy, Clone)]
pub struct Tick {
    /// Seconds elapsed since the previous tick, clamped to the clock bounds.
    pub dt: f32,
    /// Monotonic tick counter.
    pub index: u64,
}

/// Monotonic tick source with clamped delta time.
///
/// Clamp rationale:
/// - the lower bound keeps zero-dt ticks out of the integrator on platforms
///   where a tight loop can observe no elapsed time
/// - the upper bound keeps the simulation from exploding after a debugger
///   pause or a minimized window
///
/// One clock per loop; clocks are not shared between drivers.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    index: u64,
    min_dt: f32,
    max_dt: f32,
}

const DEFAULT_MIN_DT: f32 = 0.0001;
const DEFAULT_MAX_DT: f32 = 0.25;

impl FrameClock {
    /// Creates a clock with the default delta-time bounds.
    pub fn new() -> Self {
        Self::with_bounds(DEFAULT_MIN_DT, DEFAULT_MAX_DT)
    }

    /// Creates a clock with custom delta-time bounds in seconds.
    pub fn with_bounds(min_dt: f32, max_dt: f32) -> Self {
        debug_assert!(min_dt <= max_dt);
        Self { last: Instant::now(), index: 0, min_dt, max_dt }
    }

    /// Resets the baseline, e.g. when resuming a paused loop.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns the next [`Tick`].
    pub fn tick(&mut self) -> Tick {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .as_secs_f32()
            .clamp(self.min_dt, self.max_dt);
        self.last = now;

        let tick = Tick { dt, index: self.index };
        self.index = self.index.wrapping_add(1);
        tick
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
