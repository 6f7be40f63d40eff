//! Scene clock and frame-rate bookkeeping.

use std::time::{Duration, Instant};

/// How often [`FrameStats`] reports a rate.
pub const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Monotonic scene time: `start_time + elapsed * time_scale`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    time_scale: f64,
    start_time: f64,
}

impl FrameClock {
    pub fn new(time_scale: f64, start_time: f64) -> Self {
        Self::starting_at(Instant::now(), time_scale, start_time)
    }

    pub fn starting_at(origin: Instant, time_scale: f64, start_time: f64) -> Self {
        Self {
            origin,
            time_scale,
            start_time,
        }
    }

    /// Scene seconds now.
    pub fn seconds(&self) -> f64 {
        self.seconds_at(Instant::now())
    }

    /// Scene seconds at `now`. Instants before the origin read as the origin.
    pub fn seconds_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.origin);
        self.start_time + elapsed.as_secs_f64() * self.time_scale
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Counts frames and yields an average rate once per [`STATS_INTERVAL`].
#[derive(Debug, Clone)]
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
    total_frames: u64,
}

impl FrameStats {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            total_frames: 0,
        }
    }

    /// Record one presented frame. Returns frames per second when an
    /// interval has elapsed.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        self.total_frames += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < STATS_INTERVAL {
            return None;
        }
        let fps = f64::from(self.frames) / elapsed.as_secs_f64();
        self.window_start = now;
        self.frames = 0;
        Some(fps)
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
