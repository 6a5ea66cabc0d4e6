//! Frame clock driving the render loop.

use std::time::{Duration, Instant};

/// Tracks elapsed time since start plus a once-per-second frame rate
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    frames_since_report: u32,
    last_report: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last_frame: start,
            frames_since_report: 0,
            last_report: start,
        }
    }

    /// Seconds since the clock started
    pub fn elapsed_s(&self) -> f32 {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.start).as_secs_f32()
    }

    /// Mark a frame at `now`; returns the delta since the previous frame
    /// and, once per second, the measured frames per second
    pub fn tick_at(&mut self, now: Instant) -> (f32, Option<f32>) {
        let dt = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames_since_report += 1;

        let since_report = now.saturating_duration_since(self.last_report);
        if since_report >= Duration::from_secs(1) {
            let fps = self.frames_since_report as f32 / since_report.as_secs_f32();
            self.frames_since_report = 0;
            self.last_report = now;
            (dt, Some(fps))
        } else {
            (dt, None)
        }
    }

    pub fn tick(&mut self) -> (f32, Option<f32>) {
        self.tick_at(Instant::now())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
