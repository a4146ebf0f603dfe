//! Frame timing.
//!
//! `begin_frame`/`end_frame` bracket one loop iteration. `frame_time` reports
//! the length of the most recently completed bracket and is 0 until the first
//! `end_frame`.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct FrameTimer {
    start: Instant,
    frame_begin: Option<Instant>,
    delta: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a timer whose `time()` origin is `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            frame_begin: None,
            delta: 0.0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.begin_frame_at(Instant::now());
    }

    pub fn begin_frame_at(&mut self, now: Instant) {
        self.frame_begin = Some(now);
    }

    pub fn end_frame(&mut self) {
        self.end_frame_at(Instant::now());
    }

    /// Records the end timestamp. Without a matching begin this is a no-op
    /// and the previous delta is kept.
    pub fn end_frame_at(&mut self, now: Instant) {
        let Some(begin) = self.frame_begin else {
            return;
        };
        self.delta = now.saturating_duration_since(begin).as_secs_f32();
    }

    /// Seconds taken by the most recently completed frame.
    pub fn frame_time(&self) -> f32 {
        self.delta
    }

    /// Seconds since the timer was created.
    pub fn time(&self) -> f32 {
        self.time_at(Instant::now())
    }

    pub fn time_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.start).as_secs_f32()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
