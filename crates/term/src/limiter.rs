//! Fixed-timestep frame pacing.
//!
//! The limiter keeps an absolute schedule of frame deadlines measured from a
//! start instant, so rounding in individual sleeps does not accumulate. When
//! the loop falls far behind (suspended terminal, debugger) it resyncs instead
//! of replaying a burst of frames.

use std::time::{Duration, Instant};

/// Frames that may be caught up in a single `tick` before resyncing.
pub const MAX_CATCH_UP_FRAMES: u32 = 5;

#[derive(Debug, Clone)]
pub struct FrameLimiter {
    start: Instant,
    frame_dur: Duration,
    next_frame: Instant,
    max_catch_up: u32,
}

impl FrameLimiter {
    /// Create a limiter for `fps`. Non-positive or non-finite rates fall back
    /// to one frame per second.
    pub fn new(fps: f64) -> Self {
        let frame_dur = if fps.is_finite() && fps > 0.0 {
            Duration::from_secs_f64(1.0 / fps)
        } else {
            Duration::from_secs(1)
        };
        let start = Instant::now();
        Self {
            start,
            frame_dur,
            next_frame: start + frame_dur,
            max_catch_up: MAX_CATCH_UP_FRAMES,
        }
    }

    pub fn with_max_catch_up(mut self, frames: u32) -> Self {
        self.max_catch_up = frames.max(1);
        self
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_dur
    }

    /// Milliseconds since the limiter was created. Drives animation only.
    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Time left until the next frame deadline (zero if already due).
    pub fn until_next(&self) -> Duration {
        self.next_frame.saturating_duration_since(Instant::now())
    }

    /// Block until the next frame is due and return how many frames elapsed.
    ///
    /// Usually 1. Larger when the caller overran a frame, capped at the
    /// catch-up limit.
    pub fn tick(&mut self) -> u32 {
        let wait = self.until_next();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.advance(Instant::now())
    }

    /// Frames due at `now` without blocking (0 if the deadline has not passed).
    pub fn due(&mut self, now: Instant) -> u32 {
        if now < self.next_frame {
            return 0;
        }
        self.advance(now)
    }

    fn advance(&mut self, now: Instant) -> u32 {
        let mut frames = 0u32;
        while self.next_frame <= now && frames < self.max_catch_up {
            self.next_frame += self.frame_dur;
            frames += 1;
        }
        if self.next_frame <= now {
            log::debug!("frame limiter resync: fell behind by {:?}", now - self.next_frame);
            self.next_frame = now + self.frame_dur;
        }
        frames.max(1)
    }
}
