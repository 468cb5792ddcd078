//! Run-time game configuration.
//!
//! Defaults come from the constants in the types crate. Every session is
//! built from a validated [`GameConfig`]; a configuration that cannot produce
//! a playable pipe is rejected up front instead of generating degenerate
//! obstacles later.

use thiserror::Error;

use crate::clock::interval_frames;
use crate::types::*;

/// Minimum number of body pieces: one above the gap and one below it.
pub const MIN_BODY_PIECES: i64 = 2;

/// Configuration errors (fatal at session start)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Frame rate must be positive, got {0}")]
    NonPositiveFps(f64),

    #[error("Dimension must be non-zero: {0}")]
    ZeroDimension(&'static str),

    #[error("Speed must be finite and non-negative: {field} = {value}")]
    InvalidSpeed { field: &'static str, value: f64 },

    #[error("Pipe add interval of {interval_ms}ms is shorter than one frame at {fps} fps")]
    SpawnIntervalTooShort { interval_ms: f64, fps: f64 },

    #[error("Playfield too small for a pipe pair: {total_body_pieces} body pieces, need at least 2")]
    PlayfieldTooSmall { total_body_pieces: i64 },
}

/// Result type alias for configuration checks
pub type Result<T> = std::result::Result<T, ConfigError>;

/// All tunables of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub fps: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    /// Pipe scroll speed (pixels per ms)
    pub scroll_speed: f64,
    pub bird_x: f64,
    pub bird_width: u32,
    pub bird_height: u32,
    /// Pixels per ms
    pub sink_speed: f64,
    /// Pixels per ms
    pub climb_speed: f64,
    pub climb_duration_ms: f64,
    pub pipe_width: u32,
    pub pipe_piece_height: u32,
    pub pipe_add_interval_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            scroll_speed: SCROLL_SPEED,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            sink_speed: SINK_SPEED,
            climb_speed: CLIMB_SPEED,
            climb_duration_ms: CLIMB_DURATION_MS,
            pipe_width: PIPE_WIDTH,
            pipe_piece_height: PIPE_PIECE_HEIGHT,
            pipe_add_interval_ms: PIPE_ADD_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_screen(mut self, width: f64, height: f64) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_scroll_speed(mut self, speed: f64) -> Self {
        self.scroll_speed = speed;
        self
    }

    pub fn with_bird_x(mut self, x: f64) -> Self {
        self.bird_x = x;
        self
    }

    pub fn with_bird_size(mut self, width: u32, height: u32) -> Self {
        self.bird_width = width;
        self.bird_height = height;
        self
    }

    pub fn with_sink_speed(mut self, speed: f64) -> Self {
        self.sink_speed = speed;
        self
    }

    pub fn with_climb(mut self, speed: f64, duration_ms: f64) -> Self {
        self.climb_speed = speed;
        self.climb_duration_ms = duration_ms;
        self
    }

    pub fn with_pipe_add_interval_ms(mut self, interval_ms: f64) -> Self {
        self.pipe_add_interval_ms = interval_ms;
        self
    }

    /// Check that the configuration can run a session.
    pub fn validate(&self) -> Result<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::NonPositiveFps(self.fps));
        }
        if !(self.screen_width > 0.0) {
            return Err(ConfigError::ZeroDimension("screen_width"));
        }
        if !(self.screen_height > 0.0) {
            return Err(ConfigError::ZeroDimension("screen_height"));
        }
        if self.bird_width == 0 || self.bird_height == 0 {
            return Err(ConfigError::ZeroDimension("bird"));
        }
        if self.pipe_width == 0 {
            return Err(ConfigError::ZeroDimension("pipe_width"));
        }
        if self.pipe_piece_height == 0 {
            return Err(ConfigError::ZeroDimension("pipe_piece_height"));
        }
        for (field, value) in [
            ("scroll_speed", self.scroll_speed),
            ("sink_speed", self.sink_speed),
            ("climb_speed", self.climb_speed),
            ("climb_duration_ms", self.climb_duration_ms),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidSpeed { field, value });
            }
        }
        if self.spawn_interval_frames() == 0 {
            return Err(ConfigError::SpawnIntervalTooShort {
                interval_ms: self.pipe_add_interval_ms,
                fps: self.fps,
            });
        }
        let total_body_pieces = self.total_body_pieces();
        if total_body_pieces < MIN_BODY_PIECES {
            return Err(ConfigError::PlayfieldTooSmall { total_body_pieces });
        }
        Ok(())
    }

    /// Body pieces shared between the top and bottom stacks of every pipe.
    ///
    /// The playfield minus three bird heights (the gap) minus three pieces
    /// (two end caps plus slack), in whole pieces.
    pub fn total_body_pieces(&self) -> i64 {
        let piece = self.pipe_piece_height as f64;
        let free = self.screen_height - 3.0 * self.bird_height as f64 - 3.0 * piece;
        (free / piece).floor() as i64
    }

    /// Vertical opening between the two stacks of every pipe, in pixels.
    pub fn gap_height(&self) -> f64 {
        let stacked = (self.total_body_pieces() + 2) as f64 * self.pipe_piece_height as f64;
        self.screen_height - stacked
    }

    /// Frames between pipe spawns.
    pub fn spawn_interval_frames(&self) -> u64 {
        interval_frames(self.pipe_add_interval_ms, self.fps)
    }

    /// Spawn height: vertically centred.
    pub fn bird_start_y(&self) -> f64 {
        ((self.screen_height - self.bird_height as f64) / 2.0).floor()
    }

    /// Lowest y the bird may reach before it counts as sinking through the floor.
    pub fn max_bird_y(&self) -> f64 {
        self.screen_height - self.bird_height as f64
    }
}
