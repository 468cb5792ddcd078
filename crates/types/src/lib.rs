//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Playfield
//!
//! The simulation runs in world pixels, independent of the terminal size:
//!
//! - **Width**: 568 pixels
//! - **Height**: 512 pixels
//! - **Origin**: top-left, y grows downwards
//!
//! # Motion Constants
//!
//! Speeds are expressed in pixels per millisecond so they stay independent of
//! the frame rate. The loop advances in frames and converts with the clock
//! helpers in the core crate.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Fixed timestep rate |
//! | `SCROLL_SPEED` | 0.18 | Leftward pipe speed |
//! | `SINK_SPEED` | 0.18 | Bird descent when not climbing |
//! | `CLIMB_SPEED` | 0.3 | Peak-scaled climb speed |
//! | `CLIMB_DURATION_MS` | 333.3 | Length of one climb |
//! | `PIPE_ADD_INTERVAL_MS` | 3000 | Time between pipe spawns |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{BirdFrame, SessionState};
//!
//! assert!(SessionState::Over.is_terminal());
//! assert!(!SessionState::Paused.is_terminal());
//!
//! assert_eq!(BirdFrame::at(0), BirdFrame::WingDown);
//! assert_eq!(BirdFrame::at(250), BirdFrame::WingUp);
//! ```

/// Fixed timestep rate (frames per second)
pub const FPS: f64 = 60.0;

/// Playfield width in world pixels
pub const SCREEN_WIDTH: f64 = 568.0;

/// Playfield height in world pixels
pub const SCREEN_HEIGHT: f64 = 512.0;

/// Leftward scroll speed shared by every pipe (pixels per ms)
pub const SCROLL_SPEED: f64 = 0.18;

/// Fixed horizontal position of the bird's left edge
pub const BIRD_X: f64 = 50.0;

/// Bird sprite width in world pixels
pub const BIRD_WIDTH: u32 = 50;

/// Bird sprite height in world pixels
pub const BIRD_HEIGHT: u32 = 50;

/// Descent speed while not climbing (pixels per ms)
pub const SINK_SPEED: f64 = 0.18;

/// Climb speed scale (pixels per ms, before easing)
pub const CLIMB_SPEED: f64 = 0.3;

/// Duration of one climb (ms)
pub const CLIMB_DURATION_MS: f64 = 333.3;

/// Pipe width in world pixels
pub const PIPE_WIDTH: u32 = 80;

/// Height of one pipe piece (body segment or end cap)
pub const PIPE_PIECE_HEIGHT: u32 = 32;

/// Time between pipe spawns (ms)
pub const PIPE_ADD_INTERVAL_MS: f64 = 3000.0;

/// Wing animation period (ms); first half wing down, second half wing up
pub const WING_PERIOD_MS: u64 = 500;

/// Pixels with alpha at or below this value are not part of a collision mask
pub const MASK_ALPHA_THRESHOLD: u8 = 127;

/// Semantic input events produced by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Climb,
    Pause,
    Quit,
}

/// Session lifecycle.
///
/// `Over` (crashed) and `Quit` (player left) are terminal: once reached the
/// session never advances again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Running,
    Paused,
    Over,
    Quit,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Over | SessionState::Quit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::Over => "over",
            SessionState::Quit => "quit",
        }
    }
}

/// Which of the two bird animation frames is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BirdFrame {
    WingUp,
    #[default]
    WingDown,
}

impl BirdFrame {
    /// Select the animation frame for a wall-clock time in milliseconds.
    ///
    /// Animation only; gameplay never depends on this.
    pub fn at(now_ms: u64) -> Self {
        if now_ms % WING_PERIOD_MS >= WING_PERIOD_MS / 2 {
            BirdFrame::WingUp
        } else {
            BirdFrame::WingDown
        }
    }

    /// Sprite name used by the asset loader
    pub fn sprite_name(&self) -> &'static str {
        match self {
            BirdFrame::WingUp => "bird-wing-up",
            BirdFrame::WingDown => "bird-wing-down",
        }
    }
}
