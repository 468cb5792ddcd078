//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation rules of the game: bird physics, pipe
//! generation and scrolling, pixel-mask collision, and scoring.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed and same actions produce identical sessions
//! - **Testable**: Unit tests for every rule
//! - **Portable**: The terminal front end is only one possible collaborator
//!
//! # Module Structure
//!
//! - [`clock`]: frame/millisecond conversion at a fixed rate
//! - [`bird`]: climb/sink physics and bird collision masks
//! - [`pipe`]: pipe pair generation, scrolling, and collision
//! - [`mask`]: packed per-pixel collision masks
//! - [`rng`]: seeded LCG for gap placement
//! - [`config`]: run-time tunables and their validation
//! - [`session`]: the per-frame game loop state machine
//! - [`snapshot`]: render-ready frame data
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::{GameConfig, Session};
//! use tui_flappy_types::{GameAction, SessionState};
//!
//! let mut session = Session::new(GameConfig::default(), 12345).unwrap();
//!
//! // First frame spawns a pipe at the right edge.
//! session.step(&[]);
//! assert_eq!(session.pipes().len(), 1);
//!
//! // Climb, then let the bird fall until it hits the floor.
//! session.step(&[GameAction::Climb]);
//! while !session.finished() {
//!     session.step(&[]);
//! }
//! assert_eq!(session.state(), SessionState::Over);
//! assert_eq!(session.final_score(), Some(0));
//! ```
//!
//! # Timing
//!
//! The loop uses a fixed timestep: every [`Session::step`] advances exactly
//! one frame at the configured rate (60 FPS by default). Speeds are stored in
//! pixels per millisecond and converted with [`clock::frames_to_ms`].

pub mod bird;
pub mod clock;
pub mod config;
pub mod mask;
pub mod pipe;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::{Bird, BirdMasks};
pub use clock::{frames_to_ms, ms_to_frames};
pub use config::{ConfigError, GameConfig};
pub use mask::CollisionMask;
pub use pipe::PipePair;
pub use rng::SimpleRng;
pub use session::{Session, StepOutcome};
pub use snapshot::{BirdSnapshot, FrameSnapshot, PipeSnapshot};
