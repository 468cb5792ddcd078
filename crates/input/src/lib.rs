//! Terminal input for the game loop.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]
//! and drains them into a fixed-capacity batch once per frame.

pub mod map;
pub mod poll;

pub use tui_flappy_types as types;

pub use map::{handle_event, handle_key_event, should_quit};
pub use poll::{collect_event, poll_actions, ActionBatch, PollExtras, MAX_ACTIONS_PER_FRAME};
