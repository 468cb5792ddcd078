//! Terminal Flappy Bird (workspace facade crate).
//!
//! Re-exports the member crates as `tui_flappy::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub mod config;

pub use tui_flappy_core as core;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;
