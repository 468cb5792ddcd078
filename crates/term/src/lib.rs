//! Terminal front end for the flappy simulation.
//!
//! Renders [`core::FrameSnapshot`]s into a simple framebuffer (no widgets or
//! layout engine) and flushes it to the terminal with diffed writes. The
//! playfield is drawn with half-block characters so each cell carries two
//! vertical pixels.
//!
//! Modules:
//! - [`sprites`]: built-in pixel art, decoded into RGBA sprites and masks
//! - [`fb`]: the framebuffer
//! - [`game_view`]: snapshot to framebuffer
//! - [`renderer`]: framebuffer to terminal
//! - [`limiter`]: fixed-timestep frame pacing

pub mod fb;
pub mod game_view;
pub mod limiter;
pub mod renderer;
pub mod sprites;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use limiter::FrameLimiter;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprites::{AssetError, Rgba, Sprite, SpriteArt, SpriteSheet};
