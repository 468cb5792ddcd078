//! Terminal Flappy Bird runner (default binary).
//!
//! Wires the deterministic session to crossterm input, the half-block
//! framebuffer renderer and a fixed-timestep frame limiter.

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_flappy::config::RunConfig;
use tui_flappy::core::{FrameSnapshot, Session};
use tui_flappy::input::poll_actions;
use tui_flappy::term::{FrameBuffer, FrameLimiter, GameView, SpriteSheet, TerminalRenderer, Viewport};
use tui_flappy::types::SessionState;

fn main() -> Result<()> {
    let run_config = RunConfig::from_env();
    init_logging(&run_config)?;

    let sprites = SpriteSheet::load().context("failed to load built-in sprites")?;
    let masks = sprites
        .bird_masks()
        .context("failed to build bird collision masks")?;
    let view = GameView::new(sprites).context("sprite sheet is incomplete")?;
    let mut session = Session::with_masks(run_config.game_config(), run_config.seed, masks)
        .context("invalid game configuration")?;

    let mut term = TerminalRenderer::new().with_mouse(run_config.mouse);
    term.enter()?;

    let result = run(&mut term, &view, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    match session.state() {
        SessionState::Over => println!("Game over! Score: {}", session.score()),
        _ => println!("Score: {}", session.score()),
    }
    Ok(())
}

fn init_logging(run_config: &RunConfig) -> Result<()> {
    // The terminal belongs to the game; logs only go to a file when asked.
    let Some(path) = &run_config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    info!("logging to {}", path.display());
    Ok(())
}

fn run(term: &mut TerminalRenderer, view: &GameView, session: &mut Session) -> Result<()> {
    let mut limiter = FrameLimiter::new(session.config().fps);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = FrameSnapshot::default();
    let mut frames = 1;

    loop {
        let (actions, extras) = poll_actions(Duration::ZERO)?;
        if extras.resized {
            term.invalidate();
        }

        // Input belongs to the first frame; catch-up frames replay none.
        for i in 0..frames {
            let batch = if i == 0 { actions.as_slice() } else { &[] };
            if session.step(batch).state.is_terminal() {
                break;
            }
        }

        draw(term, view, session, &limiter, &mut snap, &mut fb)?;

        match session.state() {
            SessionState::Quit => return Ok(()),
            SessionState::Over => return wait_for_key(),
            SessionState::Running | SessionState::Paused => {}
        }

        frames = limiter.tick();
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &Session,
    limiter: &FrameLimiter,
    snap: &mut FrameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    session.snapshot_into(snap, limiter.now_ms());
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

/// Keep the game-over screen up until any key is pressed.
fn wait_for_key() -> Result<()> {
    // Swallow keys that were already queued when the bird crashed.
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
