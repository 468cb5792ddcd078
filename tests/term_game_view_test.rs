use tui_flappy::core::{FrameSnapshot, GameConfig, PipeSnapshot, Session};
use tui_flappy::term::{Cell, GameView, Rgb, SpriteSheet, Viewport};
use tui_flappy::types::{BirdFrame, SessionState};

const SKY_MID: Rgb = Rgb::new(130, 208, 225);
const BIRD_BODY: Rgb = Rgb::new(245, 200, 66);
const PIPE: Rgb = Rgb::new(100, 170, 40);
const CAP_RIM: Rgb = Rgb::new(60, 100, 20);

fn view() -> GameView {
    GameView::new(SpriteSheet::load().unwrap()).unwrap()
}

/// Fresh session snapshot with one hand-placed pipe: top stack 96px,
/// gap [96, 288), bottom stack to the floor.
fn snapshot_with_pipe(state: SessionState) -> FrameSnapshot {
    let session = Session::new(GameConfig::default(), 1).unwrap();
    let mut snap = session.snapshot(0);
    snap.pipes.push(PipeSnapshot {
        x: 200.0,
        width: 80,
        top_height: 96.0,
        bottom_y: 288.0,
        top_pieces: 3,
        bottom_pieces: 7,
        scored: false,
    });
    snap.state = state;
    snap
}

#[test]
fn bird_is_drawn_over_background() {
    let view = view();
    let snap = snapshot_with_pipe(SessionState::Running);
    assert_eq!(snap.bird.frame, BirdFrame::WingDown);
    assert_eq!((snap.bird.x, snap.bird.y), (50.0, 231.0));

    assert_eq!(view.world_color(&snap, 77.0, 258.0), BIRD_BODY);
    // Transparent sprite corner shows the sky behind it.
    assert_eq!(view.world_color(&snap, 50.5, 231.5), Rgb::new(160, 220, 235));
}

#[test]
fn pipe_caps_face_the_gap() {
    let view = view();
    let snap = snapshot_with_pipe(SessionState::Running);

    // Body above the top cap, rim right at the gap.
    assert_eq!(view.world_color(&snap, 240.0, 50.0), PIPE);
    assert_eq!(view.world_color(&snap, 240.0, 95.5), CAP_RIM);
    // Gap shows the sky.
    assert_eq!(view.world_color(&snap, 240.0, 200.0), SKY_MID);
    // Bottom cap rim, then body further down.
    assert_eq!(view.world_color(&snap, 240.0, 288.5), CAP_RIM);
    assert_eq!(view.world_color(&snap, 240.0, 400.0), PIPE);
    // Body pieces are narrower than the cap.
    assert_eq!(view.world_color(&snap, 200.5, 50.0), Rgb::new(70, 180, 200));
}

#[test]
fn render_fills_viewport_with_half_blocks() {
    let view = view().with_hints(false);
    let snap = snapshot_with_pipe(SessionState::Running);
    let fb = view.render(&snap, Viewport::new(142, 64));

    // Scale 0.25: cell (60, 10) covers world x ~242, y ~82..86 (top cap).
    let cell = fb.get(60, 10).unwrap();
    assert_eq!(cell.ch, '▀');
    assert_eq!(cell.style.fg, PIPE);
    assert_eq!(cell.style.bg, PIPE);
}

#[test]
fn wide_terminal_is_letterboxed() {
    let view = view();
    let snap = snapshot_with_pipe(SessionState::Running);
    let fb = view.render(&snap, Viewport::new(200, 64));

    let black = Cell::half_block(Rgb::new(0, 0, 0), Rgb::new(0, 0, 0));
    assert_eq!(fb.get(0, 10), Some(black));
    assert_eq!(fb.get(199, 10), Some(black));
    assert_ne!(fb.get(100, 10), Some(black));
}

#[test]
fn hud_shows_score_and_state() {
    let view = view();
    let vp = Viewport::new(142, 64);

    let mut snap = snapshot_with_pipe(SessionState::Running);
    snap.score = 12;
    let fb = view.render(&snap, vp);
    assert!(fb.row_text(0).contains("12"));
    assert!(!fb.row_text(32).contains("PAUSED"));

    snap.state = SessionState::Paused;
    let fb = view.render(&snap, vp);
    assert!(fb.row_text(32).contains("PAUSED"));

    snap.state = SessionState::Over;
    let fb = view.render(&snap, vp);
    assert!(fb.row_text(32).contains("GAME OVER"));
    assert!(fb.row_text(33).contains("score 12"));
    assert!(fb.row_text(63).contains("any key"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let view = view();
    let snap = snapshot_with_pipe(SessionState::Over);
    for (w, h) in [(0, 0), (1, 1), (3, 2), (500, 1)] {
        let fb = view.render(&snap, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
