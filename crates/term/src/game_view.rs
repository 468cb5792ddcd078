//! GameView: maps a [`FrameSnapshot`] into a terminal framebuffer.
//!
//! The playfield is drawn with upper-half-block characters, so every cell
//! carries two vertically stacked pixels (foreground on top, background
//! below). World coordinates are scaled uniformly to fit the viewport and the
//! playfield is centred.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{FrameSnapshot, PipeSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::{
    AssetError, SpriteSheet, BACKGROUND, BIRD_WING_DOWN, BIRD_WING_UP, PIPE_BODY, PIPE_END,
};
use crate::types::{BirdFrame, SessionState, MASK_ALPHA_THRESHOLD};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the scaled playfield lands inside the viewport, in half-block pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub scale: f64,
    pub offset_x: u32,
    pub offset_y: u32,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    pub fn fit(screen_width: f64, screen_height: f64, viewport: Viewport) -> Self {
        let px_w = viewport.width as f64;
        let px_h = viewport.height as f64 * 2.0;
        let scale = if screen_width > 0.0 && screen_height > 0.0 {
            (px_w / screen_width).min(px_h / screen_height)
        } else {
            0.0
        };
        let width = (screen_width * scale).floor() as u32;
        let height = (screen_height * scale).floor() as u32;
        Self {
            scale,
            offset_x: (px_w as u32).saturating_sub(width) / 2,
            offset_y: (px_h as u32).saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// World coordinates at the centre of a viewport pixel, if on the playfield.
    pub fn to_world(&self, px: u32, py: u32) -> Option<(f64, f64)> {
        if px < self.offset_x || py < self.offset_y || self.scale <= 0.0 {
            return None;
        }
        let (lx, ly) = (px - self.offset_x, py - self.offset_y);
        if lx >= self.width || ly >= self.height {
            return None;
        }
        Some((
            (lx as f64 + 0.5) / self.scale,
            (ly as f64 + 0.5) / self.scale,
        ))
    }
}

const LETTERBOX: Rgb = Rgb::new(0, 0, 0);

/// Terminal renderer for the game, holding its resolved sprites.
pub struct GameView {
    sprites: SpriteSheet,
    bird_up: usize,
    bird_down: usize,
    pipe_end: usize,
    pipe_body: usize,
    background: usize,
    show_hints: bool,
}

impl GameView {
    pub fn new(sprites: SpriteSheet) -> Result<Self, AssetError> {
        Ok(Self {
            bird_up: sprites.index_of(BIRD_WING_UP)?,
            bird_down: sprites.index_of(BIRD_WING_DOWN)?,
            pipe_end: sprites.index_of(PIPE_END)?,
            pipe_body: sprites.index_of(PIPE_BODY)?,
            background: sprites.index_of(BACKGROUND)?,
            sprites,
            show_hints: true,
        })
    }

    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &FrameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let layout = Layout::fit(snap.screen_width, snap.screen_height, viewport);

        for row in 0..viewport.height {
            for col in 0..viewport.width {
                let top = self.pixel_color(snap, &layout, col as u32, row as u32 * 2);
                let bottom = self.pixel_color(snap, &layout, col as u32, row as u32 * 2 + 1);
                fb.put_pixels(col, row, top, bottom);
            }
        }

        self.draw_hud(fb, snap, &layout, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &FrameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn pixel_color(&self, snap: &FrameSnapshot, layout: &Layout, px: u32, py: u32) -> Rgb {
        match layout.to_world(px, py) {
            Some((wx, wy)) => self.world_color(snap, wx, wy),
            None => LETTERBOX,
        }
    }

    /// Color of the world point `(wx, wy)`: bird over pipes over background.
    pub fn world_color(&self, snap: &FrameSnapshot, wx: f64, wy: f64) -> Rgb {
        let bird = &snap.bird;
        let (bw, bh) = (bird.width as f64, bird.height as f64);
        if wx >= bird.x && wx < bird.x + bw && wy >= bird.y && wy < bird.y + bh {
            let sprite = match bird.frame {
                BirdFrame::WingUp => self.sprites.by_index(self.bird_up),
                BirdFrame::WingDown => self.sprites.by_index(self.bird_down),
            };
            let px = sprite.sample((wx - bird.x) / bw, (wy - bird.y) / bh);
            if px.a > MASK_ALPHA_THRESHOLD {
                return px.rgb;
            }
        }

        for pipe in &snap.pipes {
            if let Some(c) = self.pipe_color(pipe, snap.piece_height as f64, wx, wy) {
                return c;
            }
        }

        let bg = self.sprites.by_index(self.background);
        let v = if snap.screen_height > 0.0 {
            wy / snap.screen_height
        } else {
            0.0
        };
        bg.sample(0.0, v).rgb
    }

    fn pipe_color(&self, pipe: &PipeSnapshot, piece_h: f64, wx: f64, wy: f64) -> Option<Rgb> {
        let w = pipe.width as f64;
        if wx < pipe.x || wx >= pipe.x + w || piece_h <= 0.0 {
            return None;
        }
        let u = (wx - pipe.x) / w;

        // The cap is the piece next to the gap; body pieces tile away from it.
        // `row` is the pixel row within the piece, top to bottom.
        let (cap, row) = if wy < pipe.top_height {
            let from_gap = pipe.top_height - wy;
            (
                from_gap <= piece_h,
                (piece_h - from_gap.rem_euclid(piece_h)).rem_euclid(piece_h),
            )
        } else if wy >= pipe.bottom_y {
            let from_gap = wy - pipe.bottom_y;
            (from_gap < piece_h, from_gap.rem_euclid(piece_h))
        } else {
            return None;
        };

        let sprite = if cap {
            self.sprites.by_index(self.pipe_end)
        } else {
            self.sprites.by_index(self.pipe_body)
        };
        let px = sprite.sample(u, row / piece_h);
        (px.a > MASK_ALPHA_THRESHOLD).then_some(px.rgb)
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &FrameSnapshot, layout: &Layout, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        let label = CellStyle::text(Rgb::new(255, 255, 255), true, false);

        let top_row = (layout.offset_y / 2) as u16;
        let score_w = digit_count(snap.score);
        let x = viewport.width.saturating_sub(score_w) / 2;
        fb.put_u32(x, top_row, snap.score, label);

        let mid = viewport.height / 2;
        match snap.state {
            SessionState::Paused => fb.put_str_centered(mid, " PAUSED ", label),
            SessionState::Over => {
                fb.put_str_centered(mid, " GAME OVER ", label);
                self.put_final_score(fb, mid.saturating_add(1), snap.score, label);
            }
            SessionState::Quit => {
                fb.put_str_centered(mid, " BYE ", label);
                self.put_final_score(fb, mid.saturating_add(1), snap.score, label);
            }
            SessionState::Running => {}
        }

        if self.show_hints && viewport.height > 2 {
            let hint = CellStyle::text(Rgb::new(200, 200, 200), false, true);
            let text = if snap.state.is_terminal() {
                " any key: exit "
            } else {
                " SPACE climb  P pause  Q quit "
            };
            fb.put_str_centered(viewport.height - 1, text, hint);
        }
    }

    fn put_final_score(&self, fb: &mut FrameBuffer, y: u16, score: u32, style: CellStyle) {
        const LABEL: &str = " score ";
        let w = LABEL.len() as u16 + digit_count(score) + 1;
        let mut x = fb.width().saturating_sub(w) / 2;
        x = x.saturating_add(fb.put_str(x, y, LABEL, style));
        x = x.saturating_add(fb.put_u32(x, y, score, style));
        fb.put_str(x, y, " ", style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_fits_and_centres() {
        // 568x512 world into 142x64 cells (142x128 pixels): scale 0.25.
        let l = Layout::fit(568.0, 512.0, Viewport::new(142, 64));
        assert_eq!(l.scale, 0.25);
        assert_eq!((l.width, l.height), (142, 128));
        assert_eq!((l.offset_x, l.offset_y), (0, 0));

        // Wider terminal: pillarboxed.
        let l = Layout::fit(568.0, 512.0, Viewport::new(200, 64));
        assert_eq!(l.offset_x, 29);
        assert_eq!(l.to_world(0, 0), None);
        assert_eq!(l.to_world(29, 0), Some((2.0, 2.0)));
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }
}
