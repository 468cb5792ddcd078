//! Pipe obstacles - a top and a bottom stack with a gap between them.
//!
//! Every pipe is built from fixed-height pieces. The number of body pieces
//! is the same for every pipe; randomization only decides how they are split
//! between the two stacks, i.e. where the gap sits. Each stack then gets one
//! end-cap piece facing the gap.

use log::debug;

use crate::bird::Bird;
use crate::clock::frames_to_ms;
use crate::config::{ConfigError, GameConfig, MIN_BODY_PIECES};
use crate::mask::CollisionMask;
use crate::rng::SimpleRng;

#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    x: f64,
    /// Pieces in the top stack, end cap included
    top_pieces: u32,
    /// Pieces in the bottom stack, end cap included
    bottom_pieces: u32,
    score_counted: bool,
    width: u32,
    piece_height: u32,
    screen_width: f64,
    screen_height: f64,
    fps: f64,
    scroll_speed: f64,
    mask: CollisionMask,
}

impl PipePair {
    /// Generate a pipe at the right edge of the playfield.
    pub fn generate(config: &GameConfig, rng: &mut SimpleRng) -> Result<Self, ConfigError> {
        let total = config.total_body_pieces();
        if total < MIN_BODY_PIECES {
            return Err(ConfigError::PlayfieldTooSmall {
                total_body_pieces: total,
            });
        }
        Ok(Self::spawn(config, total as u32, rng))
    }

    /// Generate with an already validated body-piece count (`>= 2`).
    pub(crate) fn spawn(config: &GameConfig, total_body_pieces: u32, rng: &mut SimpleRng) -> Self {
        let bottom_body = rng.next_inclusive(1, total_body_pieces.saturating_sub(1));
        let top_body = total_body_pieces.saturating_sub(bottom_body);
        Self::with_body_pieces(config, config.screen_width - 1.0, top_body, bottom_body)
    }

    /// Build a pipe with an explicit split of body pieces (caps are added).
    pub fn with_body_pieces(config: &GameConfig, x: f64, top_body: u32, bottom_body: u32) -> Self {
        let top_pieces = top_body + 1;
        let bottom_pieces = bottom_body + 1;
        let height = config.screen_height.max(0.0) as u32;

        let mut mask = CollisionMask::empty(config.pipe_width, height);
        let top_px = top_pieces * config.pipe_piece_height;
        let bottom_px = bottom_pieces * config.pipe_piece_height;
        mask.fill_rows(0, top_px);
        mask.fill_rows(height.saturating_sub(bottom_px), height);

        debug!(
            "pipe generated: top={} bottom={} (caps included) at x={:.1}",
            top_pieces, bottom_pieces, x
        );

        Self {
            x,
            top_pieces,
            bottom_pieces,
            score_counted: false,
            width: config.pipe_width,
            piece_height: config.pipe_piece_height,
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            fps: config.fps,
            scroll_speed: config.scroll_speed,
            mask,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn top_pieces(&self) -> u32 {
        self.top_pieces
    }

    pub fn bottom_pieces(&self) -> u32 {
        self.bottom_pieces
    }

    /// Body pieces before the end caps were added.
    pub fn body_pieces(&self) -> (u32, u32) {
        (self.top_pieces - 1, self.bottom_pieces - 1)
    }

    /// Height of the top stack in pixels (the gap starts here)
    pub fn top_height(&self) -> f64 {
        (self.top_pieces * self.piece_height) as f64
    }

    /// y of the first bottom-stack pixel (the gap ends here)
    pub fn bottom_y(&self) -> f64 {
        self.screen_height - (self.bottom_pieces * self.piece_height) as f64
    }

    pub fn right_edge(&self) -> f64 {
        self.x + self.width as f64
    }

    pub fn score_counted(&self) -> bool {
        self.score_counted
    }

    pub fn mark_scored(&mut self) {
        self.score_counted = true;
    }

    pub fn mask(&self) -> &CollisionMask {
        &self.mask
    }

    /// Scroll left by `delta_frames` worth of time.
    pub fn update(&mut self, delta_frames: f64) {
        self.x -= self.scroll_speed * frames_to_ms(delta_frames, self.fps);
    }

    /// Whether any column of the pipe is still on screen.
    pub fn visible(&self) -> bool {
        -(self.width as f64) < self.x && self.x < self.screen_width
    }

    /// Pixel-exact crash test against the bird's mask.
    pub fn collides_with(&self, bird: &Bird, bird_mask: &CollisionMask) -> bool {
        let (bx, by) = bird.pixel_origin();
        let px = self.x.floor() as i32;
        self.mask.overlaps(bird_mask, bx - px, by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_pipes_conserve_body_pieces() {
        let cfg = GameConfig::default();
        let mut rng = SimpleRng::new(42);
        for _ in 0..500 {
            let pipe = PipePair::generate(&cfg, &mut rng).unwrap();
            let (top, bottom) = pipe.body_pieces();
            assert!(top >= 1 && bottom >= 1);
            assert_eq!((top + bottom) as i64, cfg.total_body_pieces());
            assert_eq!(pipe.top_pieces(), top + 1);
            assert_eq!(pipe.bottom_pieces(), bottom + 1);
        }
    }

    #[test]
    fn gap_size_is_fixed() {
        let cfg = GameConfig::default();
        let mut rng = SimpleRng::new(9);
        for _ in 0..100 {
            let pipe = PipePair::generate(&cfg, &mut rng).unwrap();
            assert_eq!(pipe.bottom_y() - pipe.top_height(), cfg.gap_height());
        }
    }

    #[test]
    fn gap_position_varies() {
        let cfg = GameConfig::default();
        let mut rng = SimpleRng::new(1);
        let first = PipePair::generate(&cfg, &mut rng).unwrap().top_pieces();
        let varied = (0..50)
            .map(|_| PipePair::generate(&cfg, &mut rng).unwrap().top_pieces())
            .any(|t| t != first);
        assert!(varied);
    }

    #[test]
    fn generation_fails_on_tiny_playfield() {
        let cfg = GameConfig::default().with_screen(568.0, 300.0);
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            PipePair::generate(&cfg, &mut rng),
            Err(ConfigError::PlayfieldTooSmall { total_body_pieces: 1 })
        );
    }

    #[test]
    fn spawns_at_right_edge_and_scrolls_left() {
        let cfg = GameConfig::default();
        let mut pipe = PipePair::generate(&cfg, &mut SimpleRng::new(3)).unwrap();
        assert_eq!(pipe.x(), 567.0);
        assert!(pipe.visible());
        pipe.update(1.0);
        assert!((pipe.x() - (567.0 - 3.0)).abs() < 1e-9);
    }

    #[test]
    fn visibility_bounds_are_exclusive() {
        let cfg = GameConfig::default();
        let at = |x| PipePair::with_body_pieces(&cfg, x, 4, 4).visible();
        assert!(!at(568.0));
        assert!(at(567.9));
        assert!(at(-79.9));
        assert!(!at(-80.0));
    }

    #[test]
    fn mask_matches_stack_geometry() {
        let cfg = GameConfig::default();
        let pipe = PipePair::with_body_pieces(&cfg, 100.0, 2, 6);
        // top: 3 pieces = 96px, bottom: 7 pieces = 224px
        assert_eq!(pipe.top_height(), 96.0);
        assert_eq!(pipe.bottom_y(), 288.0);
        assert!(pipe.mask().get(0, 95));
        assert!(!pipe.mask().get(0, 96));
        assert!(!pipe.mask().get(79, 287));
        assert!(pipe.mask().get(79, 288));
        assert!(pipe.mask().get(79, 511));
    }

    #[test]
    fn bird_in_gap_does_not_collide() {
        let cfg = GameConfig::default();
        let masks = crate::bird::BirdMasks::solid(cfg.bird_width, cfg.bird_height);
        let pipe = PipePair::with_body_pieces(&cfg, 30.0, 2, 6);

        // Gap is [96, 288); a 50px bird fits at y = 150.
        let bird = Bird::at(50.0, 150.0, &cfg);
        assert!(!pipe.collides_with(&bird, masks.collision()));

        let grazing_top = Bird::at(50.0, 95.0, &cfg);
        assert!(pipe.collides_with(&grazing_top, masks.collision()));

        let grazing_bottom = Bird::at(50.0, 239.0, &cfg);
        assert!(pipe.collides_with(&grazing_bottom, masks.collision()));

        let clear_left = Bird::at(50.0, 0.0, &cfg);
        let far_pipe = PipePair::with_body_pieces(&cfg, 100.0, 2, 6);
        assert!(!far_pipe.collides_with(&clear_left, masks.collision()));
    }

    #[test]
    fn transparent_bird_pixels_never_collide() {
        let cfg = GameConfig::default();
        let pipe = PipePair::with_body_pieces(&cfg, 30.0, 2, 6);
        let bird = Bird::at(50.0, 70.0, &cfg);
        // Only the bottom-right pixel is opaque: (99, 119) is inside the gap.
        let mut mask = CollisionMask::empty(50, 50);
        mask.set(49, 49);
        assert!(!pipe.collides_with(&bird, &mask));
        mask.set(0, 0);
        assert!(pipe.collides_with(&bird, &mask));
    }
}
