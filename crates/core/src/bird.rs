//! The player's bird: vertical motion only.
//!
//! The bird sits at a fixed x. Each frame it either climbs along a cosine
//! ease (after a climb trigger) or sinks at constant speed.

use std::f64::consts::PI;

use crate::clock::frames_to_ms;
use crate::config::GameConfig;
use crate::mask::CollisionMask;
use crate::types::BirdFrame;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f64,
    y: f64,
    climb_ms_remaining: f64,
    width: u32,
    height: u32,
    fps: f64,
    sink_speed: f64,
    climb_speed: f64,
    climb_duration_ms: f64,
}

impl Bird {
    /// Bird at the configured spawn point (fixed x, vertically centred)
    pub fn new(config: &GameConfig) -> Self {
        Self::at(config.bird_x, config.bird_start_y(), config)
    }

    pub fn at(x: f64, y: f64, config: &GameConfig) -> Self {
        Self {
            x,
            y,
            climb_ms_remaining: 0.0,
            width: config.bird_width,
            height: config.bird_height,
            fps: config.fps,
            sink_speed: config.sink_speed,
            climb_speed: config.climb_speed,
            climb_duration_ms: config.climb_duration_ms,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn climb_ms_remaining(&self) -> f64 {
        self.climb_ms_remaining
    }

    pub fn is_climbing(&self) -> bool {
        self.climb_ms_remaining > 0.0
    }

    /// Start (or restart) a climb. Re-triggering resets the window; climbs
    /// never stack.
    pub fn start_climb(&mut self) {
        self.climb_ms_remaining = self.climb_duration_ms;
    }

    /// Advance by `delta_frames` and return the vertical displacement applied.
    pub fn update(&mut self, delta_frames: f64) -> f64 {
        let dt = frames_to_ms(delta_frames, self.fps);
        if !(dt > 0.0) {
            return 0.0;
        }

        let dy = if self.climb_ms_remaining > 0.0 {
            let duration = self.climb_duration_ms;
            let t0 = (duration - self.climb_ms_remaining).max(0.0);
            let t1 = t0 + dt.min(self.climb_ms_remaining);
            self.climb_ms_remaining = (self.climb_ms_remaining - dt).max(0.0);
            -self.climb_speed * eased_climb(t0, t1, duration)
        } else {
            self.sink_speed * dt
        };

        self.y += dy;
        dy
    }

    /// Integer top-left corner used for pixel collision.
    pub fn pixel_origin(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    #[cfg(test)]
    pub(crate) fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}

/// Integral of the climb rate `1 - cos(pi * t / duration)` over `[t0, t1]`.
///
/// The rate starts at zero and rises to 2 at the end of the climb; a whole
/// climb integrates to exactly `duration`.
pub fn eased_climb(t0: f64, t1: f64, duration: f64) -> f64 {
    if duration <= 0.0 || t1 <= t0 {
        return 0.0;
    }
    let k = PI / duration;
    (t1 - t0) - ((k * t1).sin() - (k * t0).sin()) / k
}

/// Collision masks for both animation frames.
///
/// The crash test uses the union of both frames so gameplay never depends on
/// which wing pose happens to be on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BirdMasks {
    wing_up: CollisionMask,
    wing_down: CollisionMask,
    collision: CollisionMask,
}

impl BirdMasks {
    pub fn new(wing_up: CollisionMask, wing_down: CollisionMask) -> Self {
        let collision = wing_up.union(&wing_down);
        Self {
            wing_up,
            wing_down,
            collision,
        }
    }

    /// Rectangular masks, used when no sprite masks are supplied.
    pub fn solid(width: u32, height: u32) -> Self {
        Self::new(
            CollisionMask::solid(width, height),
            CollisionMask::solid(width, height),
        )
    }

    pub fn for_frame(&self, frame: BirdFrame) -> &CollisionMask {
        match frame {
            BirdFrame::WingUp => &self.wing_up,
            BirdFrame::WingDown => &self.wing_down,
        }
    }

    pub fn collision(&self) -> &CollisionMask {
        &self.collision
    }
}
