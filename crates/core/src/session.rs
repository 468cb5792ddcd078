//! Session module - one game from first frame to crash or quit.
//!
//! Ties together the bird, the pipe queue, the RNG and the score. The caller
//! polls input, hands the resulting actions to [`Session::step`] once per
//! fixed frame, then draws from [`Session::snapshot_into`].

use std::collections::VecDeque;

use log::{debug, info};

use crate::bird::{Bird, BirdMasks};
use crate::config::{ConfigError, GameConfig};
use crate::pipe::PipePair;
use crate::rng::SimpleRng;
use crate::snapshot::{BirdSnapshot, FrameSnapshot, PipeSnapshot};
use crate::types::{BirdFrame, GameAction, SessionState};

/// What happened during one [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub state: SessionState,
    /// Whether the simulation advanced (false while paused or finished)
    pub advanced: bool,
    pub spawned: bool,
    pub evicted: u32,
    /// Points earned this step
    pub scored: u32,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    bird: Bird,
    masks: BirdMasks,
    /// Arrival order == screen order (front is leftmost)
    pipes: VecDeque<PipePair>,
    rng: SimpleRng,
    seed: u32,
    total_body_pieces: u32,
    spawn_interval: u64,
    score: u32,
    frame: u64,
    state: SessionState,
}

impl Session {
    /// Start a session with rectangular bird collision.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        let masks = BirdMasks::solid(config.bird_width, config.bird_height);
        Self::with_masks(config, seed, masks)
    }

    /// Start a session with collision masks supplied by the renderer.
    pub fn with_masks(config: GameConfig, seed: u32, masks: BirdMasks) -> Result<Self, ConfigError> {
        config.validate()?;
        let total_body_pieces = config.total_body_pieces() as u32;
        let spawn_interval = config.spawn_interval_frames();
        let bird = Bird::new(&config);

        info!(
            "session start: seed={} fps={} spawn every {} frames, gap {}px",
            seed,
            config.fps,
            spawn_interval,
            config.gap_height()
        );

        Ok(Self {
            config,
            bird,
            masks,
            pipes: VecDeque::with_capacity(8),
            rng: SimpleRng::new(seed),
            seed,
            total_body_pieces,
            spawn_interval,
            score: 0,
            frame: 0,
            state: SessionState::Running,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &VecDeque<PipePair> {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Final score, available once the session has ended.
    pub fn final_score(&self) -> Option<u32> {
        self.finished().then_some(self.score)
    }

    /// Apply one input action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.finished() {
            return false;
        }
        match action {
            GameAction::Climb => {
                if self.state != SessionState::Running {
                    return false;
                }
                self.bird.start_climb();
                true
            }
            GameAction::Pause => {
                let next = match self.state {
                    SessionState::Running => SessionState::Paused,
                    _ => SessionState::Running,
                };
                self.set_state(next);
                true
            }
            GameAction::Quit => {
                self.set_state(SessionState::Quit);
                true
            }
        }
    }

    /// Advance one fixed frame.
    ///
    /// Actions are applied first. Nothing else happens unless the session is
    /// running afterwards: a paused or finished session keeps its frame
    /// counter, score and positions.
    pub fn step(&mut self, actions: &[GameAction]) -> StepOutcome {
        for &action in actions {
            self.apply_action(action);
        }

        let mut outcome = StepOutcome {
            state: self.state,
            ..StepOutcome::default()
        };
        if self.state != SessionState::Running {
            return outcome;
        }
        outcome.advanced = true;

        if self.frame % self.spawn_interval == 0 {
            let pipe = PipePair::spawn(&self.config, self.total_body_pieces, &mut self.rng);
            self.pipes.push_back(pipe);
            outcome.spawned = true;
        }

        if self.crashed() {
            self.set_state(SessionState::Over);
            outcome.state = self.state;
            return outcome;
        }

        outcome.evicted = self.evict_invisible();

        for pipe in self.pipes.iter_mut() {
            pipe.update(1.0);
        }
        self.bird.update(1.0);

        let bird_x = self.bird.x();
        for pipe in self.pipes.iter_mut() {
            if !pipe.score_counted() && pipe.right_edge() < bird_x {
                pipe.mark_scored();
                self.score += 1;
                outcome.scored += 1;
            }
        }
        if outcome.scored > 0 {
            debug!("score {} at frame {}", self.score, self.frame);
        }

        self.frame += 1;
        outcome
    }

    /// Drop pipes that scrolled off the left edge.
    ///
    /// Pipes leave the screen in arrival order, so only the front is checked.
    pub fn evict_invisible(&mut self) -> u32 {
        let mut evicted = 0;
        while self.pipes.front().is_some_and(|p| !p.visible()) {
            self.pipes.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            debug!("evicted {} pipe(s), {} active", evicted, self.pipes.len());
        }
        evicted
    }

    /// Bird left the playfield vertically or touches a pipe.
    pub fn crashed(&self) -> bool {
        let y = self.bird.y();
        if y < 0.0 || y > self.config.max_bird_y() {
            return true;
        }
        let mask = self.masks.collision();
        self.pipes.iter().any(|p| p.collides_with(&self.bird, mask))
    }

    pub fn snapshot_into(&self, out: &mut FrameSnapshot, now_ms: u64) {
        out.screen_width = self.config.screen_width;
        out.screen_height = self.config.screen_height;
        out.piece_height = self.config.pipe_piece_height;
        out.bird = BirdSnapshot {
            x: self.bird.x(),
            y: self.bird.y(),
            width: self.bird.width(),
            height: self.bird.height(),
            frame: BirdFrame::at(now_ms),
            climbing: self.bird.is_climbing(),
        };
        out.pipes.clear();
        out.pipes.extend(self.pipes.iter().map(|p| PipeSnapshot {
            x: p.x(),
            width: p.width(),
            top_height: p.top_height(),
            bottom_y: p.bottom_y(),
            top_pieces: p.top_pieces(),
            bottom_pieces: p.bottom_pieces(),
            scored: p.score_counted(),
        }));
        out.score = self.score;
        out.frame = self.frame;
        out.state = self.state;
        out.seed = self.seed;
    }

    pub fn snapshot(&self, now_ms: u64) -> FrameSnapshot {
        let mut s = FrameSnapshot::default();
        self.snapshot_into(&mut s, now_ms);
        s
    }

    fn set_state(&mut self, next: SessionState) {
        if self.state == next {
            return;
        }
        info!(
            "session {} -> {} (score {}, frame {})",
            self.state.as_str(),
            next.as_str(),
            self.score,
            self.frame
        );
        self.state = next;
    }
}
