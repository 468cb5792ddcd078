use crate::types::{BirdFrame, SessionState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: u32,
    pub height: u32,
    pub frame: BirdFrame,
    pub climbing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSnapshot {
    pub x: f64,
    pub width: u32,
    /// Top stack height in pixels (gap starts here)
    pub top_height: f64,
    /// First pixel row of the bottom stack (gap ends here)
    pub bottom_y: f64,
    pub top_pieces: u32,
    pub bottom_pieces: u32,
    pub scored: bool,
}

/// Everything the renderer needs for one frame.
///
/// Reuse one instance across frames with `Session::snapshot_into`; the pipe
/// list keeps its allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub screen_width: f64,
    pub screen_height: f64,
    pub piece_height: u32,
    pub bird: BirdSnapshot,
    pub pipes: Vec<PipeSnapshot>,
    pub score: u32,
    pub frame: u64,
    pub state: SessionState,
    pub seed: u32,
}

impl FrameSnapshot {
    pub fn clear(&mut self) {
        self.screen_width = 0.0;
        self.screen_height = 0.0;
        self.piece_height = 0;
        self.bird = BirdSnapshot {
            x: 0.0,
            y: 0.0,
            width: 0,
            height: 0,
            frame: BirdFrame::default(),
            climbing: false,
        };
        self.pipes.clear();
        self.score = 0;
        self.frame = 0;
        self.state = SessionState::Running;
        self.seed = 0;
    }

    pub fn paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn finished(&self) -> bool {
        self.state.is_terminal()
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            screen_width: 0.0,
            screen_height: 0.0,
            piece_height: 0,
            bird: BirdSnapshot {
                x: 0.0,
                y: 0.0,
                width: 0,
                height: 0,
                frame: BirdFrame::default(),
                climbing: false,
            },
            pipes: Vec::with_capacity(8),
            score: 0,
            frame: 0,
            state: SessionState::Running,
            seed: 0,
        };
        s.clear();
        s
    }
}
