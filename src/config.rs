//! Run-time settings for the binary, read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;

/// Settings that vary per run without recompiling.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// RNG seed for gap placement (`FLAPPY_SEED`, default: time-derived)
    pub seed: u32,
    /// Fixed timestep rate (`FLAPPY_FPS`, default 60)
    pub fps: Option<f64>,
    /// Log file (`FLAPPY_LOG_PATH`); logging is off when unset
    pub log_path: Option<PathBuf>,
    /// Mouse clicks climb (`FLAPPY_MOUSE=0` turns capture off)
    pub mouse: bool,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("FLAPPY_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let fps = lookup("FLAPPY_FPS")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|fps| fps.is_finite() && *fps > 0.0);

        let log_path = lookup("FLAPPY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let mouse = lookup("FLAPPY_MOUSE")
            .map(|s| !matches!(s.trim().to_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(true);

        Self {
            seed,
            fps,
            log_path,
            mouse,
        }
    }

    /// The game configuration this run plays with.
    pub fn game_config(&self) -> GameConfig {
        match self.fps {
            Some(fps) => GameConfig::default().with_fps(fps),
            None => GameConfig::default(),
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
