//! Optional TOML settings for the terminal front end.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::GameError;

/// Front-end settings read from an optional TOML file.  Missing keys fall
/// back to `Default`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// File holding the persisted high score.
    pub high_score_path: PathBuf,
    /// Target frame time in milliseconds.
    pub frame_ms: u64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Where log records go while the terminal is in raw mode.
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from("highscore.txt"),
            frame_ms: 16,
            seed: None,
            log_file: PathBuf::from("skull_island.log"),
        }
    }
}

impl GameConfig {
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, GameError> {
        toml::from_str(raw).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw, path)
    }

    /// Defaults plus the error that forced them, if any.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<GameError>) {
        match Self::load(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}
