//! High-score persistence: one decimal integer in a text file.
//!
//! The raw `read`/`write` calls report typed errors.  The [`ScoreStore`]
//! side never fails: a missing or unreadable file counts as 0 and a failed
//! write is logged and forgotten.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GameError;

pub trait ScoreStore {
    fn load(&mut self) -> u32;
    fn save(&mut self, score: u32);
}

#[derive(Clone, Debug)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<u32, GameError> {
        let content = fs::read_to_string(&self.path).map_err(|source| GameError::Io {
            path: self.path.clone(),
            source,
        })?;
        content
            .trim()
            .parse()
            .map_err(|_| GameError::HighScoreParse {
                path: self.path.clone(),
                content,
            })
    }

    /// Write through a sibling temp file and rename, so a crash never
    /// leaves a half-written score behind.
    pub fn write(&self, score: u32) -> Result<(), GameError> {
        let tmp = self.path.with_extension("tmp");
        let io_err = |source| GameError::Io {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, score.to_string()).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl ScoreStore for HighScoreFile {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(score) => score,
            Err(e) if e.is_not_found() => 0,
            Err(e) => {
                log::warn!("Error loading high score: {e}");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Err(e) = self.write(score) {
            log::warn!("Error saving high score: {e}");
        }
    }
}
