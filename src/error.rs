//! Error type for the file-backed edges: config and high score.

use std::path::PathBuf;

/// Errors surfaced by the I/O edges of the game (config and high score).
/// Game logic itself cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Filesystem error while reading or writing a file
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `GameConfig`
    #[error("Config parse error in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// High score file does not hold a decimal integer
    #[error("High score file {path} holds {content:?}, not a number")]
    HighScoreParse { path: PathBuf, content: String },
}

impl GameError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GameError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
