//! Error types surfaced by the game library

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, GameError>;

/// Fatal conditions; invalid guesses are never errors
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),

    #[error("input closed while waiting for an answer")]
    InputClosed,

    #[error("cannot read word list {}", path.display())]
    UnreadableWordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {0} contains no usable word")]
    EmptyWordList(String),
}
