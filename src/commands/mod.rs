//! Command implementations

pub mod matches;
pub mod play;

pub use matches::{MatchesResult, find_matches};
pub use play::{PlayConfig, load_words, run_play};
