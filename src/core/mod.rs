//! Core domain types for hangman
//!
//! The secret word, the guessed letters and the pure progress functions
//! derived from them. Nothing here performs I/O.

mod letters;
mod progress;
mod word;

pub use letters::GuessedLetters;
pub use progress::{
    PLACEHOLDER, available_letters, is_fully_revealed, reveal, revealed_count,
};
pub use word::{SecretWord, WordError};
