//! Progress through a secret word
//!
//! Derives what the player can see of the secret word from the letters
//! guessed so far. Everything here is pure.

use super::{GuessedLetters, SecretWord};

/// Character standing in for a letter that has not been found yet
pub const PLACEHOLDER: char = '_';

/// Render the secret word with unguessed letters replaced by [`PLACEHOLDER`]
///
/// The result has exactly one character per letter of the secret word.
///
/// # Examples
/// ```
/// use hangman::core::{GuessedLetters, SecretWord, reveal};
///
/// let secret = SecretWord::new("apple").unwrap();
/// let guessed = GuessedLetters::from("pz");
/// assert_eq!(reveal(&secret, &guessed), "_pp__");
/// ```
#[must_use]
pub fn reveal(secret: &SecretWord, guessed: &GuessedLetters) -> String {
    secret
        .bytes()
        .iter()
        .map(|&b| {
            if guessed.contains(b) {
                char::from(b)
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// The alphabet minus the guessed letters, in alphabetical order
#[must_use]
pub fn available_letters(guessed: &GuessedLetters) -> Vec<char> {
    (b'a'..=b'z')
        .filter(|&b| !guessed.contains(b))
        .map(char::from)
        .collect()
}

/// True once every distinct letter of the secret word has been guessed
#[must_use]
pub fn is_fully_revealed(secret: &SecretWord, guessed: &GuessedLetters) -> bool {
    secret.letters().all(|b| guessed.contains(b))
}

/// Number of positions in a revealed pattern that show a letter
#[must_use]
pub fn revealed_count(pattern: &str) -> usize {
    pattern.chars().filter(|&c| c != PLACEHOLDER).count()
}
