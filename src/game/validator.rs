//! Guess validation
//!
//! Pure format and duplication checks. Penalties for a rejected guess are
//! applied by the round engine.

use crate::config::HINT_SYMBOL;
use crate::core::GuessedLetters;
use thiserror::Error;

/// A guess that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// A fresh lowercase letter
    Letter(u8),
    /// The hint symbol
    Hint,
}

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Please enter only one letter at a time")]
    WrongLength,
    #[error("Please enter a letter")]
    NotALetter,
    #[error("You have already tried this letter, please enter another one !")]
    AlreadyGuessed,
}

/// Check one guess against the letters already tried
///
/// Checks run in order: length, then alphabet, then duplication.
///
/// # Errors
/// Returns the first [`Rejection`] that applies.
///
/// # Examples
/// ```
/// use hangman::core::GuessedLetters;
/// use hangman::game::{Accepted, Rejection, validate};
///
/// let guessed = GuessedLetters::from("e");
/// assert_eq!(validate("a", &guessed), Ok(Accepted::Letter(b'a')));
/// assert_eq!(validate("*", &guessed), Ok(Accepted::Hint));
/// assert_eq!(validate("ab", &guessed), Err(Rejection::WrongLength));
/// assert_eq!(validate("e", &guessed), Err(Rejection::AlreadyGuessed));
/// ```
pub fn validate(guess: &str, guessed: &GuessedLetters) -> Result<Accepted, Rejection> {
    let mut chars = guess.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(Rejection::WrongLength);
    };

    if c == HINT_SYMBOL {
        return Ok(Accepted::Hint);
    }

    if !c.is_ascii_lowercase() {
        return Err(Rejection::NotALetter);
    }

    // ASCII checked above
    let letter = c as u8;
    if guessed.contains(letter) {
        return Err(Rejection::AlreadyGuessed);
    }

    Ok(Accepted::Letter(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_unused_letters() {
        let guessed = GuessedLetters::new();
        for c in 'a'..='z' {
            assert_eq!(
                validate(&c.to_string(), &guessed),
                Ok(Accepted::Letter(c as u8))
            );
        }
    }

    #[test]
    fn accepts_hint_symbol() {
        assert_eq!(validate("*", &GuessedLetters::from("abc")), Ok(Accepted::Hint));
    }

    #[test]
    fn rejects_wrong_length() {
        let guessed = GuessedLetters::new();
        assert_eq!(validate("", &guessed), Err(Rejection::WrongLength));
        assert_eq!(validate("ab", &guessed), Err(Rejection::WrongLength));
        assert_eq!(validate("**", &guessed), Err(Rejection::WrongLength));
        assert_eq!(validate("stop", &guessed), Err(Rejection::WrongLength));
    }

    #[test]
    fn rejects_non_letters() {
        let guessed = GuessedLetters::new();
        for input in ["5", "!", "?", " ", "A", "é", "_"] {
            assert_eq!(validate(input, &guessed), Err(Rejection::NotALetter), "{input:?}");
        }
    }

    #[test]
    fn rejects_repeats() {
        let guessed = GuessedLetters::from("qa");
        assert_eq!(validate("q", &guessed), Err(Rejection::AlreadyGuessed));
        assert_eq!(validate("a", &guessed), Err(Rejection::AlreadyGuessed));
    }

    #[test]
    fn length_checked_before_alphabet() {
        assert_eq!(validate("55", &GuessedLetters::new()), Err(Rejection::WrongLength));
    }
}
