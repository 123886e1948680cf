//! Secret word representation
//!
//! A `SecretWord` stores a lowercase word along with its set of distinct
//! letters, which is what the win condition and scoring are computed from.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A lowercase word that can be the target of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    distinct: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only the letters a-z, got {0:?}")]
    InvalidCharacters(String),
}

impl SecretWord {
    /// Create a new `SecretWord` from a string
    ///
    /// The input is lowercased first.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    /// assert_eq!(word.distinct_letters(), 4);
    ///
    /// assert!(SecretWord::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let distinct = text.bytes().collect();

        Ok(Self { text, distinct })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (all ASCII lowercase)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.distinct.contains(&letter)
    }

    /// Count of distinct letters, the multiplier used for scoring
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.distinct.len()
    }

    /// Iterate over the distinct letters (unordered)
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.distinct.iter().copied()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("hangman").unwrap();
        assert_eq!(word.text(), "hangman");
        assert_eq!(word.bytes(), b"hangman");
        assert_eq!(word.len(), 7);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(SecretWord::new("c4t").is_err()); // Number
        assert!(SecretWord::new("ca t").is_err()); // Space
        assert!(SecretWord::new("cat!").is_err()); // Punctuation
        assert!(SecretWord::new("été").is_err()); // Accents
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(SecretWord::new("cat").unwrap().distinct_letters(), 3);
        assert_eq!(SecretWord::new("apple").unwrap().distinct_letters(), 4);
        assert_eq!(SecretWord::new("aaaa").unwrap().distinct_letters(), 1);
    }

    #[test]
    fn word_has_letter() {
        let word = SecretWord::new("dog").unwrap();
        assert!(word.has_letter(b'd'));
        assert!(word.has_letter(b'g'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("river").unwrap();
        assert_eq!(format!("{word}"), "river");
    }
}
