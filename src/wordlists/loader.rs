//! Word list loading utilities
//!
//! Word sources are whitespace-separated lowercase words. Entries that are
//! not plain letters are skipped; a source with nothing usable is an error.

use crate::core::SecretWord;
use crate::error::{GameError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// # Errors
///
/// Returns `GameError::UnreadableWordList` if the file cannot be read and
/// `GameError::EmptyWordList` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_en.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SecretWord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::UnreadableWordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_str(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    non_empty(words, &path.display().to_string())
}

/// Parse whitespace-separated words, skipping invalid entries
#[must_use]
pub fn words_from_str(content: &str) -> Vec<SecretWord> {
    words_from_iter(content.split_whitespace())
}

/// Convert embedded string slice to `SecretWord` vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::ENGLISH;
///
/// let words = words_from_slice(ENGLISH);
/// assert_eq!(words.len(), ENGLISH.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    words_from_iter(slice.iter().copied())
}

/// Fail with `EmptyWordList` when no word survived parsing
///
/// # Errors
/// Returns `GameError::EmptyWordList` naming `source` if `words` is empty.
pub fn non_empty(words: Vec<SecretWord>, source: &str) -> Result<Vec<SecretWord>> {
    if words.is_empty() {
        Err(GameError::EmptyWordList(source.to_string()))
    } else {
        Ok(words)
    }
}

fn words_from_iter<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<SecretWord> {
    entries
        .filter_map(|entry| match SecretWord::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(entry, error = %e, "skipping word list entry");
                None
            }
        })
        .collect()
}
