//! Letters the player has tried so far

/// Distinct lowercase letters guessed in a round, in the order they were tried
///
/// The hint symbol never lands here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<u8>,
}

impl GuessedLetters {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Record a letter
    ///
    /// Returns `false` (and records nothing) if the letter was already guessed
    /// or is not in `a-z`.
    pub fn insert(&mut self, letter: u8) -> bool {
        if !letter.is_ascii_lowercase() || self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Same as [`contains`](Self::contains) for callers holding a `char`
    #[inline]
    #[must_use]
    pub fn contains_char(&self, letter: char) -> bool {
        u8::try_from(letter).is_ok_and(|b| self.contains(b))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters.iter().copied()
    }
}

impl FromIterator<u8> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut guessed = Self::new();
        for letter in iter {
            guessed.insert(letter);
        }
        guessed
    }
}

impl<'a> From<&'a str> for GuessedLetters {
    fn from(letters: &'a str) -> Self {
        letters.bytes().collect()
    }
}
