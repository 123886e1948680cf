//! Word lists for hangman
//!
//! Two embedded lists compiled into the binary, plus selection of one of
//! them by language.

mod embedded;
pub mod loader;

pub use embedded::{ENGLISH, ENGLISH_COUNT, FRENCH, FRENCH_COUNT};

use crate::core::SecretWord;
use crate::error::Result;
use crate::output::Console;
use clap::ValueEnum;
use std::fmt;

/// Which embedded list to play with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[value(name = "en", alias = "english")]
    English,
    #[value(name = "fr", alias = "french")]
    French,
}

impl Language {
    /// Parse the menu answer: `1` for English, `2` for French
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::English),
            "2" => Some(Self::French),
            _ => None,
        }
    }

    /// Raw embedded words for this language
    #[must_use]
    pub const fn raw_words(self) -> &'static [&'static str] {
        match self {
            Self::English => ENGLISH,
            Self::French => FRENCH,
        }
    }

    /// Load this language's word list
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if no embedded entry is usable.
    pub fn load(self) -> Result<Vec<SecretWord>> {
        loader::non_empty(loader::words_from_slice(self.raw_words()), &self.to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English words"),
            Self::French => write!(f, "French words"),
        }
    }
}

/// Ask which word list to use until the answer is 1 or 2
///
/// # Errors
/// Propagates input errors from the console.
pub fn choose_language<C: Console + ?Sized>(console: &mut C) -> Result<Language> {
    console.info("Please choose a version");
    console.info(&format!(" 1- {}", Language::English));
    console.info(&format!(" 2- {}", Language::French));

    loop {
        let answer = console.read_line("What version would you like (1 or 2)? : ")?;
        if let Some(language) = Language::from_choice(&answer) {
            return Ok(language);
        }
        console.warning("Only 1 or 2 please");
    }
}
