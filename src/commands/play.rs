//! Interactive play command
//!
//! Selects a word list, then hands over to the session controller.

use crate::config::RoundConfig;
use crate::core::SecretWord;
use crate::error::Result;
use crate::game::{Session, SessionSummary};
use crate::output::Console;
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{Language, choose_language};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

/// Configuration for an interactive session
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Skip the language menu
    pub language: Option<Language>,
    /// Custom word list; takes precedence over `language`
    pub wordlist: Option<PathBuf>,
    pub round: RoundConfig,
    /// Fixed seed for reproducible word picks
    pub seed: Option<u64>,
}

/// Resolve the word list for a session
///
/// Asks for a language only when neither a file nor a language was given.
///
/// # Errors
/// Returns word list errors and input errors from the language menu.
pub fn load_words<C: Console + ?Sized>(
    config: &PlayConfig,
    console: &mut C,
) -> Result<Vec<SecretWord>> {
    if let Some(path) = &config.wordlist {
        return load_from_file(path);
    }

    let language = match config.language {
        Some(language) => language,
        None => choose_language(console)?,
    };
    info!(%language, "word list selected");
    language.load()
}

/// Run a full interactive session
///
/// # Errors
/// Returns word list errors and input errors.
pub fn run_play<C: Console + ?Sized>(
    config: &PlayConfig,
    console: &mut C,
) -> Result<SessionSummary> {
    let words = load_words(config, console)?;

    let rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    Session::new(&words, config.round, rng)?.run(console)
}
