//! Session controller
//!
//! Plays rounds back to back with a fresh secret word each time, for as long
//! as the player wants to continue.

use super::round::{Round, RoundStatus};
use crate::config::RoundConfig;
use crate::core::SecretWord;
use crate::error::{GameError, Result};
use crate::output::{Console, ask_yes_no};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::info;

/// Totals for one session, shown when it ends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub won: u32,
    pub lost: u32,
    pub best_score: Option<u32>,
    pub total_score: u64,
}

impl SessionSummary {
    fn record(&mut self, status: RoundStatus) {
        self.rounds += 1;
        match status {
            RoundStatus::Won { score, .. } => {
                self.won += 1;
                self.total_score += u64::from(score);
                self.best_score = Some(self.best_score.map_or(score, |best| best.max(score)));
            }
            RoundStatus::LostPendingReplay => self.lost += 1,
            RoundStatus::AwaitingGuess | RoundStatus::QuitRequested => {}
        }
    }
}

/// A run of rounds over one word list
pub struct Session<'a, R: Rng> {
    words: &'a [SecretWord],
    config: RoundConfig,
    rng: R,
}

impl<'a, R: Rng> Session<'a, R> {
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: &'a [SecretWord], config: RoundConfig, rng: R) -> Result<Self> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList("for this session".to_string()));
        }
        Ok(Self { words, config, rng })
    }

    /// Pick a random secret word
    pub fn choose_word(&mut self) -> &'a SecretWord {
        let words = self.words;
        // Non-empty by construction
        words.choose(&mut self.rng).unwrap_or(&words[0])
    }

    /// Play until the player quits or declines a replay
    ///
    /// # Errors
    /// Propagates input errors from the console.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let secret = self.choose_word().clone();
            let mut round = Round::new(secret, self.config);
            let status = round.play(self.words, console)?;
            summary.record(status);

            if status == RoundStatus::QuitRequested {
                break;
            }

            if !ask_yes_no(console, "Play again? (y/n): ", "Only 'y' or 'n' please")? {
                console.info("Goodbye! This was fun.");
                break;
            }
        }

        info!(rounds = summary.rounds, won = summary.won, "session over");
        Ok(summary)
    }
}
