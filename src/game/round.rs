//! Round engine
//!
//! Drives one secret word from the first guess to a win, a loss or a quit.
//! A round only ever moves forward: once it leaves `AwaitingGuess` further
//! input is ignored, and replaying is the session's job.

use super::hint::request_hint;
use super::validator::{Accepted, validate};
use crate::config::{HINT_SYMBOL, QUIT_COMMAND, RoundConfig};
use crate::core::{GuessedLetters, SecretWord, available_letters, is_fully_revealed, reveal};
use crate::error::Result;
use crate::output::{Console, format_available, format_progress, plural};
use tracing::{debug, info, trace};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    AwaitingGuess,
    Won { tries: u32, score: u32 },
    /// Out of guesses; the session decides whether to play again
    LostPendingReplay,
    QuitRequested,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Mutable state of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub secret: SecretWord,
    pub guessed: GuessedLetters,
    pub guesses_remaining: u32,
    pub warnings_remaining: u32,
    pub tries: u32,
}

impl RoundState {
    #[must_use]
    pub fn new(secret: SecretWord, config: &RoundConfig) -> Self {
        Self {
            secret,
            guessed: GuessedLetters::new(),
            guesses_remaining: config.guesses,
            warnings_remaining: config.warnings,
            tries: 0,
        }
    }

    /// Revealed pattern, e.g. `c_t`
    #[must_use]
    pub fn pattern(&self) -> String {
        reveal(&self.secret, &self.guessed)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        is_fully_revealed(&self.secret, &self.guessed)
    }

    /// Guesses left times distinct letters of the secret word, capped at `u32::MAX`
    #[must_use]
    pub fn score(&self) -> u32 {
        let distinct = u32::try_from(self.secret.distinct_letters()).unwrap_or(u32::MAX);
        self.guesses_remaining.saturating_mul(distinct)
    }
}

/// One game of hangman over a fixed secret word
#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
    config: RoundConfig,
    status: RoundStatus,
}

impl Round {
    #[must_use]
    pub fn new(secret: SecretWord, config: RoundConfig) -> Self {
        Self {
            state: RoundState::new(secret, &config),
            config,
            status: RoundStatus::AwaitingGuess,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Play until the round is over
    ///
    /// `words` is the list hints are searched in.
    ///
    /// # Errors
    /// Propagates input errors from the console.
    pub fn play<C: Console + ?Sized>(
        &mut self,
        words: &[SecretWord],
        console: &mut C,
    ) -> Result<RoundStatus> {
        info!(length = self.state.secret.len(), "round started");
        trace!(secret = %self.state.secret, "secret word");
        self.introduce(console);

        while !self.status.is_over() {
            console.pause(self.config.pace);
            self.show_turn(console);
            let input = console.read_line("Please guess a letter: ")?;
            self.submit(&input, words, console)?;
        }

        info!(status = ?self.status, tries = self.state.tries, "round over");
        Ok(self.status)
    }

    /// Apply one line of player input
    ///
    /// Input is trimmed and lowercased before it is interpreted.
    ///
    /// # Errors
    /// Propagates input errors from the hint confirmation prompt.
    pub fn submit<C: Console + ?Sized>(
        &mut self,
        input: &str,
        words: &[SecretWord],
        console: &mut C,
    ) -> Result<RoundStatus> {
        if self.status.is_over() {
            return Ok(self.status);
        }

        let guess = input.trim().to_lowercase();
        if guess == QUIT_COMMAND {
            console.info("Goodbye for now!");
            self.status = RoundStatus::QuitRequested;
            return Ok(self.status);
        }

        match validate(&guess, &self.state.guessed) {
            Err(rejection) => {
                debug!(input = %guess, ?rejection, "guess rejected");
                console.warning(&format!("WARNING: {rejection}"));
                self.penalize(console);
            }
            Ok(Accepted::Hint) => {
                let result = request_hint(
                    &self.state.pattern(),
                    &self.state.guessed,
                    self.state.guesses_remaining,
                    self.config.hint_cost,
                    words,
                    console,
                )?;
                debug!(outcome = ?result.outcome, "hint requested");
                self.state.guesses_remaining = result.guesses_remaining;
            }
            Ok(Accepted::Letter(letter)) => {
                self.state.guessed.insert(letter);
                self.state.tries += 1;
                let hit = self.state.secret.has_letter(letter);
                debug!(letter = %char::from(letter), hit, "letter guessed");

                if self.state.is_solved() {
                    self.win(console);
                    return Ok(self.status);
                }

                if hit {
                    console.success("Good guess!");
                } else {
                    console.warning("Oops! That letter is not in my word");
                    self.state.guesses_remaining = self.state.guesses_remaining.saturating_sub(1);
                }
            }
        }

        self.check_loss(console);
        Ok(self.status)
    }

    fn introduce<C: Console + ?Sized>(&self, console: &mut C) {
        console.info("\tWelcome to the game Hangman!");
        console.notice(&format!(
            "RULE: if you need a hint, enter {HINT_SYMBOL} and I will gladly help you. \
             Be careful though, a hint costs {}.",
            plural(self.config.hint_cost, "guess", "guesses")
        ));
        console.notice(&format!(
            "TIPS: enter '{QUIT_COMMAND}' if you want to exit the game"
        ));
        console.notice(&format!(
            "I am thinking of a word that is {} letters long.",
            self.state.secret.len()
        ));
    }

    fn show_turn<C: Console + ?Sized>(&self, console: &mut C) {
        console.info("*********************");
        console.info(&format!(
            "Your progress so far: {}",
            format_progress(&self.state.pattern())
        ));
        console.info(&format!(
            "You have {} left",
            plural(self.state.guesses_remaining, "guess", "guesses")
        ));
        console.info(&format!(
            "Available letters: {}",
            format_available(&available_letters(&self.state.guessed))
        ));
    }

    /// Invalid input costs a warning while any are left, then a guess
    fn penalize<C: Console + ?Sized>(&mut self, console: &mut C) {
        if self.state.warnings_remaining > 0 {
            self.state.warnings_remaining -= 1;
            console.warning(&format!(
                "You have {} left",
                plural(self.state.warnings_remaining, "warning", "warnings")
            ));
        } else {
            self.state.guesses_remaining = self.state.guesses_remaining.saturating_sub(1);
            console.warning("You have no warnings left, now you lose a guess. You were warned!");
        }
    }

    fn win<C: Console + ?Sized>(&mut self, console: &mut C) {
        let tries = self.state.tries;
        let score = self.state.score();
        console.success(&format!(
            "Congratulations! You found the word {}!",
            self.state.secret
        ));
        console.info(&format!("You won in {}", plural(tries, "guess", "guesses")));
        console.info(&format!("Your score is {score}"));
        self.status = RoundStatus::Won { tries, score };
    }

    fn check_loss<C: Console + ?Sized>(&mut self, console: &mut C) {
        if self.state.guesses_remaining == 0 && !self.state.is_solved() {
            console.warning("Sorry, you ran out of guesses");
            console.info(&format!("The word was: {}", self.state.secret));
            self.status = RoundStatus::LostPendingReplay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedConsole;
    use crate::output::MessageStyle;

    fn round(secret: &str) -> Round {
        Round::new(SecretWord::new(secret).unwrap(), RoundConfig::default())
    }

    fn submit_all(round: &mut Round, inputs: &[&str], console: &mut ScriptedConsole) -> RoundStatus {
        let mut status = round.status();
        for input in inputs {
            status = round.submit(input, &[], console).unwrap();
        }
        status
    }

    #[test]
    fn initial_state() {
        let round = round("cat");
        assert_eq!(round.status(), RoundStatus::AwaitingGuess);
        assert_eq!(round.state().guesses_remaining, 15);
        assert_eq!(round.state().warnings_remaining, 3);
        assert_eq!(round.state().tries, 0);
        assert!(round.state().guessed.is_empty());
    }

    #[test]
    fn correct_letter_costs_nothing() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        let status = submit_all(&mut round, &["c"], &mut console);

        assert_eq!(status, RoundStatus::AwaitingGuess);
        assert_eq!(round.state().pattern(), "c__");
        assert_eq!(round.state().guesses_remaining, 15);
        assert_eq!(round.state().tries, 1);
        assert_eq!(console.count_of(MessageStyle::Success, "Good guess"), 1);
    }

    #[test]
    fn wrong_letter_costs_one_guess() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        submit_all(&mut round, &["z"], &mut console);

        assert_eq!(round.state().guesses_remaining, 14);
        assert_eq!(round.state().tries, 1);
        assert!(console.saw("not in my word"));
    }

    #[test]
    fn input_is_normalized() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        submit_all(&mut round, &["  C \n"], &mut console);
        assert!(round.state().guessed.contains(b'c'));
    }

    #[test]
    fn win_reports_tries_and_score() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        let status = submit_all(&mut round, &["x", "c", "a", "t"], &mut console);

        assert_eq!(status, RoundStatus::Won { tries: 4, score: 14 * 3 });
        assert!(console.saw("You found the word cat"));
        assert!(console.saw("Your score is 42"));
    }

    #[test]
    fn huge_guess_budget_caps_the_score() {
        let mut round = Round::new(
            SecretWord::new("ab").unwrap(),
            RoundConfig {
                guesses: u32::MAX,
                ..RoundConfig::default()
            },
        );
        let mut console = ScriptedConsole::default();
        let status = submit_all(&mut round, &["a", "b"], &mut console);

        assert_eq!(
            status,
            RoundStatus::Won {
                tries: 2,
                score: u32::MAX
            }
        );
    }

    #[test]
    fn repeated_letters_count_once_for_score() {
        let mut round = round("banana");
        let mut console = ScriptedConsole::default();
        let status = submit_all(&mut round, &["b", "a", "n"], &mut console);
        assert_eq!(status, RoundStatus::Won { tries: 3, score: 15 * 3 });
    }

    #[test]
    fn invalid_input_spends_warnings_first() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        submit_all(&mut round, &["ab"], &mut console);

        assert_eq!(round.state().warnings_remaining, 2);
        assert_eq!(round.state().guesses_remaining, 15);
        assert!(console.saw("only one letter"));
        assert!(console.saw("You have 2 warnings left"));
    }

    #[test]
    fn invalid_input_costs_guesses_without_warnings() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        submit_all(&mut round, &["1", "2", "3"], &mut console);
        assert_eq!(round.state().warnings_remaining, 0);
        assert_eq!(round.state().guesses_remaining, 15);

        submit_all(&mut round, &["5"], &mut console);
        assert_eq!(round.state().warnings_remaining, 0);
        assert_eq!(round.state().guesses_remaining, 14);
        assert!(console.saw("no warnings left"));
    }

    #[test]
    fn repeated_guess_is_invalid_and_not_a_try() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        submit_all(&mut round, &["c", "c"], &mut console);

        assert_eq!(round.state().tries, 1);
        assert_eq!(round.state().warnings_remaining, 2);
        assert!(console.saw("already tried"));
    }

    #[test]
    fn stop_quits_case_insensitively() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        let status = submit_all(&mut round, &[" STOP "], &mut console);
        assert_eq!(status, RoundStatus::QuitRequested);
    }

    #[test]
    fn input_after_the_end_is_ignored() {
        let mut round = round("a");
        let mut console = ScriptedConsole::default();
        let status = submit_all(&mut round, &["a", "b"], &mut console);
        assert_eq!(status, RoundStatus::Won { tries: 1, score: 15 });
        assert_eq!(round.state().tries, 1);
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut round = Round::new(
            SecretWord::new("dog").unwrap(),
            RoundConfig {
                guesses: 2,
                ..RoundConfig::default()
            },
        );
        let mut console = ScriptedConsole::default();
        let status = submit_all(&mut round, &["x", "y"], &mut console);

        assert_eq!(status, RoundStatus::LostPendingReplay);
        assert_eq!(round.state().secret.text(), "dog");
        assert!(console.saw("The word was: dog"));
    }

    #[test]
    fn hint_is_not_recorded_as_a_letter() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::default();
        submit_all(&mut round, &["*"], &mut console);

        assert!(round.state().guessed.is_empty());
        assert_eq!(round.state().tries, 0);
        assert_eq!(round.state().guesses_remaining, 15);
        assert!(console.saw("Guess at least one letter first"));
    }

    #[test]
    fn confirmed_hint_costs_three_and_can_lose() {
        let words = vec![SecretWord::new("cat").unwrap(), SecretWord::new("cow").unwrap()];
        let mut round = Round::new(
            SecretWord::new("cat").unwrap(),
            RoundConfig {
                guesses: 3,
                ..RoundConfig::default()
            },
        );
        let mut console = ScriptedConsole::new(["y"]);
        round.submit("c", &words, &mut console).unwrap();
        let status = round.submit("*", &words, &mut console).unwrap();

        assert_eq!(round.state().guesses_remaining, 0);
        assert_eq!(status, RoundStatus::LostPendingReplay);
        assert!(console.saw("cat cow"));
    }

    #[test]
    fn play_runs_until_quit() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::new(["c", "stop"]);
        let status = round.play(&[], &mut console).unwrap();

        assert_eq!(status, RoundStatus::QuitRequested);
        assert!(console.saw("3 letters long"));
        assert!(console.saw("Your progress so far: c _ _"));
        assert_eq!(console.prompts().len(), 2);
    }

    #[test]
    fn play_fails_when_input_closes() {
        let mut round = round("cat");
        let mut console = ScriptedConsole::new(["c"]);
        assert!(round.play(&[], &mut console).is_err());
    }
}
