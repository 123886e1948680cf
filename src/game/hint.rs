//! Hint matching
//!
//! Lists the words of the current word list that are consistent with the
//! revealed pattern. A hint is only offered in the middle of a round and it
//! costs guesses.
//!
//! # Matching policy
//! A candidate fits a pattern when both have the same length and, at every
//! position, either the pattern letter equals the candidate letter, or the
//! pattern shows [`PLACEHOLDER`] and the candidate letter has not been
//! guessed. Letters known to be absent are only excluded at placeholder
//! positions.

use crate::core::{GuessedLetters, PLACEHOLDER, SecretWord, revealed_count};
use crate::error::Result;
use crate::output::{Console, ask_yes_no, format_matches};
use rayon::prelude::*;
use tracing::{debug, info};

/// Whether a hint may be given for a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintGate {
    /// Nothing revealed yet; refused for free
    TooEarly,
    /// Too little left to find; refused for one guess
    AlmostDone,
    /// May be given after confirmation
    Allowed,
}

/// What happened when a hint was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    TooEarly,
    AlmostDone,
    Declined,
    /// Hint paid for; `matches` candidate words were listed
    Shown { matches: usize },
}

/// Result of [`request_hint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintResult {
    /// Guesses left once the hint has been paid for (or refused)
    pub guesses_remaining: u32,
    pub outcome: HintOutcome,
}

/// Decide whether a hint may be given
///
/// A hint is refused as "almost done" when the pattern trimmed of
/// placeholders at both ends is at least as long as the pattern trimmed of
/// guessed letters at both ends.
///
/// # Examples
/// ```
/// use hangman::core::GuessedLetters;
/// use hangman::game::{HintGate, gate};
///
/// assert_eq!(gate("___", &GuessedLetters::new()), HintGate::TooEarly);
/// assert_eq!(gate("c__", &GuessedLetters::from("c")), HintGate::Allowed);
/// assert_eq!(gate("ca_", &GuessedLetters::from("ca")), HintGate::AlmostDone);
/// ```
#[must_use]
pub fn gate(pattern: &str, guessed: &GuessedLetters) -> HintGate {
    if revealed_count(pattern) == 0 {
        return HintGate::TooEarly;
    }

    let without_placeholders = pattern.trim_matches(PLACEHOLDER).len();
    let without_guessed = pattern.trim_matches(|c| guessed.contains_char(c)).len();

    if without_placeholders >= without_guessed {
        HintGate::AlmostDone
    } else {
        HintGate::Allowed
    }
}

/// Check a single candidate against a pattern
#[must_use]
pub fn fits(pattern: &str, guessed: &GuessedLetters, candidate: &SecretWord) -> bool {
    pattern.chars().count() == candidate.len()
        && pattern
            .chars()
            .zip(candidate.bytes().iter().map(|&b| char::from(b)))
            .all(|(p, c)| p == c || (p == PLACEHOLDER && !guessed.contains_char(c)))
}

/// All words of `words` that fit `pattern`, in word list order
#[must_use]
pub fn matches<'a>(
    pattern: &str,
    guessed: &GuessedLetters,
    words: &'a [SecretWord],
) -> Vec<&'a SecretWord> {
    words
        .par_iter()
        .filter(|candidate| fits(pattern, guessed, candidate))
        .collect()
}

/// Run the full hint interaction for one `*` input
///
/// Applies the [`gate`], asks for confirmation, charges `cost` guesses and
/// lists the matches. Guess deductions stop at zero.
///
/// # Errors
/// Propagates input errors from the console.
pub fn request_hint<C: Console + ?Sized>(
    pattern: &str,
    guessed: &GuessedLetters,
    guesses_remaining: u32,
    cost: u32,
    words: &[SecretWord],
    console: &mut C,
) -> Result<HintResult> {
    match gate(pattern, guessed) {
        HintGate::TooEarly => {
            console.warning("Come on! Guess at least one letter first, you can do it!");
            Ok(HintResult {
                guesses_remaining,
                outcome: HintOutcome::TooEarly,
            })
        }
        HintGate::AlmostDone => {
            console.warning(
                "Seriously? You are almost done, I can not help you now \
                 (you lose a guess for trying to play it easy)",
            );
            Ok(HintResult {
                guesses_remaining: guesses_remaining.saturating_sub(1),
                outcome: HintOutcome::AlmostDone,
            })
        }
        HintGate::Allowed => {
            let prompt = format!(
                "CAREFUL, using the hint will make you lose {cost} guesses, is this ok? (y/n): "
            );
            if !ask_yes_no(console, &prompt, "I said 'y' or 'n' please")? {
                console.info("Alright!");
                return Ok(HintResult {
                    guesses_remaining,
                    outcome: HintOutcome::Declined,
                });
            }

            let remaining = guesses_remaining.saturating_sub(cost);
            let found = matches(pattern, guessed, words);
            debug!(pattern, candidates = found.len(), "hint search");

            if found.is_empty() {
                console.info("No matching found.");
            } else {
                console.notice(&format_matches(&found));
            }
            info!(cost, remaining, "hint used");

            Ok(HintResult {
                guesses_remaining: remaining,
                outcome: HintOutcome::Shown {
                    matches: found.len(),
                },
            })
        }
    }
}
