//! One-shot hint lookup
//!
//! Runs the hint matcher from the command line at no cost, and reports what
//! the in-game hint gate would say for the pattern.

use crate::core::{GuessedLetters, SecretWord};
use crate::game::{HintGate, gate, matches};

/// Words matching a pattern, plus what an in-game hint would have said
pub struct MatchesResult<'a> {
    pub pattern: String,
    pub gate: HintGate,
    pub found: Vec<&'a SecretWord>,
}

/// Find the words of `words` that fit `pattern`
///
/// Letters shown in the pattern count as guessed, in addition to `guessed`.
#[must_use]
pub fn find_matches<'a>(pattern: &str, guessed: &str, words: &'a [SecretWord]) -> MatchesResult<'a> {
    let pattern = pattern.trim().to_lowercase();
    let letters: GuessedLetters = pattern
        .bytes()
        .chain(guessed.to_lowercase().bytes())
        .collect();

    MatchesResult {
        gate: gate(&pattern, &letters),
        found: matches(&pattern, &letters, words),
        pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_str;

    #[test]
    fn pattern_letters_count_as_guessed() {
        let words = words_from_str("cat cot act tact");
        let result = find_matches("C_T", "", &words);

        let texts: Vec<_> = result.found.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["cat", "cot"]);
        assert_eq!(result.pattern, "c_t");
        assert_eq!(result.gate, HintGate::AlmostDone);
    }

    #[test]
    fn extra_guessed_letters_exclude_gaps() {
        let words = words_from_str("cat cot cut");
        let result = find_matches("c_t", "ou", &words);

        let texts: Vec<_> = result.found.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["cat"]);
    }

    #[test]
    fn blank_pattern_is_too_early() {
        let words = words_from_str("cat dog");
        let result = find_matches("___", "", &words);
        assert_eq!(result.gate, HintGate::TooEarly);
        assert_eq!(result.found.len(), 2);
    }
}
