//! Formatting utilities for terminal output

use crate::core::SecretWord;
use crate::game::HintGate;

/// Space out a revealed pattern for display: `c__` becomes `c _ _`
#[must_use]
pub fn format_progress(pattern: &str) -> String {
    join_chars(pattern.chars())
}

/// Space-join the available letters
#[must_use]
pub fn format_available(letters: &[char]) -> String {
    join_chars(letters.iter().copied())
}

/// Space-join candidate words, one line
#[must_use]
pub fn format_matches(words: &[&SecretWord]) -> String {
    words
        .iter()
        .map(|w| w.text())
        .collect::<Vec<_>>()
        .join(" ")
}

/// What an in-game hint request would get for this pattern
#[must_use]
pub const fn describe_gate(gate: HintGate) -> &'static str {
    match gate {
        HintGate::TooEarly => "too early, no letter revealed yet (free)",
        HintGate::AlmostDone => "refused, word almost done (costs 1 guess)",
        HintGate::Allowed => "allowed",
    }
}

/// "1 guess" / "2 guesses"
#[must_use]
pub fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn join_chars(chars: impl Iterator<Item = char>) -> String {
    let mut result = String::new();
    for (i, c) in chars.enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_spaced() {
        assert_eq!(format_progress("c__"), "c _ _");
        assert_eq!(format_progress("a"), "a");
        assert_eq!(format_progress(""), "");
    }

    #[test]
    fn available_is_spaced() {
        assert_eq!(format_available(&['a', 'b', 'z']), "a b z");
    }

    #[test]
    fn matches_joined() {
        let cat = SecretWord::new("cat").unwrap();
        let cot = SecretWord::new("cot").unwrap();
        assert_eq!(format_matches(&[&cat, &cot]), "cat cot");
        assert_eq!(format_matches(&[]), "");
    }

    #[test]
    fn gate_descriptions_differ() {
        assert_eq!(describe_gate(HintGate::Allowed), "allowed");
        assert!(describe_gate(HintGate::TooEarly).starts_with("too early"));
        assert!(describe_gate(HintGate::AlmostDone).contains("costs 1 guess"));
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "guess", "guesses"), "1 guess");
        assert_eq!(plural(0, "guess", "guesses"), "0 guesses");
        assert_eq!(plural(14, "guess", "guesses"), "14 guesses");
    }
}
