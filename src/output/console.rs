//! Message emission and line input
//!
//! The game logic only talks to a [`Console`]: it emits plain text tagged
//! with a [`MessageStyle`] and reads one line at a time. How a style looks on
//! screen is decided by the implementation.

use crate::config::{NO, YES};
use crate::error::Result;
use std::time::Duration;

/// Semantic tag attached to every message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageStyle {
    /// Plain status text
    Info,
    /// Rules, tips and announcements
    Notice,
    /// Invalid input, wrong letters, penalties
    Warning,
    /// Correct letters and wins
    Success,
}

/// Interface between the game and whoever is playing it
pub trait Console {
    /// Show one message
    fn emit(&mut self, style: MessageStyle, text: &str);

    /// Show `prompt` and read one line, without its line terminator
    ///
    /// # Errors
    /// Returns `GameError::InputClosed` once no more input can arrive, or an
    /// I/O error from the underlying stream.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Wait before the next turn is shown
    fn pause(&mut self, _duration: Duration) {}

    fn info(&mut self, text: &str) {
        self.emit(MessageStyle::Info, text);
    }

    fn notice(&mut self, text: &str) {
        self.emit(MessageStyle::Notice, text);
    }

    fn warning(&mut self, text: &str) {
        self.emit(MessageStyle::Warning, text);
    }

    fn success(&mut self, text: &str) {
        self.emit(MessageStyle::Success, text);
    }
}

/// Ask a y/n question until one of the two answers is given
///
/// Answers are trimmed and compared case-insensitively. Anything else emits
/// `retry` as a warning and asks again.
///
/// # Errors
/// Propagates input errors from the console.
pub fn ask_yes_no<C: Console + ?Sized>(console: &mut C, prompt: &str, retry: &str) -> Result<bool> {
    loop {
        let answer = console.read_line(prompt)?.trim().to_lowercase();
        match answer.as_str() {
            YES => return Ok(true),
            NO => return Ok(false),
            _ => console.warning(retry),
        }
    }
}
