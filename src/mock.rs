//! Scripted console for driving games without a terminal

use crate::error::{GameError, Result};
use crate::output::{Console, MessageStyle};
use std::collections::VecDeque;

/// A [`Console`] fed from a fixed list of input lines
///
/// Every emitted message and every prompt is recorded so tests can inspect
/// what the player would have seen. Running out of input behaves like a
/// closed stdin.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<(MessageStyle, String)>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue more input lines
    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.inputs.push_back(line.into());
    }

    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    #[must_use]
    pub fn messages(&self) -> &[(MessageStyle, String)] {
        &self.messages
    }

    /// True if any message of any style contains `needle`
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.messages.iter().any(|(_, text)| text.contains(needle))
    }

    /// Number of messages of `style` containing `needle`
    #[must_use]
    pub fn count_of(&self, style: MessageStyle, needle: &str) -> usize {
        self.messages
            .iter()
            .filter(|(s, text)| *s == style && text.contains(needle))
            .count()
    }
}

impl Console for ScriptedConsole {
    fn emit(&mut self, style: MessageStyle, text: &str) {
        self.messages.push((style, text.to_string()));
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(GameError::InputClosed)
    }
}
