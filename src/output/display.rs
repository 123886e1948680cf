//! Terminal rendering
//!
//! The only place that knows what a [`MessageStyle`] looks like.

use super::console::{Console, MessageStyle};
use super::formatters::{describe_gate, format_matches, plural};
use crate::core::SecretWord;
use crate::error::{GameError, Result};
use crate::game::{HintGate, SessionSummary};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Console backed by stdin/stdout with colored output
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Apply the terminal look for a style
#[must_use]
pub fn styled(style: MessageStyle, text: &str) -> String {
    match style {
        MessageStyle::Info => text.to_string(),
        MessageStyle::Notice => text.yellow().to_string(),
        MessageStyle::Warning => text.red().to_string(),
        MessageStyle::Success => text.bright_green().bold().to_string(),
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn emit(&mut self, style: MessageStyle, text: &str) {
        if let Err(error) = writeln!(self.output, "{}", styled(style, text)) {
            tracing::warn!(%error, "failed to write message");
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            let _ = self.output.flush();
            thread::sleep(duration);
        }
    }
}

/// Print the totals of a finished session
pub fn print_session_summary(summary: &SessionSummary) {
    if summary.rounds == 0 {
        return;
    }

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} {}, {} won, {} lost",
        "Session:".bright_cyan().bold(),
        plural(summary.rounds, "round", "rounds"),
        summary.won.to_string().green(),
        summary.lost.to_string().red()
    );
    if let Some(best) = summary.best_score {
        println!(
            "Best score: {}   Total score: {}",
            best.to_string().bright_yellow().bold(),
            summary.total_score
        );
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the words matching a pattern, as the `matches` command does
pub fn print_matches(pattern: &str, gate: HintGate, found: &[&SecretWord]) {
    println!(
        "{} {}",
        "Pattern:".bright_cyan().bold(),
        pattern.bright_yellow()
    );
    println!("{} {}", "In-game hint:".bright_cyan().bold(), describe_gate(gate));
    if found.is_empty() {
        println!("No matching found.");
    } else {
        println!("{}", format_matches(found));
        println!(
            "{}",
            format!("{} candidates", found.len()).bright_black()
        );
    }
}
