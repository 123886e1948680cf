//! Hangman - CLI
//!
//! Guess the secret word one letter at a time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, find_matches, load_words, run_play},
    config::RoundConfig,
    output::{TerminalConsole, print_matches, print_session_summary},
    wordlists::Language,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list language: en or fr (asked interactively when omitted)
    #[arg(short, long, global = true, value_enum)]
    language: Option<Language>,

    /// Path to a custom word list (whitespace-separated words)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Guesses at the start of each round
    #[arg(short, long, global = true, default_value_t = RoundConfig::DEFAULT_GUESSES)]
    guesses: u32,

    /// Invalid inputs forgiven before they cost a guess
    #[arg(long, global = true, default_value_t = RoundConfig::DEFAULT_WARNINGS)]
    warnings: u32,

    /// Guesses charged for a hint
    #[arg(long, global = true, default_value_t = RoundConfig::DEFAULT_HINT_COST)]
    hint_cost: u32,

    /// Seed for picking secret words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pause before each turn, in milliseconds
    #[arg(long, global = true, default_value = "1000")]
    pace_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// List the words matching a pattern such as c_t
    Matches {
        /// Revealed pattern, '_' for unknown letters
        pattern: String,

        /// Letters already guessed besides those shown in the pattern
        #[arg(short = 'x', long, default_value = "")]
        guessed: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HANGMAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = PlayConfig {
        language: cli.language,
        wordlist: cli.wordlist,
        round: RoundConfig {
            guesses: cli.guesses,
            warnings: cli.warnings,
            hint_cost: cli.hint_cost,
            pace: Duration::from_millis(cli.pace_ms),
        },
        seed: cli.seed,
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Matches { pattern, guessed } => run_matches_command(&config, &pattern, &guessed),
    }
}

fn run_play_command(config: &PlayConfig) -> Result<()> {
    let mut console = TerminalConsole::stdio();
    let summary = run_play(config, &mut console).context("hangman session ended abnormally")?;
    print_session_summary(&summary);
    Ok(())
}

fn run_matches_command(config: &PlayConfig, pattern: &str, guessed: &str) -> Result<()> {
    let mut console = TerminalConsole::stdio();
    let words = load_words(config, &mut console).context("failed to load word list")?;

    let result = find_matches(pattern, guessed, &words);
    print_matches(&result.pattern, result.gate, &result.found);
    Ok(())
}
