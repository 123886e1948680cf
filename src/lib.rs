//! Hangman
//!
//! A terminal word-guessing game with warnings for invalid input, a score for
//! every win and a hint that costs guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::config::RoundConfig;
//! use hangman::core::SecretWord;
//! use hangman::game::{Round, RoundStatus};
//! use hangman::mock::ScriptedConsole;
//!
//! let mut round = Round::new(SecretWord::new("cat").unwrap(), RoundConfig::default());
//! let mut console = ScriptedConsole::default();
//!
//! for letter in ["c", "a", "t"] {
//!     round.submit(letter, &[], &mut console).unwrap();
//! }
//! assert_eq!(round.status(), RoundStatus::Won { tries: 3, score: 45 });
//! ```

// Round limits and command vocabulary
pub mod config;

// Core domain types
pub mod core;

pub mod error;

// Validation, hints, rounds and sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Console abstraction and terminal output
pub mod output;

// Scripted console for tests and examples
pub mod mock;

pub use error::{GameError, Result};
