//! Terminal output formatting
//!
//! The console abstraction the game talks to, its terminal implementation
//! and display helpers.

pub mod console;
pub mod display;
pub mod formatters;

pub use console::{Console, MessageStyle, ask_yes_no};
pub use display::{TerminalConsole, print_matches, print_session_summary};
pub use formatters::{describe_gate, format_available, format_matches, format_progress, plural};
