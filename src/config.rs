//! Round configuration and the command vocabulary

use std::time::Duration;

/// Input that ends the session from inside a round
pub const QUIT_COMMAND: &str = "stop";

/// Input that asks for a hint
pub const HINT_SYMBOL: char = '*';

/// Affirmative answer to a yes/no prompt
pub const YES: &str = "y";

/// Negative answer to a yes/no prompt
pub const NO: &str = "n";

/// Per-round limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Guesses at the start of a round
    pub guesses: u32,
    /// Invalid inputs forgiven before they start costing guesses
    pub warnings: u32,
    /// Guesses charged for a confirmed hint
    pub hint_cost: u32,
    /// Pause before each turn is displayed
    pub pace: Duration,
}

impl RoundConfig {
    pub const DEFAULT_GUESSES: u32 = 15;
    pub const DEFAULT_WARNINGS: u32 = 3;
    pub const DEFAULT_HINT_COST: u32 = 3;
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            guesses: Self::DEFAULT_GUESSES,
            warnings: Self::DEFAULT_WARNINGS,
            hint_cost: Self::DEFAULT_HINT_COST,
            pace: Duration::ZERO,
        }
    }
}
