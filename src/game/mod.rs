//! Game logic
//!
//! Validation, hints, the per-round state machine and the session loop.

pub mod hint;
mod round;
mod session;
mod validator;

pub use hint::{HintGate, HintOutcome, HintResult, gate, matches, request_hint};
pub use round::{Round, RoundState, RoundStatus};
pub use session::{Session, SessionSummary};
pub use validator::{Accepted, Rejection, validate};
