//! Puzzle sessions
//!
//! The game state machine: answer selection, guess validation, attempt
//! tracking and win/loss determination.

mod config;
mod error;
pub mod session;

pub use config::SessionConfig;
pub use error::GameError;
pub use session::{Attempt, AttemptOutcome, PuzzleSession, SessionStatus, validate_guess};
