//! Game errors
//!
//! Every variant is recoverable: a failed operation leaves the session exactly
//! as it was.

use crate::core::{KanaWord, Symbol};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The word list for this leading symbol is missing or empty
    #[error("no words available starting with {leading}")]
    DataUnavailable { leading: Symbol },
    /// Every eligible leading symbol was tried without finding an answer
    #[error("no word list could supply an answer")]
    NoWordLists,
    /// The guess is not listed under its own leading symbol
    #[error("{word} is not in the word list")]
    InvalidWord { word: KanaWord },
    #[error("the game is already over")]
    SessionOver,
}
