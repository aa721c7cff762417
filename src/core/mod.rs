//! Core domain types for kana Wordle
//!
//! Symbols, words and guess evaluation. Everything here is pure and
//! independent of word lists, sessions and presentation.

mod symbol;
pub mod verdict;
mod word;

pub use symbol::{ALPHABET, EXCLUDED_LEADING, SMALL_KANA, Symbol, leading_candidates};
pub use verdict::{Feedback, Verdict, evaluate};
pub use word::{KanaWord, WORD_LENGTH, WordError};
