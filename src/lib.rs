//! Kana Wordle
//!
//! A Wordle-style word puzzle played with four-kana Japanese words, with romaji
//! input, per-syllable word lists and both a terminal UI and a line mode.
//!
//! # Quick Start
//!
//! ```rust
//! use kana_wordle::core::{Feedback, KanaWord, Verdict};
//!
//! let answer = KanaWord::new("かきかく").unwrap();
//! let guess = KanaWord::new("かかさし").unwrap();
//!
//! let feedback = Feedback::evaluate(&answer, &guess);
//! assert_eq!(
//!     feedback.verdicts(),
//!     &[Verdict::Exact, Verdict::Present, Verdict::Absent, Verdict::Absent]
//! );
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types and guess evaluation
pub mod core;

// Romaji input and row editing
pub mod input;

// Word lists
pub mod wordlists;

// Puzzle sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
