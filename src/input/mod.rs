//! Keyboard input
//!
//! Romaji transliteration and the per-cell / per-row editing policy that turns
//! raw keystrokes into candidate guesses.

pub mod cell;
pub mod row;
pub mod table;

pub use cell::{CellBuffer, CellOutcome};
pub use row::RowEditor;
pub use table::TransliterationTable;
