//! Single-cell keystroke policy
//!
//! A cell buffers raw keystrokes until they form one symbol. After every
//! keystroke:
//! 1. a buffer that already is a symbol advances to the next cell as-is;
//! 2. a buffer ending in a vowel or `n` is looked up; a hit replaces the
//!    buffer with the symbol and advances, a miss leaves it alone;
//! 3. anything else waits for more input.

use super::table::{MAX_SPELLING_LEN, TransliterationTable};
use crate::core::Symbol;

/// What the UI should do after a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// The cell now holds a symbol; move focus to the next cell
    Advance(Symbol),
    /// Keep focus on this cell
    Stay,
}

const TRIGGERS: [char; 6] = ['a', 'i', 'u', 'e', 'o', 'n'];

/// Raw input for one cell of a row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellBuffer {
    text: String,
}

impl CellBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The symbol held by this cell, if it is complete
    #[must_use]
    pub fn symbol(&self) -> Option<Symbol> {
        Symbol::parse(&self.text)
    }

    /// Append one keystroke and apply the transliteration policy
    ///
    /// Keystrokes past the longest romaji spelling are ignored, as are
    /// keystrokes into a cell that already holds a symbol.
    ///
    /// # Examples
    /// ```
    /// use kana_wordle::input::{CellBuffer, CellOutcome, TransliterationTable};
    ///
    /// let table = TransliterationTable::shared();
    /// let mut cell = CellBuffer::new();
    ///
    /// assert_eq!(cell.push(table, 'k'), CellOutcome::Stay);
    /// assert!(matches!(cell.push(table, 'a'), CellOutcome::Advance(_)));
    /// assert_eq!(cell.text(), "か");
    /// ```
    pub fn push(&mut self, table: &TransliterationTable, key: char) -> CellOutcome {
        if self.symbol().is_none() && self.text.chars().count() < MAX_SPELLING_LEN {
            self.text.push(key);
        }
        self.apply(table)
    }

    /// Remove the last character; returns `false` if the cell was empty
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    fn apply(&mut self, table: &TransliterationTable) -> CellOutcome {
        let trimmed = self.text.trim();
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }

        if let Some(symbol) = self.symbol() {
            return CellOutcome::Advance(symbol);
        }

        if self.text.ends_with(TRIGGERS)
            && let Some(symbol) = table.lookup(&self.text)
        {
            self.text = symbol.to_string();
            return CellOutcome::Advance(symbol);
        }

        CellOutcome::Stay
    }
}
