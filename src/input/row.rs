//! Row editing
//!
//! One editable row of `WORD_LENGTH` cells with a cursor, the keyboard side of
//! the game board: typing fills cells through the transliteration policy and
//! moves the cursor forward, backspace walks back through the row.

use super::cell::{CellBuffer, CellOutcome};
use super::table::TransliterationTable;
use crate::core::{KanaWord, Symbol, WORD_LENGTH, WordError};

/// The active row of the board
#[derive(Debug, Clone, Default)]
pub struct RowEditor {
    cells: [CellBuffer; WORD_LENGTH],
    cursor: usize,
}

impl RowEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the focused cell (0-3)
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn cells(&self) -> &[CellBuffer; WORD_LENGTH] {
        &self.cells
    }

    #[must_use]
    pub const fn on_last_cell(&self) -> bool {
        self.cursor == WORD_LENGTH - 1
    }

    /// Type one key into the focused cell
    ///
    /// The cursor moves to the next cell when the keystroke completes a symbol;
    /// on the last cell it stays put.
    pub fn type_key(&mut self, table: &TransliterationTable, key: char) -> CellOutcome {
        let outcome = self.cells[self.cursor].push(table, key);
        if matches!(outcome, CellOutcome::Advance(_)) && !self.on_last_cell() {
            self.cursor += 1;
        }
        outcome
    }

    /// Delete backwards
    ///
    /// An empty cell hands focus to the previous cell and deletes from there.
    pub fn backspace(&mut self) {
        if self.cells[self.cursor].is_empty() && self.cursor > 0 {
            self.cursor -= 1;
        }
        self.cells[self.cursor].pop();
    }

    /// The symbols typed so far, `None` for incomplete cells
    #[must_use]
    pub fn symbols(&self) -> [Option<Symbol>; WORD_LENGTH] {
        std::array::from_fn(|i| self.cells[i].symbol())
    }

    /// Build the candidate guess from the row
    ///
    /// # Errors
    /// Returns `WordError::UnknownSymbol` for a cell holding unresolved romaji and
    /// `WordError::InvalidLength` when cells are still empty.
    pub fn candidate(&self) -> Result<KanaWord, WordError> {
        let mut symbols = Vec::with_capacity(WORD_LENGTH);
        for cell in &self.cells {
            match (cell.symbol(), cell.text().chars().next()) {
                (Some(symbol), _) => symbols.push(symbol),
                (None, Some(ch)) => return Err(WordError::UnknownSymbol(ch)),
                (None, None) => {}
            }
        }

        KanaWord::from_symbols(&symbols)
    }

    /// Reset for the next attempt
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(CellBuffer::clear);
        self.cursor = 0;
    }
}
