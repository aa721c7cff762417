//! Kana word representation
//!
//! A `KanaWord` is exactly `WORD_LENGTH` symbols, the length of every puzzle answer.

use super::Symbol;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of symbols in a puzzle word
pub const WORD_LENGTH: usize = 4;

/// A four-symbol kana word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KanaWord {
    text: String,
    symbols: [Symbol; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 4 kana, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a kana symbol")]
    UnknownSymbol(char),
}

impl KanaWord {
    /// Create a word from its kana spelling
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly four known symbols.
    ///
    /// # Examples
    /// ```
    /// use kana_wordle::core::KanaWord;
    ///
    /// let err = KanaWord::new("さくらんぼ").unwrap_err();
    /// assert_eq!(err.to_string(), "Word must be exactly 4 kana, got 5");
    ///
    /// let word = KanaWord::new("ひこうき").unwrap();
    /// assert_eq!(word.text(), "ひこうき");
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let symbols = text
            .trim()
            .chars()
            .map(|ch| Symbol::new(ch).ok_or(WordError::UnknownSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_symbols(&symbols)
    }

    /// Create a word from a slice of symbols
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` unless exactly four symbols are given.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self, WordError> {
        let symbols: [Symbol; WORD_LENGTH] = symbols
            .try_into()
            .map_err(|_| WordError::InvalidLength(symbols.len()))?;

        Ok(Self {
            text: symbols.iter().map(|s| s.as_char()).collect(),
            symbols,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; WORD_LENGTH] {
        &self.symbols
    }

    /// The first symbol, which selects the word-list partition
    #[inline]
    #[must_use]
    pub const fn leading(&self) -> Symbol {
        self.symbols[0]
    }

    /// Get the symbol at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Symbol {
        self.symbols[position]
    }
}

impl fmt::Display for KanaWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for KanaWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
