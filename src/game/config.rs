//! Session configuration

use crate::core::{EXCLUDED_LEADING, Symbol};

/// Configuration for a puzzle session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Stop after this many accepted guesses; `None` plays until solved
    pub max_attempts: Option<usize>,
    /// Symbols an answer may not start with; `EXCLUDED_LEADING` never leads
    /// whatever this holds
    pub excluded_leading: Vec<Symbol>,
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_attempts: None,
            excluded_leading: EXCLUDED_LEADING.to_vec(),
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts.filter(|&n| n > 0);
        self
    }

    #[must_use]
    pub fn with_excluded_leading(mut self, excluded: impl IntoIterator<Item = Symbol>) -> Self {
        self.excluded_leading.extend(excluded);
        self.excluded_leading.sort();
        self.excluded_leading.dedup();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
