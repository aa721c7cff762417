//! Kana symbols
//!
//! A `Symbol` is one hiragana syllable. The alphabet holds the 71 base kana
//! (46 seion, 20 dakuon, 5 handakuon) that a word may start with. Small kana
//! (ゃ, っ, ...) are valid symbols inside a word but never lead one.

use std::fmt;
use std::str::FromStr;

/// One kana syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(char);

/// The 71 base kana, in gojūon order
#[rustfmt::skip]
pub const ALPHABET: [Symbol; 71] = [
    // あ行 .. わ行
    Symbol('あ'), Symbol('い'), Symbol('う'), Symbol('え'), Symbol('お'),
    Symbol('か'), Symbol('き'), Symbol('く'), Symbol('け'), Symbol('こ'),
    Symbol('さ'), Symbol('し'), Symbol('す'), Symbol('せ'), Symbol('そ'),
    Symbol('た'), Symbol('ち'), Symbol('つ'), Symbol('て'), Symbol('と'),
    Symbol('な'), Symbol('に'), Symbol('ぬ'), Symbol('ね'), Symbol('の'),
    Symbol('は'), Symbol('ひ'), Symbol('ふ'), Symbol('へ'), Symbol('ほ'),
    Symbol('ま'), Symbol('み'), Symbol('む'), Symbol('め'), Symbol('も'),
    Symbol('や'), Symbol('ゆ'), Symbol('よ'),
    Symbol('ら'), Symbol('り'), Symbol('る'), Symbol('れ'), Symbol('ろ'),
    Symbol('わ'), Symbol('を'), Symbol('ん'),
    // dakuon
    Symbol('が'), Symbol('ぎ'), Symbol('ぐ'), Symbol('げ'), Symbol('ご'),
    Symbol('ざ'), Symbol('じ'), Symbol('ず'), Symbol('ぜ'), Symbol('ぞ'),
    Symbol('だ'), Symbol('ぢ'), Symbol('づ'), Symbol('で'), Symbol('ど'),
    Symbol('ば'), Symbol('び'), Symbol('ぶ'), Symbol('べ'), Symbol('ぼ'),
    // handakuon
    Symbol('ぱ'), Symbol('ぴ'), Symbol('ぷ'), Symbol('ぺ'), Symbol('ぽ'),
];

/// Small kana that only appear after another symbol
#[rustfmt::skip]
pub const SMALL_KANA: [Symbol; 9] = [
    Symbol('ぁ'), Symbol('ぃ'), Symbol('ぅ'), Symbol('ぇ'), Symbol('ぉ'),
    Symbol('ゃ'), Symbol('ゅ'), Symbol('ょ'), Symbol('っ'),
];

/// No Japanese word starts with these, so they never lead an answer
pub const EXCLUDED_LEADING: [Symbol; 3] = [Symbol('づ'), Symbol('を'), Symbol('ん')];

impl Symbol {
    /// Create a symbol from a kana character
    ///
    /// Returns `None` for anything outside the alphabet and the small kana.
    ///
    /// # Examples
    /// ```
    /// use kana_wordle::core::Symbol;
    ///
    /// assert!(Symbol::new('か').is_some());
    /// assert!(Symbol::new('ゃ').is_some());
    /// assert!(Symbol::new('カ').is_none());
    /// assert!(Symbol::new('k').is_none());
    /// ```
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        let symbol = Self(ch);
        (ALPHABET.contains(&symbol) || SMALL_KANA.contains(&symbol)).then_some(symbol)
    }

    /// Parse a string holding exactly one symbol
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Whether a word may start with this symbol at all
    #[must_use]
    pub fn can_lead(self) -> bool {
        ALPHABET.contains(&self) && !EXCLUDED_LEADING.contains(&self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Not a kana symbol: {s}"))
    }
}

/// Alphabet symbols that are allowed to lead an answer
///
/// `EXCLUDED_LEADING` is always removed; `excluded` names further symbols to
/// drop. Order is preserved.
#[must_use]
pub fn leading_candidates(excluded: &[Symbol]) -> Vec<Symbol> {
    ALPHABET
        .iter()
        .copied()
        .filter(|symbol| symbol.can_lead() && !excluded.contains(symbol))
        .collect()
}
