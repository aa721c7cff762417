//! Romaji to kana transliteration table
//!
//! Maps lowercase latin spellings (1-4 letters) to exactly one kana symbol.
//! Several spellings may share a symbol (`ti`, `chi` and `ci` all give ち).

use crate::core::Symbol;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Every supported spelling, grouped by kana row
#[rustfmt::skip]
const SPELLINGS: &[(&str, char)] = &[
    // あ行
    ("a", 'あ'), ("i", 'い'), ("u", 'う'), ("e", 'え'), ("o", 'お'),
    // か行
    ("ka", 'か'), ("ki", 'き'), ("ku", 'く'), ("ke", 'け'), ("ko", 'こ'),
    // さ行
    ("sa", 'さ'), ("si", 'し'), ("su", 'す'), ("se", 'せ'), ("so", 'そ'),
    // た行
    ("ta", 'た'), ("ti", 'ち'), ("chi", 'ち'), ("ci", 'ち'), ("tsu", 'つ'), ("tu", 'つ'),
    ("te", 'て'), ("to", 'と'),
    // な行
    ("na", 'な'), ("ni", 'に'), ("nu", 'ぬ'), ("ne", 'ね'), ("no", 'の'),
    // は行
    ("ha", 'は'), ("hi", 'ひ'), ("hu", 'ふ'), ("fu", 'ふ'), ("he", 'へ'), ("ho", 'ほ'),
    // ま行
    ("ma", 'ま'), ("mi", 'み'), ("mu", 'む'), ("me", 'め'), ("mo", 'も'),
    // や行
    ("ya", 'や'), ("yu", 'ゆ'), ("yo", 'よ'),
    // ら行
    ("ra", 'ら'), ("ri", 'り'), ("ru", 'る'), ("re", 'れ'), ("ro", 'ろ'),
    // わ行
    ("wa", 'わ'), ("wo", 'を'), ("nn", 'ん'),
    // が行
    ("ga", 'が'), ("gi", 'ぎ'), ("gu", 'ぐ'), ("ge", 'げ'), ("go", 'ご'),
    // ざ行
    ("za", 'ざ'), ("zi", 'じ'), ("ji", 'じ'), ("zu", 'ず'), ("ze", 'ぜ'), ("zo", 'ぞ'),
    // だ行
    ("da", 'だ'), ("di", 'ぢ'), ("du", 'づ'), ("de", 'で'), ("do", 'ど'),
    // ば行
    ("ba", 'ば'), ("bi", 'び'), ("bu", 'ぶ'), ("be", 'べ'), ("bo", 'ぼ'),
    // ぱ行
    ("pa", 'ぱ'), ("pi", 'ぴ'), ("pu", 'ぷ'), ("pe", 'ぺ'), ("po", 'ぽ'),
    // small kana
    ("xa", 'ぁ'), ("xi", 'ぃ'), ("xu", 'ぅ'), ("xe", 'ぇ'), ("xo", 'ぉ'),
    ("xya", 'ゃ'), ("xyu", 'ゅ'), ("xyo", 'ょ'), ("xtu", 'っ'), ("xtsu", 'っ'),
];

/// Longest spelling in the table
pub const MAX_SPELLING_LEN: usize = 4;

static SHARED: LazyLock<TransliterationTable> = LazyLock::new(TransliterationTable::new);

/// Immutable romaji → symbol lookup
#[derive(Debug, Clone)]
pub struct TransliterationTable {
    entries: FxHashMap<&'static str, Symbol>,
}

impl TransliterationTable {
    /// Build the table
    ///
    /// Prefer [`TransliterationTable::shared`], which builds it once per process.
    #[must_use]
    pub fn new() -> Self {
        let entries = SPELLINGS
            .iter()
            .filter_map(|&(romaji, kana)| Symbol::new(kana).map(|symbol| (romaji, symbol)))
            .collect();

        Self { entries }
    }

    /// The process-wide table
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Look up the symbol for a complete romaji spelling
    ///
    /// # Examples
    /// ```
    /// use kana_wordle::core::Symbol;
    /// use kana_wordle::input::TransliterationTable;
    ///
    /// let table = TransliterationTable::shared();
    /// assert_eq!(table.lookup("chi"), Symbol::new('ち'));
    /// assert_eq!(table.lookup("ti"), Symbol::new('ち'));
    /// assert_eq!(table.lookup("k"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, romaji: &str) -> Option<Symbol> {
        self.entries.get(romaji).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Transliterate a whole romaji string, longest spelling first
    ///
    /// Kana already present in the input are passed through unchanged.
    ///
    /// # Errors
    /// Returns the byte offset of the first position no spelling matches.
    ///
    /// # Examples
    /// ```
    /// use kana_wordle::input::TransliterationTable;
    ///
    /// let table = TransliterationTable::shared();
    /// let symbols = table.transliterate("tsukue").unwrap();
    /// let text: String = symbols.iter().map(|s| s.as_char()).collect();
    /// assert_eq!(text, "つくえ");
    ///
    /// assert_eq!(table.transliterate("kyx"), Err(0));
    /// ```
    pub fn transliterate(&self, input: &str) -> Result<Vec<Symbol>, usize> {
        let input = input.trim();
        let mut symbols = Vec::new();
        let mut offset = 0;

        while offset < input.len() {
            let rest = &input[offset..];

            if let Some(symbol) = rest.chars().next().and_then(Symbol::new) {
                symbols.push(symbol);
                offset += symbol.as_char().len_utf8();
                continue;
            }

            let matched = (1..=MAX_SPELLING_LEN.min(rest.len()))
                .rev()
                .filter(|&len| rest.is_char_boundary(len))
                .find_map(|len| self.lookup(&rest[..len]).map(|symbol| (len, symbol)));

            let (len, symbol) = matched.ok_or(offset)?;
            symbols.push(symbol);
            offset += len;
        }

        Ok(symbols)
    }
}

impl Default for TransliterationTable {
    fn default() -> Self {
        Self::new()
    }
}
