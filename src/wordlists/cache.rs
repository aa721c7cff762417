//! Memoized word lists
//!
//! `WordLists` pairs a source with a cache so every leading symbol is loaded at
//! most once. Loading goes through `&mut self`, so a second request for the same
//! symbol can never start while the first is still in flight; it simply finds
//! the stored result.

use super::entry::AnswerEntry;
use super::source::WordListSource;
use crate::core::{KanaWord, Symbol};
use rustc_hash::FxHashMap;

/// Loaded word lists keyed by leading symbol
#[derive(Debug, Clone, Default)]
pub struct WordListCache {
    lists: FxHashMap<Symbol, Vec<AnswerEntry>>,
}

impl WordListCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, leading: Symbol) -> Option<&[AnswerEntry]> {
        self.lists.get(&leading).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, leading: Symbol) -> bool {
        self.lists.contains_key(&leading)
    }

    pub fn insert(&mut self, leading: Symbol, entries: Vec<AnswerEntry>) {
        self.lists.insert(leading, entries);
    }

    /// Number of leading symbols resolved so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// A word-list source behind a memoizing cache
#[derive(Debug)]
pub struct WordLists<S> {
    source: S,
    cache: WordListCache,
    loads: usize,
}

impl<S: WordListSource> WordLists<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: WordListCache::new(),
            loads: 0,
        }
    }

    /// All words starting with `leading`
    ///
    /// The first call loads the list from the source; later calls reuse it. A
    /// failed load is logged and remembered as an empty list.
    pub async fn entries(&mut self, leading: Symbol) -> &[AnswerEntry] {
        if !self.cache.contains(leading) {
            let entries = match self.source.load(leading).await {
                Ok(entries) => {
                    log::info!("Loaded {} words starting with {leading}", entries.len());
                    entries
                }
                Err(e) => {
                    log::warn!("Word list for {leading} unavailable: {e}");
                    Vec::new()
                }
            };
            self.loads += 1;
            self.cache.insert(leading, entries);
        }

        self.cache.get(leading).unwrap_or_default()
    }

    /// Whether `word` is listed verbatim under its own leading symbol
    pub async fn contains(&mut self, word: &KanaWord) -> bool {
        self.entries(word.leading())
            .await
            .iter()
            .any(|entry| entry.kana() == word)
    }

    /// Number of loads issued to the source
    #[must_use]
    pub const fn loads(&self) -> usize {
        self.loads
    }

    #[must_use]
    pub const fn cache(&self) -> &WordListCache {
        &self.cache
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::source::{LoadError, MemorySource};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sym(ch: char) -> Symbol {
        Symbol::new(ch).unwrap()
    }

    fn entry(kana: &str) -> AnswerEntry {
        AnswerEntry::new(KanaWord::new(kana).unwrap(), kana)
    }

    /// Counts how often the wrapped source is hit
    struct CountingSource {
        inner: MemorySource,
        hits: AtomicUsize,
    }

    impl WordListSource for CountingSource {
        async fn load(&self, leading: Symbol) -> Result<Vec<AnswerEntry>, LoadError> {
            self.hits.fetch_add(1, Ordering::SeqCst);
            self.inner.load(leading).await
        }
    }

    fn counting(entries: &[&str]) -> CountingSource {
        CountingSource {
            inner: MemorySource::from_entries(entries.iter().map(|kana| entry(kana))),
            hits: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn entries_are_loaded_once_per_symbol() {
        let mut lists = WordLists::new(counting(&["ひこうき", "ひまわり", "たまねぎ"]));

        assert_eq!(lists.entries(sym('ひ')).await.len(), 2);
        assert_eq!(lists.entries(sym('ひ')).await.len(), 2);
        assert_eq!(lists.entries(sym('た')).await.len(), 1);

        assert_eq!(lists.source().hits.load(Ordering::SeqCst), 2);
        assert_eq!(lists.loads(), 2);
        assert_eq!(lists.cache().len(), 2);
    }

    #[tokio::test]
    async fn failed_load_is_cached_as_empty() {
        let mut lists = WordLists::new(counting(&["ひこうき"]));

        assert!(lists.entries(sym('か')).await.is_empty());
        assert!(lists.entries(sym('か')).await.is_empty());

        assert_eq!(lists.source().hits.load(Ordering::SeqCst), 1);
        assert_eq!(lists.cache().get(sym('か')), Some(&[][..]));
    }

    #[tokio::test]
    async fn contains_checks_own_leading_symbol() {
        let mut source = MemorySource::new();
        // Misfiled under あ: must not count as a word
        source.set_list(sym('あ'), vec![entry("ひこうき")]);
        let mut lists = WordLists::new(source);

        assert!(!lists.contains(&KanaWord::new("ひこうき").unwrap()).await);
        assert!(lists.cache().contains(sym('ひ')));
        assert!(!lists.cache().contains(sym('あ')));
    }

    #[tokio::test]
    async fn contains_finds_listed_word() {
        let mut lists = WordLists::new(MemorySource::from_entries([entry("たまねぎ")]));

        assert!(lists.contains(&KanaWord::new("たまねぎ").unwrap()).await);
        assert!(!lists.contains(&KanaWord::new("たまごや").unwrap()).await);
    }
}
