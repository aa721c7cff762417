//! Word list sources
//!
//! A source loads the list of words that start with one leading symbol. The
//! bundled sources read a directory of JSON files or serve lists from memory.

use super::entry::{AnswerEntry, WordRecord, entries_from_records};
use crate::core::Symbol;
use rustc_hash::FxHashMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load one word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no word list for {leading}")]
    Missing { leading: Symbol },
}

/// Provider of word lists, partitioned by leading symbol
pub trait WordListSource {
    /// Load every word starting with `leading`
    fn load(
        &self,
        leading: Symbol,
    ) -> impl Future<Output = Result<Vec<AnswerEntry>, LoadError>> + Send;
}

/// File name of the word list for a leading symbol, e.g. `katakana_data_か行.json`
#[must_use]
pub fn resource_name(leading: Symbol) -> String {
    format!("katakana_data_{leading}行.json")
}

/// Parse a JSON array of `{ "kana", "word" }` records
///
/// Records that are not playable four-symbol words are skipped.
///
/// # Errors
/// Returns the `serde_json` error if the document is not such an array.
///
/// # Examples
/// ```
/// use kana_wordle::wordlists::parse_word_list;
///
/// let entries = parse_word_list(r#"[
///     {"kana": "ひこうき", "word": "飛行機"},
///     {"kana": "ひる", "word": "昼"}
/// ]"#).unwrap();
/// assert_eq!(entries.len(), 1);
/// ```
pub fn parse_word_list(json: &str) -> Result<Vec<AnswerEntry>, serde_json::Error> {
    let records: Vec<WordRecord> = serde_json::from_str(json)?;
    Ok(entries_from_records(records))
}

/// Word lists stored as one JSON file per leading symbol
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_for(&self, leading: Symbol) -> PathBuf {
        self.root.join(resource_name(leading))
    }
}

impl WordListSource for JsonDirSource {
    async fn load(&self, leading: Symbol) -> Result<Vec<AnswerEntry>, LoadError> {
        let path = self.path_for(leading);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        parse_word_list(&content).map_err(|source| LoadError::Parse { path, source })
    }
}

/// Word lists held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: FxHashMap<Symbol, Vec<AnswerEntry>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source, filing every entry under its own leading symbol
    pub fn from_entries(entries: impl IntoIterator<Item = AnswerEntry>) -> Self {
        let mut source = Self::new();
        for entry in entries {
            source.insert(entry);
        }
        source
    }

    /// Add an entry to the list of its leading symbol
    pub fn insert(&mut self, entry: AnswerEntry) {
        self.lists
            .entry(entry.kana().leading())
            .or_default()
            .push(entry);
    }

    /// Replace the whole list for `leading`, whatever the entries start with
    pub fn set_list(&mut self, leading: Symbol, entries: Vec<AnswerEntry>) {
        self.lists.insert(leading, entries);
    }
}

impl WordListSource for MemorySource {
    async fn load(&self, leading: Symbol) -> Result<Vec<AnswerEntry>, LoadError> {
        self.lists
            .get(&leading)
            .cloned()
            .ok_or(LoadError::Missing { leading })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KanaWord;
    use std::fs;

    fn sym(ch: char) -> Symbol {
        Symbol::new(ch).unwrap()
    }

    fn entry(kana: &str, display: &str) -> AnswerEntry {
        AnswerEntry::new(KanaWord::new(kana).unwrap(), display)
    }

    #[test]
    fn resource_name_uses_leading_symbol() {
        assert_eq!(resource_name(sym('か')), "katakana_data_か行.json");
    }

    #[test]
    fn parse_word_list_rejects_malformed_json() {
        assert!(parse_word_list("{\"kana\": \"ひこうき\"}").is_err());
        assert!(parse_word_list("not json").is_err());
        assert!(parse_word_list("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn json_dir_source_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("katakana_data_ひ行.json"),
            r#"[{"kana": "ひこうき", "word": "飛行機"}, {"kana": "ひまわり", "word": "向日葵"}]"#,
        )
        .unwrap();

        let source = JsonDirSource::new(dir.path());
        let entries = source.load(sym('ひ')).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].kana().text(), "ひまわり");
        assert_eq!(entries[1].display(), "向日葵");
    }

    #[tokio::test]
    async fn json_dir_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonDirSource::new(dir.path());

        let err = source.load(sym('か')).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn json_dir_source_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("katakana_data_か行.json"), "[{").unwrap();
        let source = JsonDirSource::new(dir.path());

        let err = source.load(sym('か')).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn memory_source_partitions_by_leading_symbol() {
        let source = MemorySource::from_entries([
            entry("ひこうき", "飛行機"),
            entry("たまねぎ", "玉葱"),
            entry("ひまわり", "向日葵"),
        ]);

        assert_eq!(source.load(sym('ひ')).await.unwrap().len(), 2);
        assert_eq!(source.load(sym('た')).await.unwrap().len(), 1);
        assert!(matches!(
            source.load(sym('あ')).await,
            Err(LoadError::Missing { .. })
        ));
    }
}
