//! Word-list records
//!
//! On disk every record is `{ "kana": "ひこうき", "word": "飛行機" }`: the kana
//! spelling that is played, plus a display form shown once the game ends.

use crate::core::{KanaWord, WordError};
use serde::Deserialize;

/// One record as stored in a word-list file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordRecord {
    pub kana: String,
    pub word: String,
}

/// A playable word with its display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEntry {
    kana: KanaWord,
    display: String,
}

impl AnswerEntry {
    #[must_use]
    pub fn new(kana: KanaWord, display: impl Into<String>) -> Self {
        Self {
            kana,
            display: display.into(),
        }
    }

    /// Build an entry from a raw record
    ///
    /// # Errors
    /// Returns `WordError` if the kana spelling is not a valid four-symbol word.
    pub fn from_record(record: WordRecord) -> Result<Self, WordError> {
        Ok(Self::new(KanaWord::new(&record.kana)?, record.word))
    }

    #[inline]
    #[must_use]
    pub const fn kana(&self) -> &KanaWord {
        &self.kana
    }

    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Convert records into entries, skipping any that are not playable words
#[must_use]
pub fn entries_from_records(records: Vec<WordRecord>) -> Vec<AnswerEntry> {
    records
        .into_iter()
        .filter_map(|record| {
            let kana = record.kana.clone();
            AnswerEntry::from_record(record)
                .inspect_err(|e| log::debug!("Skipping word list record '{kana}': {e}"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kana: &str, word: &str) -> WordRecord {
        WordRecord {
            kana: kana.to_string(),
            word: word.to_string(),
        }
    }

    #[test]
    fn entries_from_records_converts_valid_words() {
        let entries = entries_from_records(vec![
            record("ひこうき", "飛行機"),
            record("たまねぎ", "玉葱"),
        ]);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kana().text(), "ひこうき");
        assert_eq!(entries[0].display(), "飛行機");
        assert_eq!(entries[1].display(), "玉葱");
    }

    #[test]
    fn entries_from_records_skips_invalid() {
        let entries = entries_from_records(vec![
            record("ひこうき", "飛行機"),
            record("さくらんぼ", "桜桃"),
            record("ねこ", "猫"),
            record("ヒコウキ", "飛行機"),
        ]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kana().text(), "ひこうき");
    }

    #[test]
    fn record_deserializes_from_json() {
        let records: Vec<WordRecord> =
            serde_json::from_str(r#"[{"kana": "きょうと", "word": "京都"}]"#).unwrap();
        assert_eq!(records, vec![record("きょうと", "京都")]);
    }
}
