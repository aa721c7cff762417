//! Word lists
//!
//! Words are partitioned by leading symbol; each partition is loaded on demand
//! from a `WordListSource` and memoized in `WordLists`.

pub mod cache;
pub mod entry;
pub mod source;

pub use cache::{WordListCache, WordLists};
pub use entry::{AnswerEntry, WordRecord, entries_from_records};
pub use source::{
    JsonDirSource, LoadError, MemorySource, WordListSource, parse_word_list, resource_name,
};
