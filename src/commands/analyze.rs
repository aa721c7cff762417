//! Guess analysis command
//!
//! Shows how a guess splits the known answers into feedback buckets.

use crate::core::{Feedback, KanaWord, Symbol};
use crate::wordlists::{AnswerEntry, WordListSource, WordLists};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub guess: KanaWord,
    pub total_answers: usize,
    pub distinct_patterns: usize,
    pub largest_bucket: usize,
    pub expected_remaining: f64,
    /// Most common feedback patterns, largest first
    pub top_patterns: Vec<(Feedback, usize)>,
}

/// Load the answers of every given leading symbol
pub async fn collect_answers<S: WordListSource>(
    lists: &mut WordLists<S>,
    leading: &[Symbol],
) -> Vec<AnswerEntry> {
    let mut answers = Vec::new();
    for &symbol in leading {
        answers.extend(
            lists
                .entries(symbol)
                .await
                .iter()
                .filter(|entry| entry.kana().leading() == symbol)
                .cloned(),
        );
    }
    answers
}

/// Partition `answers` by the feedback `guess` would receive
///
/// # Errors
///
/// Returns an error if there are no answers to analyze against.
pub fn analyze_guess(
    guess: &KanaWord,
    answers: &[AnswerEntry],
    top: usize,
) -> Result<AnalysisResult, String> {
    if answers.is_empty() {
        return Err("No answers loaded to analyze against".to_string());
    }

    let buckets = answers
        .par_iter()
        .fold(FxHashMap::default, |mut buckets, entry| {
            *buckets
                .entry(Feedback::evaluate(entry.kana(), guess))
                .or_insert(0usize) += 1;
            buckets
        })
        .reduce(FxHashMap::default, |mut merged, part| {
            for (feedback, count) in part {
                *merged.entry(feedback).or_insert(0) += count;
            }
            merged
        });

    let total_answers = answers.len();
    let sum_of_squares: usize = buckets.values().map(|&count| count * count).sum();
    let largest_bucket = buckets.values().copied().max().unwrap_or(0);

    let mut top_patterns: Vec<(Feedback, usize)> = buckets.into_iter().collect();
    let distinct_patterns = top_patterns.len();
    top_patterns.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.to_string().cmp(&b.0.to_string()))
    });
    top_patterns.truncate(top);

    Ok(AnalysisResult {
        guess: guess.clone(),
        total_answers,
        distinct_patterns,
        largest_bucket,
        expected_remaining: sum_of_squares as f64 / total_answers as f64,
        top_patterns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::wordlists::MemorySource;

    fn entries(words: &[&str]) -> Vec<AnswerEntry> {
        words
            .iter()
            .map(|kana| AnswerEntry::new(KanaWord::new(kana).unwrap(), *kana))
            .collect()
    }

    #[test]
    fn analyze_counts_buckets() {
        let answers = entries(&["ひこうき", "ひまわり", "たまねぎ", "たこやき"]);
        let guess = KanaWord::new("ひこうき").unwrap();

        let result = analyze_guess(&guess, &answers, 10).unwrap();

        assert_eq!(result.total_answers, 4);
        assert_eq!(result.distinct_patterns, 4);
        assert_eq!(result.largest_bucket, 1);
        assert!((result.expected_remaining - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.top_patterns.len(), 4);
    }

    #[test]
    fn analyze_merges_identical_feedback() {
        // Neither answer shares a symbol with the guess
        let answers = entries(&["たまねぎ", "たこやき"]);
        let guess = KanaWord::new("へそくり").unwrap();

        let result = analyze_guess(&guess, &answers, 5).unwrap();

        assert_eq!(result.distinct_patterns, 1);
        assert_eq!(result.largest_bucket, 2);
        assert_eq!(result.top_patterns, [(Feedback::new([Verdict::Absent; 4]), 2)]);
        assert!((result.expected_remaining - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn analyze_without_answers_fails() {
        let guess = KanaWord::new("ひこうき").unwrap();
        assert!(analyze_guess(&guess, &[], 5).is_err());
    }

    #[tokio::test]
    async fn collect_answers_skips_misfiled_words() {
        let mut source = MemorySource::from_entries(entries(&["ひこうき", "たまねぎ"]));
        let ta = Symbol::new('た').unwrap();
        source.set_list(ta, entries(&["たまねぎ", "ひまわり"]));
        let mut lists = WordLists::new(source);

        let answers = collect_answers(&mut lists, &[Symbol::new('ひ').unwrap(), ta]).await;

        let texts: Vec<&str> = answers.iter().map(|e| e.kana().text()).collect();
        assert_eq!(texts, ["ひこうき", "たまねぎ"]);
    }
}
