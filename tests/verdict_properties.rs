//! Property-based tests for guess evaluation.
//!
//! Words are drawn from a handful of kana so that repeated symbols and shared
//! symbols between guess and answer come up often.

use kana_wordle::core::{ALPHABET, Feedback, KanaWord, Symbol, Verdict};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_word()(indices in prop::collection::vec(0..6usize, 4)) -> KanaWord {
        let symbols: Vec<Symbol> = indices.into_iter().map(|i| ALPHABET[i]).collect();
        KanaWord::from_symbols(&symbols).unwrap()
    }
}

prop_compose! {
    /// Words that use none of the symbols `arbitrary_word` draws from
    fn disjoint_word()(indices in prop::collection::vec(10..16usize, 4)) -> KanaWord {
        let symbols: Vec<Symbol> = indices.into_iter().map(|i| ALPHABET[i]).collect();
        KanaWord::from_symbols(&symbols).unwrap()
    }
}

fn count(word: &KanaWord, symbol: Symbol) -> usize {
    word.symbols().iter().filter(|&&s| s == symbol).count()
}

proptest! {
    #[test]
    fn guessing_the_answer_solves(word in arbitrary_word()) {
        prop_assert_eq!(Feedback::evaluate(&word, &word), Feedback::SOLVED);
    }

    #[test]
    fn exact_marks_matching_positions(answer in arbitrary_word(), guess in arbitrary_word()) {
        let feedback = Feedback::evaluate(&answer, &guess);
        for (i, verdict) in feedback.verdicts().iter().enumerate() {
            let same = answer.symbol_at(i) == guess.symbol_at(i);
            prop_assert_eq!(*verdict == Verdict::Exact, same);
        }
    }

    #[test]
    fn marks_never_exceed_answer_occurrences(answer in arbitrary_word(), guess in arbitrary_word()) {
        let feedback = Feedback::evaluate(&answer, &guess);
        for &symbol in guess.symbols() {
            let marked = guess
                .symbols()
                .iter()
                .zip(feedback.verdicts())
                .filter(|&(&s, &v)| s == symbol && v != Verdict::Absent)
                .count();
            prop_assert_eq!(marked, count(&answer, symbol).min(count(&guess, symbol)));
        }
    }

    #[test]
    fn solved_only_for_identical_words(answer in arbitrary_word(), guess in arbitrary_word()) {
        let feedback = Feedback::evaluate(&answer, &guess);
        prop_assert_eq!(feedback.is_solved(), answer == guess);
    }

    #[test]
    fn disjoint_words_are_all_absent(answer in arbitrary_word(), guess in disjoint_word()) {
        let feedback = Feedback::evaluate(&answer, &guess);
        prop_assert!(feedback.verdicts().iter().all(|&v| v == Verdict::Absent));
    }

    #[test]
    fn evaluation_is_deterministic(answer in arbitrary_word(), guess in arbitrary_word()) {
        prop_assert_eq!(
            Feedback::evaluate(&answer, &guess),
            Feedback::evaluate(&answer, &guess)
        );
    }
}
