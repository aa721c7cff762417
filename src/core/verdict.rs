//! Guess evaluation
//!
//! Each guessed symbol gets one of three verdicts:
//! - `Exact` (symbol in the correct position)
//! - `Present` (symbol in the answer, wrong position)
//! - `Absent` (symbol not in the answer, or all its copies already matched)
//!
//! Duplicate symbols are counted as a multiset: a symbol can never collect more
//! `Exact` + `Present` verdicts than it has occurrences in the answer.

use super::KanaWord;
use super::word::WORD_LENGTH;
use std::fmt;

/// Verdict for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Exact,
}

impl Verdict {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for a whole guess, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All exact (the guess is the answer)
    pub const SOLVED: Self = Self([Verdict::Exact; WORD_LENGTH]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Evaluate `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those answer slots
    /// 2. Second pass: for every other position, consume the leftmost unconsumed
    ///    answer slot holding the same symbol and mark it present
    /// 3. Whatever is left is absent
    ///
    /// # Examples
    /// ```
    /// use kana_wordle::core::{Feedback, KanaWord, Verdict};
    ///
    /// let answer = KanaWord::new("かきかく").unwrap();
    /// let guess = KanaWord::new("かかさし").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&answer, &guess);
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     &[Verdict::Exact, Verdict::Present, Verdict::Absent, Verdict::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(answer: &KanaWord, guess: &KanaWord) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut unconsumed = (*answer.symbols()).map(Some);

        // First pass: exact matches
        let pairs = guess.symbols().iter().zip(answer.symbols());
        for (i, (guessed, expected)) in pairs.enumerate() {
            if guessed == expected {
                verdicts[i] = Verdict::Exact;
                unconsumed[i] = None;
            }
        }

        // Second pass: present elsewhere, leftmost free slot wins
        for (verdict, &guessed) in verdicts.iter_mut().zip(guess.symbols()) {
            if *verdict == Verdict::Exact {
                continue;
            }
            if let Some(slot) = unconsumed.iter_mut().find(|slot| **slot == Some(guessed)) {
                *slot = None;
                *verdict = Verdict::Present;
            }
        }

        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Render as an emoji row, e.g. "🟩🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Evaluate `guess` against `answer`, see [`Feedback::evaluate`]
#[must_use]
pub fn evaluate(answer: &KanaWord, guess: &KanaWord) -> Feedback {
    Feedback::evaluate(answer, guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Exact, Present};

    fn word(text: &str) -> KanaWord {
        KanaWord::new(text).unwrap()
    }

    #[test]
    fn feedback_solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.verdicts(), &[Exact; 4]);
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = evaluate(&word("あいうえ"), &word("かきくけ"));
        assert_eq!(feedback.verdicts(), &[Absent; 4]);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn feedback_all_exact() {
        let w = word("ひこうき");
        assert_eq!(evaluate(&w, &w), Feedback::SOLVED);
    }

    #[test]
    fn feedback_duplicate_guess_leftmost_slot_wins() {
        // answer [A, B, A, C], guess [A, A, X, X]
        let feedback = evaluate(&word("かきかく"), &word("かかさし"));
        assert_eq!(feedback.verdicts(), &[Exact, Present, Absent, Absent]);
    }

    #[test]
    fn feedback_exact_takes_priority_over_present() {
        // The only こ in the answer sits at position 2, so the guess's first こ
        // must not steal it from the exact match.
        let feedback = evaluate(&word("たきこや"), &word("こたこや"));
        assert_eq!(feedback.verdicts(), &[Absent, Present, Exact, Exact]);
    }

    #[test]
    fn feedback_duplicate_guess_single_answer_copy() {
        // One さ in the answer: only the first guessed さ counts
        let feedback = evaluate(&word("あさひる"), &word("ささささ"));
        assert_eq!(feedback.verdicts(), &[Absent, Exact, Absent, Absent]);

        let feedback = evaluate(&word("あさひる"), &word("さあささ"));
        assert_eq!(feedback.verdicts(), &[Present, Present, Absent, Absent]);
    }

    #[test]
    fn feedback_duplicate_answer_copies_all_found() {
        let feedback = evaluate(&word("ここのか"), &word("のかここ"));
        assert_eq!(feedback.verdicts(), &[Present; 4]);
    }

    #[test]
    fn feedback_small_kana_are_ordinary_symbols() {
        let feedback = evaluate(&word("きょうと"), &word("とうきょ"));
        assert_eq!(feedback.verdicts(), &[Present; 4]);
    }

    #[test]
    fn feedback_renders_as_emoji() {
        let feedback = Feedback::new([Exact, Absent, Present, Exact]);
        assert_eq!(feedback.to_emoji(), "🟩⬜🟨🟩");
        assert_eq!(feedback.to_string(), "🟩⬜🟨🟩");
    }
}
