//! Puzzle session state machine
//!
//! A session exists only once an answer has been chosen. From then on it is
//! `InProgress`, accepting one guess per row: a valid guess is evaluated and
//! locked, then the session either ends (`Won`, or `Lost` when an attempt cap
//! is configured) or opens the next row. Invalid guesses change nothing.

use super::config::SessionConfig;
use super::error::GameError;
use crate::core::{Feedback, KanaWord, Symbol, leading_candidates};
use crate::wordlists::{AnswerEntry, WordListSource, WordLists};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted and locked guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: KanaWord,
    feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub const fn guess(&self) -> &KanaWord {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The guess was the answer; the session is over
    Won(Feedback),
    /// Not solved yet; the next row is open
    Continue(Feedback),
    /// Not solved and the attempt cap is used up
    Lost(Feedback),
}

impl AttemptOutcome {
    #[must_use]
    pub const fn feedback(self) -> Feedback {
        match self {
            Self::Won(feedback) | Self::Continue(feedback) | Self::Lost(feedback) => feedback,
        }
    }
}

/// One puzzle: the answer and the rows played against it
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    answer: AnswerEntry,
    attempts: Vec<Attempt>,
    status: SessionStatus,
    max_attempts: Option<usize>,
}

impl PuzzleSession {
    /// Start a session with a known answer
    #[must_use]
    pub fn with_answer(answer: AnswerEntry, config: &SessionConfig) -> Self {
        Self {
            answer,
            attempts: Vec::new(),
            status: SessionStatus::InProgress,
            max_attempts: config.max_attempts,
        }
    }

    /// Start a session with a random answer
    ///
    /// Picks a random leading symbol outside `config.excluded_leading`, then a
    /// random word from that symbol's list.
    ///
    /// # Errors
    /// Returns `GameError::DataUnavailable` if the chosen symbol has no words.
    /// Callers can retry, or use [`PuzzleSession::start_with_retry`].
    pub async fn start<S, R>(
        lists: &mut WordLists<S>,
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self, GameError>
    where
        S: WordListSource,
        R: Rng + ?Sized,
    {
        let candidates = leading_candidates(&config.excluded_leading);
        let &leading = candidates.choose(rng).ok_or(GameError::NoWordLists)?;
        Self::start_with_leading(lists, leading, config, rng).await
    }

    /// Start a session whose answer starts with `leading`
    ///
    /// # Errors
    /// Returns `GameError::DataUnavailable` if `leading` may never lead an
    /// answer, is excluded by the configuration, or has no words.
    pub async fn start_with_leading<S, R>(
        lists: &mut WordLists<S>,
        leading: Symbol,
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self, GameError>
    where
        S: WordListSource,
        R: Rng + ?Sized,
    {
        if !leading.can_lead() || config.excluded_leading.contains(&leading) {
            return Err(GameError::DataUnavailable { leading });
        }

        // Only words actually starting with `leading` qualify
        let words: Vec<&AnswerEntry> = lists
            .entries(leading)
            .await
            .iter()
            .filter(|entry| entry.kana().leading() == leading)
            .collect();

        let answer = words
            .choose(rng)
            .copied()
            .cloned()
            .ok_or(GameError::DataUnavailable { leading })?;

        log::debug!("Answer selected: {}", answer.kana());
        Ok(Self::with_answer(answer, config))
    }

    /// Start a session, trying leading symbols in random order until one works
    ///
    /// # Errors
    /// Returns `GameError::NoWordLists` if no eligible symbol has any words.
    pub async fn start_with_retry<S, R>(
        lists: &mut WordLists<S>,
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self, GameError>
    where
        S: WordListSource,
        R: Rng + ?Sized,
    {
        let mut candidates = leading_candidates(&config.excluded_leading);
        candidates.shuffle(rng);

        for leading in candidates {
            match Self::start_with_leading(lists, leading, config, rng).await {
                Ok(session) => return Ok(session),
                Err(e) => log::debug!("{e}, trying another leading symbol"),
            }
        }

        Err(GameError::NoWordLists)
    }

    /// Submit the guess for the active row
    ///
    /// Checks that the game is still running and that the guess is a listed
    /// word, then evaluates it and locks the row.
    ///
    /// # Errors
    /// - `GameError::SessionOver` once the session is won or lost
    /// - `GameError::InvalidWord` if the guess is not in its word list
    ///
    /// In both cases the session is left untouched.
    pub async fn submit_guess<S: WordListSource>(
        &mut self,
        lists: &mut WordLists<S>,
        guess: &KanaWord,
    ) -> Result<AttemptOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::SessionOver);
        }

        validate_guess(lists, guess).await?;

        let feedback = Feedback::evaluate(self.answer.kana(), guess);
        self.attempts.push(Attempt {
            guess: guess.clone(),
            feedback,
        });

        let outcome = if guess == self.answer.kana() {
            self.status = SessionStatus::Won;
            AttemptOutcome::Won(feedback)
        } else if self
            .max_attempts
            .is_some_and(|max| self.attempts.len() >= max)
        {
            self.status = SessionStatus::Lost;
            AttemptOutcome::Lost(feedback)
        } else {
            AttemptOutcome::Continue(feedback)
        };

        Ok(outcome)
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The answer, for display once the session is over
    #[must_use]
    pub const fn answer(&self) -> &AnswerEntry {
        &self.answer
    }

    /// Locked attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Number of the current row, starting at 1
    ///
    /// While in progress this is the open row; once the session is over it is
    /// the final, locked row.
    #[must_use]
    pub fn attempt_number(&self) -> usize {
        if self.status.is_over() {
            self.attempts.len()
        } else {
            self.attempts.len() + 1
        }
    }

    /// Whether row `row` (1-based) has been submitted and locked
    #[must_use]
    pub fn is_row_locked(&self, row: usize) -> bool {
        (1..=self.attempts.len()).contains(&row)
    }

    #[must_use]
    pub const fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Attempts left before the cap, `None` when unlimited
    #[must_use]
    pub fn remaining_attempts(&self) -> Option<usize> {
        self.max_attempts
            .map(|max| max.saturating_sub(self.attempts.len()))
    }
}

/// Check that `guess` is a listed word
///
/// The guess is looked up in the list of its own leading symbol, never in the
/// answer's list.
///
/// # Errors
/// Returns `GameError::InvalidWord` if the guess is not listed there verbatim.
pub async fn validate_guess<S: WordListSource>(
    lists: &mut WordLists<S>,
    guess: &KanaWord,
) -> Result<(), GameError> {
    if lists.contains(guess).await {
        Ok(())
    } else {
        log::warn!("Received an invalid word: {guess}");
        Err(GameError::InvalidWord {
            word: guess.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::wordlists::MemorySource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> KanaWord {
        KanaWord::new(text).unwrap()
    }

    fn entry(kana: &str, display: &str) -> AnswerEntry {
        AnswerEntry::new(word(kana), display)
    }

    fn lists() -> WordLists<MemorySource> {
        WordLists::new(MemorySource::from_entries([
            entry("ひこうき", "飛行機"),
            entry("ひまわり", "向日葵"),
            entry("たまねぎ", "玉葱"),
            entry("たこやき", "たこ焼き"),
            entry("きょうと", "京都"),
        ]))
    }

    fn session(answer: &str) -> PuzzleSession {
        PuzzleSession::with_answer(entry(answer, answer), &SessionConfig::default())
    }

    #[tokio::test]
    async fn winning_guess_ends_session() {
        let mut lists = lists();
        let mut session = session("たまねぎ");

        let outcome = session
            .submit_guess(&mut lists, &word("たまねぎ"))
            .await
            .unwrap();

        assert_eq!(outcome, AttemptOutcome::Won(Feedback::SOLVED));
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.attempt_number(), 1);
        assert!(session.is_row_locked(1));
    }

    #[tokio::test]
    async fn wrong_guess_opens_next_row() {
        let mut lists = lists();
        let mut session = session("たまねぎ");

        let outcome = session
            .submit_guess(&mut lists, &word("たこやき"))
            .await
            .unwrap();

        assert_eq!(
            outcome.feedback().verdicts(),
            &[Verdict::Exact, Verdict::Absent, Verdict::Absent, Verdict::Absent]
        );
        assert!(matches!(outcome, AttemptOutcome::Continue(_)));
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempt_number(), 2);
        assert!(session.is_row_locked(1));
        assert!(!session.is_row_locked(2));
    }

    #[tokio::test]
    async fn invalid_word_changes_nothing() {
        let mut lists = lists();
        let mut session = session("たまねぎ");

        let err = session
            .submit_guess(&mut lists, &word("たまごや"))
            .await
            .unwrap_err();

        assert_eq!(err, GameError::InvalidWord { word: word("たまごや") });
        assert_eq!(session.attempt_number(), 1);
        assert!(session.attempts().is_empty());
        assert!(!session.is_row_locked(1));
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[tokio::test]
    async fn submissions_after_win_are_rejected() {
        let mut lists = lists();
        let mut session = session("ひこうき");
        session
            .submit_guess(&mut lists, &word("ひこうき"))
            .await
            .unwrap();

        let err = session
            .submit_guess(&mut lists, &word("ひまわり"))
            .await
            .unwrap_err();

        assert_eq!(err, GameError::SessionOver);
        assert_eq!(session.attempts().len(), 1);
    }

    #[tokio::test]
    async fn attempt_cap_ends_in_loss() {
        let mut lists = lists();
        let config = SessionConfig::new().with_max_attempts(Some(2));
        let mut session = PuzzleSession::with_answer(entry("きょうと", "京都"), &config);

        let first = session
            .submit_guess(&mut lists, &word("ひこうき"))
            .await
            .unwrap();
        assert!(matches!(first, AttemptOutcome::Continue(_)));
        assert_eq!(session.remaining_attempts(), Some(1));

        let second = session
            .submit_guess(&mut lists, &word("たこやき"))
            .await
            .unwrap();
        assert!(matches!(second, AttemptOutcome::Lost(_)));
        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.attempt_number(), 2);
        assert_eq!(
            session.submit_guess(&mut lists, &word("きょうと")).await,
            Err(GameError::SessionOver)
        );
    }

    #[tokio::test]
    async fn start_picks_listed_answer() {
        let mut lists = lists();
        let mut rng = StdRng::seed_from_u64(7);

        let config = SessionConfig::default();

        let session = PuzzleSession::start_with_retry(&mut lists, &config, &mut rng)
            .await
            .unwrap();

        assert!(lists.contains(session.answer().kana()).await);
        assert_eq!(session.attempt_number(), 1);
    }

    #[tokio::test]
    async fn start_with_leading_reports_unavailable_data() {
        let mut lists = lists();
        let mut rng = StdRng::seed_from_u64(1);
        let ka = Symbol::new('か').unwrap();

        let config = SessionConfig::default();

        let err = PuzzleSession::start_with_leading(&mut lists, ka, &config, &mut rng)
            .await
            .unwrap_err();

        assert_eq!(err, GameError::DataUnavailable { leading: ka });
    }

    #[tokio::test]
    async fn start_with_leading_refuses_excluded_symbol() {
        let mut source = MemorySource::new();
        let n = Symbol::new('ん').unwrap();
        source.set_list(n, vec![entry("んごんご", "")]);
        let mut lists = WordLists::new(source);
        let mut rng = StdRng::seed_from_u64(1);

        let config = SessionConfig::default();

        let err = PuzzleSession::start_with_leading(&mut lists, n, &config, &mut rng)
            .await
            .unwrap_err();

        assert_eq!(err, GameError::DataUnavailable { leading: n });
    }

    #[tokio::test]
    async fn reserved_symbols_never_lead_even_without_exclusions() {
        let n = Symbol::new('ん').unwrap();
        let mut source = MemorySource::new();
        source.set_list(n, vec![entry("んごんご", "")]);
        let mut lists = WordLists::new(source);
        let mut rng = StdRng::seed_from_u64(1);

        let config = SessionConfig {
            excluded_leading: Vec::new(),
            ..SessionConfig::default()
        };

        let err = PuzzleSession::start_with_leading(&mut lists, n, &config, &mut rng)
            .await
            .unwrap_err();
        assert_eq!(err, GameError::DataUnavailable { leading: n });

        let err = PuzzleSession::start_with_retry(&mut lists, &config, &mut rng)
            .await
            .unwrap_err();
        assert_eq!(err, GameError::NoWordLists);
        assert!(!lists.cache().contains(n));
    }

    #[tokio::test]
    async fn answer_filed_under_wrong_symbol_is_not_a_valid_guess() {
        let mut source = MemorySource::new();
        source.set_list(Symbol::new('あ').unwrap(), vec![entry("ひこうき", "飛行機")]);
        let mut lists = WordLists::new(source);
        let mut session = session("ひこうき");

        let err = session
            .submit_guess(&mut lists, &word("ひこうき"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GameError::InvalidWord {
                word: word("ひこうき")
            }
        );
        assert!(session.attempts().is_empty());
        assert!(!session.is_row_locked(1));
        assert_eq!(session.attempt_number(), 1);
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[tokio::test]
    async fn start_with_retry_fails_without_words() {
        let mut lists = WordLists::new(MemorySource::new());
        let mut rng = StdRng::seed_from_u64(3);

        let config = SessionConfig::default();

        let err = PuzzleSession::start_with_retry(&mut lists, &config, &mut rng)
            .await
            .unwrap_err();

        assert_eq!(err, GameError::NoWordLists);
        assert_eq!(lists.loads(), 68);
    }
}
