//! One-off evaluation of a guess against an answer

use crate::core::{Feedback, KanaWord};
use crate::input::TransliterationTable;

/// Result of checking a guess against an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub answer: KanaWord,
    pub guess: KanaWord,
    pub feedback: Feedback,
}

/// Parse a word typed on the command line, either kana or romaji
///
/// Romaji is matched case-insensitively.
///
/// # Errors
///
/// Returns an error if the input does not transliterate, or does not come out
/// as exactly four kana.
///
/// # Examples
/// ```
/// use kana_wordle::commands::parse_word_input;
///
/// assert_eq!(parse_word_input("hikouki").unwrap().text(), "ひこうき");
/// assert_eq!(parse_word_input("ひこうき").unwrap().text(), "ひこうき");
/// assert!(parse_word_input("hiko").is_err());
/// ```
pub fn parse_word_input(input: &str) -> Result<KanaWord, String> {
    let input = input.trim().to_ascii_lowercase();
    let symbols = TransliterationTable::shared()
        .transliterate(&input)
        .map_err(|pos| format!("Cannot read '{input}' at position {pos}"))?;

    KanaWord::from_symbols(&symbols).map_err(|e| format!("Invalid word '{input}': {e}"))
}

/// Evaluate `guess` against `answer`
///
/// Neither word has to be in a word list.
///
/// # Errors
///
/// Returns an error if either word cannot be parsed.
pub fn check_words(answer: &str, guess: &str) -> Result<CheckResult, String> {
    let answer = parse_word_input(answer)?;
    let guess = parse_word_input(guess)?;
    let feedback = Feedback::evaluate(&answer, &guess);

    Ok(CheckResult {
        answer,
        guess,
        feedback,
    })
}
