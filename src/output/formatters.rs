//! Formatting utilities for terminal output

use crate::core::{Feedback, KanaWord, Verdict};
use colored::{ColoredString, Colorize};

/// Color one kana cell by its verdict
#[must_use]
pub fn colored_cell(text: &str, verdict: Verdict) -> ColoredString {
    let cell = format!(" {text} ");
    match verdict {
        Verdict::Exact => cell.black().on_green(),
        Verdict::Present => cell.black().on_yellow(),
        Verdict::Absent => cell.white().on_bright_black(),
    }
}

/// Render a guess with each kana colored by its verdict
#[must_use]
pub fn colored_guess(guess: &KanaWord, feedback: Feedback) -> String {
    guess
        .symbols()
        .iter()
        .zip(feedback.verdicts())
        .map(|(symbol, &verdict)| colored_cell(&symbol.to_string(), verdict).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width] below
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
