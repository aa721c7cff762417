//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Guesses are typed as kana or romaji.

use crate::commands::check::parse_word_input;
use crate::game::{GameError, PuzzleSession, SessionConfig, SessionStatus};
use crate::output::formatters::colored_guess;
use crate::wordlists::{WordListSource, WordLists};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no word
/// list can provide an answer.
pub async fn run_simple<S, R>(
    lists: &mut WordLists<S>,
    config: &SessionConfig,
    rng: &mut R,
) -> Result<(), String>
where
    S: WordListSource,
    R: Rng + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Kana Wordle - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the four-kana word. Type kana directly or romaji (hikouki).");
    println!("Small kana use an x prefix: kixyouto → きょうと\n");
    println!("  {} right kana, right place", "  ".on_green());
    println!("  {} in the word, elsewhere", "  ".on_yellow());
    println!("  {} not in the word\n", "  ".on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new puzzle\n");

    'game: loop {
        let mut session = PuzzleSession::start_with_retry(lists, config, rng)
            .await
            .map_err(|e| e.to_string())?;

        while !session.is_over() {
            let prompt = match session.remaining_attempts() {
                Some(left) => format!("Guess {} ({left} left)", session.attempt_number()),
                None => format!("Guess {}", session.attempt_number()),
            };
            let input = get_user_input(&prompt)?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 The answer was {}\n", answer_label(&session));
                    return Ok(());
                }
                "new" => {
                    println!("\n🔄 The answer was {}. New puzzle!\n", answer_label(&session));
                    continue 'game;
                }
                _ => {}
            }

            let guess = match parse_word_input(&input) {
                Ok(guess) => guess,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            };

            match session.submit_guess(lists, &guess).await {
                Ok(outcome) => {
                    println!("   {}\n", colored_guess(&guess, outcome.feedback()));
                }
                Err(GameError::InvalidWord { word }) => {
                    println!("❌ {word} is not in the word list\n");
                }
                Err(e) => return Err(e.to_string()),
            }
        }

        print_summary(&session);

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New puzzle!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn answer_label(session: &PuzzleSession) -> String {
    let answer = session.answer();
    format!("{}({})", answer.kana(), answer.display())
}

/// Print the end-of-game banner and the guess history
fn print_summary(session: &PuzzleSession) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        SessionStatus::Won => println!(
            "{}",
            "          🎉 ✨  正解！ P U Z Z L E   S O L V E D  ✨ 🎉"
                .bright_green()
                .bold()
        ),
        _ => println!("{}", "          Out of attempts".bright_red().bold()),
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  Answer: {}",
        answer_label(session).bright_yellow().bold()
    );
    let turns = session.attempts().len();
    println!(
        "  {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, attempt) in session.attempts().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            attempt.guess().text().bright_white().bold(),
            attempt.feedback().to_emoji()
        );
    }

    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
