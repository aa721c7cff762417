//! Kana Wordle - CLI
//!
//! Four-kana word puzzle with TUI and CLI modes.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use kana_wordle::{
    commands::{
        analyze_guess, check_words, collect_answers, parse_word_input, run_audit, run_simple,
    },
    core::{ALPHABET, leading_candidates},
    game::{SessionConfig, validate_guess},
    input::TransliterationTable,
    output::{print_analysis_result, print_audit_report, print_check_result},
    wordlists::{JsonDirSource, WordLists},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kana_wordle",
    about = "Wordle with four-kana Japanese words, typed in kana or romaji",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the katakana_data_<kana>行.json word lists
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Attempts per puzzle (unlimited when omitted or 0)
    #[arg(short, long, global = true)]
    max_attempts: Option<usize>,

    /// Seed for answer selection, for reproducible puzzles
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple line-based game without TUI
    Simple,

    /// Show the feedback a guess would get against an answer
    Check {
        /// The answer, in kana or romaji
        answer: String,

        /// The guess, in kana or romaji
        guess: String,
    },

    /// Transliterate romaji to kana
    Romaji {
        /// Romaji text, e.g. "kixyouto"
        input: String,
    },

    /// Analyze how a guess splits all known answers
    Analyze {
        /// Guess to analyze, in kana or romaji
        guess: String,

        /// Number of feedback patterns to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Check every word list for missing, empty or misfiled entries
    Audit,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = SessionConfig::new().with_max_attempts(cli.max_attempts);
    let rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let lists = WordLists::new(JsonDirSource::new(&cli.data_dir));
    log::debug!("Reading word lists from {}", cli.data_dir.display());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(lists, config, rng).await,
        Commands::Simple => run_simple_command(lists, &config, rng).await,
        Commands::Check { answer, guess } => run_check_command(&answer, &guess),
        Commands::Romaji { input } => run_romaji_command(&input),
        Commands::Analyze { guess, top } => run_analyze_command(lists, &config, &guess, top).await,
        Commands::Audit => {
            run_audit_command(&cli.data_dir).await;
            Ok(())
        }
    }
}

async fn run_play_command(
    lists: WordLists<JsonDirSource>,
    config: SessionConfig,
    rng: StdRng,
) -> Result<()> {
    use kana_wordle::interactive::{App, run_tui};

    let app = App::new(lists, config, rng);
    run_tui(app).await
}

async fn run_simple_command(
    mut lists: WordLists<JsonDirSource>,
    config: &SessionConfig,
    mut rng: StdRng,
) -> Result<()> {
    run_simple(&mut lists, config, &mut rng)
        .await
        .map_err(|e| anyhow!(e))
}

fn run_check_command(answer: &str, guess: &str) -> Result<()> {
    let result = check_words(answer, guess).map_err(|e| anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_romaji_command(input: &str) -> Result<()> {
    let input = input.trim().to_ascii_lowercase();
    match TransliterationTable::shared().transliterate(&input) {
        Ok(symbols) => {
            let text: String = symbols.iter().map(|s| s.as_char()).collect();
            println!("{text}");
            Ok(())
        }
        Err(pos) => Err(anyhow!(
            "no kana matches '{}' at position {pos}\n  {input}\n  {}^",
            &input[pos..],
            " ".repeat(input[..pos].chars().count())
        )),
    }
}

async fn run_analyze_command(
    mut lists: WordLists<JsonDirSource>,
    config: &SessionConfig,
    guess: &str,
    top: usize,
) -> Result<()> {
    let guess = parse_word_input(guess).map_err(|e| anyhow!(e))?;
    validate_guess(&mut lists, &guess).await?;

    let answers = collect_answers(&mut lists, &leading_candidates(&config.excluded_leading)).await;
    let result = analyze_guess(&guess, &answers, top).map_err(|e| anyhow!(e))?;

    print_analysis_result(&result);
    Ok(())
}

async fn run_audit_command(data_dir: &std::path::Path) {
    println!("\nAuditing word lists in {}\n", data_dir.display());

    let source = JsonDirSource::new(data_dir);
    let report = run_audit(&source, &ALPHABET, true).await;
    print_audit_report(&report);
}
