//! TUI application state and logic

use crate::game::{AttemptOutcome, GameError, PuzzleSession, SessionConfig};
use crate::input::{RowEditor, TransliterationTable};
use crate::wordlists::{WordListSource, WordLists};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S, R> {
    pub lists: WordLists<S>,
    pub config: SessionConfig,
    pub rng: R,
    pub session: Option<PuzzleSession>,
    pub row: RowEditor,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    /// Shown over the board until the next key press
    pub popup: Option<String>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; the last slot counts seven or more
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    fn record(&mut self, won: bool, guesses: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            let slot = guesses.clamp(1, 7) - 1;
            self.guess_distribution[slot] += 1;
        }
    }

    /// Wins per guess count, e.g. "1:0 2:1 3:0 4:0 5:0 6:0 7+:0"
    #[must_use]
    pub fn distribution_label(&self) -> String {
        self.guess_distribution
            .iter()
            .enumerate()
            .map(|(i, count)| {
                if i + 1 == self.guess_distribution.len() {
                    format!("{}+:{count}", i + 1)
                } else {
                    format!("{}:{count}", i + 1)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<S: WordListSource, R: Rng> App<S, R> {
    #[must_use]
    pub fn new(lists: WordLists<S>, config: SessionConfig, rng: R) -> Self {
        Self {
            lists,
            config,
            rng,
            session: None,
            row: RowEditor::new(),
            input_mode: InputMode::GameOver,
            messages: vec![Message {
                text: "Type romaji or kana; Enter on the last cell submits.".to_string(),
                style: MessageStyle::Info,
            }],
            popup: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Pick a fresh answer and reset the board
    pub async fn new_game(&mut self) {
        self.row.clear();
        self.popup = None;

        match PuzzleSession::start_with_retry(&mut self.lists, &self.config, &mut self.rng).await {
            Ok(session) => {
                self.session = Some(session);
                self.input_mode = InputMode::Typing;
                self.add_message("New puzzle! Guess the four-kana word.", MessageStyle::Info);
            }
            Err(e) => {
                self.session = None;
                self.input_mode = InputMode::GameOver;
                self.add_message(&format!("Cannot start a puzzle: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Handle one key press
    pub async fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.popup = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Other modified keys are shortcuts, never text
        let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game().await,
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.give_up();
                    self.new_game().await;
                }
                KeyCode::Char(_) if chord => {}
                KeyCode::Char(c) => {
                    self.row
                        .type_key(TransliterationTable::shared(), c.to_ascii_lowercase());
                }
                KeyCode::Backspace => self.row.backspace(),
                KeyCode::Enter => self.submit().await,
                _ => {}
            },
        }
    }

    /// Submit the active row
    ///
    /// Only takes effect with the cursor on the last cell.
    pub async fn submit(&mut self) {
        if !self.row.on_last_cell() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let guess = match self.row.candidate() {
            Ok(guess) => guess,
            Err(e) => {
                self.popup = Some(e.to_string());
                return;
            }
        };

        match session.submit_guess(&mut self.lists, &guess).await {
            Ok(AttemptOutcome::Continue(_)) => self.row.clear(),
            Ok(AttemptOutcome::Won(_)) => {
                let guesses = session.attempts().len();
                let answer = session.answer();
                let text = format!(
                    "正解！ {}({}) in {guesses} {}",
                    answer.kana(),
                    answer.display(),
                    if guesses == 1 { "guess" } else { "guesses" }
                );
                self.finish(true, guesses, &text, MessageStyle::Success);
            }
            Ok(AttemptOutcome::Lost(_)) => {
                let guesses = session.attempts().len();
                let answer = session.answer();
                let text = format!("Out of attempts. It was {}({})", answer.kana(), answer.display());
                self.finish(false, guesses, &text, MessageStyle::Error);
            }
            Err(GameError::InvalidWord { word }) => {
                self.popup = Some(format!("{word} is not in the word list"));
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, won: bool, guesses: usize, text: &str, style: MessageStyle) {
        self.row.clear();
        self.stats.record(won, guesses);
        self.input_mode = InputMode::GameOver;
        self.add_message(text, style);
        self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
    }

    /// Abandon the running puzzle, revealing the answer
    fn give_up(&mut self) {
        if let Some(session) = self.session.as_ref().filter(|s| !s.is_over()) {
            let text = format!(
                "The answer was {}({})",
                session.answer().kana(),
                session.answer().display()
            );
            let guesses = session.attempts().len();
            self.stats.record(false, guesses);
            self.add_message(&text, MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<S: WordListSource, R: Rng>(app: App<S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordListSource,
    R: Rng,
{
    app.new_game().await;

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key).await;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
