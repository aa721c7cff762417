//! TUI rendering with ratatui
//!
//! The board, message log and status bar of the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{PuzzleSession, SessionStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S, R>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if let Some(ref popup) = app.popup {
        render_popup(f, popup, main_chunks[0]);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎌 KANA WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Exact => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

/// Pad a cell to a fixed width; kana are two columns wide
fn cell_text(text: &str) -> String {
    let width: usize = text
        .chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum();
    let pad = 6usize.saturating_sub(width);
    format!("{}{text}{}", " ".repeat(pad / 2), " ".repeat(pad - pad / 2))
}

fn board_lines<S, R>(app: &App<S, R>, session: &PuzzleSession, rows: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for attempt in session.attempts() {
        let spans: Vec<Span> = attempt
            .guess()
            .symbols()
            .iter()
            .zip(attempt.feedback().verdicts())
            .flat_map(|(symbol, &verdict)| {
                [
                    Span::styled(cell_text(&symbol.to_string()), verdict_style(verdict)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !session.is_over() {
        let spans: Vec<Span> = app
            .row
            .cells()
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let style = if i == app.row.cursor() {
                    Style::new().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::new().fg(Color::White).bg(Color::Black)
                };
                [Span::styled(cell_text(cell.text()), style), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let empty_row: Vec<Span> = (0..WORD_LENGTH)
        .flat_map(|_| {
            [
                Span::styled(cell_text(""), Style::new().bg(Color::Black)),
                Span::raw(" "),
            ]
        })
        .collect();
    while lines.len() / 2 < rows {
        lines.push(Line::from(empty_row.clone()));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ref session) = app.session else {
        let paragraph = Paragraph::new("No puzzle loaded")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let rows = session.max_attempts().unwrap_or(0);
    let mut lines = board_lines(app, session, rows);

    // Keep the active row in view
    let visible = usize::from(area.height.saturating_sub(2));
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    render_result(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_result<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let session = app.session.as_ref().filter(|s| s.is_over());

    let (title, content, color) = match session {
        Some(session) => {
            let answer = session.answer();
            let (title, color) = if session.status() == SessionStatus::Won {
                (" 🎉 正解！ ", Color::Green)
            } else {
                (" Out of attempts ", Color::Red)
            };
            let content = vec![
                Line::from(vec![
                    Span::raw("Answer: "),
                    Span::styled(
                        answer.kana().to_string(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(format!("        {}", answer.display())),
                Line::from(format!("Guesses: {}", session.attempts().len())),
            ];
            (title, content, color)
        }
        None => {
            let attempt = app.session.as_ref().map_or(0, PuzzleSession::attempt_number);
            let mut content = vec![Line::from(format!("Attempt {attempt}"))];
            if let Some(left) = app.session.as_ref().and_then(PuzzleSession::remaining_attempts) {
                content.push(Line::from(format!("{left} left")));
            }
            content.push(Line::from(
                "Small kana: x prefix (xya → ゃ)".to_string(),
            ));
            (" Puzzle ", content, Color::White)
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_popup(f: &mut Frame, text: &str, area: Rect) {
    let width = area.width.min(40);
    let popup_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height / 2,
        width,
        height: 3.min(area.height),
    };

    let popup = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

fn render_status<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let distribution = Paragraph::new(format!("Wins: {}", app.stats.distribution_label()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green));
    f.render_widget(distribution, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Puzzle",
        InputMode::Typing => "Esc: Quit | Ctrl+N: Give Up | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
