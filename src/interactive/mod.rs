//! Interactive terminal UI
//!
//! Full-screen game built on ratatui and crossterm.

pub mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
