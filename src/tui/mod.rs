//! Terminal User Interface
//!
//! Presenters for the engine: a full-screen ratatui app and a plain
//! line-mode console.

pub mod app;
pub mod console;

pub use app::App;
pub use console::Console;

use crate::game::DisplayKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub location: Color,
    pub item: Color,
    pub character: Color,
    pub warning: Color,
    pub border: Color,
    pub prompt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            location: Color::Red,
            item: Color::Green,
            character: Color::Blue,
            warning: Color::Yellow,
            border: Color::DarkGray,
            prompt: Color::Green,
        }
    }
}

impl Theme {
    /// Style for one kind of display request
    pub fn style_for(&self, kind: DisplayKind) -> Style {
        match kind {
            DisplayKind::Location => Style::default().fg(self.location).add_modifier(Modifier::BOLD),
            DisplayKind::Item | DisplayKind::Inv => Style::default().fg(self.item),
            DisplayKind::Character => Style::default().fg(self.character),
            DisplayKind::Warning => Style::default().fg(self.warning),
            DisplayKind::Message => Style::default().fg(self.accent),
            DisplayKind::Description | DisplayKind::Plain => Style::default().fg(self.fg),
        }
    }
}

/// Whether a kind starts a new paragraph (blank line before it)
pub fn starts_paragraph(kind: DisplayKind) -> bool {
    matches!(
        kind,
        DisplayKind::Message | DisplayKind::Location | DisplayKind::Plain
    )
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Help text
pub const HELP_TEXT: &str = "Type commands like: look, n/s/e/w/u/d, get <item>, drop <item>, \
examine <thing>, talk <someone>, unlock <thing>, enter <thing>, climb <thing>, inv, quit. \
PgUp/PgDn scroll, Up/Down recall commands, Esc quits.";

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Transcript
            Constraint::Length(3), // Command line
            Constraint::Length(1), // Status bar
        ])
        .split(area)
        .to_vec()
}
