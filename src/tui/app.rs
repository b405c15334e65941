//! Main application state and rendering

use super::console::wrap;
use super::{create_main_layout, starts_paragraph, styled_block, Theme, HELP_TEXT};
use crate::game::{DisplayKind, Game, GameOutcome, Presenter, Transcript};
use crate::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

/// Scrollback kept in memory
const MAX_TRANSCRIPT: usize = 1000;

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub transcript: Transcript,
    pub input_buffer: String,
    pub command_history: Vec<String>,

    /// Position while recalling history with Up/Down
    history_index: Option<usize>,

    /// Lines scrolled up from the bottom of the transcript
    pub scroll: usize,
}

impl App {
    /// Wrap a game and show its opening text
    pub fn new(mut game: Game) -> Result<Self> {
        let mut transcript = Transcript::new();
        transcript.present(HELP_TEXT, DisplayKind::Message);
        game.start(&mut transcript)?;

        Ok(Self {
            game,
            theme: Theme::default(),
            running: true,
            transcript,
            input_buffer: String::new(),
            command_history: Vec::new(),
            history_index: None,
            scroll: 0,
        })
    }

    /// Poll for one keyboard event and handle it
    pub fn handle_input(&mut self) -> Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(self.running);
                }
                self.handle_key(key)?;
            }
        }
        Ok(self.running)
    }

    /// React to a key press. Returns whether the app keeps running.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        // Any key closes the app once the game has ended
        if self.game.is_over() {
            self.running = false;
            return Ok(false);
        }

        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.game.quit(&mut self.transcript),
            _ if ctrl_c => self.game.quit(&mut self.transcript),
            KeyCode::Enter => self.execute_command()?,
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Up => self.recall(-1),
            KeyCode::Down => self.recall(1),
            KeyCode::PageUp => self.scroll += 5,
            KeyCode::PageDown => self.scroll = self.scroll.saturating_sub(5),
            _ => {}
        }
        Ok(self.running)
    }

    /// Execute a typed command
    fn execute_command(&mut self) -> Result<()> {
        let line = std::mem::take(&mut self.input_buffer);
        if !line.trim().is_empty() {
            self.command_history.push(line.clone());
        }
        self.history_index = None;
        self.scroll = 0;

        self.transcript
            .present(&format!("> {}", line.trim()), DisplayKind::Plain);
        self.game.handle_line(&line, &mut self.transcript)?;

        // Keep output buffer manageable
        self.transcript.truncate_front(MAX_TRANSCRIPT);
        Ok(())
    }

    fn recall(&mut self, step: isize) {
        if self.command_history.is_empty() {
            return;
        }
        let last = self.command_history.len() - 1;
        let next = match (self.history_index, step < 0) {
            (None, true) => Some(last),
            (None, false) => None,
            (Some(i), true) => Some(i.saturating_sub(1)),
            (Some(i), false) if i < last => Some(i + 1),
            (Some(_), false) => None,
        };
        self.history_index = next;
        self.input_buffer = next
            .map(|i| self.command_history[i].clone())
            .unwrap_or_default();
    }

    /// Transcript as styled lines wrapped to `width`
    fn transcript_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for entry in &self.transcript.entries {
            if starts_paragraph(entry.kind) && !lines.is_empty() {
                lines.push(Line::from(""));
            }
            let text = match entry.kind {
                DisplayKind::Item | DisplayKind::Character => format!("You see {}.", entry.text),
                DisplayKind::Warning => continue,
                _ => entry.text.clone(),
            };
            let style = self.theme.style_for(entry.kind);
            for piece in wrap(&text, width) {
                lines.push(Line::from(Span::styled(piece, style)));
            }
        }
        lines
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let layout = create_main_layout(frame.area());
        self.render_header(frame, layout[0]);
        self.render_transcript(frame, layout[1]);
        self.render_input(frame, layout[2]);
        self.render_status_bar(frame, layout[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let title = Paragraph::new(self.game.world.title.clone())
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(title, header_layout[0]);

        let room_name = self
            .game
            .current_room()
            .map(|r| r.name.clone())
            .unwrap_or_default();
        let room = Paragraph::new(room_name)
            .style(Style::default().fg(self.theme.location))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(room, header_layout[1]);
    }

    fn render_transcript(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2).max(1) as usize;
        let visible = area.height.saturating_sub(2) as usize;
        let lines = self.transcript_lines(width);

        let max_scroll = lines.len().saturating_sub(visible);
        let end = lines.len() - self.scroll.min(max_scroll);
        let start = end.saturating_sub(visible);

        let paragraph = Paragraph::new(lines[start..end].to_vec()).block(styled_block("Story", &self.theme));
        frame.render_widget(paragraph, area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.game.is_over() {
            (
                "Press any key to exit".to_string(),
                Style::default().fg(self.theme.border),
            )
        } else {
            (
                format!("> {}_", self.input_buffer),
                Style::default().fg(self.theme.prompt),
            )
        };
        let input = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.prompt))
                .title(" What now? "),
        );
        frame.render_widget(input, area);
    }

    fn status_text(&self) -> String {
        let state = match self.game.outcome() {
            Some(GameOutcome::Won) => "You won!".to_string(),
            Some(GameOutcome::Quit) => "Game over".to_string(),
            None => format!("Turn {}", self.game.stats.turns_taken),
        };
        format!(
            " {} | Carrying: {} | Moves: {} | {} ",
            self.game.current_room().map(|r| r.name.as_str()).unwrap_or("?"),
            self.game.inventory().len(),
            self.game.stats.rooms_visited,
            state,
        )
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(self.status_text())
            .style(Style::default().fg(self.theme.fg).bg(ratatui::style::Color::DarkGray));
        frame.render_widget(status, area);
    }
}
