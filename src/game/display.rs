//! Presentation interface
//!
//! The engine only ever says *what* to show and what kind of text it is.
//! Colour, wrapping and pacing belong to whoever implements [`Presenter`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PROMPT: &str = "What now? ";
pub const EMPTYLINE_MSG: &str = "Don't be shy. Speak up.";
pub const UNKNOWN_MSG: &str = "Sorry, but I don't understand.";
pub const MORE_SPECIFIC_MSG: &str = "You need to be more specific.";
pub const QUIT_MSG: &str = "Thanks for playing!";
pub const HELP_MSG: &str = "You're on your own, Sonny.";

/// Semantic category of a display request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayKind {
    Message,
    Location,
    Description,
    Item,
    Inv,
    Character,
    Warning,
    Plain,
}

/// Renders display requests from the engine
pub trait Presenter {
    fn present(&mut self, text: &str, kind: DisplayKind);

    /// Called before each line of input is read
    fn prompt(&mut self) {}
}

/// One recorded display request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: DisplayKind,
    pub text: String,
}

/// Presenter that keeps everything it is asked to show.
///
/// Backs the TUI's scrollback and doubles as the recorder in tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every entry, in order
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    /// Text of entries of one kind
    pub fn of_kind(&self, kind: DisplayKind) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.text.as_str())
            .collect()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|e| e.text.as_str())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.text == text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the oldest entries beyond `max`
    pub fn truncate_front(&mut self, max: usize) {
        if self.entries.len() > max {
            let excess = self.entries.len() - max;
            self.entries.drain(..excess);
        }
    }
}

impl Presenter for Transcript {
    fn present(&mut self, text: &str, kind: DisplayKind) {
        self.entries.push(TranscriptEntry {
            timestamp: Utc::now(),
            kind,
            text: text.to_string(),
        });
    }
}
