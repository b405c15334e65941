//! Runtime configuration
//!
//! Everything is read from `ADVENTURE_*` environment variables, falling
//! back to the bundled sample game.

use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_GAME_DIR: &str = "games/test_game";
pub const DEFAULT_STOP_WORDS: &str = "games/stop_words";
pub const DEFAULT_TEXT_WIDTH: usize = 80;

/// Which front end to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMode {
    /// Full-screen ratatui interface
    Tui,
    /// Plain line-by-line terminal output
    Console,
}

impl std::str::FromStr for UiMode {
    type Err = GameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tui" => Ok(UiMode::Tui),
            "console" | "plain" => Ok(UiMode::Console),
            _ => Err(GameError::InvalidConfig {
                key: "ADVENTURE_UI".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub game_dir: PathBuf,
    pub stop_words: PathBuf,
    pub ui: UiMode,

    /// Console typewriter speed in characters per second; 0 prints at once
    pub typing_cps: u32,

    pub text_width: usize,

    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_dir: PathBuf::from(DEFAULT_GAME_DIR),
            stop_words: PathBuf::from(DEFAULT_STOP_WORDS),
            ui: UiMode::Tui,
            typing_cps: 0,
            text_width: DEFAULT_TEXT_WIDTH,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup, defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("ADVENTURE_GAME_DIR") {
            config.game_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("ADVENTURE_STOP_WORDS") {
            config.stop_words = PathBuf::from(path);
        }
        if let Some(ui) = lookup("ADVENTURE_UI") {
            config.ui = ui.parse()?;
        }
        if let Some(cps) = lookup("ADVENTURE_TYPING_CPS") {
            config.typing_cps = parse_number("ADVENTURE_TYPING_CPS", &cps)?;
        }
        if let Some(width) = lookup("ADVENTURE_TEXT_WIDTH") {
            config.text_width = parse_number("ADVENTURE_TEXT_WIDTH", &width)?;
        }
        config.log_file = lookup("ADVENTURE_LOG").map(PathBuf::from);

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        GameError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into()
    })
}
