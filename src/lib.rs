//! Text Adventure
//!
//! A data-driven interactive fiction interpreter. A game is a directory of
//! JSON files describing rooms, items, characters and puzzle flags; the
//! interpreter reads one line per turn, reduces it to a two-word command and
//! plays it against the world state.
//!
//! # Architecture
//!
//! - `data` - World data model, integrity checks and the JSON loader
//! - `parser` - Input normalization, object extraction, verb dispatch table
//! - `game` - The engine: player location, verb semantics, win/quit handling
//! - `tui` - Presentation: ratatui front end and a line-mode console
//! - `config` - Runtime configuration from the environment

pub mod config;
pub mod data;
pub mod game;
pub mod parser;
pub mod tui;

pub use config::GameConfig;
pub use data::*;
pub use game::{Game, GameOutcome, GamePhase};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Data integrity errors.
///
/// These mean the game data is broken, not the player's command. They abort
/// loading, or stop the engine if a handler trips over one mid-game.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    #[error("Duplicate item nickname: {0}")]
    DuplicateItem(String),

    #[error("Duplicate character nickname: {0}")]
    DuplicateCharacter(String),

    #[error("Duplicate flag: {0}")]
    DuplicateFlag(String),

    #[error("Room {room} lists exit {direction:?} twice")]
    DuplicateExit { room: RoomId, direction: String },

    #[error("Room id 0 is reserved for carried items")]
    ReservedRoomId,

    #[error("{context} refers to unknown room {id}")]
    UnknownRoom { context: String, id: RoomId },

    #[error("{context} requires unknown item {nickname}")]
    UnknownItem { context: String, nickname: String },

    #[error("Name must be lower case to be typed: {0}")]
    NotLowerCase(String),

    #[error("Flag not defined: {0}")]
    MissingFlag(String),

    #[error("Invalid direction code: {0:?}")]
    InvalidDirection(String),

    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
}
