//! Rooms and the exits between them

use super::RoomId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One of the six exits a room may have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "u")]
    Up,
    #[serde(rename = "d")]
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Single-letter code used in data files and canonical commands
    pub fn code(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
            Direction::Up => "u",
            Direction::Down => "d",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A location in the game world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,

    /// Exits; a missing direction means there is no way through
    pub neighbors: HashMap<Direction, RoomId>,
}

impl Room {
    pub fn new(id: RoomId, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            neighbors: HashMap::new(),
        }
    }

    /// Builder-style exit, used by tests and hand-built worlds
    pub fn with_exit(mut self, direction: Direction, to: RoomId) -> Self {
        self.neighbors.insert(direction, to);
        self
    }

    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        self.neighbors.get(&direction).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_codes_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_code(d.code()), Some(d));
        }
        assert_eq!(Direction::from_code("north"), None);
        assert_eq!(Direction::from_code("x"), None);
    }

    #[test]
    fn missing_exit_is_none() {
        let room = Room::new(1, "Clearing", "A clearing.").with_exit(Direction::North, 2);
        assert_eq!(room.neighbor(Direction::North), Some(2));
        assert_eq!(room.neighbor(Direction::South), None);
    }
}
