//! Characters the player can examine and talk to

use super::RoomId;
use serde::{Deserialize, Serialize};

/// A non-player character. Characters stay where the data puts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub nickname: String,
    pub name: String,
    pub description: String,
    /// Line spoken when the player talks to them
    pub speech: String,
    pub location: RoomId,
}

impl Character {
    pub fn new(nickname: &str, name: &str, description: &str, speech: &str, location: RoomId) -> Self {
        Self {
            nickname: nickname.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            speech: speech.to_string(),
            location,
        }
    }
}
