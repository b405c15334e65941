//! Static puzzle rule tables
//!
//! These say which object can be unlocked, entered or climbed where. They
//! are part of the game data and never change during play.

use super::{Direction, RoomId};
use serde::{Deserialize, Serialize};

/// `target` can be unlocked in `room` by a player carrying `requires`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRule {
    pub room: RoomId,
    pub requires: String,
    pub target: String,
}

/// `target` can be entered in `room` once it is unlocked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterRule {
    pub room: RoomId,
    pub target: String,
}

/// Climbing `target` in `room` moves the player through `direction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbRule {
    pub room: RoomId,
    pub target: String,
    pub direction: Direction,
}

pub const DEFAULT_WIN_FLAG: &str = "portal_entered";
pub const DEFAULT_WIN_MESSAGE: &str = "Now off to adventures in far off dimensions!";

/// All game-specific puzzle data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRules {
    #[serde(default)]
    pub unlockable: Vec<UnlockRule>,

    #[serde(default)]
    pub enterable: Vec<EnterRule>,

    #[serde(default)]
    pub climbable: Vec<ClimbRule>,

    /// Setting this flag wins the game
    #[serde(default = "default_win_flag")]
    pub win_flag: String,

    #[serde(default = "default_win_message")]
    pub win_message: String,
}

fn default_win_flag() -> String {
    DEFAULT_WIN_FLAG.to_string()
}

fn default_win_message() -> String {
    DEFAULT_WIN_MESSAGE.to_string()
}

impl PuzzleRules {
    /// Rules with no puzzles at all, only the win flag
    pub fn empty() -> Self {
        Self {
            unlockable: Vec::new(),
            enterable: Vec::new(),
            climbable: Vec::new(),
            win_flag: default_win_flag(),
            win_message: default_win_message(),
        }
    }

    /// The portal puzzle of the bundled sample game: a key unlocks the
    /// portal in room 4, and the tree in the start room leads up.
    pub fn sample(start_room: RoomId) -> Self {
        Self {
            unlockable: vec![UnlockRule {
                room: 4,
                requires: "key".to_string(),
                target: "portal".to_string(),
            }],
            enterable: vec![EnterRule {
                room: 4,
                target: "portal".to_string(),
            }],
            climbable: vec![ClimbRule {
                room: start_room,
                target: "tree".to_string(),
                direction: Direction::Up,
            }],
            ..Self::empty()
        }
    }
}
