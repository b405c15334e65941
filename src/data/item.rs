//! Items the player can find, carry and drop

use super::RoomId;
use serde::{Deserialize, Serialize};

/// Where an item currently is.
///
/// Serialized as a bare room id, with `0` standing for the player's
/// inventory, which is how game data files spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RoomId", into = "RoomId")]
pub enum ItemLocation {
    Carried,
    Room(RoomId),
}

impl ItemLocation {
    pub const CARRIED_CODE: RoomId = 0;

    pub fn is_carried(&self) -> bool {
        matches!(self, ItemLocation::Carried)
    }

    pub fn is_in(&self, room: RoomId) -> bool {
        *self == ItemLocation::Room(room)
    }
}

impl From<RoomId> for ItemLocation {
    fn from(code: RoomId) -> Self {
        if code == Self::CARRIED_CODE {
            ItemLocation::Carried
        } else {
            ItemLocation::Room(code)
        }
    }
}

impl From<ItemLocation> for RoomId {
    fn from(location: ItemLocation) -> Self {
        match location {
            ItemLocation::Carried => ItemLocation::CARRIED_CODE,
            ItemLocation::Room(id) => id,
        }
    }
}

/// A portable object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable lower-case key the player types
    pub nickname: String,
    pub name: String,
    pub description: String,
    pub location: ItemLocation,
}

impl Item {
    pub fn new(nickname: &str, name: &str, description: &str, location: ItemLocation) -> Self {
        Self {
            nickname: nickname.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            location,
        }
    }
}
