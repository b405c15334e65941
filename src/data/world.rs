//! The world aggregate and its integrity checks

use super::*;
use crate::GameError;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_TITLE: &str = "Text Adventure";

/// Everything the engine plays against.
///
/// Built once through [`World::new`], which refuses data with dangling room
/// references, duplicate keys or undefined puzzle flags.
#[derive(Debug, Clone)]
pub struct World {
    pub title: String,
    pub start_room: RoomId,
    pub rooms: HashMap<RoomId, Room>,

    /// Items in data-file order, which is also display order
    pub items: Vec<Item>,
    pub characters: Vec<Character>,
    pub flags: Flags,
    pub rules: PuzzleRules,

    /// Lines shown before the first look
    pub welcome: Vec<String>,
}

impl World {
    pub fn new(
        start_room: RoomId,
        rooms: Vec<Room>,
        items: Vec<Item>,
        characters: Vec<Character>,
        flags: Flags,
        rules: PuzzleRules,
    ) -> Result<Self, GameError> {
        let mut by_id = HashMap::with_capacity(rooms.len());
        for room in rooms {
            if room.id == ItemLocation::CARRIED_CODE {
                return Err(GameError::ReservedRoomId);
            }
            if by_id.contains_key(&room.id) {
                return Err(GameError::DuplicateRoom(room.id));
            }
            by_id.insert(room.id, room);
        }

        let world = Self {
            title: DEFAULT_TITLE.to_string(),
            start_room,
            rooms: by_id,
            items,
            characters,
            flags,
            rules,
            welcome: Vec::new(),
        };
        world.validate()?;
        Ok(world)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_welcome(mut self, lines: Vec<String>) -> Self {
        self.welcome = lines;
        self
    }

    /// Check every cross reference in the data
    pub fn validate(&self) -> Result<(), GameError> {
        self.require_room("start room", self.start_room)?;

        for room in self.rooms.values() {
            for (direction, &to) in &room.neighbors {
                self.require_room(&format!("exit {} of room {}", direction.code(), room.id), to)?;
            }
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            require_lower_case(&item.nickname)?;
            if !seen.insert(item.nickname.as_str()) {
                return Err(GameError::DuplicateItem(item.nickname.clone()));
            }
            if let ItemLocation::Room(id) = item.location {
                self.require_room(&format!("item {}", item.nickname), id)?;
            }
        }

        let mut seen = HashSet::new();
        for character in &self.characters {
            require_lower_case(&character.nickname)?;
            if !seen.insert(character.nickname.as_str()) {
                return Err(GameError::DuplicateCharacter(character.nickname.clone()));
            }
            self.require_room(&format!("character {}", character.nickname), character.location)?;
        }

        for rule in &self.rules.unlockable {
            let context = format!("unlock rule for {}", rule.target);
            require_lower_case(&rule.target)?;
            self.require_room(&context, rule.room)?;
            if self.item(&rule.requires).is_none() {
                return Err(GameError::UnknownItem {
                    context,
                    nickname: rule.requires.clone(),
                });
            }
            self.require_flag(&unlocked_flag(&rule.target))?;
        }
        for rule in &self.rules.enterable {
            require_lower_case(&rule.target)?;
            self.require_room(&format!("enter rule for {}", rule.target), rule.room)?;
            self.require_flag(&unlocked_flag(&rule.target))?;
            self.require_flag(&entered_flag(&rule.target))?;
        }
        for rule in &self.rules.climbable {
            require_lower_case(&rule.target)?;
            self.require_room(&format!("climb rule for {}", rule.target), rule.room)?;
        }
        self.require_flag(&self.rules.win_flag)?;

        Ok(())
    }

    fn require_room(&self, context: &str, id: RoomId) -> Result<(), GameError> {
        if self.rooms.contains_key(&id) {
            Ok(())
        } else {
            Err(GameError::UnknownRoom {
                context: context.to_string(),
                id,
            })
        }
    }

    fn require_flag(&self, name: &str) -> Result<(), GameError> {
        if self.flags.contains(name) {
            Ok(())
        } else {
            Err(GameError::MissingFlag(name.to_string()))
        }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn item(&self, nickname: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.nickname == nickname)
    }

    pub fn item_mut(&mut self, nickname: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.nickname == nickname)
    }

    pub fn character(&self, nickname: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.nickname == nickname)
    }

    /// Items lying in a room
    pub fn items_in(&self, room: RoomId) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.location.is_in(room))
    }

    pub fn characters_in(&self, room: RoomId) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(move |c| c.location == room)
    }

    /// Items in the player's inventory
    pub fn carried(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.location.is_carried())
    }

    pub fn is_carried(&self, nickname: &str) -> bool {
        self.item(nickname).is_some_and(|i| i.location.is_carried())
    }
}

/// Objects are matched lower-cased, so anything else could never be typed
fn require_lower_case(name: &str) -> Result<(), GameError> {
    if name.chars().any(char::is_uppercase) {
        Err(GameError::NotLowerCase(name.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms() -> Vec<Room> {
        vec![
            Room::new(1, "Clearing", "A sunny clearing.").with_exit(Direction::North, 4),
            Room::new(4, "Ruins", "Broken stones.").with_exit(Direction::South, 1),
        ]
    }

    fn portal_flags() -> Flags {
        let mut flags = Flags::new();
        flags.define("portal_unlocked", false);
        flags.define("portal_entered", false);
        flags
    }

    fn key() -> Vec<Item> {
        vec![Item::new("key", "a key", "Rusty.", ItemLocation::Room(1))]
    }

    fn portal_rules() -> PuzzleRules {
        let mut rules = PuzzleRules::sample(1);
        rules.climbable.clear();
        rules
    }

    #[test]
    fn valid_world_loads() {
        let world = World::new(
            1,
            rooms(),
            vec![Item::new("key", "a key", "Rusty.", ItemLocation::Room(1))],
            vec![Character::new("bob", "Bob", "A man.", "Hi.", 4)],
            portal_flags(),
            portal_rules(),
        )
        .unwrap();

        assert_eq!(world.items_in(1).count(), 1);
        assert_eq!(world.characters_in(4).count(), 1);
        assert_eq!(world.carried().count(), 0);
    }

    #[test]
    fn dangling_exit_is_rejected() {
        let mut rooms = rooms();
        rooms[0].neighbors.insert(Direction::East, 9);
        let err = World::new(1, rooms, vec![], vec![], portal_flags(), portal_rules()).unwrap_err();
        assert!(matches!(err, GameError::UnknownRoom { id: 9, .. }));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut dup_rooms = rooms();
        dup_rooms.push(Room::new(1, "Again", "Again."));
        assert_eq!(
            World::new(1, dup_rooms, vec![], vec![], portal_flags(), portal_rules()).unwrap_err(),
            GameError::DuplicateRoom(1)
        );

        let items = vec![
            Item::new("key", "a key", "Rusty.", ItemLocation::Room(1)),
            Item::new("key", "another key", "Shiny.", ItemLocation::Carried),
        ];
        assert_eq!(
            World::new(1, rooms(), items, vec![], portal_flags(), portal_rules()).unwrap_err(),
            GameError::DuplicateItem("key".to_string())
        );

        let characters = vec![
            Character::new("bob", "Bob", "A man.", "Hi.", 1),
            Character::new("bob", "Bob", "A man.", "Hi.", 4),
        ];
        assert_eq!(
            World::new(1, rooms(), vec![], characters, portal_flags(), portal_rules()).unwrap_err(),
            GameError::DuplicateCharacter("bob".to_string())
        );
    }

    #[test]
    fn rule_flags_must_be_defined() {
        let mut flags = Flags::new();
        flags.define("portal_unlocked", false);
        let err = World::new(1, rooms(), key(), vec![], flags, portal_rules()).unwrap_err();
        assert_eq!(err, GameError::MissingFlag("portal_entered".to_string()));
    }

    #[test]
    fn rule_rooms_and_start_room_must_exist() {
        let mut rules = portal_rules();
        rules.enterable[0].room = 7;
        let err = World::new(1, rooms(), key(), vec![], portal_flags(), rules).unwrap_err();
        assert!(matches!(err, GameError::UnknownRoom { id: 7, .. }));

        let err = World::new(2, rooms(), vec![], vec![], portal_flags(), portal_rules()).unwrap_err();
        assert!(matches!(err, GameError::UnknownRoom { id: 2, .. }));
    }

    #[test]
    fn room_zero_is_reserved() {
        let rooms = vec![Room::new(0, "Void", "Nothing.")];
        let err = World::new(0, rooms, vec![], vec![], portal_flags(), PuzzleRules::empty()).unwrap_err();
        assert_eq!(err, GameError::ReservedRoomId);
    }

    #[test]
    fn unlock_rule_must_name_a_real_item() {
        let mut rules = portal_rules();
        rules.unlockable[0].requires = "kye".to_string();
        let items = vec![Item::new("key", "a key", "Rusty.", ItemLocation::Carried)];

        let err = World::new(1, rooms(), items, vec![], portal_flags(), rules).unwrap_err();
        assert_eq!(
            err,
            GameError::UnknownItem {
                context: "unlock rule for portal".to_string(),
                nickname: "kye".to_string(),
            }
        );
    }

    #[test]
    fn nicknames_and_targets_must_be_lower_case() {
        let items = vec![Item::new("Key", "a key", "Rusty.", ItemLocation::Room(1))];
        let err = World::new(1, rooms(), items, vec![], portal_flags(), PuzzleRules::empty()).unwrap_err();
        assert_eq!(err, GameError::NotLowerCase("Key".to_string()));

        let characters = vec![Character::new("Bob", "Bob", "A man.", "Hi.", 1)];
        let err = World::new(1, rooms(), vec![], characters, portal_flags(), PuzzleRules::empty()).unwrap_err();
        assert_eq!(err, GameError::NotLowerCase("Bob".to_string()));

        let mut rules = portal_rules();
        rules.enterable[0].target = "Portal".to_string();
        rules.unlockable.clear();
        let err = World::new(1, rooms(), vec![], vec![], portal_flags(), rules).unwrap_err();
        assert_eq!(err, GameError::NotLowerCase("Portal".to_string()));
    }

    #[test]
    fn items_and_characters_must_stand_in_known_rooms() {
        let items = vec![Item::new("key", "a key", "Rusty.", ItemLocation::Room(5))];
        let err = World::new(1, rooms(), items, vec![], portal_flags(), PuzzleRules::empty()).unwrap_err();
        assert!(matches!(err, GameError::UnknownRoom { id: 5, .. }));

        let characters = vec![Character::new("bob", "Bob", "A man.", "Hi.", 6)];
        let err = World::new(1, rooms(), vec![], characters, portal_flags(), PuzzleRules::empty()).unwrap_err();
        assert!(matches!(err, GameError::UnknownRoom { id: 6, .. }));
    }
}
