//! Game directory loader
//!
//! Reads the JSON files of a game directory into a validated [`World`].
//! Any failure here is fatal: the engine never starts on broken data.

use super::*;
use crate::{GameError, Result};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const ROOM_FILE: &str = "rooms.json";
pub const ITEM_FILE: &str = "items.json";
pub const CHARACTER_FILE: &str = "characters.json";
pub const FLAG_FILE: &str = "flags.json";
pub const PUZZLE_FILE: &str = "puzzles.json";
pub const WELCOME_FILE: &str = "welcome.msg";

#[derive(Debug, Deserialize)]
struct RoomFile {
    rooms: Vec<RoomRecord>,
}

#[derive(Debug, Deserialize)]
struct RoomRecord {
    id: RoomId,
    name: String,
    description: String,
    #[serde(default)]
    neighbors: ExitList,
}

/// Exits in file order. Repeated keys are kept so they can be rejected
/// instead of one silently replacing the other.
#[derive(Debug, Default)]
struct ExitList(Vec<(String, RoomId)>);

impl<'de> Deserialize<'de> for ExitList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};

        struct ExitVisitor;

        impl<'de> Visitor<'de> for ExitVisitor {
            type Value = ExitList;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of direction codes to room ids")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<ExitList, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut exits = Vec::new();
                while let Some(entry) = map.next_entry::<String, RoomId>()? {
                    exits.push(entry);
                }
                Ok(ExitList(exits))
            }
        }

        deserializer.deserialize_map(ExitVisitor)
    }
}

impl TryFrom<RoomRecord> for Room {
    type Error = GameError;

    fn try_from(record: RoomRecord) -> std::result::Result<Self, Self::Error> {
        let mut neighbors = HashMap::with_capacity(record.neighbors.0.len());
        for (code, to) in record.neighbors.0 {
            let direction =
                Direction::from_code(&code).ok_or(GameError::InvalidDirection(code.clone()))?;
            if neighbors.insert(direction, to).is_some() {
                return Err(GameError::DuplicateExit {
                    room: record.id,
                    direction: code,
                });
            }
        }
        Ok(Room {
            id: record.id,
            name: record.name,
            description: record.description,
            neighbors,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ItemFile {
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct CharacterFile {
    characters: Vec<Character>,
}

#[derive(Debug, Deserialize)]
struct FlagFile {
    conditions: Vec<FlagRecord>,
}

#[derive(Debug, Deserialize)]
struct FlagRecord {
    name: String,
    setting: FlagSetting,
}

/// Flag values appear as `"True"`/`"False"` strings in older game data
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlagSetting {
    Bool(bool),
    Text(String),
}

impl FlagSetting {
    fn to_bool(&self, name: &str) -> Result<bool> {
        match self {
            FlagSetting::Bool(b) => Ok(*b),
            FlagSetting::Text(s) => match s.as_str() {
                "True" | "true" => Ok(true),
                "False" | "false" => Ok(false),
                other => bail!("flag {name} has setting {other:?}, expected True or False"),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct PuzzleFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default = "default_start_room")]
    start_room: RoomId,
    #[serde(flatten)]
    rules: PuzzleRules,
}

fn default_start_room() -> RoomId {
    1
}

impl Default for PuzzleFile {
    fn default() -> Self {
        let start_room = default_start_room();
        Self {
            title: None,
            start_room,
            rules: PuzzleRules::sample(start_room),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!("Reading {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load and validate the game stored in `dir`
pub fn load_world(dir: &Path) -> Result<World> {
    let rooms: RoomFile = read_json(&dir.join(ROOM_FILE))?;
    let rooms = rooms
        .rooms
        .into_iter()
        .map(Room::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("invalid room in {}", dir.join(ROOM_FILE).display()))?;

    let items: ItemFile = read_json(&dir.join(ITEM_FILE))?;
    let characters: CharacterFile = read_json(&dir.join(CHARACTER_FILE))?;

    let flag_file: FlagFile = read_json(&dir.join(FLAG_FILE))?;
    let mut flags = Flags::new();
    for record in &flag_file.conditions {
        if flags.contains(&record.name) {
            return Err(GameError::DuplicateFlag(record.name.clone()))
                .with_context(|| format!("invalid flag in {}", dir.join(FLAG_FILE).display()));
        }
        flags.define(&record.name, record.setting.to_bool(&record.name)?);
    }

    let puzzle_path = dir.join(PUZZLE_FILE);
    let puzzles: PuzzleFile = if puzzle_path.exists() {
        read_json(&puzzle_path)?
    } else {
        tracing::debug!("No {} in {}, using sample puzzles", PUZZLE_FILE, dir.display());
        PuzzleFile::default()
    };

    let welcome = load_welcome(&dir.join(WELCOME_FILE))?;

    let world = World::new(
        puzzles.start_room,
        rooms,
        items.items,
        characters.characters,
        flags,
        puzzles.rules,
    )
    .with_context(|| format!("game data in {} is inconsistent", dir.display()))?
    .with_welcome(welcome);

    let world = match puzzles.title {
        Some(title) => world.with_title(&title),
        None => world,
    };

    tracing::info!(
        "Loaded game from {}: {} rooms, {} items, {} characters, {} flags",
        dir.display(),
        world.rooms.len(),
        world.items.len(),
        world.characters.len(),
        world.flags.len()
    );

    Ok(world)
}

/// Non-blank, trimmed lines of the optional welcome file
fn load_welcome(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// One stop word per line, trailing whitespace stripped
pub fn load_stop_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read stop words from {}", path.display()))?;
    let words: Vec<String> = text
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    tracing::info!("Loaded {} stop words from {}", words.len(), path.display());
    Ok(words)
}
