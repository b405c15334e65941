//! Data structures for the game world
//!
//! Rooms, items, characters, puzzle flags and the static rule tables that
//! gate progress. Everything here is created once by the loader; only item
//! locations and flag values change during play.

pub mod character;
pub mod flags;
pub mod item;
pub mod loader;
pub mod room;
pub mod rules;
pub mod world;

pub use character::*;
pub use flags::*;
pub use item::*;
pub use room::*;
pub use rules::*;
pub use world::*;

/// Unique key of a room. Zero is reserved for [`ItemLocation::Carried`].
pub type RoomId = u32;
