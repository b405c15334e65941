//! Core game logic and state management

pub mod actions;
pub mod display;

pub use display::*;

use crate::data::*;
use crate::parser::{Dispatch, Dispatcher, Normalizer};
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    GameOver(GameOutcome),
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Quit,
}

/// Game statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub turns_taken: u32,
    pub rooms_visited: u32,
    pub items_picked_up: u32,
}

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Rooms, items, characters and flags
    pub world: World,

    /// Room the player is standing in
    pub location: RoomId,

    pub phase: GamePhase,

    pub stats: GameStats,

    normalizer: Normalizer,
    dispatcher: Dispatcher,
}

impl Game {
    /// Create a game with the player in the world's start room
    pub fn new(world: World, normalizer: Normalizer) -> Self {
        let location = world.start_room;
        Self {
            world,
            location,
            phase: GamePhase::Playing,
            stats: GameStats::default(),
            normalizer,
            dispatcher: Dispatcher::new(),
        }
    }

    /// Show the welcome text and the first room
    pub fn start(&mut self, out: &mut dyn Presenter) -> Result<()> {
        for line in &self.world.welcome {
            out.present(line, DisplayKind::Message);
        }
        self.look(out)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            GamePhase::Playing => None,
        }
    }

    pub fn current_room(&self) -> Result<&Room> {
        self.world.room(self.location).ok_or_else(|| {
            GameError::UnknownRoom {
                context: "player location".to_string(),
                id: self.location,
            }
            .into()
        })
    }

    /// Play one line of raw input.
    ///
    /// Errors are data integrity failures and should stop the game. Once
    /// the game is over further input is ignored.
    pub fn handle_line(&mut self, raw: &str, out: &mut dyn Presenter) -> Result<GamePhase> {
        if self.is_over() {
            tracing::warn!("Ignoring input after game over: {:?}", raw);
            return Ok(self.phase);
        }

        self.stats.turns_taken += 1;
        let canonical = self.normalizer.normalize(raw);
        tracing::debug!("Turn {}: {:?} -> {:?}", self.stats.turns_taken, raw, canonical.as_str());

        match self.dispatcher.resolve(&canonical, raw) {
            Dispatch::Empty => out.present(EMPTYLINE_MSG, DisplayKind::Plain),
            Dispatch::Unknown(word) => {
                tracing::debug!("Unknown verb: {}", word);
                out.present(UNKNOWN_MSG, DisplayKind::Plain);
            }
            Dispatch::Run(command) => self.execute(&command, out)?,
        }

        Ok(self.phase)
    }

    /// Read-dispatch loop over a line source. End of input counts as quit.
    pub fn run<R: BufRead>(&mut self, mut input: R, out: &mut dyn Presenter) -> Result<GameOutcome> {
        while !self.is_over() {
            out.prompt();
            let mut bytes = Vec::new();
            if input.read_until(b'\n', &mut bytes)? == 0 {
                tracing::info!("End of input");
                self.quit(out);
                break;
            }
            let line = String::from_utf8_lossy(&bytes);
            self.handle_line(&line, out)?;
        }
        Ok(self.outcome().unwrap_or(GameOutcome::Quit))
    }

    /// Names of carried items, for status displays
    pub fn inventory(&self) -> Vec<&str> {
        self.world.carried().map(|i| i.name.as_str()).collect()
    }

    /// End the game if the win flag is set
    fn check_flags(&mut self, out: &mut dyn Presenter) -> Result<()> {
        if self.world.flags.get(&self.world.rules.win_flag)? {
            out.present(&self.world.rules.win_message, DisplayKind::Plain);
            out.present(QUIT_MSG, DisplayKind::Plain);
            self.phase = GamePhase::GameOver(GameOutcome::Won);
            tracing::info!("Game won after {} turns", self.stats.turns_taken);
        }
        Ok(())
    }

    /// Say goodbye and end the game
    pub fn quit(&mut self, out: &mut dyn Presenter) {
        out.present(QUIT_MSG, DisplayKind::Plain);
        self.phase = GamePhase::GameOver(GameOutcome::Quit);
        tracing::info!("Game quit after {} turns", self.stats.turns_taken);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    /// Four rooms around a locked portal
    pub(crate) fn world() -> World {
        let rooms = vec![
            Room::new(1, "Clearing", "A clearing with a tall tree.")
                .with_exit(Direction::North, 2)
                .with_exit(Direction::Up, 3),
            Room::new(2, "Path", "A narrow path.")
                .with_exit(Direction::South, 1)
                .with_exit(Direction::East, 4),
            Room::new(3, "Treetop", "Wind in the leaves.").with_exit(Direction::Down, 1),
            Room::new(4, "Ruins", "A shimmering portal stands here.").with_exit(Direction::West, 2),
        ];
        let items = vec![
            Item::new("key", "a rusty key", "An old iron key.", ItemLocation::Room(1)),
            Item::new("lamp", "a brass lamp", "It is not lit.", ItemLocation::Room(2)),
            Item::new("feather", "a feather", "Light as air.", ItemLocation::Room(3)),
        ];
        let characters = vec![Character::new(
            "wizard",
            "a wizard",
            "He has a long grey beard.",
            "The portal opens for those who hold the key.",
            2,
        )];
        let mut flags = Flags::new();
        flags.define("portal_unlocked", false);
        flags.define("portal_entered", false);

        World::new(1, rooms, items, characters, flags, PuzzleRules::sample(1))
            .unwrap()
            .with_welcome(vec!["Welcome, traveller.".to_string()])
    }

    pub(crate) fn game() -> Game {
        Game::new(world(), Normalizer::new(["the", "a", "to", "at", "go"]))
    }

    /// Play `line` and return what was shown
    pub(crate) fn play(game: &mut Game, line: &str) -> Transcript {
        let mut out = Transcript::new();
        game.handle_line(line, &mut out).unwrap();
        out
    }

    #[test]
    fn start_shows_welcome_then_room() {
        let mut game = game();
        let mut out = Transcript::new();
        game.start(&mut out).unwrap();

        assert_eq!(out.of_kind(DisplayKind::Message), vec!["Welcome, traveller."]);
        assert_eq!(out.of_kind(DisplayKind::Location), vec!["Clearing"]);
        assert_eq!(out.of_kind(DisplayKind::Item), vec!["a rusty key"]);
    }

    #[test]
    fn empty_and_unknown_input() {
        let mut game = game();
        assert_eq!(play(&mut game, "").texts(), vec![EMPTYLINE_MSG]);
        assert_eq!(play(&mut game, "the a the").texts(), vec![EMPTYLINE_MSG]);
        assert_eq!(play(&mut game, "dance").texts(), vec![UNKNOWN_MSG]);
        assert!(!game.is_over());
        assert_eq!(game.stats.turns_taken, 3);
    }

    #[test]
    fn quit_ends_the_game_and_later_input_is_ignored() {
        let mut game = game();
        assert_eq!(play(&mut game, "q").texts(), vec![QUIT_MSG]);
        assert_eq!(game.outcome(), Some(GameOutcome::Quit));

        let out = play(&mut game, "look");
        assert!(out.is_empty());
    }

    #[test]
    fn run_treats_end_of_input_as_quit() {
        let mut game = game();
        let mut out = Transcript::new();
        let outcome = game.run(Cursor::new("get key\n"), &mut out).unwrap();

        assert_eq!(outcome, GameOutcome::Quit);
        assert_eq!(out.texts(), vec!["You got the key.", QUIT_MSG]);
    }

    #[test]
    fn invalid_utf8_line_is_just_unknown() {
        let mut game = game();
        let mut out = Transcript::new();
        let input: &[u8] = b"\xff\xfe\nget key\n";
        let outcome = game.run(input, &mut out).unwrap();

        assert_eq!(outcome, GameOutcome::Quit);
        assert_eq!(out.texts(), vec![UNKNOWN_MSG, "You got the key.", QUIT_MSG]);
    }

    #[test]
    fn missing_win_flag_is_a_data_error() {
        let mut game = game();
        game.world.rules.win_flag = "dragon_slain".to_string();
        let mut out = Transcript::new();

        let err = game.handle_line("enter portal", &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::MissingFlag("dragon_slain".to_string()))
        );
    }
}
