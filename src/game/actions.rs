//! Verb handlers
//!
//! Every "not here", "already done" or "can't" case is a message to the
//! player. The only errors a handler returns are data integrity failures.

use super::*;
use crate::parser::{Command, Verb};

/// Upper-case the first letter, lower-case the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn say(out: &mut dyn Presenter, text: &str) {
    out.present(text, DisplayKind::Plain);
}

impl Game {
    /// Run the handler bound to `command.verb`
    pub(crate) fn execute(&mut self, command: &Command, out: &mut dyn Presenter) -> Result<()> {
        let object = command.object.as_str();
        match command.verb {
            Verb::Look => self.look(out)?,
            Verb::Go(direction) => self.go(direction, out)?,
            Verb::Get => self.get(object, out),
            Verb::Drop => self.drop_item(object, out),
            Verb::Examine => self.examine(object, out),
            Verb::Talk => self.talk(object, out),
            Verb::Unlock => self.unlock(object, out)?,
            Verb::Enter => self.enter(object, out)?,
            Verb::Climb => self.climb(object, out)?,
            Verb::Hit => say(out, "No need for beligerence."),
            Verb::Hello => say(out, "Uhhh... hello."),
            Verb::Inv => self.show_inventory(out),
            Verb::Help => say(out, HELP_MSG),
            Verb::Quit => self.quit(out),
        }

        if matches!(command.verb, Verb::Get | Verb::Drop | Verb::Unlock | Verb::Enter) {
            self.check_flags(out)?;
        }
        Ok(())
    }

    /// Describe the current room and everything in it
    pub fn look(&self, out: &mut dyn Presenter) -> Result<()> {
        let room = self.current_room()?;
        out.present(&room.name, DisplayKind::Location);
        out.present(&room.description, DisplayKind::Description);
        for item in self.world.items_in(self.location) {
            out.present(&item.name, DisplayKind::Item);
        }
        for character in self.world.characters_in(self.location) {
            out.present(&character.name, DisplayKind::Character);
        }
        Ok(())
    }

    fn go(&mut self, direction: Direction, out: &mut dyn Presenter) -> Result<()> {
        match self.current_room()?.neighbor(direction) {
            None => say(out, "You can't go that way."),
            Some(to) => {
                tracing::info!("Moving {} from room {} to room {}", direction, self.location, to);
                self.location = to;
                self.stats.rooms_visited += 1;
                self.look(out)?;
            }
        }
        Ok(())
    }

    fn get(&mut self, object: &str, out: &mut dyn Presenter) {
        if object.is_empty() {
            return say(out, MORE_SPECIFIC_MSG);
        }
        let key = object.to_lowercase();
        let here = self.location;

        if let Some(item) = self.world.item_mut(&key) {
            let location = item.location;
            match location {
                ItemLocation::Carried => say(out, &format!("You already have the {object}.")),
                ItemLocation::Room(room) if room == here => {
                    item.location = ItemLocation::Carried;
                    self.stats.items_picked_up += 1;
                    tracing::info!("Picked up {}", key);
                    say(out, &format!("You got the {object}."));
                }
                _ => say(out, &format!("I don't see {object} here.")),
            }
        } else if self.world.character(&key).is_some() {
            say(out, "You can't pick that up!");
        } else {
            say(out, &format!("I don't see {object} here."));
        }
    }

    fn drop_item(&mut self, object: &str, out: &mut dyn Presenter) {
        if object.is_empty() {
            return say(out, MORE_SPECIFIC_MSG);
        }
        let key = object.to_lowercase();
        let here = self.location;

        match self.world.item_mut(&key) {
            Some(item) if item.location.is_carried() => {
                item.location = ItemLocation::Room(here);
                tracing::info!("Dropped {} in room {}", key, here);
                say(out, &format!("You dropped the {object}."));
            }
            _ => say(out, &format!("You don't have {object}.")),
        }
    }

    fn examine(&self, object: &str, out: &mut dyn Presenter) {
        if object.is_empty() {
            return say(out, MORE_SPECIFIC_MSG);
        }
        let key = object.to_lowercase();
        let here = self.location;

        let items = self
            .world
            .items
            .iter()
            .filter(|i| i.nickname == key && (i.location.is_in(here) || i.location.is_carried()))
            .map(|i| i.description.as_str());
        let characters = self
            .world
            .characters
            .iter()
            .filter(|c| c.nickname == key && c.location == here)
            .map(|c| c.description.as_str());

        let mut found = false;
        for description in items.chain(characters) {
            say(out, description);
            found = true;
        }
        if !found {
            say(out, "You can't examine that here.");
        }
    }

    fn show_inventory(&self, out: &mut dyn Presenter) {
        let carried = self.inventory();
        if carried.is_empty() {
            return say(out, "You aren't carrying anything.");
        }
        say(out, "You have the following items:");
        for name in carried {
            out.present(name, DisplayKind::Inv);
        }
    }

    fn talk(&self, object: &str, out: &mut dyn Presenter) {
        if object.is_empty() {
            return say(out, MORE_SPECIFIC_MSG);
        }
        let key = object.to_lowercase();

        match self.world.character(&key) {
            Some(character) if character.location == self.location => {
                say(out, &format!("{} says: {}", capitalize(object), character.speech));
            }
            _ => say(out, &format!("I don't see {object} here.")),
        }
    }

    /// Answers once per unlock rule, so a table with several rules can
    /// produce several replies. Kept as the game data expects.
    fn unlock(&mut self, object: &str, out: &mut dyn Presenter) -> Result<()> {
        const NOTHING_TO_UNLOCK_WITH: &str = "You don't have anything to unlock it with.";

        if object.is_empty() {
            say(out, MORE_SPECIFIC_MSG);
            return Ok(());
        }
        let key = object.to_lowercase();

        if self.world.rules.unlockable.is_empty() {
            say(out, NOTHING_TO_UNLOCK_WITH);
            return Ok(());
        }

        let rules = self.world.rules.unlockable.clone();
        for rule in rules {
            if rule.room != self.location || rule.target != key {
                say(out, NOTHING_TO_UNLOCK_WITH);
                continue;
            }
            if !self.world.is_carried(&rule.requires) {
                say(out, NOTHING_TO_UNLOCK_WITH);
                continue;
            }

            let flag = unlocked_flag(&rule.target);
            if self.world.flags.get(&flag)? {
                say(out, &format!("The {} is already unlocked.", rule.target));
            } else {
                self.world.flags.set(&flag, true)?;
                tracing::info!("Flag {} set", flag);
                say(out, &format!("You unlocked the {}.", rule.target));
            }
        }
        Ok(())
    }

    fn enter(&mut self, object: &str, out: &mut dyn Presenter) -> Result<()> {
        const CANT_ENTER: &str = "You can't enter that here.";

        if object.is_empty() {
            say(out, MORE_SPECIFIC_MSG);
            return Ok(());
        }
        let key = object.to_lowercase();

        if self.world.rules.enterable.is_empty() {
            say(out, CANT_ENTER);
            return Ok(());
        }

        let rules = self.world.rules.enterable.clone();
        for rule in rules {
            if rule.target != key || rule.room != self.location {
                say(out, CANT_ENTER);
                continue;
            }

            let entered = entered_flag(&rule.target);
            if self.world.flags.get(&entered)? {
                say(out, &format!("You have already entered the {}.", rule.target));
            } else if self.world.flags.get(&unlocked_flag(&rule.target))? {
                self.world.flags.set(&entered, true)?;
                tracing::info!("Flag {} set", entered);
                say(out, &format!("You entered the {}.", rule.target));
            } else {
                say(out, &format!("The {} seems to be locked.", rule.target));
            }
        }
        Ok(())
    }

    fn climb(&mut self, object: &str, out: &mut dyn Presenter) -> Result<()> {
        if object.is_empty() {
            say(out, MORE_SPECIFIC_MSG);
            return Ok(());
        }
        let key = object.to_lowercase();

        let direction = self
            .world
            .rules
            .climbable
            .iter()
            .find(|r| r.room == self.location && r.target == key)
            .map(|r| r.direction);

        match direction {
            Some(direction) => self.go(direction, out)?,
            None => say(out, "You can't climb that here."),
        }
        Ok(())
    }
}
