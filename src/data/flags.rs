//! Named boolean puzzle state

use crate::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flag name recording that `target` has been unlocked
pub fn unlocked_flag(target: &str) -> String {
    format!("{target}_unlocked")
}

/// Flag name recording that `target` has been entered
pub fn entered_flag(target: &str) -> String {
    format!("{target}_entered")
}

/// Puzzle progress flags.
///
/// Every flag must be defined at load time. Reading or writing an undefined
/// flag is a data error, not a gameplay outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    values: HashMap<String, bool>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a flag with its starting value
    pub fn define(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_string(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<bool, GameError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| GameError::MissingFlag(name.to_string()))
    }

    pub fn set(&mut self, name: &str, value: bool) -> Result<(), GameError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GameError::MissingFlag(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, bool)> for Flags {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_flag_is_an_error() {
        let mut flags = Flags::new();
        flags.define("portal_unlocked", false);

        assert_eq!(flags.get("portal_unlocked"), Ok(false));
        flags.set("portal_unlocked", true).unwrap();
        assert_eq!(flags.get("portal_unlocked"), Ok(true));

        assert_eq!(
            flags.get("door_unlocked"),
            Err(GameError::MissingFlag("door_unlocked".to_string()))
        );
        assert!(flags.set("door_unlocked", true).is_err());
        assert!(!flags.contains("door_unlocked"));
    }

    #[test]
    fn flag_names() {
        assert_eq!(unlocked_flag("portal"), "portal_unlocked");
        assert_eq!(entered_flag("portal"), "portal_entered");
    }
}
