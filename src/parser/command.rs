//! Verb dispatch table

use super::{extract_object, CanonicalCommand};
use crate::data::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every verb the engine has a handler for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    Look,
    Go(Direction),
    Get,
    Drop,
    Examine,
    Talk,
    Unlock,
    Enter,
    Climb,
    Hit,
    Hello,
    Inv,
    Help,
    Quit,
}

impl Verb {
    /// Canonical spelling used as the dispatch key
    pub fn word(&self) -> &'static str {
        match self {
            Verb::Look => "look",
            Verb::Go(direction) => direction.code(),
            Verb::Get => "get",
            Verb::Drop => "drop",
            Verb::Examine => "examine",
            Verb::Talk => "talk",
            Verb::Unlock => "unlock",
            Verb::Enter => "enter",
            Verb::Climb => "climb",
            Verb::Hit => "hit",
            Verb::Hello => "hello",
            Verb::Inv => "inv",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    pub fn all() -> Vec<Verb> {
        let mut verbs = vec![
            Verb::Look,
            Verb::Get,
            Verb::Drop,
            Verb::Examine,
            Verb::Talk,
            Verb::Unlock,
            Verb::Enter,
            Verb::Climb,
            Verb::Hit,
            Verb::Hello,
            Verb::Inv,
            Verb::Help,
            Verb::Quit,
        ];
        verbs.extend(Direction::ALL.into_iter().map(Verb::Go));
        verbs
    }
}

/// A resolved command ready for its handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    /// Object as the player typed it; empty when none was given
    pub object: String,
}

/// Outcome of looking a line up in the dispatch table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Empty,
    Unknown(String),
    Run(Command),
}

/// Canonical verb to handler table, built once at startup
#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: HashMap<&'static str, Verb>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            table: Verb::all().into_iter().map(|v| (v.word(), v)).collect(),
        }
    }

    pub fn lookup(&self, word: &str) -> Option<Verb> {
        self.table.get(word).copied()
    }

    /// Pick the handler for `canonical`, taking the object from `raw`
    pub fn resolve(&self, canonical: &CanonicalCommand, raw: &str) -> Dispatch {
        if canonical.is_empty() {
            return Dispatch::Empty;
        }
        let (word, rest) = canonical.split();
        match self.lookup(word) {
            Some(verb) => {
                let object = if rest.is_empty() { "" } else { extract_object(raw) };
                Dispatch::Run(Command {
                    verb,
                    object: object.to_string(),
                })
            }
            None => Dispatch::Unknown(word.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Normalizer;

    fn dispatch(raw: &str) -> Dispatch {
        let normalizer = Normalizer::new(["the", "at", "to"]);
        Dispatcher::new().resolve(&normalizer.normalize(raw), raw)
    }

    #[test]
    fn every_verb_has_a_binding() {
        let dispatcher = Dispatcher::new();
        for verb in Verb::all() {
            assert_eq!(dispatcher.lookup(verb.word()), Some(verb));
        }
        assert_eq!(dispatcher.lookup("dance"), None);
    }

    #[test]
    fn directions_and_abbreviations() {
        for raw in ["n", "north"] {
            match dispatch(raw) {
                Dispatch::Run(cmd) => assert_eq!(cmd.verb, Verb::Go(Direction::North)),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn object_comes_from_raw_input() {
        match dispatch("get the rusty key") {
            Dispatch::Run(cmd) => {
                assert_eq!(cmd.verb, Verb::Get);
                assert_eq!(cmd.object, "key");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn no_object_when_only_stop_words_follow() {
        match dispatch("look at the") {
            Dispatch::Run(cmd) => {
                assert_eq!(cmd.verb, Verb::Look);
                assert_eq!(cmd.object, "");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_and_unknown() {
        assert_eq!(dispatch(""), Dispatch::Empty);
        assert_eq!(dispatch("the the"), Dispatch::Empty);
        assert_eq!(dispatch("dance wildly"), Dispatch::Unknown("dance".to_string()));
    }
}
