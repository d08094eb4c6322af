//! Turn actions and their construction from named requests.

use core::fmt;
use core::str::FromStr;

use crate::{
    common::ParseError,
    coord::{parse_coordinate, parse_line, Coordinate, Line},
};

/// Named action requests a host may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ActionKind {
    Fire,
    Radar,
    Smoke,
    Artillery,
    Torpedo,
}

impl FromStr for ActionKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let kind = if s.eq_ignore_ascii_case("fire") {
            ActionKind::Fire
        } else if s.eq_ignore_ascii_case("radar") {
            ActionKind::Radar
        } else if s.eq_ignore_ascii_case("smoke") {
            ActionKind::Smoke
        } else if s.eq_ignore_ascii_case("artillery") {
            ActionKind::Artillery
        } else if s.eq_ignore_ascii_case("torpedo") {
            ActionKind::Torpedo
        } else {
            return Err(ParseError::UnknownAction);
        };
        Ok(kind)
    }
}

/// A fully specified action for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Action {
    Fire(Coordinate),
    Radar(Coordinate),
    Smoke(Coordinate),
    Artillery(Coordinate),
    Torpedo(Line),
}

impl Action {
    /// Build an action from a named request and its argument token.
    pub fn from_request(kind: ActionKind, argument: &str) -> Result<Action, ParseError> {
        Ok(match kind {
            ActionKind::Fire => Action::Fire(parse_coordinate(argument)?),
            ActionKind::Radar => Action::Radar(parse_coordinate(argument)?),
            ActionKind::Smoke => Action::Smoke(parse_coordinate(argument)?),
            ActionKind::Artillery => Action::Artillery(parse_coordinate(argument)?),
            ActionKind::Torpedo => Action::Torpedo(parse_line(argument)?),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fire(_) => ActionKind::Fire,
            Action::Radar(_) => ActionKind::Radar,
            Action::Smoke(_) => ActionKind::Smoke,
            Action::Artillery(_) => ActionKind::Artillery,
            Action::Torpedo(_) => ActionKind::Torpedo,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fire(c) => write!(f, "fire at {}", c),
            Action::Radar(c) => write!(f, "radar at {}", c),
            Action::Smoke(c) => write!(f, "smoke at {}", c),
            Action::Artillery(c) => write!(f, "artillery at {}", c),
            Action::Torpedo(l) => write!(f, "torpedo on {}", l),
        }
    }
}
