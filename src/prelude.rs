//! Commonly used types and utilities for ease of import.

pub use crate::{
    check_win, parse_coordinate, parse_line, Action, ActionKind, ActionReport, AiPlayer, Coordinate, Difficulty,
    Game, GameStatus, Line, Player, Seat, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
