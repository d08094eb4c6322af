//! Result and error types shared by the board, combat engine and game driver.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    arsenal::{Unlocks, Weapon},
    bitboard::BitBoardError,
    coord::{Coordinate, Footprint, Line},
    ship::ShipKind,
};

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    Miss,
    Hit,
    HitAndSunk(ShipKind),
    /// The cell was already resolved; nothing changed.
    AlreadyTargeted,
}

/// Where an area or line strike landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum StrikeArea {
    Area(Footprint),
    Line(Line),
}

/// Aggregate of an artillery or torpedo strike.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct StrikeReport {
    pub area: StrikeArea,
    pub shots: Vec<(Coordinate, ShotOutcome)>,
    pub hits: usize,
    pub misses: usize,
    pub sunk: Vec<ShipKind>,
    pub unlocks: Unlocks,
}

impl StrikeReport {
    pub(crate) fn new(area: StrikeArea) -> Self {
        StrikeReport {
            area,
            shots: Vec::new(),
            hits: 0,
            misses: 0,
            sunk: Vec::new(),
            unlocks: Unlocks::default(),
        }
    }

    /// Fold one cell outcome into the totals. Repeat shots are not counted.
    pub(crate) fn record(&mut self, coord: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Miss => self.misses += 1,
            ShotOutcome::Hit => self.hits += 1,
            ShotOutcome::HitAndSunk(kind) => {
                self.hits += 1;
                self.sunk.push(kind);
            }
            ShotOutcome::AlreadyTargeted => {}
        }
        self.shots.push((coord, outcome));
    }
}

/// Result of a radar sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum RadarReading {
    Detected,
    NotDetected,
    /// An opponent smoke screen covered the sweep; it is now spent.
    Obscured,
}

/// What one turn's action produced, as handed back to the host for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ActionReport {
    Shot {
        target: Coordinate,
        outcome: ShotOutcome,
        unlocks: Unlocks,
    },
    Strike(StrikeReport),
    Radar {
        area: Footprint,
        reading: RadarReading,
    },
    Deployed(Footprint),
    /// The action was refused; the turn is forfeited and nothing changed.
    Rejected(ActionError),
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Ship would leave the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps a non-water cell.
    ShipOverlaps,
    /// This ship kind is already on the grid.
    ShipAlreadyPlaced,
    /// Random placement gave up.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Malformed coordinate, line or command tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ParseError {
    InvalidLength,
    InvalidColumn,
    InvalidRow,
    InvalidLine,
    UnknownAction,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidLength => write!(f, "Coordinate must look like A5 or J10"),
            ParseError::InvalidColumn => write!(f, "Column must be a letter A-J"),
            ParseError::InvalidRow => write!(f, "Row must be a number 1-10"),
            ParseError::InvalidLine => write!(f, "Torpedo target must be a column A-J or a row 1-10"),
            ParseError::UnknownAction => write!(f, "Unknown command"),
        }
    }
}

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ActionError {
    Parse(ParseError),
    RadarExhausted,
    NoSmokeCharge,
    WeaponLocked(Weapon),
    /// The match already has a winner.
    GameOver,
}

impl From<ParseError> for ActionError {
    fn from(err: ParseError) -> Self {
        ActionError::Parse(err)
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Parse(e) => write!(f, "{}", e),
            ActionError::RadarExhausted => write!(f, "Radar sweep limit reached"),
            ActionError::NoSmokeCharge => {
                write!(f, "No smoke screens available; sink more ships first")
            }
            ActionError::WeaponLocked(w) => write!(f, "{} is not available", w),
            ActionError::GameOver => write!(f, "The game is already over"),
        }
    }
}
