//! Ship definitions and fleet hit accounting.

use core::fmt;

use crate::config::{FLEET, FLEET_SIZE};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Increasing column.
    Horizontal,
    /// Increasing row.
    Vertical,
}

/// The four ship types of a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
}

impl ShipKind {
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }

    /// Number of segments.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 2,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            ShipKind::Carrier => 'C',
            ShipKind::Battleship => 'B',
            ShipKind::Destroyer => 'D',
            ShipKind::Submarine => 'S',
        }
    }

    /// Slot of this kind within a [`Fleet`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Damage state of one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    kind: ShipKind,
    hits: usize,
    sunk: bool,
}

impl Ship {
    pub const fn new(kind: ShipKind) -> Self {
        Ship {
            kind,
            hits: 0,
            sunk: false,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Count one hit. Returns `true` only on the hit that sinks the ship.
    pub fn register_hit(&mut self) -> bool {
        self.hits += 1;
        if !self.sunk && self.hits >= self.kind.size() {
            self.sunk = true;
            return true;
        }
        false
    }
}

/// The four ships owned by one side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    ships: [Ship; FLEET_SIZE],
}

impl Fleet {
    pub fn new() -> Self {
        Fleet {
            ships: FLEET.map(Ship::new),
        }
    }

    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.index()]
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Record a hit on `kind`; `true` when this hit sank it.
    pub fn register_hit(&mut self, kind: ShipKind) -> bool {
        self.ships[kind.index()].register_hit()
    }

    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
