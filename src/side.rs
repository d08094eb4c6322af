//! Everything one player owns for the duration of a match.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    action::ActionKind,
    arsenal::{Arsenal, Weapon},
    board::{HomeGrid, TrackingGrid},
    config::{FLEET_SIZE, MAX_RADAR_SWEEPS},
    coord::Footprint,
    ship::Fleet,
};

/// A smoke screen deployed over the owner's home grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SmokeScreen {
    pub area: Footprint,
    pub active: bool,
}

/// One player's grids, fleet, counters and special weapons.
#[derive(Debug, Clone)]
pub struct Side {
    name: String,
    pub(crate) home: HomeGrid,
    pub(crate) fleet: Fleet,
    pub(crate) tracking: TrackingGrid,
    pub(crate) radar_sweeps_used: u8,
    pub(crate) smoke_screens_used: u8,
    pub(crate) ships_sunk: u8,
    pub(crate) arsenal: Arsenal,
    pub(crate) smoke_screens: Vec<SmokeScreen>,
    reveal_misses_to_self: bool,
}

impl Side {
    /// A side with an empty home grid. Misses are recorded on its tracking
    /// grid only when `reveal_misses_to_self` is set.
    ///
    /// Sides driven by [`AiPlayer`](crate::AiPlayer) must pass `true`: the bot
    /// reads unknown cells off its tracking grid and would otherwise fire at
    /// the same misses forever.
    pub fn new(name: impl Into<String>, reveal_misses_to_self: bool) -> Self {
        Side {
            name: name.into(),
            home: HomeGrid::new(),
            fleet: Fleet::new(),
            tracking: TrackingGrid::new(),
            radar_sweeps_used: 0,
            smoke_screens_used: 0,
            ships_sunk: 0,
            arsenal: Arsenal::new(),
            smoke_screens: Vec::with_capacity(FLEET_SIZE),
            reveal_misses_to_self,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home(&self) -> &HomeGrid {
        &self.home
    }

    /// Setup-phase access for ship placement.
    pub fn home_mut(&mut self) -> &mut HomeGrid {
        &mut self.home
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn tracking(&self) -> &TrackingGrid {
        &self.tracking
    }

    pub fn arsenal(&self) -> &Arsenal {
        &self.arsenal
    }

    pub fn smoke_screens(&self) -> &[SmokeScreen] {
        &self.smoke_screens
    }

    pub fn reveal_misses_to_self(&self) -> bool {
        self.reveal_misses_to_self
    }

    pub fn radar_sweeps_used(&self) -> u8 {
        self.radar_sweeps_used
    }

    pub fn radar_sweeps_left(&self) -> u8 {
        MAX_RADAR_SWEEPS.saturating_sub(self.radar_sweeps_used)
    }

    pub fn smoke_screens_used(&self) -> u8 {
        self.smoke_screens_used
    }

    /// Opponent ships this side has sunk.
    pub fn ships_sunk(&self) -> u8 {
        self.ships_sunk
    }

    /// Own ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.fleet.afloat()
    }

    /// One charge per ship sunk, minus charges already spent.
    pub fn smoke_charges(&self) -> u8 {
        self.ships_sunk.saturating_sub(self.smoke_screens_used)
    }

    /// Start of this side's turn: weapons armed last turn become usable.
    pub fn begin_turn(&mut self) {
        self.arsenal.begin_turn();
    }

    pub fn can_use(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Fire => true,
            ActionKind::Radar => self.radar_sweeps_left() > 0,
            ActionKind::Smoke => self.smoke_charges() > 0,
            ActionKind::Artillery => self.arsenal.is_available(Weapon::Artillery),
            ActionKind::Torpedo => self.arsenal.is_available(Weapon::Torpedo),
        }
    }

    /// Actions currently open to this side, in menu order.
    pub fn available_actions(&self) -> Vec<ActionKind> {
        [
            ActionKind::Fire,
            ActionKind::Radar,
            ActionKind::Smoke,
            ActionKind::Artillery,
            ActionKind::Torpedo,
        ]
        .into_iter()
        .filter(|&k| self.can_use(k))
        .collect()
    }
}
