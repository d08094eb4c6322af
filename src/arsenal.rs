//! Unlock state machine for the artillery and torpedo special weapons.
//!
//! Each weapon cycles `Locked -> PendingNextTurn -> Available -> Locked`.
//! A sinking arms the weapon for the sinker's next turn; using it locks it
//! again until a fresh sinking. The torpedo additionally needs the opponent
//! to be down to a single ship when the sinking happens.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Weapon {
    Artillery,
    Torpedo,
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weapon::Artillery => f.write_str("Artillery"),
            Weapon::Torpedo => f.write_str("Torpedo"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum WeaponState {
    #[default]
    Locked,
    PendingNextTurn,
    Available,
}

/// Weapons that became pending as a result of one sinking action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Unlocks {
    pub artillery: bool,
    pub torpedo: bool,
}

/// Per-side special weapon availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Arsenal {
    artillery: WeaponState,
    torpedo: WeaponState,
}

impl Arsenal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, weapon: Weapon) -> WeaponState {
        match weapon {
            Weapon::Artillery => self.artillery,
            Weapon::Torpedo => self.torpedo,
        }
    }

    pub fn is_available(&self, weapon: Weapon) -> bool {
        self.state(weapon) == WeaponState::Available
    }

    fn slot(&mut self, weapon: Weapon) -> &mut WeaponState {
        match weapon {
            Weapon::Artillery => &mut self.artillery,
            Weapon::Torpedo => &mut self.torpedo,
        }
    }

    /// Evaluate unlocks after this side sank at least one ship.
    pub fn on_ship_sunk(&mut self, opponent_ships_remaining: usize) -> Unlocks {
        let mut unlocks = Unlocks::default();
        if self.artillery == WeaponState::Locked {
            self.artillery = WeaponState::PendingNextTurn;
            unlocks.artillery = true;
            log::info!("Artillery will be available next turn");
        }
        if opponent_ships_remaining == 1 && self.torpedo == WeaponState::Locked {
            self.torpedo = WeaponState::PendingNextTurn;
            unlocks.torpedo = true;
            log::info!("Torpedo will be available next turn");
        }
        unlocks
    }

    /// Promote pending weapons at the start of this side's turn.
    pub fn begin_turn(&mut self) {
        for weapon in [Weapon::Artillery, Weapon::Torpedo] {
            let slot = self.slot(weapon);
            if *slot == WeaponState::PendingNextTurn {
                *slot = WeaponState::Available;
            }
        }
    }

    /// Lock a weapon after it has been fired.
    pub fn spend(&mut self, weapon: Weapon) {
        *self.slot(weapon) = WeaponState::Locked;
    }
}
