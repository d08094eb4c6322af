use crate::ship::ShipKind;

pub const GRID_SIZE: usize = 10;
pub const FLEET_SIZE: usize = 4;
pub const FLEET: [ShipKind; FLEET_SIZE] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Submarine,
];

/// Radar sweeps each side may perform per game.
pub const MAX_RADAR_SWEEPS: u8 = 3;

/// Side length of the artillery, radar and smoke footprints.
pub const AREA_SPAN: usize = 2;

/// Weight multiplier for candidate placements that cover a known hit.
pub const HIT_BIAS: u32 = 10;

/// Bot skill tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Tunables driving the bot's turn decision.
///
/// Special weapons are considered in the order artillery, torpedo, radar,
/// smoke; each one is used with its chance when it is currently usable. If
/// none is taken the bot fires a standard shot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BotConfig {
    pub artillery_chance: f64,
    pub torpedo_chance: f64,
    pub radar_chance: f64,
    pub smoke_chance: f64,
    /// Use checkerboard density search; otherwise fire at a random unresolved cell.
    pub probability_search: bool,
    /// Queue neighbours of fresh hits.
    pub hunt: bool,
}

impl BotConfig {
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => BotConfig {
                artillery_chance: 0.5,
                torpedo_chance: 0.5,
                radar_chance: 0.1,
                smoke_chance: 0.2,
                probability_search: false,
                hunt: false,
            },
            Difficulty::Medium => BotConfig {
                artillery_chance: 1.0,
                torpedo_chance: 1.0,
                radar_chance: 0.3,
                smoke_chance: 0.5,
                probability_search: false,
                hunt: true,
            },
            Difficulty::Hard => BotConfig {
                artillery_chance: 1.0,
                torpedo_chance: 1.0,
                radar_chance: 0.5,
                smoke_chance: 1.0,
                probability_search: true,
                hunt: true,
            },
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl From<Difficulty> for BotConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::for_difficulty(difficulty)
    }
}
