use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    action::{Action, ActionKind},
    ai,
    board::{HomeGrid, Mark, TrackingGrid},
    common::{ActionReport, BoardError, RadarReading, ShotOutcome},
    config::{BotConfig, Difficulty, FLEET, FLEET_SIZE},
    coord::{Coordinate, Direction, Footprint},
    player::Player,
    side::Side,
};

/// The automated opponent: a difficulty profile plus its private memory.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    config: BotConfig,
    /// Potential targets, consumed last-in first-out.
    targets: Vec<Coordinate>,
    hunting: bool,
    enemy_afloat: [bool; FLEET_SIZE],
    /// Hits known to belong to sunk ships.
    wrecks: Vec<Coordinate>,
}

fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    if chance >= 1.0 {
        true
    } else if chance > 0.0 {
        rng.random_bool(chance)
    } else {
        false
    }
}

impl AiPlayer {
    pub fn new(config: BotConfig) -> Self {
        AiPlayer {
            config,
            targets: Vec::new(),
            hunting: false,
            enemy_afloat: [true; FLEET_SIZE],
            wrecks: Vec::new(),
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(BotConfig::for_difficulty(difficulty))
    }

    /// Pending hunt targets, bottom of the stack first.
    pub fn target_queue(&self) -> &[Coordinate] {
        &self.targets
    }

    pub fn wrecks(&self) -> &[Coordinate] {
        &self.wrecks
    }

    pub fn has_target(&self) -> bool {
        self.hunting
    }

    /// Lengths of enemy ships not yet reported sunk.
    pub fn remaining_lengths(&self) -> Vec<usize> {
        FLEET
            .iter()
            .filter(|k| self.enemy_afloat[k.index()])
            .map(|k| k.size())
            .collect()
    }

    /// Pick this turn's action. Special weapons are weighed in a fixed order;
    /// the first one that is usable and passes its chance roll wins.
    pub fn decide<R: Rng + ?Sized>(&mut self, rng: &mut R, me: &Side) -> Action {
        debug_assert!(
            me.reveal_misses_to_self(),
            "bot side {} must record its own misses",
            me.name()
        );
        let tracking = me.tracking();

        if me.can_use(ActionKind::Artillery) && roll(rng, self.config.artillery_chance) {
            return Action::Artillery(ai::best_artillery_anchor(tracking, rng));
        }
        if me.can_use(ActionKind::Torpedo) && roll(rng, self.config.torpedo_chance) {
            return Action::Torpedo(ai::best_torpedo_line(tracking));
        }
        if me.can_use(ActionKind::Radar)
            && self.targets.is_empty()
            && roll(rng, self.config.radar_chance)
        {
            let lengths = self.remaining_lengths();
            if let Some(anchor) = ai::best_radar_anchor(tracking, &lengths, &self.wrecks, rng) {
                return Action::Radar(anchor);
            }
        }
        if me.can_use(ActionKind::Smoke) && roll(rng, self.config.smoke_chance) {
            match ai::smoke_cover(me.home()) {
                Ok(Some(anchor)) => return Action::Smoke(anchor),
                Ok(None) => {}
                Err(e) => log::warn!("{}: no smoke cover: {}", me.name(), e),
            }
        }
        Action::Fire(self.next_shot(rng, tracking))
    }

    fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R, tracking: &TrackingGrid) -> Coordinate {
        while let Some(c) = self.targets.pop() {
            if tracking.is_unknown(c) {
                return c;
            }
        }
        let pick = if self.config.probability_search {
            ai::checkerboard_target(tracking, &self.remaining_lengths(), &self.wrecks, rng)
        } else {
            ai::random_unknown(tracking, rng)
        };
        pick.unwrap_or(Coordinate::ORIGIN)
    }

    /// Move `c` to the top of the target stack.
    fn push_target(&mut self, c: Coordinate) {
        self.targets.retain(|&t| t != c);
        self.targets.push(c);
    }

    /// Feed a fresh hit into hunt mode.
    ///
    /// With a hit next to it the ship's line is known: queue the first unknown
    /// cell past `hit` along that line, stopping at a miss or the edge.
    /// Otherwise queue every unknown neighbour.
    fn track_hit(&mut self, tracking: &TrackingGrid, hit: Coordinate) {
        self.hunting = true;
        let along: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| hit.step(d).is_some_and(|n| tracking.mark(n) == Mark::Hit))
            .map(Direction::opposite)
            .collect();

        if along.is_empty() {
            for n in hit.neighbours() {
                if tracking.is_unknown(n) {
                    self.push_target(n);
                }
            }
            return;
        }

        for dir in along {
            let mut cursor = hit.step(dir);
            while let Some(c) = cursor {
                match tracking.mark(c) {
                    Mark::Hit => cursor = c.step(dir),
                    Mark::Unknown => {
                        self.push_target(c);
                        break;
                    }
                    Mark::Miss => break,
                }
            }
        }
    }

    fn observe_shot(&mut self, tracking: &TrackingGrid, coord: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit if self.config.hunt => self.track_hit(tracking, coord),
            ShotOutcome::HitAndSunk(kind) => {
                self.enemy_afloat[kind.index()] = false;
                let hull = ai::sunk_hull(tracking, coord, kind.size(), &self.wrecks);
                self.wrecks.extend(hull);
                self.targets.clear();
                self.hunting = false;
            }
            _ => {}
        }
    }

    fn observe_radar(&mut self, tracking: &TrackingGrid, area: &Footprint) {
        if !self.config.hunt {
            return;
        }
        for c in area.cells() {
            if tracking.is_unknown(c) {
                self.push_target(c);
            }
        }
    }

    /// Update memory from an action report.
    pub fn observe(&mut self, me: &Side, report: &ActionReport) {
        let tracking = me.tracking();
        match report {
            ActionReport::Shot {
                target, outcome, ..
            } => self.observe_shot(tracking, *target, *outcome),
            ActionReport::Strike(strike) => {
                for &(coord, outcome) in &strike.shots {
                    self.observe_shot(tracking, coord, outcome);
                }
            }
            ActionReport::Radar {
                area,
                reading: RadarReading::Detected,
            } => self.observe_radar(tracking, area),
            _ => {}
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut HomeGrid) -> Result<(), BoardError> {
        grid.place_fleet_randomly(rng)
    }

    fn choose_action(&mut self, rng: &mut SmallRng, me: &Side) -> Action {
        self.decide(rng, me)
    }

    fn handle_report(&mut self, me: &Side, report: &ActionReport) {
        self.observe(me, report);
    }
}
