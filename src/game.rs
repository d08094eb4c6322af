use alloc::string::String;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    action::{Action, ActionKind},
    arsenal::{Weapon, WeaponState},
    board::{Cell, GridSnapshot, Mark},
    combat::{self, CombatError},
    common::{ActionError, ActionReport, BoardError},
    player::Player,
    ship::Fleet,
    side::Side,
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won(Seat),
}

/// Per-side counters for the end-of-match summary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideSummary {
    pub name: String,
    pub ships_remaining: usize,
    pub ships_sunk: u8,
    pub radar_sweeps_used: u8,
    pub smoke_screens_used: u8,
    pub artillery: WeaponState,
    pub torpedo: WeaponState,
}

impl SideSummary {
    fn of(side: &Side) -> Self {
        SideSummary {
            name: String::from(side.name()),
            ships_remaining: side.ships_remaining(),
            ships_sunk: side.ships_sunk(),
            radar_sweeps_used: side.radar_sweeps_used(),
            smoke_screens_used: side.smoke_screens_used(),
            artillery: side.arsenal().state(Weapon::Artillery),
            torpedo: side.arsenal().state(Weapon::Torpedo),
        }
    }
}

/// Serializable overview of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub status: GameStatus,
    pub winner: Option<String>,
    pub turns: u32,
    pub sides: [SideSummary; 2],
}

/// True once every ship of `fleet` is sunk.
pub fn check_win(fleet: &Fleet) -> bool {
    fleet.all_sunk()
}

/// Turn driver owning both sides of a match.
#[derive(Debug, Clone)]
pub struct Game {
    sides: [Side; 2],
    current: Seat,
    turns: u32,
    winner: Option<Seat>,
    turn_started: bool,
}

impl Game {
    /// Start a match with `starting` to act first. Both home grids should
    /// already hold their fleets.
    pub fn new(one: Side, two: Side, starting: Seat) -> Self {
        for side in [&one, &two] {
            if !side.home().is_fully_placed() {
                log::warn!("{} starts with part of its fleet unplaced", side.name());
            }
        }
        Game {
            sides: [one, two],
            current: starting,
            turns: 0,
            winner: None,
            turn_started: false,
        }
    }

    /// Start a match with a coin flip for the first move.
    pub fn with_random_start<R: Rng + ?Sized>(rng: &mut R, one: Side, two: Side) -> Self {
        let starting = if rng.random_bool(0.5) { Seat::One } else { Seat::Two };
        Self::new(one, two, starting)
    }

    pub fn side(&self, seat: Seat) -> &Side {
        &self.sides[seat.index()]
    }

    pub fn side_mut(&mut self, seat: Seat) -> &mut Side {
        &mut self.sides[seat.index()]
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> Seat {
        self.current
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(seat) => GameStatus::Won(seat),
            None => GameStatus::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Open the current side's turn: weapons unlocked last turn become
    /// usable. Calling it again within the same turn does nothing.
    pub fn begin_turn(&mut self) {
        if self.turn_started {
            return;
        }
        self.turn_started = true;
        let current = self.current;
        self.side_mut(current).begin_turn();
    }

    /// Split the sides into (acting, opposing).
    fn actors(&mut self) -> (&mut Side, &mut Side) {
        let [one, two] = &mut self.sides;
        match self.current {
            Seat::One => (one, two),
            Seat::Two => (two, one),
        }
    }

    fn apply(&mut self, action: Action) -> Result<ActionReport, CombatError> {
        let (attacker, defender) = self.actors();
        let report = match action {
            Action::Fire(target) => {
                let (outcome, unlocks) = combat::fire_standard(attacker, defender, target)?;
                ActionReport::Shot {
                    target,
                    outcome,
                    unlocks,
                }
            }
            Action::Artillery(anchor) => ActionReport::Strike(combat::artillery(attacker, defender, anchor)?),
            Action::Torpedo(line) => ActionReport::Strike(combat::torpedo(attacker, defender, line)?),
            Action::Radar(anchor) => {
                let (area, reading) = combat::radar_sweep(attacker, defender, anchor)?;
                ActionReport::Radar { area, reading }
            }
            Action::Smoke(anchor) => ActionReport::Deployed(combat::deploy_smoke(attacker, anchor)?),
        };
        Ok(report)
    }

    /// Execute the current side's action and pass the turn.
    ///
    /// Refusals come back as [`ActionReport::Rejected`] and still end the
    /// turn. `Err` is reserved for internal grid faults.
    pub fn resolve_action(&mut self, action: Action) -> Result<ActionReport, BoardError> {
        if self.is_over() {
            return Ok(ActionReport::Rejected(ActionError::GameOver));
        }
        self.begin_turn();
        let actor = self.current;
        log::debug!("turn {}: {} chooses {}", self.turns + 1, self.side(actor).name(), action);

        let report = match self.apply(action) {
            Ok(report) => report,
            Err(CombatError::Rejected(reason)) => {
                log::info!("{}: {}", self.side(actor).name(), reason);
                ActionReport::Rejected(reason)
            }
            Err(CombatError::Board(err)) => return Err(err),
        };

        if check_win(self.side(actor.other()).fleet()) {
            self.winner = Some(actor);
            log::info!("{} wins after {} turns", self.side(actor).name(), self.turns + 1);
        }
        self.end_turn();
        Ok(report)
    }

    /// Resolve a named request with its argument token. A request that does
    /// not parse is rejected and forfeits the turn.
    pub fn resolve_request(&mut self, kind: &str, argument: &str) -> Result<ActionReport, BoardError> {
        if self.is_over() {
            return Ok(ActionReport::Rejected(ActionError::GameOver));
        }
        let parsed = kind
            .parse::<ActionKind>()
            .and_then(|kind| Action::from_request(kind, argument));
        match parsed {
            Ok(action) => self.resolve_action(action),
            Err(err) => {
                self.begin_turn();
                log::info!("{}: {}", self.side(self.current).name(), err);
                self.end_turn();
                Ok(ActionReport::Rejected(err.into()))
            }
        }
    }

    fn end_turn(&mut self) {
        self.turns += 1;
        self.current = self.current.other();
        self.turn_started = false;
    }

    /// Ask `player` for the current side's action, resolve it and feed the
    /// report back.
    pub fn play_turn(&mut self, player: &mut dyn Player, rng: &mut SmallRng) -> Result<ActionReport, BoardError> {
        if self.is_over() {
            return Ok(ActionReport::Rejected(ActionError::GameOver));
        }
        self.begin_turn();
        let actor = self.current;
        let action = player.choose_action(rng, self.side(actor));
        let report = self.resolve_action(action)?;
        player.handle_report(self.side(actor), &report);
        Ok(report)
    }

    /// Home grid of `seat`, with ship segments shown only when `reveal_ships`.
    pub fn home_view(&self, seat: Seat, reveal_ships: bool) -> GridSnapshot<Cell> {
        self.side(seat).home().snapshot(reveal_ships)
    }

    /// What `seat` knows about its opponent's grid.
    pub fn tracking_view(&self, seat: Seat) -> GridSnapshot<Mark> {
        self.side(seat).tracking().snapshot()
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            status: self.status(),
            winner: self.winner.map(|seat| String::from(self.side(seat).name())),
            turns: self.turns,
            sides: [SideSummary::of(&self.sides[0]), SideSummary::of(&self.sides[1])],
        }
    }
}
