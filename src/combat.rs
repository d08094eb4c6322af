//! Shot resolution: single-cell fire and the special actions built on it.
//!
//! Every function takes the acting side and its opponent explicitly. Grid
//! writes only ever touch the opponent's home grid and the actor's own
//! tracking grid.

use crate::{
    arsenal::{Unlocks, Weapon},
    board::{HomeGrid, TrackingGrid},
    common::{ActionError, BoardError, RadarReading, ShotOutcome, StrikeArea, StrikeReport},
    config::{AREA_SPAN, MAX_RADAR_SWEEPS},
    coord::{Coordinate, Footprint, Line},
    ship::Fleet,
    side::{Side, SmokeScreen},
};

/// Errors from a special action: either a refusal or an internal grid fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    Rejected(ActionError),
    Board(BoardError),
}

impl From<ActionError> for CombatError {
    fn from(err: ActionError) -> Self {
        CombatError::Rejected(err)
    }
}

impl From<BoardError> for CombatError {
    fn from(err: BoardError) -> Self {
        CombatError::Board(err)
    }
}

/// Resolve one shot against `target_home`, marking the firer's tracking grid.
///
/// Misses reach the tracking grid only when `reveal_on_miss` is set; hits
/// always do. Firing at a resolved cell is a no-op reported as
/// [`ShotOutcome::AlreadyTargeted`].
pub fn resolve_shot(
    tracking: &mut TrackingGrid,
    target_home: &mut HomeGrid,
    target_fleet: &mut Fleet,
    coord: Coordinate,
    reveal_on_miss: bool,
) -> Result<ShotOutcome, BoardError> {
    let outcome = target_home.receive_shot(target_fleet, coord)?;
    match outcome {
        ShotOutcome::Miss if reveal_on_miss => tracking.record_miss(coord)?,
        ShotOutcome::Hit | ShotOutcome::HitAndSunk(_) => tracking.record_hit(coord)?,
        _ => {}
    }
    Ok(outcome)
}

/// Fire a standard shot and update the sink counters.
///
/// Unlocks are not evaluated here; callers decide when a sinking arms the
/// special weapons.
pub fn fire(attacker: &mut Side, defender: &mut Side, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
    let reveal = attacker.reveal_misses_to_self();
    let outcome = resolve_shot(
        &mut attacker.tracking,
        &mut defender.home,
        &mut defender.fleet,
        coord,
        reveal,
    )?;
    log::debug!("{} fires at {}: {:?}", attacker.name(), coord, outcome);
    if let ShotOutcome::HitAndSunk(kind) = outcome {
        attacker.ships_sunk += 1;
        log::info!("{} sank {}'s {}", attacker.name(), defender.name(), kind);
    }
    Ok(outcome)
}

/// Arm special weapons after `attacker` sank a ship.
pub fn unlock_after_sinking(attacker: &mut Side, defender: &Side) -> Unlocks {
    let unlocks = attacker.arsenal.on_ship_sunk(defender.ships_remaining());
    if attacker.smoke_charges() > 0 {
        log::info!("{} has a smoke screen available", attacker.name());
    }
    unlocks
}

/// Standard fire plus the unlock check it triggers.
pub fn fire_standard(
    attacker: &mut Side,
    defender: &mut Side,
    coord: Coordinate,
) -> Result<(ShotOutcome, Unlocks), BoardError> {
    let outcome = fire(attacker, defender, coord)?;
    let unlocks = match outcome {
        ShotOutcome::HitAndSunk(_) => unlock_after_sinking(attacker, defender),
        _ => Unlocks::default(),
    };
    Ok((outcome, unlocks))
}

fn strike(
    attacker: &mut Side,
    defender: &mut Side,
    weapon: Weapon,
    area: StrikeArea,
    cells: impl Iterator<Item = Coordinate>,
) -> Result<StrikeReport, CombatError> {
    if !attacker.arsenal.is_available(weapon) {
        return Err(ActionError::WeaponLocked(weapon).into());
    }
    let mut report = StrikeReport::new(area);
    for coord in cells {
        let outcome = fire(attacker, defender, coord)?;
        report.record(coord, outcome);
    }
    if !report.sunk.is_empty() {
        report.unlocks = unlock_after_sinking(attacker, defender);
    }
    // Locked only once the strike is over, so its own sinkings cannot re-arm it.
    attacker.arsenal.spend(weapon);
    log::info!(
        "{} {} strike: {} hits, {} misses",
        attacker.name(),
        weapon,
        report.hits,
        report.misses
    );
    Ok(report)
}

/// Artillery: fire on the clipped 2×2 area anchored at `anchor`.
pub fn artillery(
    attacker: &mut Side,
    defender: &mut Side,
    anchor: Coordinate,
) -> Result<StrikeReport, CombatError> {
    let area = Footprint::square(anchor, AREA_SPAN);
    strike(attacker, defender, Weapon::Artillery, StrikeArea::Area(area), area.cells())
}

/// Torpedo: fire on every cell of a row or column.
pub fn torpedo(attacker: &mut Side, defender: &mut Side, line: Line) -> Result<StrikeReport, CombatError> {
    strike(attacker, defender, Weapon::Torpedo, StrikeArea::Line(line), line.cells())
}

/// Radar: scan the clipped 2×2 area at `anchor` for intact ship segments.
///
/// An active opponent smoke screen overlapping the area hides the result and
/// is used up. The sweep counts against the limit either way.
pub fn radar_sweep(
    attacker: &mut Side,
    defender: &mut Side,
    anchor: Coordinate,
) -> Result<(Footprint, RadarReading), CombatError> {
    if attacker.radar_sweeps_used >= MAX_RADAR_SWEEPS {
        return Err(ActionError::RadarExhausted.into());
    }
    attacker.radar_sweeps_used += 1;
    let area = Footprint::square(anchor, AREA_SPAN);

    let screen = defender
        .smoke_screens
        .iter_mut()
        .find(|s| s.active && s.area.overlaps(&area));
    let reading = if let Some(screen) = screen {
        screen.active = false;
        RadarReading::Obscured
    } else if defender.home.has_intact_segment(&area)? {
        RadarReading::Detected
    } else {
        RadarReading::NotDetected
    };
    log::info!("{} radar at {}: {:?}", attacker.name(), area, reading);
    Ok((area, reading))
}

/// Smoke: cover the clipped 2×2 area at `anchor` on the deployer's own grid.
pub fn deploy_smoke(side: &mut Side, anchor: Coordinate) -> Result<Footprint, ActionError> {
    if side.smoke_charges() == 0 {
        return Err(ActionError::NoSmokeCharge);
    }
    let area = Footprint::square(anchor, AREA_SPAN);
    side.smoke_screens.push(SmokeScreen { area, active: true });
    side.smoke_screens_used += 1;
    log::info!("{} deploys a smoke screen over {}", side.name(), area);
    Ok(area)
}
