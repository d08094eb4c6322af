//! Home and tracking grids.
//!
//! The home grid stores one occupancy mask per ship plus incoming hit and
//! miss masks; a cell's state is derived from those masks. The tracking grid
//! only ever holds what the owner learned from its own shots.

use core::fmt;
use rand::Rng;

use crate::{
    bitboard::BitBoard,
    common::{BoardError, ShotOutcome},
    config::{FLEET, FLEET_SIZE, GRID_SIZE},
    coord::{Coordinate, Footprint},
    ship::{Fleet, Orientation, ShipKind},
};

pub(crate) type BB = BitBoard<u128, GRID_SIZE>;

/// State of a home-grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    Water,
    ShipSegment(ShipKind),
    Miss,
    Hit,
}

/// State of a tracking-grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Mark {
    Unknown,
    Miss,
    Hit,
}

/// Read-only copy of a grid for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GridSnapshot<T> {
    pub rows: [[T; GRID_SIZE]; GRID_SIZE],
}

impl<T: Copy> GridSnapshot<T> {
    pub fn get(&self, c: Coordinate) -> T {
        self.rows[c.y()][c.x()]
    }
}

/// Cells covered by a ship of `size` anchored at `coord`, or `None` if it would
/// leave the grid.
fn ship_cells(coord: Coordinate, size: usize, orientation: Orientation) -> Option<BB> {
    if size == 0 {
        return None;
    }
    let (row, col) = (coord.y(), coord.x());
    let rect = match orientation {
        Orientation::Horizontal if col + size <= GRID_SIZE => {
            BB::rect(row, row, col, col + size - 1)
        }
        Orientation::Vertical if row + size <= GRID_SIZE => {
            BB::rect(row, row + size - 1, col, col)
        }
        _ => return None,
    };
    rect.ok()
}

pub(crate) fn footprint_mask(area: &Footprint) -> Result<BB, BoardError> {
    let mut mask = BB::new();
    for c in area.cells() {
        mask.set(c.y(), c.x())?;
    }
    Ok(mask)
}

/// A side's own grid: ship placement plus incoming shot marks.
#[derive(Clone, PartialEq, Eq)]
pub struct HomeGrid {
    ships: [BB; FLEET_SIZE],
    placed: [bool; FLEET_SIZE],
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl HomeGrid {
    /// Empty grid, all water.
    pub fn new() -> Self {
        HomeGrid {
            ships: [BB::new(); FLEET_SIZE],
            placed: [false; FLEET_SIZE],
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    pub fn cell(&self, c: Coordinate) -> Cell {
        let (r, col) = (c.y(), c.x());
        if self.hits.get(r, col).unwrap_or(false) {
            return Cell::Hit;
        }
        if self.misses.get(r, col).unwrap_or(false) {
            return Cell::Miss;
        }
        FLEET
            .iter()
            .find(|k| self.ships[k.index()].get(r, col).unwrap_or(false))
            .map_or(Cell::Water, |&k| Cell::ShipSegment(k))
    }

    /// `true` iff every cell of the ship lies on the grid and is water.
    pub fn validate_placement(&self, coord: Coordinate, size: usize, orientation: Orientation) -> bool {
        match ship_cells(coord, size, orientation) {
            Some(mask) => !mask.intersects(&(self.ship_map | self.hits | self.misses)),
            None => false,
        }
    }

    /// Place `kind` with its fixed size at `coord`.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        coord: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.placed[kind.index()] {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let mask =
            ship_cells(coord, kind.size(), orientation).ok_or(BoardError::ShipOutOfBounds)?;
        if !self.validate_placement(coord, kind.size(), orientation) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ships[kind.index()] = mask;
        self.placed[kind.index()] = true;
        self.ship_map |= mask;
        Ok(())
    }

    /// Random valid `(anchor, orientation)` for `kind`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        for _ in 0..1000 {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let x = rng.random_range(0..GRID_SIZE);
            let y = rng.random_range(0..GRID_SIZE);
            let Some(coord) = Coordinate::new(x, y) else {
                continue;
            };
            if self.validate_placement(coord, kind.size(), orientation) {
                return Ok((coord, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place every ship of the fleet at random.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for kind in FLEET {
            if self.placed[kind.index()] {
                continue;
            }
            let (coord, orientation) = self.random_placement(rng, kind)?;
            self.place_ship(kind, coord, orientation)?;
        }
        Ok(())
    }

    pub fn is_fully_placed(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }

    /// Resolve an incoming shot, recording hits on `fleet`.
    pub fn receive_shot(&mut self, fleet: &mut Fleet, c: Coordinate) -> Result<ShotOutcome, BoardError> {
        let (r, col) = (c.y(), c.x());
        match self.cell(c) {
            Cell::Miss | Cell::Hit => Ok(ShotOutcome::AlreadyTargeted),
            Cell::Water => {
                self.misses.set(r, col)?;
                Ok(ShotOutcome::Miss)
            }
            Cell::ShipSegment(kind) => {
                self.hits.set(r, col)?;
                if fleet.register_hit(kind) {
                    Ok(ShotOutcome::HitAndSunk(kind))
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
        }
    }

    /// `true` if any cell of `area` holds a ship segment not yet hit.
    pub fn has_intact_segment(&self, area: &Footprint) -> Result<bool, BoardError> {
        let intact = self.ship_map & !self.hits;
        Ok(intact.intersects(&footprint_mask(area)?))
    }

    /// Snapshot for rendering; ship segments show as water unless `reveal_ships`.
    pub fn snapshot(&self, reveal_ships: bool) -> GridSnapshot<Cell> {
        let mut rows = [[Cell::Water; GRID_SIZE]; GRID_SIZE];
        for c in Coordinate::all() {
            rows[c.y()][c.x()] = match self.cell(c) {
                Cell::ShipSegment(_) if !reveal_ships => Cell::Water,
                cell => cell,
            };
        }
        GridSnapshot { rows }
    }
}

impl Default for HomeGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HomeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HomeGrid {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ship_map, self.hits, self.misses
        )
    }
}

/// A side's record of its own shots at the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackingGrid {
    hits: BB,
    misses: BB,
}

impl TrackingGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self, c: Coordinate) -> Mark {
        if self.hits.get(c.y(), c.x()).unwrap_or(false) {
            Mark::Hit
        } else if self.misses.get(c.y(), c.x()).unwrap_or(false) {
            Mark::Miss
        } else {
            Mark::Unknown
        }
    }

    pub fn is_unknown(&self, c: Coordinate) -> bool {
        self.mark(c) == Mark::Unknown
    }

    pub fn record_hit(&mut self, c: Coordinate) -> Result<(), BoardError> {
        Ok(self.hits.set(c.y(), c.x())?)
    }

    pub fn record_miss(&mut self, c: Coordinate) -> Result<(), BoardError> {
        Ok(self.misses.set(c.y(), c.x())?)
    }

    /// Number of unknown cells inside `cells`.
    pub fn unknown_count(&self, cells: impl IntoIterator<Item = Coordinate>) -> usize {
        cells.into_iter().filter(|&c| self.is_unknown(c)).count()
    }

    pub fn snapshot(&self) -> GridSnapshot<Mark> {
        let mut rows = [[Mark::Unknown; GRID_SIZE]; GRID_SIZE];
        for c in Coordinate::all() {
            rows[c.y()][c.x()] = self.mark(c);
        }
        GridSnapshot { rows }
    }
}
