// Targeting heuristics over a side's own tracking grid.
// Nothing here looks at the opponent's hidden placement.

use alloc::{vec, vec::Vec};
use rand::Rng;

use crate::{
    board::{HomeGrid, Mark, TrackingGrid},
    common::BoardError,
    config::{AREA_SPAN, GRID_SIZE, HIT_BIAS},
    coord::{Coordinate, Direction, Footprint, Line},
    ship::Orientation,
};

/// Per-cell placement counts, indexed `[row][col]`.
pub type DensityGrid = [[u32; GRID_SIZE]; GRID_SIZE];

fn is_even(c: Coordinate) -> bool {
    (c.x() + c.y()) % 2 == 0
}

/// Count every placement of every remaining ship length that avoids known
/// misses and `wrecks` (hits on ships already sunk). A placement adds 1 to
/// each unknown cell it covers, or [`HIT_BIAS`] when it also covers an
/// unresolved hit. With `checkerboard` only even-parity cells accumulate.
pub fn calc_density(
    tracking: &TrackingGrid,
    remaining_lengths: &[usize],
    wrecks: &[Coordinate],
    checkerboard: bool,
) -> DensityGrid {
    let mut grid = [[0u32; GRID_SIZE]; GRID_SIZE];

    for &len in remaining_lengths {
        if len == 0 || len > GRID_SIZE {
            continue;
        }
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            let (max_x, max_y) = match orient {
                Orientation::Horizontal => (GRID_SIZE - len, GRID_SIZE - 1),
                Orientation::Vertical => (GRID_SIZE - 1, GRID_SIZE - len),
            };
            for y in 0..=max_y {
                for x in 0..=max_x {
                    let cells = (0..len).filter_map(|k| match orient {
                        Orientation::Horizontal => Coordinate::new(x + k, y),
                        Orientation::Vertical => Coordinate::new(x, y + k),
                    });
                    let mut covers_hit = false;
                    let mut valid = true;
                    for c in cells.clone() {
                        match tracking.mark(c) {
                            Mark::Hit if wrecks.contains(&c) => {
                                valid = false;
                                break;
                            }
                            Mark::Miss => {
                                valid = false;
                                break;
                            }
                            Mark::Hit => covers_hit = true,
                            Mark::Unknown => {}
                        }
                    }
                    if !valid {
                        continue;
                    }
                    let weight = if covers_hit { HIT_BIAS } else { 1 };
                    for c in cells {
                        if tracking.is_unknown(c) && (!checkerboard || is_even(c)) {
                            grid[c.y()][c.x()] += weight;
                        }
                    }
                }
            }
        }
    }
    grid
}

/// Uniform pick among the highest-scoring unknown cells. `None` when no
/// unknown cell scores above zero.
fn pick_max<R: Rng + ?Sized>(grid: &DensityGrid, tracking: &TrackingGrid, rng: &mut R) -> Option<Coordinate> {
    let mut best = 0u32;
    let mut ties: Vec<Coordinate> = Vec::new();
    for c in Coordinate::all().filter(|&c| tracking.is_unknown(c)) {
        let score = grid[c.y()][c.x()];
        if score == 0 || score < best {
            continue;
        }
        if score > best {
            best = score;
            ties.clear();
        }
        ties.push(c);
    }
    if ties.is_empty() {
        return None;
    }
    Some(ties[rng.random_range(0..ties.len())])
}

/// Next search-mode shot: checkerboard density first, full density when the
/// even cells are exhausted, any unknown cell as a last resort.
pub fn checkerboard_target<R: Rng + ?Sized>(
    tracking: &TrackingGrid,
    remaining_lengths: &[usize],
    wrecks: &[Coordinate],
    rng: &mut R,
) -> Option<Coordinate> {
    let parity = calc_density(tracking, remaining_lengths, wrecks, true);
    if let Some(c) = pick_max(&parity, tracking, rng) {
        return Some(c);
    }
    let full = calc_density(tracking, remaining_lengths, wrecks, false);
    pick_max(&full, tracking, rng).or_else(|| random_unknown(tracking, rng))
}

/// Cells of the `size`-long ship just sunk at `at`, read off the run of hits
/// through it that are not already in `wrecks`. Falls back to `at` alone when
/// the run does not pin the hull down to one axis and exact length.
pub fn sunk_hull(tracking: &TrackingGrid, at: Coordinate, size: usize, wrecks: &[Coordinate]) -> Vec<Coordinate> {
    let open_hit = |c: &Coordinate| tracking.mark(*c) == Mark::Hit && !wrecks.contains(c);
    let mut fits: Vec<Vec<Coordinate>> = Vec::new();
    for axis in [[Direction::Left, Direction::Right], [Direction::Up, Direction::Down]] {
        let mut run = vec![at];
        for dir in axis {
            let mut cursor = at.step(dir).filter(open_hit);
            while let Some(c) = cursor {
                run.push(c);
                cursor = c.step(dir).filter(open_hit);
            }
        }
        if run.len() >= size {
            fits.push(run);
        }
    }
    match fits.as_slice() {
        [run] if run.len() == size => run.clone(),
        _ => vec![at],
    }
}

/// Uniformly random unknown cell.
pub fn random_unknown<R: Rng + ?Sized>(tracking: &TrackingGrid, rng: &mut R) -> Option<Coordinate> {
    let open: Vec<Coordinate> = Coordinate::all().filter(|&c| tracking.is_unknown(c)).collect();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}

/// Anchor of the 2×2 area with the most unknown cells, first in scan order.
/// Falls back to a random cell when every area is fully resolved.
pub fn best_artillery_anchor<R: Rng + ?Sized>(tracking: &TrackingGrid, rng: &mut R) -> Coordinate {
    let mut best: Option<(usize, Coordinate)> = None;
    for anchor in Coordinate::all() {
        let open = tracking.unknown_count(Footprint::square(anchor, AREA_SPAN).cells());
        if open > best.map_or(0, |(n, _)| n) {
            best = Some((open, anchor));
        }
    }
    match best {
        Some((_, anchor)) => anchor,
        None => Coordinate::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE))
            .unwrap_or(Coordinate::ORIGIN),
    }
}

/// Row or column with the most unknown cells, rows scanned before columns.
pub fn best_torpedo_line(tracking: &TrackingGrid) -> Line {
    let mut best = (0usize, Line::default());
    for line in Line::all() {
        let open = tracking.unknown_count(line.cells());
        if open > best.0 {
            best = (open, line);
        }
    }
    best.1
}

/// Radar anchor whose 2×2 area carries the most placement weight.
pub fn best_radar_anchor<R: Rng + ?Sized>(
    tracking: &TrackingGrid,
    remaining_lengths: &[usize],
    wrecks: &[Coordinate],
    rng: &mut R,
) -> Option<Coordinate> {
    let density = calc_density(tracking, remaining_lengths, wrecks, false);
    let mut best = 0u32;
    let mut ties: Vec<Coordinate> = Vec::new();
    for anchor in Coordinate::all() {
        let area = Footprint::square(anchor, AREA_SPAN);
        if area.cell_count() < AREA_SPAN * AREA_SPAN {
            continue;
        }
        let score: u32 = area.cells().map(|c| density[c.y()][c.x()]).sum();
        if score == 0 || score < best {
            continue;
        }
        if score > best {
            best = score;
            ties.clear();
        }
        ties.push(anchor);
    }
    if ties.is_empty() {
        None
    } else {
        Some(ties[rng.random_range(0..ties.len())])
    }
}

/// First 2×2 area in scan order that shelters an intact own ship segment.
pub fn smoke_cover(home: &HomeGrid) -> Result<Option<Coordinate>, BoardError> {
    for anchor in Coordinate::all() {
        if home.has_intact_segment(&Footprint::square(anchor, AREA_SPAN))? {
            return Ok(Some(anchor));
        }
    }
    Ok(None)
}
