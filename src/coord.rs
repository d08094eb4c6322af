//! Grid addressing: single cells, torpedo lines and clipped rectangular footprints.

use core::fmt;

use crate::{
    common::ParseError,
    config::GRID_SIZE,
};

/// A cell on the grid. `x` is the column (`A`..), `y` the row (`1`..), both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    /// `A1`.
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    /// Returns `None` when either axis falls outside the grid.
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(Coordinate { x, y })
        } else {
            None
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Neighbour one step away in `dir`, if still on the grid.
    pub fn step(&self, dir: Direction) -> Option<Coordinate> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Coordinate::new(x, y)
    }

    /// Up, right, down, left neighbours that lie on the grid.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// All cells of the grid, row-major.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Coordinate { x, y }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.x), self.y + 1)
    }
}

/// The four grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Parse a `<letter><number>` token such as `a1` or `J10`.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, ParseError> {
    let input = input.trim();
    if input.len() < 2 || input.len() > 3 {
        return Err(ParseError::InvalidLength);
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or(ParseError::InvalidLength)?
        .to_ascii_uppercase();
    let x = column_index(col_ch).ok_or(ParseError::InvalidColumn)?;
    let y = row_index(chars.as_str()).ok_or(ParseError::InvalidRow)?;
    Coordinate::new(x, y).ok_or(ParseError::InvalidRow)
}

fn column_index(ch: char) -> Option<usize> {
    if !ch.is_ascii_uppercase() {
        return None;
    }
    let idx = (ch as u8 - b'A') as usize;
    (idx < GRID_SIZE).then_some(idx)
}

/// Letter of an on-grid column index.
fn column_letter(x: usize) -> char {
    char::from(b'A' + (x % GRID_SIZE) as u8)
}

fn row_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    (1..=GRID_SIZE).contains(&row).then(|| row - 1)
}

/// Orientation of a torpedo line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Axis {
    Row,
    Column,
}

/// A whole row or column, the target of a torpedo. The index is always on
/// the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Line {
    axis: Axis,
    index: usize,
}

impl Line {
    /// Row `y` (0-indexed), or `None` off the grid.
    pub const fn row(y: usize) -> Option<Line> {
        if y < GRID_SIZE {
            Some(Line { axis: Axis::Row, index: y })
        } else {
            None
        }
    }

    /// Column `x` (0-indexed), or `None` off the grid.
    pub const fn column(x: usize) -> Option<Line> {
        if x < GRID_SIZE {
            Some(Line { axis: Axis::Column, index: x })
        } else {
            None
        }
    }

    pub fn axis(self) -> Axis {
        self.axis
    }

    pub fn index(self) -> usize {
        self.index
    }

    /// Cells of the line in increasing order.
    pub fn cells(self) -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE).map(move |i| match self.axis {
            Axis::Row => Coordinate { x: i, y: self.index },
            Axis::Column => Coordinate { x: self.index, y: i },
        })
    }

    /// Every row followed by every column.
    pub fn all() -> impl Iterator<Item = Line> {
        let rows = (0..GRID_SIZE).map(|y| Line { axis: Axis::Row, index: y });
        let columns = (0..GRID_SIZE).map(|x| Line { axis: Axis::Column, index: x });
        rows.chain(columns)
    }
}

/// Row 1.
impl Default for Line {
    fn default() -> Self {
        Line { axis: Axis::Row, index: 0 }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis {
            Axis::Row => write!(f, "row {}", self.index + 1),
            Axis::Column => write!(f, "column {}", column_letter(self.index)),
        }
    }
}

/// Parse a torpedo selector: a column letter (`c`) or a row number (`7`).
pub fn parse_line(input: &str) -> Result<Line, ParseError> {
    let input = input.trim();
    let first = input.chars().next().ok_or(ParseError::InvalidLine)?;
    let line = if first.is_ascii_alphabetic() {
        if input.len() != 1 {
            return Err(ParseError::InvalidLine);
        }
        column_index(first.to_ascii_uppercase()).and_then(Line::column)
    } else {
        row_index(input).and_then(Line::row)
    };
    line.ok_or(ParseError::InvalidLine)
}

/// Clip an inclusive span to the grid: `(max(0, start), min(N-1, end))`.
pub fn clip(start: usize, end: usize) -> (usize, usize) {
    (start, end.min(GRID_SIZE - 1))
}

/// An inclusive rectangle of cells, always inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Footprint {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl Footprint {
    /// `span × span` square anchored at its top-left cell, clipped to the grid.
    pub fn square(anchor: Coordinate, span: usize) -> Self {
        let extent = span.saturating_sub(1);
        let (x0, x1) = clip(anchor.x, anchor.x + extent);
        let (y0, y1) = clip(anchor.y, anchor.y + extent);
        Footprint { x0, y0, x1, y1 }
    }

    pub fn anchor(&self) -> Coordinate {
        Coordinate {
            x: self.x0,
            y: self.y0,
        }
    }

    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        (self.x0..=self.x1).contains(&c.x) && (self.y0..=self.y1).contains(&c.y)
    }

    /// Bounding-box intersection test.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// Cells row-major.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Footprint { x0, y0, x1, y1 } = *self;
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| Coordinate { x, y }))
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = Coordinate {
            x: self.x1,
            y: self.y1,
        };
        if self.cell_count() == 1 {
            write!(f, "{}", self.anchor())
        } else {
            write!(f, "{}-{}", self.anchor(), end)
        }
    }
}
