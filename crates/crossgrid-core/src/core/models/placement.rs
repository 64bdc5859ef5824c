use serde::{Deserialize, Serialize};
use std::fmt;

/// The orientation of a word on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Returns the `(row, col)` offset of one step along this direction.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Returns the direction at a right angle to this one.
    pub const fn perpendicular(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// A proposed or committed assignment of a word to a span of grid cells.
///
/// Placements are plain values: they describe *where* a word would go and carry no
/// knowledge of whether that is legal on any particular grid. Legality is decided by
/// [`crate::engine::validation::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    word: String,
    row: usize,
    col: usize,
    direction: Direction,
}

impl Placement {
    pub fn new(word: impl Into<String>, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            word: word.into(),
            row,
            col,
            direction,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// The `(row, col)` of the first letter.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells the span covers (characters, not bytes).
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Returns the coordinate of the `offset`-th cell of the span, which may lie
    /// outside the grid (or at negative coordinates) for offsets outside `0..len`.
    pub fn offset_cell(&self, offset: isize) -> (isize, isize) {
        let (dr, dc) = self.direction.step();
        (
            self.row as isize + dr * offset,
            self.col as isize + dc * offset,
        )
    }

    /// The cell immediately before the first letter, along the placement's direction.
    pub fn before_start(&self) -> (isize, isize) {
        self.offset_cell(-1)
    }

    /// The cell immediately after the last letter, along the placement's direction.
    pub fn after_end(&self) -> (isize, isize) {
        self.offset_cell(self.len() as isize)
    }

    /// Iterates over `(row, col, letter)` for every cell of the span.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (dr, dc) = self.direction.step();
        self.word.chars().enumerate().map(move |(k, letter)| {
            (
                self.row + dr as usize * k,
                self.col + dc as usize * k,
                letter,
            )
        })
    }

    /// Returns whether the span lies entirely inside a `rows × cols` grid.
    pub fn fits_within(&self, rows: usize, cols: usize) -> bool {
        let len = self.len();
        if len == 0 || self.row >= rows || self.col >= cols {
            return false;
        }
        match self.direction {
            Direction::Across => self.col + len <= cols,
            Direction::Down => self.row + len <= rows,
        }
    }

    /// Returns whether the span covers the given cell.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        let len = self.len();
        match self.direction {
            Direction::Across => row == self.row && col >= self.col && col < self.col + len,
            Direction::Down => col == self.col && row >= self.row && row < self.row + len,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" {} @ ({}, {})",
            self.word, self.direction, self.row, self.col
        )
    }
}

/// How a committed word came to be on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Selected by the candidate search.
    Chosen,
    /// Formed perpendicular to a chosen word as a side effect of placing it.
    Incidental,
}

/// A placement that has been written to the grid.
///
/// The ordered list of records is the authoritative content of a puzzle; the grid is
/// a projection of it and can always be rebuilt by replaying the records in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub placement: Placement,
    pub provenance: Provenance,
}

impl PlacementRecord {
    pub fn chosen(placement: Placement) -> Self {
        Self {
            placement,
            provenance: Provenance::Chosen,
        }
    }

    pub fn incidental(placement: Placement) -> Self {
        Self {
            placement,
            provenance: Provenance::Incidental,
        }
    }

    pub fn word(&self) -> &str {
        self.placement.word()
    }
}
