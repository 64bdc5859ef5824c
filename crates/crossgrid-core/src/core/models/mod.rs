//! # Core Models Module
//!
//! Data structures used to represent a crossword under construction.
//!
//! ## Key Components
//!
//! - [`grid`] - The fixed-size cell array with bounds-safe reads and in-place writes
//! - [`placement`] - Directions, placements (proposed spans) and committed placement records
//! - [`lexicon`] - The immutable [`Dictionary`](lexicon::Dictionary) and the consumable
//!   [`WordPool`](lexicon::WordPool)
//!
//! ## Usage
//!
//! ```
//! use crossgrid::core::models::grid::{Cell, Grid};
//! use crossgrid::core::models::placement::{Direction, Placement};
//!
//! let mut grid = Grid::new(5, 5);
//! grid.write(&Placement::new("CAT", 0, 0, Direction::Across));
//!
//! assert_eq!(grid.cell_at(0, 1), Cell::Letter('A'));
//! assert_eq!(grid.cell_at(-1, 0), Cell::Empty);
//! ```

pub mod grid;
pub mod lexicon;
pub mod placement;
