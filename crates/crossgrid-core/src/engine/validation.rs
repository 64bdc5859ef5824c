//! Placement legality.
//!
//! A placement is checked against the current grid in a fixed order, stopping at the
//! first failure:
//!
//! 1. **Bounds** - the whole span lies inside the grid.
//! 2. **Collision** - every span cell is empty or already holds the same letter.
//! 3. **End isolation** - the cells just before and just after the span, along its own
//!    direction, are empty or off the grid.
//! 4. **Parallel overlap** - no two consecutive span cells are already filled, since such
//!    a pair is part of an existing word running in the same direction.
//! 5. **Crossings** - every newly filled cell that touches a letter perpendicular to the
//!    placement forms a crossing word, read across the whole perpendicular run. Each such
//!    word must be in the dictionary and must not lengthen a word already on the grid.
//!
//! A rejection is an ordinary outcome of random sampling, not an error.

use crate::core::models::grid::{Cell, Grid};
use crate::core::models::lexicon::Dictionary;
use crate::core::models::placement::Placement;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    Collision { row: usize, col: usize },
    EndNotIsolated { row: usize, col: usize },
    ExtendsExistingWord { row: usize, col: usize },
    InvalidCrossing { word: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::OutOfBounds => write!(f, "span leaves the grid"),
            Rejection::Collision { row, col } => write!(f, "letter clash at ({row}, {col})"),
            Rejection::EndNotIsolated { row, col } => {
                write!(f, "runs into a letter at ({row}, {col})")
            }
            Rejection::ExtendsExistingWord { row, col } => {
                write!(f, "would lengthen an existing word at ({row}, {col})")
            }
            Rejection::InvalidCrossing { word } => write!(f, "forms non-word \"{word}\""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The placement is legal; carries the crossing words it would create, in span order.
    Accepted(Vec<Placement>),
    Rejected(Rejection),
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted(_))
    }
}

/// Decides whether `placement` may be written to `grid`.
pub fn validate(placement: &Placement, grid: &Grid, dictionary: &Dictionary) -> Validation {
    if !placement.fits_within(grid.rows(), grid.cols()) {
        return Validation::Rejected(Rejection::OutOfBounds);
    }

    for (row, col, letter) in placement.cells() {
        if let Cell::Letter(existing) = grid.cell_at(row as isize, col as isize) {
            if existing != letter {
                return Validation::Rejected(Rejection::Collision { row, col });
            }
        }
    }

    if let Some((row, col)) = first_blocked_end(placement, grid) {
        return Validation::Rejected(Rejection::EndNotIsolated { row, col });
    }

    if let Some((row, col)) = first_parallel_overlap(placement, grid) {
        return Validation::Rejected(Rejection::ExtendsExistingWord { row, col });
    }

    match crossing_words(placement, grid, dictionary) {
        Ok(words) => Validation::Accepted(words),
        Err(rejection) => Validation::Rejected(rejection),
    }
}

/// Returns whether both cells flanking the span along its direction are free.
pub fn ends_are_isolated(placement: &Placement, grid: &Grid) -> bool {
    first_blocked_end(placement, grid).is_none()
}

fn first_blocked_end(placement: &Placement, grid: &Grid) -> Option<(usize, usize)> {
    [placement.before_start(), placement.after_end()]
        .into_iter()
        .find(|&(row, col)| grid.is_filled(row, col))
        .map(|(row, col)| (row as usize, col as usize))
}

fn first_parallel_overlap(placement: &Placement, grid: &Grid) -> Option<(usize, usize)> {
    let filled: Vec<(usize, usize, bool)> = placement
        .cells()
        .map(|(row, col, _)| (row, col, grid.is_filled(row as isize, col as isize)))
        .collect();
    filled
        .windows(2)
        .find(|pair| pair[0].2 && pair[1].2)
        .map(|pair| (pair[0].0, pair[0].1))
}

fn crossing_words(
    placement: &Placement,
    grid: &Grid,
    dictionary: &Dictionary,
) -> Result<Vec<Placement>, Rejection> {
    let across = placement.direction().perpendicular();
    let (dr, dc) = across.step();
    let mut words = Vec::new();

    for (row, col, letter) in placement.cells() {
        let (r, c) = (row as isize, col as isize);
        if grid.is_filled(r, c) {
            continue;
        }
        if !grid.is_filled(r - dr, c - dc) && !grid.is_filled(r + dr, c + dc) {
            continue;
        }

        let before = collect_letters(grid, (r, c), (-dr, -dc));
        let after = collect_letters(grid, (r, c), (dr, dc));
        if before.len() >= 2 || after.len() >= 2 {
            return Err(Rejection::ExtendsExistingWord { row, col });
        }

        let word: String = before
            .iter()
            .rev()
            .chain(std::iter::once(&letter))
            .chain(after.iter())
            .collect();
        if !dictionary.contains(&word) {
            return Err(Rejection::InvalidCrossing { word });
        }

        let back = before.len() as isize;
        let start_row = (r - dr * back) as usize;
        let start_col = (c - dc * back) as usize;
        words.push(Placement::new(word, start_row, start_col, across));
    }

    Ok(words)
}

/// Collects consecutive letters starting next to `from` and walking by `step`.
fn collect_letters(grid: &Grid, from: (isize, isize), step: (isize, isize)) -> Vec<char> {
    let mut letters = Vec::new();
    let (mut r, mut c) = (from.0 + step.0, from.1 + step.1);
    while let Cell::Letter(letter) = grid.cell_at(r, c) {
        letters.push(letter);
        r += step.0;
        c += step.1;
    }
    letters
}

/// Returns whether the span is immediately touched by any letter outside itself.
///
/// A placement is isolated when both of its ends are free and no cell orthogonally
/// adjacent to any of its letters holds a letter.
pub fn is_isolated(placement: &Placement, grid: &Grid) -> bool {
    if !ends_are_isolated(placement, grid) {
        return false;
    }
    let (dr, dc) = placement.direction().perpendicular().step();
    placement.cells().all(|(row, col, _)| {
        let (r, c) = (row as isize, col as isize);
        !grid.is_filled(r - dr, c - dc) && !grid.is_filled(r + dr, c + dc)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::placement::Direction;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().copied())
    }

    fn grid_with(rows: usize, cols: usize, placements: &[Placement]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for p in placements {
            grid.write(p);
        }
        grid
    }

    mod geometric_rules {
        use super::*;

        #[test]
        fn out_of_bounds_span_is_rejected() {
            let grid = Grid::new(5, 5);
            let dict = dictionary(&["HOUSE", "HOUSES"]);
            let placement = Placement::new("HOUSES", 0, 0, Direction::Across);
            assert_eq!(
                validate(&placement, &grid, &dict),
                Validation::Rejected(Rejection::OutOfBounds)
            );
            let fits = Placement::new("HOUSE", 0, 0, Direction::Down);
            assert!(validate(&fits, &grid, &dict).is_accepted());
        }

        #[test]
        fn mismatched_letter_is_a_collision() {
            let cat = Placement::new("CAT", 0, 0, Direction::Across);
            let grid = grid_with(10, 10, &[cat]);
            let dog = Placement::new("DOG", 0, 0, Direction::Down);
            assert_eq!(
                validate(&dog, &grid, &dictionary(&["CAT", "DOG"])),
                Validation::Rejected(Rejection::Collision { row: 0, col: 0 })
            );
        }

        #[test]
        fn crossing_on_shared_letter_is_accepted_without_incidental_words() {
            let dict = dictionary(&["CAT", "CAR", "ARC", "TAR"]);
            let mut grid = Grid::new(10, 10);

            let cat = Placement::new("CAT", 0, 0, Direction::Across);
            assert_eq!(validate(&cat, &grid, &dict), Validation::Accepted(vec![]));
            grid.write(&cat);

            let car = Placement::new("CAR", 0, 0, Direction::Down);
            assert_eq!(validate(&car, &grid, &dict), Validation::Accepted(vec![]));
            grid.write(&car);

            assert_eq!(grid.cell_at(0, 0), Cell::Letter('C'));
            assert_eq!(grid.cell_at(0, 1), Cell::Letter('A'));
            assert_eq!(grid.cell_at(0, 2), Cell::Letter('T'));
            assert_eq!(grid.cell_at(1, 0), Cell::Letter('A'));
            assert_eq!(grid.cell_at(2, 0), Cell::Letter('R'));
        }

        #[test]
        fn word_running_into_a_letter_is_rejected_and_grid_unchanged() {
            let dict = dictionary(&["CAT", "CAR"]);
            let grid = grid_with(10, 10, &[Placement::new("CAT", 0, 3, Direction::Across)]);
            let before = grid.clone();

            let car = Placement::new("CAR", 0, 0, Direction::Across);
            assert_eq!(
                validate(&car, &grid, &dict),
                Validation::Rejected(Rejection::EndNotIsolated { row: 0, col: 3 })
            );
            assert_eq!(grid, before);
        }

        #[test]
        fn letter_before_start_blocks_placement() {
            let dict = dictionary(&["CAT", "TAR"]);
            let grid = grid_with(10, 10, &[Placement::new("CAT", 0, 0, Direction::Down)]);
            let tar = Placement::new("TAR", 3, 0, Direction::Down);
            assert_eq!(
                validate(&tar, &grid, &dict),
                Validation::Rejected(Rejection::EndNotIsolated { row: 2, col: 0 })
            );
        }

        #[test]
        fn span_swallowing_a_parallel_word_is_rejected() {
            let dict = dictionary(&["CAT", "SCAT"]);
            let grid = grid_with(6, 6, &[Placement::new("CAT", 0, 1, Direction::Across)]);
            let scat = Placement::new("SCAT", 0, 0, Direction::Across);
            assert_eq!(
                validate(&scat, &grid, &dict),
                Validation::Rejected(Rejection::ExtendsExistingWord { row: 0, col: 1 })
            );
        }

        #[test]
        fn grid_edges_count_as_free_ends() {
            let dict = dictionary(&["ABC"]);
            let grid = Grid::new(3, 3);
            let corner = Placement::new("ABC", 0, 0, Direction::Across);
            assert!(ends_are_isolated(&corner, &grid));
            assert!(validate(&corner, &grid, &dict).is_accepted());
        }
    }

    mod crossing_words {
        use super::*;

        #[test]
        fn adjacent_parallel_word_forms_valid_crossings() {
            // Row 0: "AT", placing "NO" below it forms "AN" and "TO" downwards.
            let dict = dictionary(&["AT", "NO", "AN", "TO"]);
            let grid = grid_with(5, 5, &[Placement::new("AT", 0, 0, Direction::Across)]);
            let no = Placement::new("NO", 1, 0, Direction::Across);

            assert_eq!(
                validate(&no, &grid, &dict),
                Validation::Accepted(vec![
                    Placement::new("AN", 0, 0, Direction::Down),
                    Placement::new("TO", 0, 1, Direction::Down),
                ])
            );
        }

        #[test]
        fn single_invalid_crossing_rejects_the_whole_placement() {
            let dict = dictionary(&["AT", "NX", "AN"]);
            let grid = grid_with(5, 5, &[Placement::new("AT", 0, 0, Direction::Across)]);
            let nx = Placement::new("NX", 1, 0, Direction::Across);

            assert_eq!(
                validate(&nx, &grid, &dict),
                Validation::Rejected(Rejection::InvalidCrossing {
                    word: "TX".to_string()
                })
            );
        }

        #[test]
        fn crossing_word_is_read_through_both_sides() {
            // Letters above and below an empty cell: "B" at (0, 1) and "D" at (2, 1).
            let dict = dictionary(&["BAD", "OBI", "ODE", "CAN"]);
            let grid = grid_with(
                5,
                5,
                &[
                    Placement::new("OBI", 0, 0, Direction::Across),
                    Placement::new("ODE", 2, 0, Direction::Across),
                ],
            );
            let can = Placement::new("CAN", 1, 0, Direction::Across);
            let result = validate(&can, &grid, &dict);
            // "OCO" is not a word, so the first column already fails.
            assert_eq!(
                result,
                Validation::Rejected(Rejection::InvalidCrossing {
                    word: "OCO".to_string()
                })
            );

            let dict = dictionary(&["BAD", "OBI", "ODE", "OCO", "BAD", "INE", "CAN"]);
            let result = validate(&can, &grid, &dict);
            assert_eq!(
                result,
                Validation::Accepted(vec![
                    Placement::new("OCO", 0, 0, Direction::Down),
                    Placement::new("BAD", 0, 1, Direction::Down),
                    Placement::new("INE", 0, 2, Direction::Down),
                ])
            );
        }

        #[test]
        fn touching_a_word_end_on_is_checked_as_a_crossing() {
            let dict = dictionary(&["CAT", "ART", "AT"]);
            let grid = grid_with(6, 6, &[Placement::new("CAT", 2, 3, Direction::Down)]);
            // The "T" of "ART" would sit directly above the "C" of "CAT".
            let art = Placement::new("ART", 1, 1, Direction::Across);
            assert_eq!(
                validate(&art, &grid, &dict),
                Validation::Rejected(Rejection::ExtendsExistingWord { row: 1, col: 3 })
            );

            let at = Placement::new("AT", 3, 4, Direction::Down);
            // "A" at (3,4) sits right of "A" at (3,3): crossing "AA" is not a word.
            assert_eq!(
                validate(&at, &grid, &dict),
                Validation::Rejected(Rejection::InvalidCrossing {
                    word: "AA".to_string()
                })
            );
        }

        #[test]
        fn lengthening_an_existing_word_is_rejected_even_if_valid() {
            let dict = dictionary(&["CAT", "CATS", "SOW"]);
            let grid = grid_with(6, 6, &[Placement::new("CAT", 0, 0, Direction::Down)]);
            let sow = Placement::new("SOW", 3, 0, Direction::Across);
            // SOW's own ends are free, but its first letter continues the CAT column.
            assert_eq!(
                validate(&sow, &grid, &dict),
                Validation::Rejected(Rejection::ExtendsExistingWord { row: 3, col: 0 })
            );
        }

        #[test]
        fn already_filled_cells_do_not_form_new_crossings() {
            let dict = dictionary(&["CAT", "CAR", "TEN"]);
            let grid = grid_with(
                6,
                6,
                &[
                    Placement::new("CAT", 0, 0, Direction::Across),
                    Placement::new("CAR", 0, 0, Direction::Down),
                ],
            );
            let ten = Placement::new("TEN", 0, 2, Direction::Down);
            assert_eq!(validate(&ten, &grid, &dict), Validation::Accepted(vec![]));
        }
    }

    mod isolation {
        use super::*;

        #[test]
        fn lone_word_is_isolated() {
            let lone = Placement::new("LONE", 4, 4, Direction::Across);
            let grid = grid_with(10, 10, &[lone.clone()]);
            assert!(is_isolated(&lone, &grid));
        }

        #[test]
        fn crossed_words_are_not_isolated() {
            let cat = Placement::new("CAT", 0, 0, Direction::Across);
            let car = Placement::new("CAR", 0, 0, Direction::Down);
            let grid = grid_with(10, 10, &[cat.clone(), car.clone()]);
            assert!(!is_isolated(&cat, &grid));
            assert!(!is_isolated(&car, &grid));
        }

        #[test]
        fn letter_beside_span_breaks_isolation() {
            let word = Placement::new("WORD", 2, 2, Direction::Across);
            let other = Placement::new("ZAP", 3, 5, Direction::Across);
            let grid = grid_with(10, 10, &[word.clone(), other]);
            assert!(!is_isolated(&word, &grid));
        }
    }
}
