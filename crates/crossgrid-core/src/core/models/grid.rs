use super::placement::{Direction, Placement};

/// The content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Letter(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(c) => Some(c),
        }
    }
}

/// A fixed-size rectangular array of cells.
///
/// Reads are bounds-safe: any coordinate outside the grid, including negative ones,
/// reads as [`Cell::Empty`]. Writes are not: writing a placement that does not fit is a
/// caller contract violation and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell storage.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns whether the coordinate lies inside the grid.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Reads a cell, returning [`Cell::Empty`] for out-of-bounds coordinates.
    pub fn cell_at(&self, row: isize, col: isize) -> Cell {
        if self.contains(row, col) {
            self.cells[row as usize * self.cols + col as usize]
        } else {
            Cell::Empty
        }
    }

    /// Shorthand for `!self.cell_at(row, col).is_empty()`.
    pub fn is_filled(&self, row: isize, col: isize) -> bool {
        !self.cell_at(row, col).is_empty()
    }

    /// Copies the letters of `placement` into its span.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie entirely within the grid. Callers are expected to
    /// have validated the placement first.
    pub fn write(&mut self, placement: &Placement) {
        assert!(
            placement.fits_within(self.rows, self.cols),
            "placement {} does not fit a {}x{} grid",
            placement,
            self.rows,
            self.cols
        );
        for (row, col, letter) in placement.cells() {
            self.cells[row * self.cols + col] = Cell::Letter(letter);
        }
    }

    /// Number of cells holding a letter.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Fraction of cells holding a letter, in `[0, 1]`. An empty-area grid reports 0.
    pub fn occupancy(&self) -> f64 {
        let total = self.cells.len();
        if total == 0 {
            return 0.0;
        }
        self.filled_count() as f64 / total as f64
    }

    /// Returns the cells of one row.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over rows from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Enumerates every maximal run of two or more letters, rows first (Across) and then
    /// columns (Down).
    pub fn runs(&self) -> Vec<Placement> {
        let mut runs = Vec::new();
        for r in 0..self.rows {
            self.collect_runs((r, 0), Direction::Across, self.cols, &mut runs);
        }
        for c in 0..self.cols {
            self.collect_runs((0, c), Direction::Down, self.rows, &mut runs);
        }
        runs
    }

    fn collect_runs(
        &self,
        start: (usize, usize),
        direction: Direction,
        length: usize,
        runs: &mut Vec<Placement>,
    ) {
        let (dr, dc) = direction.step();
        let mut current = String::new();
        let mut origin = start;

        for k in 0..=length {
            let row = start.0 as isize + dr * k as isize;
            let col = start.1 as isize + dc * k as isize;
            match self.cell_at(row, col) {
                Cell::Letter(letter) if k < length => {
                    if current.is_empty() {
                        origin = (row as usize, col as usize);
                    }
                    current.push(letter);
                }
                _ => {
                    if current.chars().count() >= 2 {
                        runs.push(Placement::new(
                            std::mem::take(&mut current),
                            origin.0,
                            origin.1,
                            direction,
                        ));
                    } else {
                        current.clear();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.occupancy(), 0.0);
        assert!(grid.iter_rows().all(|row| row.iter().all(|c| c.is_empty())));
    }

    #[test]
    fn out_of_bounds_reads_are_empty() {
        let mut grid = Grid::new(2, 2);
        grid.write(&Placement::new("AB", 0, 0, Direction::Across));
        grid.write(&Placement::new("AC", 0, 0, Direction::Down));

        assert_eq!(grid.cell_at(-1, 0), Cell::Empty);
        assert_eq!(grid.cell_at(0, -1), Cell::Empty);
        assert_eq!(grid.cell_at(2, 0), Cell::Empty);
        assert_eq!(grid.cell_at(0, 2), Cell::Empty);
        assert_eq!(grid.cell_at(isize::MIN, isize::MAX), Cell::Empty);
    }

    #[test]
    fn write_copies_letters_into_span() {
        let mut grid = Grid::new(3, 3);
        grid.write(&Placement::new("CAT", 0, 0, Direction::Across));
        grid.write(&Placement::new("CAR", 0, 0, Direction::Down));

        assert_eq!(grid.cell_at(0, 0), Cell::Letter('C'));
        assert_eq!(grid.cell_at(0, 2), Cell::Letter('T'));
        assert_eq!(grid.cell_at(2, 0), Cell::Letter('R'));
        assert_eq!(grid.cell_at(1, 1), Cell::Empty);
        assert_eq!(grid.filled_count(), 5);
        assert!((grid.occupancy() - 5.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn write_out_of_bounds_panics() {
        let mut grid = Grid::new(3, 3);
        grid.write(&Placement::new("CATS", 0, 0, Direction::Across));
    }

    #[test]
    fn runs_lists_maximal_sequences_in_both_directions() {
        let mut grid = Grid::new(4, 4);
        grid.write(&Placement::new("CAT", 0, 0, Direction::Across));
        grid.write(&Placement::new("CAR", 0, 0, Direction::Down));
        grid.write(&Placement::new("TO", 0, 2, Direction::Down));

        let runs = grid.runs();
        assert_eq!(runs.len(), 3);
        assert!(runs.contains(&Placement::new("CAT", 0, 0, Direction::Across)));
        assert!(runs.contains(&Placement::new("CAR", 0, 0, Direction::Down)));
        assert!(runs.contains(&Placement::new("TO", 0, 2, Direction::Down)));
    }

    #[test]
    fn runs_reach_the_last_row_and_column() {
        let mut grid = Grid::new(3, 3);
        grid.write(&Placement::new("ON", 2, 1, Direction::Across));
        grid.write(&Placement::new("AN", 1, 2, Direction::Down));

        let runs = grid.runs();
        assert!(runs.contains(&Placement::new("ON", 2, 1, Direction::Across)));
        assert!(runs.contains(&Placement::new("AN", 1, 2, Direction::Down)));
    }

    #[test]
    fn row_returns_row_major_slice() {
        let mut grid = Grid::new(2, 3);
        grid.write(&Placement::new("DOG", 1, 0, Direction::Across));
        let letters: String = grid.row(1).iter().filter_map(|c| c.letter()).collect();
        assert_eq!(letters, "DOG");
        assert!(grid.row(0).iter().all(|c| c.is_empty()));
    }
}
