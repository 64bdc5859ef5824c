use crate::core::models::grid::Grid;
use crate::core::models::placement::PlacementRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for rendering a finished grid.
///
/// Implementors only decide the output format; the grid and its records are read through
/// the bounds-safe accessors of [`Grid`], so renderers never need to know how the grid
/// was built.
pub trait GridWriter {
    /// Writes the grid and the words it contains to a writer.
    ///
    /// # Arguments
    ///
    /// * `grid` - The grid to render.
    /// * `words` - The records of every word on the grid.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    fn write_to(
        &self,
        grid: &Grid,
        words: &[PlacementRecord],
        writer: &mut impl Write,
    ) -> io::Result<()>;

    /// Writes the grid and its words to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        &self,
        grid: &Grid,
        words: &[PlacementRecord],
        path: P,
    ) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(grid, words, &mut writer)?;
        writer.flush()
    }

    /// Renders to an in-memory string.
    fn render(&self, grid: &Grid, words: &[PlacementRecord]) -> String {
        let mut buffer = Vec::new();
        self.write_to(grid, words, &mut buffer)
            .expect("writing to a Vec<u8> cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
