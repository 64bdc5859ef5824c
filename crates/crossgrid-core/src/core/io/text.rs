use super::traits::GridWriter;
use crate::core::models::grid::{Cell, Grid};
use crate::core::models::placement::{PlacementRecord, Provenance};
use std::io::{self, Write};

/// Plain-text rendering for terminals: one line per row, then one line per word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextGrid {
    /// Character printed for empty cells.
    pub empty: char,
    /// Whether to list the words below the grid.
    pub list_words: bool,
}

impl Default for TextGrid {
    fn default() -> Self {
        Self {
            empty: '.',
            list_words: true,
        }
    }
}

impl GridWriter for TextGrid {
    fn write_to(
        &self,
        grid: &Grid,
        words: &[PlacementRecord],
        writer: &mut impl Write,
    ) -> io::Result<()> {
        for row in grid.iter_rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => self.empty.to_string(),
                    Cell::Letter(c) => c.to_string(),
                })
                .collect();
            writeln!(writer, "{}", line.join(" "))?;
        }

        if self.list_words {
            writeln!(writer)?;
            writeln!(writer, "Words ({}):", words.len())?;
            for record in words {
                let tag = match record.provenance {
                    Provenance::Chosen => "",
                    Provenance::Incidental => " (crossing)",
                };
                writeln!(writer, "  {}{}", record.placement, tag)?;
            }
        }
        Ok(())
    }
}
