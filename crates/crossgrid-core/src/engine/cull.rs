use super::validation::is_isolated;
use crate::core::models::grid::Grid;
use crate::core::models::placement::PlacementRecord;
use tracing::debug;

/// Removes every record whose word touches no other letter in `grid`.
///
/// Isolation is decided for all records against the same grid before any record is
/// removed. The surviving records keep their relative order; the removed ones are
/// returned in their original order.
pub fn cull_isolated(records: &mut Vec<PlacementRecord>, grid: &Grid) -> Vec<PlacementRecord> {
    let isolated: Vec<bool> = records
        .iter()
        .map(|record| is_isolated(&record.placement, grid))
        .collect();

    let mut culled = Vec::new();
    let mut kept = Vec::with_capacity(records.len());
    for (record, isolated) in records.drain(..).zip(isolated) {
        if isolated {
            culled.push(record);
        } else {
            kept.push(record);
        }
    }
    *records = kept;

    debug!(
        kept = records.len(),
        culled = culled.len(),
        "Isolated words culled."
    );
    culled
}

/// Builds a fresh grid containing exactly the letters of `records`.
pub fn rebuild(rows: usize, cols: usize, records: &[PlacementRecord]) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for record in records {
        grid.write(&record.placement);
    }
    grid
}
