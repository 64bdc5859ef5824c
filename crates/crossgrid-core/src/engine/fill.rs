use super::context::FillContext;
use super::progress::Progress;
use super::search::{Candidate, search};
use crate::core::models::grid::Grid;
use crate::core::models::lexicon::WordPool;
use crate::core::models::placement::PlacementRecord;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Places words until the occupancy goal is met, the timeout elapses, or the pool runs
/// dry.
///
/// Each iteration runs one tournament; an iteration that finds nothing is simply retried,
/// so a grid that admits no further words spins until the timeout. The deadline is only
/// checked between iterations. Returns the records committed during this call, in
/// commit order.
#[instrument(level = "debug", skip_all, fields(goal = context.occupancy_goal))]
pub fn fill<R: Rng + ?Sized>(
    grid: &mut Grid,
    pool: &mut WordPool,
    context: &FillContext,
    timeout: Duration,
    rng: &mut R,
) -> Vec<PlacementRecord> {
    let started = Instant::now();
    let mut records = Vec::new();
    let mut idle_iterations = 0u64;

    while grid.occupancy() < context.occupancy_goal
        && started.elapsed() < timeout
        && !pool.is_empty()
    {
        match search(grid, pool, context.dictionary, context.search, rng) {
            Some(candidate) => {
                let before = records.len();
                let score = candidate.score;
                commit(grid, pool, candidate, &mut records);
                debug!(
                    word = records[before].word(),
                    score,
                    crossings = ?records[before + 1..]
                        .iter()
                        .map(PlacementRecord::word)
                        .collect::<Vec<_>>(),
                    occupancy = grid.occupancy(),
                    "Committed placement."
                );
                context.reporter.report(Progress::FillUpdate {
                    placed: records.len(),
                    occupancy: grid.occupancy(),
                });
            }
            None => idle_iterations += 1,
        }
    }

    debug!(
        placed = records.len(),
        idle_iterations,
        occupancy = grid.occupancy(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Fill loop stopped."
    );
    records
}

/// Writes a candidate into the grid and records it together with its crossing words.
///
/// The chosen word is recorded first. Every recorded string leaves the pool.
pub fn commit(
    grid: &mut Grid,
    pool: &mut WordPool,
    candidate: Candidate,
    records: &mut Vec<PlacementRecord>,
) {
    let Candidate {
        placement,
        incidental_words,
        ..
    } = candidate;

    grid.write(&placement);
    pool.remove(placement.word());
    records.push(PlacementRecord::chosen(placement));

    for incidental in incidental_words {
        grid.write(&incidental);
        pool.remove(incidental.word());
        records.push(PlacementRecord::incidental(incidental));
    }
}
