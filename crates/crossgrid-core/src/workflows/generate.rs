use crate::core::models::grid::Grid;
use crate::core::models::lexicon::WordPool;
use crate::core::models::placement::PlacementRecord;
use crate::engine::config::GeneratorConfig;
use crate::engine::context::FillContext;
use crate::engine::cull::{cull_isolated, rebuild};
use crate::engine::error::EngineError;
use crate::engine::fill::fill;
use crate::engine::progress::{Progress, ProgressReporter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Statistics for one fill/cull/rebuild pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PassReport {
    /// One-based pass number.
    pub pass: usize,
    /// Records committed by the fill loop, chosen and incidental.
    pub placed: usize,
    /// Records removed as isolated at the end of the pass.
    pub culled: usize,
    /// Occupancy of the rebuilt grid.
    pub occupancy: f64,
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub grid: Grid,
    /// Surviving records in commit order.
    pub words: Vec<PlacementRecord>,
    pub passes: Vec<PassReport>,
}

impl GenerationResult {
    pub fn occupancy(&self) -> f64 {
        self.grid.occupancy()
    }
}

/// Builds a grid from `words` using the settings in `config`.
///
/// The random number generator is seeded from `config.seed` when present, otherwise from
/// the operating system.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if `config` is invalid and
/// [`EngineError::EmptyWordPool`] if `words` holds no usable word. Both are checked
/// before any work is done.
#[instrument(skip_all, name = "generation_workflow")]
pub fn run(
    words: Vec<String>,
    config: &GeneratorConfig,
    reporter: &ProgressReporter,
) -> Result<GenerationResult, EngineError> {
    config.validate()?;
    let pool = WordPool::new(words);
    if pool.is_empty() {
        return Err(EngineError::EmptyWordPool);
    }

    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "Using seeded random number generator.");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    Ok(run_with_pool(pool, config, reporter, &mut rng))
}

/// Runs the refinement passes with a caller-supplied random number generator.
///
/// `config` must already be valid.
pub fn run_with_pool<R: Rng + ?Sized>(
    mut pool: WordPool,
    config: &GeneratorConfig,
    reporter: &ProgressReporter,
    rng: &mut R,
) -> GenerationResult {
    let dictionary = pool.to_dictionary();
    let context = FillContext::new(&dictionary, &config.search, config.occupancy_goal, reporter);

    info!(
        rows = config.rows,
        cols = config.cols,
        words = pool.len(),
        passes = config.pass_count,
        "Starting grid generation."
    );

    let mut grid = Grid::new(config.rows, config.cols);
    let mut records: Vec<PlacementRecord> = Vec::new();
    let mut passes = Vec::with_capacity(config.pass_count);

    for pass in 1..=config.pass_count {
        reporter.report(Progress::PhaseStart { name: "Fill" });
        let placed = fill(&mut grid, &mut pool, &context, config.per_pass_timeout, rng);
        reporter.report(Progress::PhaseFinish);
        if placed.is_empty() {
            warn!(pass, "Fill loop placed no words in this pass.");
        }
        let placed_count = placed.len();
        records.extend(placed);

        reporter.report(Progress::PhaseStart { name: "Cull" });
        let culled = cull_isolated(&mut records, &grid);
        grid = rebuild(config.rows, config.cols, &records);
        reporter.report(Progress::PhaseFinish);

        let report = PassReport {
            pass,
            placed: placed_count,
            culled: culled.len(),
            occupancy: grid.occupancy(),
        };
        info!(
            pass,
            placed = report.placed,
            culled = report.culled,
            occupancy = report.occupancy,
            remaining_words = pool.len(),
            "Pass complete."
        );
        reporter.report(Progress::Message(format!(
            "Pass {pass}: {} placed, {} culled, {:.1}% filled",
            report.placed,
            report.culled,
            report.occupancy * 100.0
        )));
        passes.push(report);
    }

    info!(
        words = records.len(),
        occupancy = grid.occupancy(),
        "Grid generation finished."
    );

    GenerationResult {
        grid,
        words: records,
        passes,
    }
}
