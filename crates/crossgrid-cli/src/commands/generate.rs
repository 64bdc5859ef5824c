use crate::cli::GenerateArgs;
use crate::config::{AppConfig, PartialGeneratorConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crossgrid::core::io::latex::LatexDocument;
use crossgrid::core::io::text::TextGrid;
use crossgrid::core::io::traits::GridWriter;
use crossgrid::core::io::wordlist;
use crossgrid::core::models::placement::{Direction, PlacementRecord, Provenance};
use crossgrid::engine::progress::ProgressReporter;
use crossgrid::workflows::generate::{self, GenerationResult, PassReport};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info, warn};

const TEX_JOB_NAME: &str = "crossgrid";

pub fn run(args: GenerateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = PartialGeneratorConfig::load(&args)?.merge_with_cli(&args)?;
    debug!("Resolved configuration: {:?}", config);

    let words = load_words(&args.words, &config)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Generating a {}x{} grid from {} words...",
        config.generator.rows,
        config.generator.cols,
        words.len()
    );
    info!("Invoking the core generation workflow...");
    let result = generate::run(words, &config.generator, &reporter)?;

    info!(
        "Workflow finished with {} word(s) at {:.1}% occupancy.",
        result.words.len(),
        result.occupancy() * 100.0
    );
    if result.words.is_empty() {
        warn!("Generation finished but no word survived culling.");
        println!("Warning: no words could be placed on the grid.");
    }

    if !args.no_screen {
        let stdout = std::io::stdout();
        TextGrid::default().write_to(&result.grid, &result.words, &mut stdout.lock())?;
    }

    if let Some(path) = &args.tex {
        info!("Writing LaTeX document to {:?}", path);
        LatexDocument::default().write_to_path(&result.grid, &result.words, path)?;
        println!("✓ LaTeX document written to: {}", path.display());
    }

    if let Some(path) = &args.pdf {
        compile_pdf(&result, path)?;
        println!("✓ PDF written to: {}", path.display());
    }

    if let Some(path) = &args.export {
        info!("Exporting result to {:?}", path);
        std::fs::write(path, export_toml(&result)?)?;
        println!("✓ Result exported to: {}", path.display());
    }

    Ok(())
}

fn load_words(path: &Path, config: &AppConfig) -> Result<Vec<String>> {
    let words =
        wordlist::read_from_path(path, &config.filter).map_err(|source| CliError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Loaded {} usable word(s) from {:?}", words.len(), path);

    let Some(count) = config.sample else {
        return Ok(words);
    };
    let mut rng = match config.generator.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sample = wordlist::draw_sample(words, count, &mut rng);
    debug!("Sampled {} word(s) from the list.", sample.len());
    Ok(sample)
}

/// Typesets the puzzle with `pdflatex` in a scratch directory and copies the PDF to
/// `output`.
fn compile_pdf(result: &GenerationResult, output: &Path) -> Result<()> {
    let scratch = tempfile::tempdir()?;
    let tex_path = scratch.path().join(format!("{TEX_JOB_NAME}.tex"));
    LatexDocument::default().write_to_path(&result.grid, &result.words, &tex_path)?;

    info!("Compiling {:?} with pdflatex...", tex_path);
    let outcome = Command::new("pdflatex")
        .arg("-interaction=nonstopmode")
        .arg("-halt-on-error")
        .arg(format!("-jobname={TEX_JOB_NAME}"))
        .arg(&tex_path)
        .current_dir(scratch.path())
        .output()
        .map_err(|e| CliError::Compile(format!("could not run pdflatex: {e}")))?;

    if !outcome.status.success() {
        let log = String::from_utf8_lossy(&outcome.stdout);
        debug!("pdflatex output:\n{}", log);
        return Err(CliError::Compile(format!(
            "pdflatex exited with {}",
            outcome.status
        )));
    }

    std::fs::copy(scratch.path().join(format!("{TEX_JOB_NAME}.pdf")), output)?;
    Ok(())
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    occupancy: f64,
    grid: ExportGrid,
    words: Vec<ExportWord<'a>>,
    passes: &'a [PassReport],
}

#[derive(Serialize)]
struct ExportGrid {
    rows: usize,
    cols: usize,
    /// One string per row, `.` marking empty cells.
    lines: Vec<String>,
}

#[derive(Serialize)]
struct ExportWord<'a> {
    word: &'a str,
    row: usize,
    col: usize,
    direction: Direction,
    provenance: Provenance,
}

impl<'a> From<&'a PlacementRecord> for ExportWord<'a> {
    fn from(record: &'a PlacementRecord) -> Self {
        let (row, col) = record.placement.origin();
        Self {
            word: record.word(),
            row,
            col,
            direction: record.placement.direction(),
            provenance: record.provenance,
        }
    }
}

fn export_toml(result: &GenerationResult) -> Result<String> {
    let lines = result
        .grid
        .iter_rows()
        .map(|row| row.iter().map(|cell| cell.letter().unwrap_or('.')).collect())
        .collect();
    let document = ExportDocument {
        occupancy: result.occupancy(),
        grid: ExportGrid {
            rows: result.grid.rows(),
            cols: result.grid.cols(),
            lines,
        },
        words: result.words.iter().map(ExportWord::from).collect(),
        passes: &result.passes,
    };
    toml::to_string(&document).map_err(|e| CliError::Other(e.into()))
}
