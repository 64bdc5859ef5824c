use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "crossgrid - builds dense crossword-style letter grids from a word list and typesets them as printable puzzles.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a grid from a word list and write it to the screen, LaTeX, PDF or TOML.
    Generate(GenerateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    // --- Input ---
    /// Path to the word list, one word per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub words: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use only a random sample of this many words from the list.
    #[arg(long, value_name = "INT")]
    pub sample: Option<usize>,

    // --- Grid and Generation Overrides ---
    /// Number of grid rows.
    #[arg(long, value_name = "INT")]
    pub rows: Option<usize>,

    /// Number of grid columns.
    #[arg(long, value_name = "INT")]
    pub cols: Option<usize>,

    /// Number of fill/cull/rebuild passes.
    #[arg(short = 'n', long, value_name = "INT")]
    pub passes: Option<usize>,

    /// Time budget for each fill pass, in seconds.
    #[arg(short = 't', long, value_name = "SECS")]
    pub timeout: Option<f64>,

    /// Fraction of cells to fill before a pass stops early, in (0, 1].
    #[arg(long, value_name = "FLOAT")]
    pub occupancy: Option<f64>,

    /// Seed for the random number generator, for reproducible grids.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    // --- Output ---
    /// Write the puzzle as a LaTeX document.
    #[arg(long, value_name = "PATH")]
    pub tex: Option<PathBuf>,

    /// Compile the puzzle to PDF with pdflatex.
    #[arg(long, value_name = "PATH")]
    pub pdf: Option<PathBuf>,

    /// Export the grid, words and pass statistics as TOML.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Do not print the grid to standard output.
    #[arg(long)]
    pub no_screen: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.crossing-weight=20
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(1))]
    pub set_values: Vec<String>,
}
