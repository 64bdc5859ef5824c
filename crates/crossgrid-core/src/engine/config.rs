use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Grid dimensions must be positive with a representable cell count, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Pass count must be at least 1")]
    ZeroPassCount,

    #[error("Occupancy goal must lie in (0, 1], got {0}")]
    InvalidOccupancyGoal(f64),

    #[error("Search attempt budget must be at least 1")]
    ZeroAttemptBudget,
}

/// Tuning knobs for the tournament candidate search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Samples drawn while looking for the first valid candidate before giving up.
    pub max_attempts: usize,
    /// Extra samples drawn after the first valid candidate to fill the tournament.
    pub tournament_trials: usize,
    /// Score bonus per crossing word; should exceed the longest word length so that
    /// crossings dominate raw length.
    pub crossing_weight: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            tournament_trials: 100,
            crossing_weight: 10,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttemptBudget);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub pass_count: usize,
    pub per_pass_timeout: Duration,
    pub occupancy_goal: f64,
    pub search: SearchConfig,
    /// Seed for the random number generator; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Checks every constraint on the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.pass_count == 0 {
            return Err(ConfigError::ZeroPassCount);
        }
        if !(self.occupancy_goal > 0.0 && self.occupancy_goal <= 1.0) {
            return Err(ConfigError::InvalidOccupancyGoal(self.occupancy_goal));
        }
        self.search.validate()
    }
}

#[derive(Default)]
pub struct GeneratorConfigBuilder {
    rows: Option<usize>,
    cols: Option<usize>,
    pass_count: Option<usize>,
    per_pass_timeout: Option<Duration>,
    occupancy_goal: Option<f64>,
    max_attempts: Option<usize>,
    tournament_trials: Option<usize>,
    crossing_weight: Option<usize>,
    seed: Option<u64>,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = Some(rows);
        self.cols = Some(cols);
        self
    }
    pub fn pass_count(mut self, passes: usize) -> Self {
        self.pass_count = Some(passes);
        self
    }
    pub fn per_pass_timeout(mut self, timeout: Duration) -> Self {
        self.per_pass_timeout = Some(timeout);
        self
    }
    pub fn occupancy_goal(mut self, goal: f64) -> Self {
        self.occupancy_goal = Some(goal);
        self
    }
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
    pub fn tournament_trials(mut self, trials: usize) -> Self {
        self.tournament_trials = Some(trials);
        self
    }
    pub fn crossing_weight(mut self, weight: usize) -> Self {
        self.crossing_weight = Some(weight);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let defaults = SearchConfig::default();
        let config = GeneratorConfig {
            rows: self.rows.ok_or(ConfigError::MissingParameter("rows"))?,
            cols: self.cols.ok_or(ConfigError::MissingParameter("cols"))?,
            pass_count: self
                .pass_count
                .ok_or(ConfigError::MissingParameter("pass_count"))?,
            per_pass_timeout: self
                .per_pass_timeout
                .ok_or(ConfigError::MissingParameter("per_pass_timeout"))?,
            occupancy_goal: self
                .occupancy_goal
                .ok_or(ConfigError::MissingParameter("occupancy_goal"))?,
            search: SearchConfig {
                max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
                tournament_trials: self.tournament_trials.unwrap_or(defaults.tournament_trials),
                crossing_weight: self.crossing_weight.unwrap_or(defaults.crossing_weight),
            },
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
