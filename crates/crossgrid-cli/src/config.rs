mod defaults;

use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crossgrid::core::io::wordlist::WordFilter;
use crossgrid::engine::config as core_config;
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGridConfig {
    rows: Option<usize>,
    cols: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGenerationConfig {
    passes: Option<usize>,
    #[serde(rename = "timeout-secs")]
    timeout_secs: Option<f64>,
    #[serde(rename = "occupancy-goal")]
    occupancy_goal: Option<f64>,
    seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSearchConfig {
    #[serde(rename = "max-attempts")]
    max_attempts: Option<usize>,
    #[serde(rename = "tournament-trials")]
    tournament_trials: Option<usize>,
    #[serde(rename = "crossing-weight")]
    crossing_weight: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialWordsConfig {
    #[serde(rename = "min-length")]
    min_length: Option<usize>,
    #[serde(rename = "min-distinct-letters")]
    min_distinct_letters: Option<usize>,
    sample: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialGeneratorConfig {
    grid: Option<PartialGridConfig>,
    generation: Option<PartialGenerationConfig>,
    search: Option<PartialSearchConfig>,
    words: Option<PartialWordsConfig>,
}

/// Fully resolved settings for one `generate` run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub generator: core_config::GeneratorConfig,
    pub filter: WordFilter,
    pub sample: Option<usize>,
}

impl PartialGeneratorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts empty when there is none.
    pub fn load(args: &GenerateArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &GenerateArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let grid = self.grid.take().unwrap_or_default();
        let generation = self.generation.take().unwrap_or_default();
        let search = self.search.take().unwrap_or_default();
        let words = self.words.take().unwrap_or_default();

        let timeout_secs = args
            .timeout
            .or(generation.timeout_secs)
            .unwrap_or(defaults.timeout_secs);
        let per_pass_timeout = Duration::try_from_secs_f64(timeout_secs).map_err(|_| {
            CliError::Config(format!(
                "`generation.timeout-secs` must be a non-negative number of seconds, got {}",
                timeout_secs
            ))
        })?;

        let generator = core_config::GeneratorConfigBuilder::new()
            .dimensions(
                args.rows.or(grid.rows).unwrap_or(defaults.rows),
                args.cols.or(grid.cols).unwrap_or(defaults.cols),
            )
            .pass_count(args.passes.or(generation.passes).unwrap_or(defaults.passes))
            .per_pass_timeout(per_pass_timeout)
            .occupancy_goal(
                args.occupancy
                    .or(generation.occupancy_goal)
                    .unwrap_or(defaults.occupancy_goal),
            )
            .max_attempts(search.max_attempts.unwrap_or(defaults.search.max_attempts))
            .tournament_trials(
                search
                    .tournament_trials
                    .unwrap_or(defaults.search.tournament_trials),
            )
            .crossing_weight(search.crossing_weight.unwrap_or(defaults.search.crossing_weight))
            .seed(args.seed.or(generation.seed))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let filter = WordFilter {
            min_length: words.min_length.unwrap_or(defaults.filter.min_length),
            min_distinct_letters: words
                .min_distinct_letters
                .unwrap_or(defaults.filter.min_distinct_letters),
        };

        let sample = args.sample.or(words.sample);
        if sample == Some(0) {
            return Err(CliError::Config(
                "`words.sample` must be at least 1".to_string(),
            ));
        }

        Ok(AppConfig {
            generator,
            filter,
            sample,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "grid.rows" => {
                    self.grid.get_or_insert_with(Default::default).rows =
                        Some(parse_value(key, value_str)?);
                }
                "grid.cols" => {
                    self.grid.get_or_insert_with(Default::default).cols =
                        Some(parse_value(key, value_str)?);
                }
                "generation.passes" => {
                    self.generation.get_or_insert_with(Default::default).passes =
                        Some(parse_value(key, value_str)?);
                }
                "generation.timeout-secs" => {
                    self.generation
                        .get_or_insert_with(Default::default)
                        .timeout_secs = Some(parse_value(key, value_str)?);
                }
                "generation.occupancy-goal" => {
                    self.generation
                        .get_or_insert_with(Default::default)
                        .occupancy_goal = Some(parse_value(key, value_str)?);
                }
                "generation.seed" => {
                    self.generation.get_or_insert_with(Default::default).seed =
                        Some(parse_value(key, value_str)?);
                }
                "search.max-attempts" => {
                    self.search.get_or_insert_with(Default::default).max_attempts =
                        Some(parse_value(key, value_str)?);
                }
                "search.tournament-trials" => {
                    self.search
                        .get_or_insert_with(Default::default)
                        .tournament_trials = Some(parse_value(key, value_str)?);
                }
                "search.crossing-weight" => {
                    self.search
                        .get_or_insert_with(Default::default)
                        .crossing_weight = Some(parse_value(key, value_str)?);
                }
                "words.min-length" => {
                    self.words.get_or_insert_with(Default::default).min_length =
                        Some(parse_value(key, value_str)?);
                }
                "words.min-distinct-letters" => {
                    self.words
                        .get_or_insert_with(Default::default)
                        .min_distinct_letters = Some(parse_value(key, value_str)?);
                }
                "words.sample" => {
                    self.words.get_or_insert_with(Default::default).sample =
                        Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            std::any::type_name::<T>(),
            key,
            value
        ))
    })
}
