use crossgrid::core::io::wordlist::WordFilter;
use crossgrid::engine::config::SearchConfig;

/// Values used when neither the command line nor the config file sets a parameter.
///
/// Search and word filter settings come from the library's own defaults.
pub struct DefaultsConfig {
    pub rows: usize,
    pub cols: usize,
    pub passes: usize,
    pub timeout_secs: f64,
    pub occupancy_goal: f64,
    pub search: SearchConfig,
    pub filter: WordFilter,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            passes: 3,
            timeout_secs: 5.0,
            occupancy_goal: 0.6,
            search: SearchConfig::default(),
            filter: WordFilter::default(),
        }
    }
}
