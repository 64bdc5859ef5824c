use super::config::SearchConfig;
use super::progress::ProgressReporter;
use crate::core::models::lexicon::Dictionary;

/// Read-only inputs shared by every iteration of a fill pass.
#[derive(Clone, Copy)]
pub struct FillContext<'a> {
    pub dictionary: &'a Dictionary,
    pub search: &'a SearchConfig,
    pub occupancy_goal: f64,
    pub reporter: &'a ProgressReporter<'a>,
}

impl<'a> FillContext<'a> {
    pub fn new(
        dictionary: &'a Dictionary,
        search: &'a SearchConfig,
        occupancy_goal: f64,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            dictionary,
            search,
            occupancy_goal,
            reporter,
        }
    }
}
