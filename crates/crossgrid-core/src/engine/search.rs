use super::config::SearchConfig;
use super::validation::{Validation, validate};
use crate::core::models::grid::Grid;
use crate::core::models::lexicon::{Dictionary, WordPool};
use crate::core::models::placement::{Direction, Placement};
use rand::Rng;
use std::collections::HashSet;
use tracing::{instrument, trace};

/// A validated, scored placement that has not been committed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub placement: Placement,
    pub score: usize,
    /// Crossing words the placement would create, in span order.
    pub incidental_words: Vec<Placement>,
}

/// Scores a candidate: its length plus `crossing_weight` per crossing word.
pub fn score(placement: &Placement, incidental_words: &[Placement], crossing_weight: usize) -> usize {
    placement.len() + crossing_weight * incidental_words.len()
}

/// Draws a placement with a uniformly random word, origin and direction.
///
/// Returns `None` only when the pool is empty or the grid has no cells.
pub fn random_placement<R: Rng + ?Sized>(grid: &Grid, pool: &WordPool, rng: &mut R) -> Option<Placement> {
    if grid.rows() == 0 || grid.cols() == 0 {
        return None;
    }
    let word = pool.sample(rng)?;
    let row = rng.gen_range(0..grid.rows());
    let col = rng.gen_range(0..grid.cols());
    let direction = if rng.r#gen::<bool>() {
        Direction::Across
    } else {
        Direction::Down
    };
    Some(Placement::new(word, row, col, direction))
}

/// Runs one tournament and returns its winner.
///
/// Samples until a valid candidate is found or `max_attempts` samples are spent, then
/// draws `tournament_trials` further samples. Every valid sample competes; the highest
/// score wins and ties go to the earliest. Returns `None` if the first phase found
/// nothing.
#[instrument(level = "debug", skip_all, fields(pool = pool.len()))]
pub fn search<R: Rng + ?Sized>(
    grid: &Grid,
    pool: &WordPool,
    dictionary: &Dictionary,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Candidate> {
    let mut best = None;
    for _ in 0..config.max_attempts {
        if let Some(candidate) = evaluate_sample(grid, pool, dictionary, config, rng) {
            best = Some(candidate);
            break;
        }
    }
    let mut best = best?;

    let mut contenders = 1usize;
    for _ in 0..config.tournament_trials {
        if let Some(candidate) = evaluate_sample(grid, pool, dictionary, config, rng) {
            contenders += 1;
            if candidate.score > best.score {
                best = candidate;
            }
        }
    }

    trace!(
        contenders,
        score = best.score,
        word = best.placement.word(),
        "Tournament finished."
    );
    Some(best)
}

fn evaluate_sample<R: Rng + ?Sized>(
    grid: &Grid,
    pool: &WordPool,
    dictionary: &Dictionary,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Candidate> {
    let placement = random_placement(grid, pool, rng)?;
    evaluate(placement, grid, pool, dictionary, config.crossing_weight)
}

/// Validates and scores a specific placement against the current grid and pool.
///
/// Besides the validator's rules, every crossing word must still be available in the
/// pool and no string may appear twice among the placement and its crossings.
pub fn evaluate(
    placement: Placement,
    grid: &Grid,
    pool: &WordPool,
    dictionary: &Dictionary,
    crossing_weight: usize,
) -> Option<Candidate> {
    let incidental_words = match validate(&placement, grid, dictionary) {
        Validation::Accepted(words) => words,
        Validation::Rejected(reason) => {
            trace!(%placement, %reason, "Sample rejected.");
            return None;
        }
    };

    if !all_words_unused(&placement, &incidental_words, pool) {
        trace!(%placement, "Sample rejected: crossing word already used.");
        return None;
    }

    let score = score(&placement, &incidental_words, crossing_weight);
    Some(Candidate {
        placement,
        score,
        incidental_words,
    })
}

fn all_words_unused(placement: &Placement, incidental_words: &[Placement], pool: &WordPool) -> bool {
    let mut seen: HashSet<&str> = HashSet::from([placement.word()]);
    incidental_words
        .iter()
        .all(|w| pool.contains(w.word()) && seen.insert(w.word()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(words: &[&str]) -> (WordPool, Dictionary) {
        let pool = WordPool::new(words.iter().copied());
        let dictionary = pool.to_dictionary();
        (pool, dictionary)
    }

    #[test]
    fn score_weights_crossings_over_length() {
        let word = Placement::new("LONGWORD", 0, 0, Direction::Across);
        let short = Placement::new("AT", 0, 0, Direction::Across);
        let crossing = vec![Placement::new("AN", 0, 0, Direction::Down)];

        assert_eq!(score(&word, &[], 10), 8);
        assert_eq!(score(&short, &crossing, 10), 12);
        assert_eq!(score(&short, &crossing, 100), 102);
    }

    #[test]
    fn random_placement_stays_on_grid_origins() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::new(4, 7);
        let (pool, _) = setup(&["ALPHA", "BETA"]);

        let mut saw_across = false;
        let mut saw_down = false;
        for _ in 0..500 {
            let p = random_placement(&grid, &pool, &mut rng).unwrap();
            let (row, col) = p.origin();
            assert!(row < 4 && col < 7);
            assert!(pool.contains(p.word()));
            match p.direction() {
                Direction::Across => saw_across = true,
                Direction::Down => saw_down = true,
            }
        }
        assert!(saw_across && saw_down);
    }

    #[test]
    fn search_on_empty_grid_finds_a_valid_candidate() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::new(10, 10);
        let (pool, dictionary) = setup(&["CAT", "CAR", "ARC", "TAR"]);

        let candidate = search(&grid, &pool, &dictionary, &SearchConfig::default(), &mut rng)
            .expect("an empty 10x10 grid always admits a three-letter word");
        assert!(candidate.placement.fits_within(10, 10));
        assert!(candidate.incidental_words.is_empty());
        assert_eq!(candidate.score, 3);
    }

    #[test]
    fn search_prefers_candidates_with_crossings() {
        let mut rng = StdRng::seed_from_u64(5);
        // A 2x2 grid with "AT" on the top row: only "NO" on the bottom row can score a
        // crossing, and it scores two of them.
        let mut grid = Grid::new(2, 2);
        grid.write(&Placement::new("AT", 0, 0, Direction::Across));
        let (mut pool, dictionary) = setup(&["AT", "NO", "AN", "TO"]);
        pool.remove("AT");

        let config = SearchConfig {
            max_attempts: 10_000,
            tournament_trials: 2_000,
            crossing_weight: 10,
        };
        let candidate = search(&grid, &pool, &dictionary, &config, &mut rng).unwrap();
        assert_eq!(candidate.placement, Placement::new("NO", 1, 0, Direction::Across));
        assert_eq!(candidate.score, 22);
        assert_eq!(candidate.incidental_words.len(), 2);
    }

    #[test]
    fn search_returns_none_when_no_placement_fits() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::new(3, 3);
        let (pool, dictionary) = setup(&["TOOLONG"]);
        let config = SearchConfig {
            max_attempts: 50,
            ..SearchConfig::default()
        };
        assert!(search(&grid, &pool, &dictionary, &config, &mut rng).is_none());
    }

    #[test]
    fn search_on_empty_pool_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::new(3, 3);
        let pool = WordPool::default();
        let dictionary = Dictionary::default();
        assert!(search(&grid, &pool, &dictionary, &SearchConfig::default(), &mut rng).is_none());
    }

    #[test]
    fn crossing_word_already_used_is_discarded() {
        let mut grid = Grid::new(2, 2);
        grid.write(&Placement::new("AT", 0, 0, Direction::Across));
        let (mut pool, dictionary) = setup(&["AT", "NO", "AN", "TO"]);
        pool.remove("AT");
        pool.remove("TO");

        let no = Placement::new("NO", 1, 0, Direction::Across);
        assert!(evaluate(no, &grid, &pool, &dictionary, 10).is_none());
    }

    #[test]
    fn crossing_equal_to_the_chosen_word_is_discarded() {
        let mut grid = Grid::new(2, 2);
        grid.write(&Placement::new("AB", 0, 0, Direction::Across));
        let (mut pool, dictionary) = setup(&["AB", "AA", "BA"]);
        pool.remove("AB");

        // Column 0 would read "AA", the word being placed.
        let aa = Placement::new("AA", 1, 0, Direction::Across);
        assert!(validate(&aa, &grid, &dictionary).is_accepted());
        assert!(evaluate(aa, &grid, &pool, &dictionary, 10).is_none());
    }

    #[test]
    fn seeded_searches_are_reproducible() {
        let grid = Grid::new(8, 8);
        let (pool, dictionary) = setup(&["ALPHA", "BRAVO", "DELTA", "ECHO", "GOLF"]);

        let first = search(
            &grid,
            &pool,
            &dictionary,
            &SearchConfig::default(),
            &mut StdRng::seed_from_u64(99),
        );
        let second = search(
            &grid,
            &pool,
            &dictionary,
            &SearchConfig::default(),
            &mut StdRng::seed_from_u64(99),
        );
        assert_eq!(first, second);
    }
}
