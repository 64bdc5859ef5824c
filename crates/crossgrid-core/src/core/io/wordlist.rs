use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("I/O error while reading word list: {0}")]
    Io(#[from] io::Error),
}

/// Acceptance rules applied to every line of a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFilter {
    /// Minimum number of characters.
    pub min_length: usize,
    /// Minimum number of distinct characters, which weeds out entries like "AAA".
    pub min_distinct_letters: usize,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            min_length: 3,
            min_distinct_letters: 3,
        }
    }
}

impl WordFilter {
    pub fn accepts(&self, word: &str) -> bool {
        if word.chars().count() < self.min_length {
            return false;
        }
        let distinct: HashSet<char> = word.chars().collect();
        distinct.len() >= self.min_distinct_letters
    }
}

/// Reads a word list with one word per line.
///
/// Bytes are decoded as Latin-1, so any input decodes without error. Lines are trimmed,
/// rejected by `filter` where appropriate, and deduplicated keeping the first occurrence.
pub fn read_from(reader: &mut impl BufRead, filter: &WordFilter) -> Result<Vec<String>, WordListError> {
    let mut words = Vec::new();
    let mut seen = HashSet::new();
    let mut line = Vec::new();
    let mut total_lines = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        total_lines += 1;

        let decoded: String = line.iter().map(|&b| b as char).collect();
        let word = decoded.trim();
        if word.is_empty() || !filter.accepts(word) {
            continue;
        }
        if seen.insert(word.to_string()) {
            words.push(word.to_string());
        }
    }

    debug!(
        lines = total_lines,
        accepted = words.len(),
        "Word list filtered."
    );
    Ok(words)
}

/// Reads and filters a word list from a file path.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be opened or read.
pub fn read_from_path<P: AsRef<Path>>(
    path: P,
    filter: &WordFilter,
) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    info!("Reading word list from {:?}", path);
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_from(&mut reader, filter)
}

/// Draws `count` distinct words uniformly at random. Lists no larger than `count` are
/// returned unchanged.
pub fn draw_sample<R: Rng + ?Sized>(mut words: Vec<String>, count: usize, rng: &mut R) -> Vec<String> {
    if words.len() <= count {
        return words;
    }
    let (sample, _) = words.partial_shuffle(rng, count);
    sample.to_vec()
}
