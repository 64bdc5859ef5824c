use rand::Rng;
use std::collections::{HashMap, HashSet};

/// The immutable set of every word a puzzle may contain.
///
/// Crossing words formed as a side effect of a placement are only accepted if they are
/// members of the dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The mutable collection of words still available for placement.
///
/// Words are unique by value. Sampling is uniform; membership tests and removals are
/// constant time (removal swaps the last word into the freed slot, so the order of the
/// remaining words is not preserved).
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    words: Vec<String>,
    positions: HashMap<String, usize>,
}

impl WordPool {
    /// Builds a pool from a word list, silently dropping duplicates and empty strings.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pool = Self::default();
        for word in words {
            pool.insert(word.into());
        }
        pool
    }

    /// Adds a word, returning `false` if it was empty or already present.
    pub fn insert(&mut self, word: String) -> bool {
        if word.is_empty() || self.positions.contains_key(&word) {
            return false;
        }
        self.positions.insert(word.clone(), self.words.len());
        self.words.push(word);
        true
    }

    /// Removes a word, returning whether it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let Some(index) = self.positions.remove(word) else {
            return false;
        };
        self.words.swap_remove(index);
        if let Some(moved) = self.words.get(index) {
            self.positions.insert(moved.clone(), index);
        }
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Picks a word uniformly at random, or `None` if the pool is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        Some(&self.words[rng.gen_range(0..self.words.len())])
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Builds a [`Dictionary`] of the words currently in the pool.
    pub fn to_dictionary(&self) -> Dictionary {
        Dictionary::new(self.words.iter().cloned())
    }
}
