//! Counting reductions used by the aggregators.

use std::collections::BTreeMap;

/// Occurrence counts of the values of one column.
///
/// Keys are kept ordered so ties always resolve to the smallest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K: Ord> {
    counts: BTreeMap<K, usize>,
    total: usize,
}

impl<K: Ord> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K: Ord> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of values counted.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Count for `key`, zero if never seen.
    pub fn count_of(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// The most frequent value and its count; the smallest value wins a tie.
    pub fn mode(&self) -> Option<(&K, usize)> {
        // `max_by_key` keeps the last maximum, so walk keys in descending order.
        self.counts
            .iter()
            .rev()
            .max_by_key(|(_, count)| **count)
            .map(|(k, count)| (k, *count))
    }

    /// Smallest value seen.
    pub fn min(&self) -> Option<&K> {
        self.counts.keys().next()
    }

    /// Largest value seen.
    pub fn max(&self) -> Option<&K> {
        self.counts.keys().next_back()
    }

    /// All values by descending count, ties by ascending value.
    pub fn value_counts(&self) -> Vec<(&K, usize)> {
        let mut out: Vec<_> = self.counts.iter().map(|(k, c)| (k, *c)).collect();
        // Stable sort over the already key-ordered map keeps ties ascending.
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

impl<K: Ord> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
