//! Insertion-Ordered Frequency Counter
//!
//! Counts string keys and ranks them by frequency. Ties keep first-seen
//! order, which makes rankings stable across runs for equal counts.

use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct FrequencyCounter {
    /// key -> position in `entries`
    index: FxHashMap<String, usize>,
    /// (key, count) in first-seen order
    entries: Vec<(String, usize)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Number of distinct keys seen.
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&pos| self.entries[pos].1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `limit` keys ranked by count descending.
    ///
    /// The sort is stable over first-seen order, so equal counts rank in
    /// dataset discovery order.
    pub fn most_common(&self, limit: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(key, count)| (key.clone(), *count))
            .collect()
    }
}
