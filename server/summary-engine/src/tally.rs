//! Insertion-ordered frequency counter with deterministic top-k.

use std::collections::HashMap;

/// Counts occurrences of string keys while remembering first-seen order.
///
/// `top_k` sorts on (count descending, first-seen index ascending), so
/// ranked output is reproducible across runs regardless of hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
  entries: Vec<(String, u64)>,
  index: HashMap<String, usize>,
}

impl Tally {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn increment(&mut self, key: &str) {
    match self.index.get(key) {
      Some(&i) => self.entries[i].1 += 1,
      None => {
        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), 1));
      }
    }
  }

  pub fn get(&self, key: &str) -> u64 {
    self.index.get(key).map_or(0, |&i| self.entries[i].1)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Entries in first-seen order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
    self.entries.iter().map(|(k, c)| (k.as_str(), *c))
  }

  /// The k highest-count entries; ties broken by first-seen order.
  pub fn top_k(&self, k: usize) -> Vec<(String, u64)> {
    let mut ranked = self.entries.clone();
    // Stable sort: equal counts keep insertion order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(k);
    ranked
  }
}
