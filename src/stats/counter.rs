use serde::Serialize;
use std::{
    collections::{hash_map, HashMap},
    hash::Hash,
};

/// Frequency table: key → number of occurrences.
///
/// Keys that were never incremented are simply absent; there is no fixed key
/// set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Counter<K: Eq + Hash> {
    counts: HashMap<K, u32>,
}

impl<K: Eq + Hash> Default for Counter<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> Counter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: K, n: u32) {
        *self.counts.entry(key).or_insert(0) += n;
    }

    /// Fold `other` into `self`, summing counts of shared keys.
    pub fn merge(&mut self, other: Counter<K>) {
        for (key, n) in other.counts {
            self.add(key, n);
        }
    }

    pub fn get<Q>(&self, key: &Q) -> u32
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&n| u64::from(n)).sum()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, u32> {
        self.counts.iter()
    }
}

impl<K: Eq + Hash + Ord + Clone> Counter<K> {
    /// Entries by count, highest first; ties broken by key so output is stable.
    pub fn to_sorted_vec(&self) -> Vec<(K, u32)> {
        let mut rows: Vec<(K, u32)> = self.counts.iter().map(|(k, &n)| (k.clone(), n)).collect();
        rows.sort_by(|(ka, a), (kb, b)| b.cmp(a).then_with(|| ka.cmp(kb)));
        rows
    }
}

impl<K: Eq + Hash> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.increment(key);
        }
        counter
    }
}
