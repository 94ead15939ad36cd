//! Insertion-ordered keyed accumulator backing the set and grouping operators.

use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;

/// Mapping key -> first value (or bucket of values) seen with that key.
///
/// Invariants:
/// - Iteration follows first-seen key order.
/// - A key is inserted at most once; later inserts never displace it.
#[derive(Debug, Clone)]
pub struct KeyedAccumulator<K, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Default for KeyedAccumulator<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> KeyedAccumulator<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Keep `value` under `key` unless the key was already seen.
    /// Returns `true` if this call inserted.
    pub fn insert_first(&mut self, key: K, value: V) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (K, V)> {
        self.entries.into_iter()
    }

    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.entries.into_values()
    }
}

impl<K: Hash + Eq> KeyedAccumulator<K, ()> {
    /// Key set built from an iterator of keys.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut acc = Self::new();
        for key in keys {
            acc.insert_first(key, ());
        }
        acc
    }
}

impl<K: Hash + Eq, T> KeyedAccumulator<K, Vec<T>> {
    /// Append `value` to the bucket for `key`, opening the bucket on first sight.
    pub fn push(&mut self, key: K, value: T) {
        self.entries.entry(key).or_default().push(value);
    }
}
