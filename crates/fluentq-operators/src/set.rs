//! Keyed set operators: distinct, union, intersect, except.
//!
//! Keys are computed eagerly (membership needs the whole key set), and they
//! compare by value: any `Hash + Eq` projection works, tuples included. For
//! key shapes that are not `Hash`/`Eq`, project to
//! `fluentq_core::hash::CanonicalKey`.

use std::hash::Hash;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::accumulator::KeyedAccumulator;
use crate::enumerable::{Backing, Enumerable};
use crate::traits::{Elements, Selector, Sequence};

/// Distinct/union: one element per key, first-seen order, first element wins.
pub(crate) struct Dedup<T, K> {
    sources: Vec<Enumerable<T>>,
    key: Selector<T, K>,
    backing: Backing<T>,
    name: &'static str,
}

impl<T: Clone + 'static, K: Hash + Eq + 'static> Dedup<T, K> {
    fn rows(&self) -> &[T] {
        self.backing.get_or_init(self.name, || {
            let mut acc = KeyedAccumulator::new();
            for source in &self.sources {
                for e in source.iter() {
                    acc.insert_first((self.key)(&e), e);
                }
            }
            acc.into_values().collect()
        })
    }
}

impl<T: Clone + 'static, K: Hash + Eq + 'static> Sequence<T> for Dedup<T, K> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn iterate(&self) -> Elements<'_, T> {
        Box::new(self.rows().iter().cloned())
    }

    fn length(&self) -> usize {
        self.rows().len()
    }

    fn at(&self, index: usize) -> Option<T> {
        self.rows().get(index).cloned()
    }
}

/// Intersect/except: stream `source`, keeping elements by key membership in
/// `other`. Multiplicity of `source` is preserved.
pub(crate) struct Membership<T, K> {
    source: Enumerable<T>,
    other: Enumerable<T>,
    key: Selector<T, K>,
    other_keys: OnceCell<KeyedAccumulator<K, ()>>,
    keep_members: bool,
}

impl<T: Clone + 'static, K: Hash + Eq + 'static> Sequence<T> for Membership<T, K> {
    fn name(&self) -> &'static str {
        if self.keep_members {
            "intersect"
        } else {
            "except"
        }
    }

    fn iterate(&self) -> Elements<'_, T> {
        let key = &self.key;
        let keys = self
            .other_keys
            .get_or_init(|| KeyedAccumulator::from_keys(self.other.iter().map(|e| key(&e))));
        let keep = self.keep_members;
        Box::new(
            self.source
                .iter()
                .filter(move |e| keys.contains(&key(e)) == keep),
        )
    }
}

impl<T: Clone + 'static> Enumerable<T> {
    /// One element per distinct key, in first-seen order.
    pub fn distinct<K, F>(&self, key: F) -> Enumerable<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        Enumerable::from_node(Dedup {
            sources: vec![self.clone()],
            key: Rc::new(key),
            backing: Backing::new(),
            name: "distinct",
        })
    }

    /// One element per distinct key across `self` then `other`; `self` wins ties.
    pub fn union<K, F>(&self, other: &Enumerable<T>, key: F) -> Enumerable<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        Enumerable::from_node(Dedup {
            sources: vec![self.clone(), other.clone()],
            key: Rc::new(key),
            backing: Backing::new(),
            name: "union",
        })
    }

    /// Elements of `self` whose key also appears in `other`.
    pub fn intersect<K, F>(&self, other: &Enumerable<T>, key: F) -> Enumerable<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        self.membership(other, key, true)
    }

    /// Elements of `self` whose key does not appear in `other`.
    pub fn except<K, F>(&self, other: &Enumerable<T>, key: F) -> Enumerable<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        self.membership(other, key, false)
    }

    fn membership<K, F>(&self, other: &Enumerable<T>, key: F, keep_members: bool) -> Enumerable<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        Enumerable::from_node(Membership {
            source: self.clone(),
            other: other.clone(),
            key: Rc::new(key),
            other_keys: OnceCell::new(),
            keep_members,
        })
    }
}
