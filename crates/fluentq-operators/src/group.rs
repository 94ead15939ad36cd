//! Grouping: a sequence tagged with the key its members share, and the
//! group_by operator that partitions a source into groupings.

use std::fmt;
use std::hash::Hash;
use std::ops::Deref;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use fluentq_core::error::{Error, Result};
use fluentq_core::key::Key;

use crate::accumulator::KeyedAccumulator;
use crate::enumerable::{Backing, Enumerable};
use crate::traits::{Elements, Selector, Sequence, Transform};

/// The members of one group plus the key identifying them.
///
/// Derefs to the member sequence, so every operator applies directly:
/// `group.count()`, `group.sum(..)`, `group.filter(..)`.
pub struct Grouping<K, T> {
    key: K,
    key_names: Rc<[String]>,
    elements: Enumerable<T>,
}

impl<K: Clone, T> Clone for Grouping<K, T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            key_names: Rc::clone(&self.key_names),
            elements: self.elements.clone(),
        }
    }
}

impl<K, T> Grouping<K, T> {
    pub fn new(key: K, key_names: Rc<[String]>, elements: Enumerable<T>) -> Self {
        Self {
            key,
            key_names,
            elements,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn key_names(&self) -> &[String] {
        &self.key_names
    }

    pub fn elements(&self) -> &Enumerable<T> {
        &self.elements
    }
}

impl<K: Serialize, T> Grouping<K, T> {
    /// The key destructured by the names given at grouping time.
    pub fn named_key(&self) -> Result<Key> {
        Key::from_projection(&self.key_names, &self.key)
    }

    /// One named component of the key.
    pub fn field(&self, name: &str) -> Result<Value> {
        self.named_key()?
            .get(name)
            .cloned()
            .ok_or_else(|| Error::InvalidArgument(format!("no key field named '{name}'")))
    }
}

impl<K, T> Deref for Grouping<K, T> {
    type Target = Enumerable<T>;

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<K: fmt::Debug, T: Clone + fmt::Debug + 'static> fmt::Debug for Grouping<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouping")
            .field("key", &self.key)
            .field("elements", &self.elements)
            .finish()
    }
}

pub(crate) struct GroupBy<T, K, R> {
    source: Enumerable<T>,
    key: Selector<T, K>,
    key_names: Rc<[String]>,
    result: Transform<Grouping<K, T>, R>,
    backing: Backing<Grouping<K, T>>,
}

impl<T, K, R> GroupBy<T, K, R>
where
    T: Clone + 'static,
    K: Hash + Eq + Clone + 'static,
{
    fn groups(&self) -> &[Grouping<K, T>] {
        self.backing.get_or_init("group_by", || {
            let mut acc = KeyedAccumulator::new();
            for e in self.source.iter() {
                acc.push((self.key)(&e), e);
            }
            acc.into_entries()
                .map(|(key, members)| {
                    Grouping::new(key, Rc::clone(&self.key_names), Enumerable::new(members))
                })
                .collect()
        })
    }
}

impl<T, K, R> Sequence<R> for GroupBy<T, K, R>
where
    T: Clone + 'static,
    K: Hash + Eq + Clone + 'static,
    R: 'static,
{
    fn name(&self) -> &'static str {
        "group_by"
    }

    fn iterate(&self) -> Elements<'_, R> {
        let result = &self.result;
        Box::new(self.groups().iter().cloned().map(move |g| result(g)))
    }

    fn length(&self) -> usize {
        self.groups().len()
    }

    fn at(&self, index: usize) -> Option<R> {
        self.groups().get(index).cloned().map(|g| (self.result)(g))
    }
}

pub(crate) fn to_key_names(names: &[&str]) -> Rc<[String]> {
    names.iter().map(|n| n.to_string()).collect()
}

impl<T: Clone + 'static> Enumerable<T> {
    /// Partition into groupings by `key`, in first-seen key order.
    ///
    /// `key_names` name the positional components of a composite key for
    /// later access through [`Grouping::field`].
    pub fn group_by<K, F>(&self, key: F, key_names: &[&str]) -> Enumerable<Grouping<K, T>>
    where
        K: Hash + Eq + Clone + 'static,
        F: Fn(&T) -> K + 'static,
    {
        self.group_by_with(key, key_names, |g| g)
    }

    /// [`Enumerable::group_by`] with each grouping mapped through `result`.
    pub fn group_by_with<K, R, F, G>(&self, key: F, key_names: &[&str], result: G) -> Enumerable<R>
    where
        K: Hash + Eq + Clone + 'static,
        R: Clone + 'static,
        F: Fn(&T) -> K + 'static,
        G: Fn(Grouping<K, T>) -> R + 'static,
    {
        Enumerable::from_node(GroupBy {
            source: self.clone(),
            key: Rc::new(key),
            key_names: to_key_names(key_names),
            result: Rc::new(result),
            backing: Backing::new(),
        })
    }
}
