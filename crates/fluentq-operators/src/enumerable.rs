//! `Enumerable`: the handle every operator returns, plus the base source node.

use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use fluentq_core::config::EngineConfig;
use fluentq_core::error::{Error, Result};

use crate::metrics;
use crate::traits::{Elements, Sequence};

/// A lazily evaluated, re-iterable sequence.
///
/// Cloning is cheap (reference-counted node). Handles are `!Send`: pipelines
/// are evaluated on the thread that built them.
pub struct Enumerable<T> {
    node: Rc<dyn Sequence<T>>,
}

impl<T> Clone for Enumerable<T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T: Clone + 'static> Enumerable<T> {
    /// Wrap any node. Operators use this; callers may plug in their own nodes.
    pub fn from_node<S: Sequence<T> + 'static>(node: S) -> Self {
        Self {
            node: Rc::new(node),
        }
    }

    pub fn new(data: Vec<T>) -> Self {
        Self::from_node(Source::new(data))
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Drain a (possibly one-shot) iterator into a fixed backing store.
    ///
    /// Fails with `InvalidSource` if the iterator yields more than
    /// `cfg.materialize_cap` elements. Without a cap an infinite iterator
    /// never returns.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, cfg: &EngineConfig) -> Result<Self> {
        let iter = iter.into_iter();
        // An unbounded iterator reports usize::MAX as its lower bound.
        let lower = match iter.size_hint() {
            (lower, Some(_)) => lower,
            (_, None) => 0,
        };
        let mut data = Vec::with_capacity(cfg.initial_capacity(lower));
        for item in iter {
            if let Some(cap) = cfg.materialize_cap {
                if data.len() >= cap {
                    return Err(Error::InvalidSource(format!(
                        "source yields more than {cap} elements"
                    )));
                }
            }
            data.push(item);
        }
        metrics::emit_drained(data.len(), cfg.materialize_cap);
        Ok(Self::new(data))
    }

    /// Stable name of the node behind this handle.
    pub fn name(&self) -> &'static str {
        self.node.name()
    }

    /// Fresh traversal from the beginning.
    pub fn iter(&self) -> Elements<'_, T> {
        self.node.iterate()
    }

    pub fn length(&self) -> usize {
        self.node.length()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Element at zero-based `index`.
    pub fn at(&self, index: usize) -> Result<T> {
        self.node.at(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            length: self.node.length(),
        })
    }

    pub fn to_list(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub(crate) fn get(&self, index: usize) -> Option<T> {
        self.node.at(index)
    }
}

impl<T: Clone + 'static> Default for Enumerable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Enumerable<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Enumerable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Clone + 'static> IntoIterator for &'a Enumerable<T> {
    type Item = T;
    type IntoIter = Elements<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owned iteration materializes the sequence first.
impl<T: Clone + 'static> IntoIterator for Enumerable<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_list().into_iter()
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Enumerable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Base case: a concrete, finite, indexable collection.
pub(crate) struct Source<T> {
    data: Rc<[T]>,
}

impl<T> Source<T> {
    pub(crate) fn new(data: Vec<T>) -> Self {
        Self {
            data: Rc::from(data),
        }
    }
}

impl<T: Clone + 'static> Sequence<T> for Source<T> {
    fn name(&self) -> &'static str {
        "source"
    }

    fn iterate(&self) -> Elements<'_, T> {
        Box::new(self.data.iter().cloned())
    }

    fn length(&self) -> usize {
        self.data.len()
    }

    fn at(&self, index: usize) -> Option<T> {
        self.data.get(index).cloned()
    }
}

/// Compute-once backing store for eager nodes.
pub(crate) struct Backing<T> {
    cell: OnceCell<Vec<T>>,
}

impl<T> Backing<T> {
    pub(crate) fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub(crate) fn get_or_init(&self, node: &'static str, init: impl FnOnce() -> Vec<T>) -> &[T] {
        self.cell.get_or_init(|| {
            let rows = init();
            metrics::emit_materialized(node, rows.len());
            rows
        })
    }
}
