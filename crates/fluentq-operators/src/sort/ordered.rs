//! Sorted node and the `OrderedEnumerable` handle that supports `then_by`.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use fluentq_core::error::{Error, Result};
use fluentq_core::key::Direction;

use crate::enumerable::{Backing, Enumerable};
use crate::traits::{Elements, Sequence};

use super::directive::{compare_chain, OrderingDirective};

/// Fully materialized, stably sorted view of `source`.
pub(crate) struct Sorted<T> {
    source: Enumerable<T>,
    directives: Rc<[OrderingDirective<T>]>,
    backing: Backing<T>,
}

impl<T: Clone + 'static> Sorted<T> {
    fn rows(&self) -> &[T] {
        self.backing.get_or_init("order_by", || {
            let mut rows = self.source.to_list();
            // Vec::sort_by is stable: full ties keep input order.
            rows.sort_by(|a, b| compare_chain(&self.directives, a, b));
            rows
        })
    }
}

impl<T: Clone + 'static> Sequence<T> for Sorted<T> {
    fn name(&self) -> &'static str {
        "order_by"
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

/// An ordered sequence that can take further, less significant sort keys.
///
/// Derefs to the sorted [`Enumerable`]. Each `then_by*` call builds a new
/// node over the unsorted source with the extended directive chain; the
/// receiver is left untouched.
pub struct OrderedEnumerable<T> {
    source: Enumerable<T>,
    directives: Vec<OrderingDirective<T>>,
    sorted: Enumerable<T>,
}

impl<T> Clone for OrderedEnumerable<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            directives: self.directives.clone(),
            sorted: self.sorted.clone(),
        }
    }
}

impl<T: Clone + 'static> OrderedEnumerable<T> {
    /// Order `source` by a caller-assembled directive chain, most significant
    /// first. An empty chain is rejected.
    pub fn new(source: Enumerable<T>, directives: Vec<OrderingDirective<T>>) -> Result<Self> {
        if directives.is_empty() {
            return Err(Error::InvalidArgument(
                "ordering requires at least one sort key".into(),
            ));
        }
        Ok(Self::build(source, directives))
    }

    fn build(source: Enumerable<T>, directives: Vec<OrderingDirective<T>>) -> Self {
        let sorted = Enumerable::from_node(Sorted {
            source: source.clone(),
            directives: directives.iter().cloned().collect(),
            backing: Backing::new(),
        });
        Self {
            source,
            directives,
            sorted,
        }
    }

    fn extend(&self, directive: OrderingDirective<T>) -> Self {
        let mut directives = self.directives.clone();
        directives.push(directive);
        Self::build(self.source.clone(), directives)
    }

    /// Break remaining ties by `key`, ascending.
    pub fn then_by<K, F>(&self, key: F) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        self.extend(OrderingDirective::new(key, Direction::Ascending))
    }

    /// Break remaining ties by `key`, descending.
    pub fn then_by_descending<K, F>(&self, key: F) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        self.extend(OrderingDirective::new(key, Direction::Descending))
    }

    pub fn directives(&self) -> &[OrderingDirective<T>] {
        &self.directives
    }

    pub fn into_enumerable(self) -> Enumerable<T> {
        self.sorted
    }
}

impl<T> Deref for OrderedEnumerable<T> {
    type Target = Enumerable<T>;

    fn deref(&self) -> &Self::Target {
        &self.sorted
    }
}

impl<T> From<OrderedEnumerable<T>> for Enumerable<T> {
    fn from(ordered: OrderedEnumerable<T>) -> Self {
        ordered.sorted
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for OrderedEnumerable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.sorted, f)
    }
}

impl<T: Clone + 'static> Enumerable<T> {
    /// Stable ascending sort by `key`.
    pub fn order_by<K, F>(&self, key: F) -> OrderedEnumerable<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        OrderedEnumerable::build(self.clone(), vec![OrderingDirective::ascending(key)])
    }

    /// Stable descending sort by `key`.
    pub fn order_by_descending<K, F>(&self, key: F) -> OrderedEnumerable<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        OrderedEnumerable::build(self.clone(), vec![OrderingDirective::descending(key)])
    }

    /// Stable sort by an explicit directive chain, most significant first.
    pub fn order_by_directives(
        &self,
        directives: Vec<OrderingDirective<T>>,
    ) -> Result<OrderedEnumerable<T>> {
        OrderedEnumerable::new(self.clone(), directives)
    }
}
