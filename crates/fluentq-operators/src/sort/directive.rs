//! One level of a multi-key sort: a projection plus a direction.

use std::cmp::Ordering;
use std::rc::Rc;

use fluentq_core::key::Direction;

pub struct OrderingDirective<T> {
    compare: Rc<dyn Fn(&T, &T) -> Ordering>,
    direction: Direction,
}

impl<T> Clone for OrderingDirective<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
            direction: self.direction,
        }
    }
}

impl<T: 'static> OrderingDirective<T> {
    /// Keys only need `PartialOrd`; see [`compare_keys`] for how
    /// incomparable keys are placed.
    pub fn new<K, F>(key: F, direction: Direction) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        Self {
            compare: Rc::new(move |a: &T, b: &T| compare_keys(&key(a), &key(b))),
            direction,
        }
    }

    pub fn ascending<K, F>(key: F) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(key, Direction::Ascending)
    }

    pub fn descending<K, F>(key: F) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(key, Direction::Descending)
    }
}

impl<T> OrderingDirective<T> {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply((self.compare)(a, b))
    }
}

/// Total preorder over a `PartialOrd` key.
///
/// A value not comparable with itself (NaN) sorts after every other value.
/// Any other incomparable pair compares equal.
pub fn compare_keys<K: PartialOrd + ?Sized>(a: &K, b: &K) -> Ordering {
    match a.partial_cmp(b) {
        Some(ord) => ord,
        None => match (a.partial_cmp(a).is_some(), b.partial_cmp(b).is_some()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        },
    }
}

/// Compare by the first directive, falling through to the next on ties.
pub(crate) fn compare_chain<T>(directives: &[OrderingDirective<T>], a: &T, b: &T) -> Ordering {
    for directive in directives {
        match directive.compare(a, b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
