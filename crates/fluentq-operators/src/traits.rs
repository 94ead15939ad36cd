//! Sequence trait + closure aliases shared by every operator.
//!
//! A node is anything that can hand out fresh traversals of its elements.
//! `length` and `at` default to a full/partial traversal; nodes that own a
//! materialized backing store (or can map an index onto their source)
//! override them with direct reads.

use std::rc::Rc;

/// One traversal of a node. Borrows the node, so it cannot outlive it.
pub type Elements<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Key/projection over a borrowed element.
pub type Selector<T, K> = Rc<dyn Fn(&T) -> K>;

pub type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

/// Transform consuming an element.
pub type Transform<T, U> = Rc<dyn Fn(T) -> U>;

/// Capability set every pipeline node implements.
///
/// Invariants:
/// - `iterate` starts from the beginning on every call; live traversals do not
///   share cursors, so interleaving or repeating them is always safe.
/// - Repeated traversals yield the same elements in the same order.
pub trait Sequence<T> {
    /// Human-readable node name (stable).
    fn name(&self) -> &'static str;

    /// Produce a fresh, independent traversal.
    fn iterate(&self) -> Elements<'_, T>;

    /// Number of elements. May require a full pass.
    fn length(&self) -> usize {
        self.iterate().count()
    }

    /// Element at zero-based `index`, or `None` past the end.
    fn at(&self, index: usize) -> Option<T> {
        self.iterate().nth(index)
    }
}
