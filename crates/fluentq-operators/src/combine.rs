//! Structural operators: reverse, concat, zip, repeat, range, default_if_empty.

use std::rc::Rc;

use crate::enumerable::{Backing, Enumerable};
use crate::traits::{Elements, Sequence, Transform};

/// Reversal needs the whole source, so it materializes once.
pub(crate) struct Reverse<T> {
    source: Enumerable<T>,
    backing: Backing<T>,
}

impl<T: Clone + 'static> Reverse<T> {
    fn rows(&self) -> &[T] {
        self.backing.get_or_init("reverse", || {
            let mut rows = self.source.to_list();
            rows.reverse();
            rows
        })
    }
}

impl<T: Clone + 'static> Sequence<T> for Reverse<T> {
    fn name(&self) -> &'static str {
        "reverse"
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

pub(crate) struct Concat<T> {
    first: Enumerable<T>,
    second: Enumerable<T>,
}

impl<T: Clone + 'static> Sequence<T> for Concat<T> {
    fn name(&self) -> &'static str {
        "concat"
    }

    fn iterate(&self) -> Elements<'_, T> {
        Box::new(self.first.iter().chain(self.second.iter()))
    }

    fn length(&self) -> usize {
        self.first.length() + self.second.length()
    }

    fn at(&self, index: usize) -> Option<T> {
        let split = self.first.length();
        if index < split {
            self.first.get(index)
        } else {
            self.second.get(index - split)
        }
    }
}

pub(crate) struct Zip<A, B, R> {
    first: Enumerable<A>,
    second: Enumerable<B>,
    combine: Transform<(A, B), R>,
}

impl<A, B, R> Sequence<R> for Zip<A, B, R>
where
    A: Clone + 'static,
    B: Clone + 'static,
    R: 'static,
{
    fn name(&self) -> &'static str {
        "zip"
    }

    fn iterate(&self) -> Elements<'_, R> {
        let combine = &self.combine;
        Box::new(
            self.first
                .iter()
                .zip(self.second.iter())
                .map(move |pair| combine(pair)),
        )
    }

    fn length(&self) -> usize {
        self.first.length().min(self.second.length())
    }

    fn at(&self, index: usize) -> Option<R> {
        let a = self.first.get(index)?;
        let b = self.second.get(index)?;
        Some((self.combine)((a, b)))
    }
}

pub(crate) struct Repeat<T> {
    element: T,
    count: usize,
}

impl<T: Clone + 'static> Sequence<T> for Repeat<T> {
    fn name(&self) -> &'static str {
        "repeat"
    }

    fn iterate(&self) -> Elements<'_, T> {
        Box::new(std::iter::repeat(self.element.clone()).take(self.count))
    }

    fn length(&self) -> usize {
        self.count
    }

    fn at(&self, index: usize) -> Option<T> {
        (index < self.count).then(|| self.element.clone())
    }
}

pub(crate) struct Range {
    start: i64,
    count: usize,
}

impl Range {
    /// Clamp `count` so the last element is at most `i64::MAX`.
    fn new(start: i64, count: usize) -> Self {
        let room = (i128::from(i64::MAX) - i128::from(start) + 1) as u128;
        let count = (count as u128).min(room) as usize;
        Self { start, count }
    }

    // Exact for every `i < count`: the clamp keeps the sum in range.
    fn nth_value(&self, i: usize) -> i64 {
        self.start.wrapping_add(i as i64)
    }
}

impl Sequence<i64> for Range {
    fn name(&self) -> &'static str {
        "range"
    }

    fn iterate(&self) -> Elements<'_, i64> {
        Box::new((0..self.count).map(move |i| self.nth_value(i)))
    }

    fn length(&self) -> usize {
        self.count
    }

    fn at(&self, index: usize) -> Option<i64> {
        (index < self.count).then(|| self.nth_value(index))
    }
}

pub(crate) struct DefaultIfEmpty<T> {
    source: Enumerable<T>,
    fallback: T,
}

impl<T: Clone + 'static> Sequence<T> for DefaultIfEmpty<T> {
    fn name(&self) -> &'static str {
        "default_if_empty"
    }

    fn iterate(&self) -> Elements<'_, T> {
        if self.source.is_empty() {
            Box::new(std::iter::once(self.fallback.clone()))
        } else {
            self.source.iter()
        }
    }
}

impl<T: Clone + 'static> Enumerable<T> {
    /// `element` repeated `count` times.
    pub fn repeat(element: T, count: usize) -> Self {
        Enumerable::from_node(Repeat { element, count })
    }

    /// Elements in reverse positional order. Materializes the source.
    pub fn reverse(&self) -> Enumerable<T> {
        Enumerable::from_node(Reverse {
            source: self.clone(),
            backing: Backing::new(),
        })
    }

    /// All of `self`, then all of `other`.
    pub fn concat(&self, other: &Enumerable<T>) -> Enumerable<T> {
        Enumerable::from_node(Concat {
            first: self.clone(),
            second: other.clone(),
        })
    }

    pub fn append(&self, element: T) -> Enumerable<T> {
        self.concat(&Enumerable::new(vec![element]))
    }

    /// Alias of [`Enumerable::append`].
    pub fn add(&self, element: T) -> Enumerable<T> {
        self.append(element)
    }

    pub fn prepend(&self, element: T) -> Enumerable<T> {
        Enumerable::new(vec![element]).concat(self)
    }

    /// Pairwise combination, stopping at the shorter sequence.
    pub fn zip<B, R, F>(&self, other: &Enumerable<B>, combine: F) -> Enumerable<R>
    where
        B: Clone + 'static,
        R: Clone + 'static,
        F: Fn((T, B)) -> R + 'static,
    {
        Enumerable::from_node(Zip {
            first: self.clone(),
            second: other.clone(),
            combine: Rc::new(combine),
        })
    }

    /// `self`, or a single `fallback` element when `self` is empty.
    pub fn default_if_empty(&self, fallback: T) -> Enumerable<T> {
        Enumerable::from_node(DefaultIfEmpty {
            source: self.clone(),
            fallback,
        })
    }
}

impl Enumerable<i64> {
    /// `count` consecutive integers starting at `start`.
    ///
    /// The sequence stops early at `i64::MAX` rather than overflowing.
    pub fn range(start: i64, count: usize) -> Self {
        Enumerable::from_node(Range::new(start, count))
    }
}
