//! Terminal operations: consume a sequence into a scalar or a definite error.

use std::cmp::Ordering;
use std::iter::Sum;

use num_traits::ToPrimitive;

use fluentq_core::error::{Error, Result};

use crate::enumerable::Enumerable;
use crate::sort::compare_keys;

/// Result of [`Enumerable::median`].
///
/// Odd counts yield the central value unconverted; even counts yield the mean
/// of the two central values as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Median<N> {
    Middle(N),
    Mean(f64),
}

impl<N: ToPrimitive> Median<N> {
    /// The median as a float, whichever variant it is.
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Median::Middle(n) => as_f64(n),
            Median::Mean(m) => Ok(*m),
        }
    }
}

fn as_f64<N: ToPrimitive>(n: &N) -> Result<f64> {
    n.to_f64().ok_or_else(|| {
        Error::TypeMismatch(format!(
            "value of type {} is not representable as f64",
            std::any::type_name::<N>()
        ))
    })
}

impl<T: Clone + 'static> Enumerable<T> {
    pub fn count(&self) -> usize {
        self.length()
    }

    pub fn count_where<P: Fn(&T) -> bool>(&self, predicate: P) -> usize {
        self.iter().filter(|e| predicate(e)).count()
    }

    /// Sum of projected values; the additive identity for an empty sequence.
    pub fn sum<N, F>(&self, f: F) -> N
    where
        N: Sum<N>,
        F: Fn(&T) -> N,
    {
        self.iter().map(|e| f(&e)).sum()
    }

    /// Smallest projected value (the first one, on ties).
    ///
    /// Uses the `order_by` ordering, so NaN is never the minimum of a
    /// sequence that holds any other value.
    pub fn min<N, F>(&self, f: F) -> Result<N>
    where
        N: PartialOrd,
        F: Fn(&T) -> N,
    {
        self.extreme(f, Ordering::Less)
    }

    /// Largest projected value (the first one, on ties).
    ///
    /// NaN sorts last, so it wins whenever present.
    pub fn max<N, F>(&self, f: F) -> Result<N>
    where
        N: PartialOrd,
        F: Fn(&T) -> N,
    {
        self.extreme(f, Ordering::Greater)
    }

    fn extreme<N, F>(&self, f: F, wanted: Ordering) -> Result<N>
    where
        N: PartialOrd,
        F: Fn(&T) -> N,
    {
        let mut values = self.iter().map(|e| f(&e));
        let mut best = values.next().ok_or(Error::EmptySequence)?;
        for v in values {
            if compare_keys(&v, &best) == wanted {
                best = v;
            }
        }
        Ok(best)
    }

    /// Arithmetic mean of projected values.
    pub fn avg<N, F>(&self, f: F) -> Result<f64>
    where
        N: ToPrimitive,
        F: Fn(&T) -> N,
    {
        let mut total = 0.0;
        let mut count = 0usize;
        for e in self.iter() {
            total += as_f64(&f(&e))?;
            count += 1;
        }
        if count == 0 {
            return Err(Error::EmptySequence);
        }
        Ok(total / count as f64)
    }

    /// Median of projected values. Materializes and sorts the projections.
    pub fn median<N, F>(&self, f: F) -> Result<Median<N>>
    where
        N: PartialOrd + ToPrimitive,
        F: Fn(&T) -> N,
    {
        let mut values: Vec<N> = self.iter().map(|e| f(&e)).collect();
        if values.is_empty() {
            return Err(Error::EmptySequence);
        }
        values.sort_by(|a, b| compare_keys(a, b));
        let mid = values.len() / 2;
        if values.len() % 2 == 1 {
            return Ok(Median::Middle(values.swap_remove(mid)));
        }
        let lo = as_f64(&values[mid - 1])?;
        let hi = as_f64(&values[mid])?;
        Ok(Median::Mean((lo + hi) / 2.0))
    }

    /// Fold using the first element as the initial accumulator.
    pub fn aggregate<F>(&self, f: F) -> Result<T>
    where
        F: Fn(T, T) -> T,
    {
        let mut elements = self.iter();
        let seed = elements.next().ok_or(Error::EmptySequence)?;
        Ok(elements.fold(seed, f))
    }

    /// Fold from an explicit seed; never fails.
    pub fn aggregate_seeded<A, F>(&self, seed: A, f: F) -> A
    where
        F: Fn(A, T) -> A,
    {
        self.iter().fold(seed, f)
    }

    pub fn first(&self) -> Result<T> {
        self.iter().next().ok_or(Error::EmptySequence)
    }

    pub fn first_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Result<T> {
        self.iter().find(|e| predicate(e)).ok_or(Error::EmptySequence)
    }

    pub fn first_or_default(&self) -> Option<T> {
        self.iter().next()
    }

    pub fn first_or_default_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<T> {
        self.iter().find(|e| predicate(e))
    }

    pub fn last(&self) -> Result<T> {
        self.iter().last().ok_or(Error::EmptySequence)
    }

    pub fn last_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Result<T> {
        self.iter()
            .filter(|e| predicate(e))
            .last()
            .ok_or(Error::EmptySequence)
    }

    pub fn last_or_default(&self) -> Option<T> {
        self.iter().last()
    }

    pub fn last_or_default_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<T> {
        self.iter().filter(|e| predicate(e)).last()
    }

    /// The only element. `NoMatch` when empty, `MultipleMatches` when not alone.
    pub fn single(&self) -> Result<T> {
        only(self.iter())
    }

    pub fn single_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Result<T> {
        only(self.iter().filter(|e| predicate(e)))
    }

    /// Like [`Enumerable::single`] but `None` when nothing matches.
    /// More than one match is still an error.
    pub fn single_or_default(&self) -> Result<Option<T>> {
        absent_as_none(self.single())
    }

    pub fn single_or_default_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Result<Option<T>> {
        absent_as_none(self.single_where(predicate))
    }

    pub fn element_at(&self, index: usize) -> Result<T> {
        self.at(index)
    }

    pub fn element_at_or_default(&self, index: usize) -> Option<T> {
        self.at(index).ok()
    }

    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    pub fn any_where<P: Fn(&T) -> bool>(&self, predicate: P) -> bool {
        self.iter().any(|e| predicate(&e))
    }

    /// True for an empty sequence.
    pub fn all<P: Fn(&T) -> bool>(&self, predicate: P) -> bool {
        self.iter().all(|e| predicate(&e))
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| &e == element)
    }

    /// Membership by projected key rather than element equality.
    pub fn contains_by<K, F>(&self, element: &T, key: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let wanted = key(element);
        self.iter().any(|e| key(&e) == wanted)
    }
}

fn only<T>(mut matches: impl Iterator<Item = T>) -> Result<T> {
    let first = matches.next().ok_or(Error::NoMatch)?;
    match matches.next() {
        None => Ok(first),
        Some(_) => Err(Error::MultipleMatches),
    }
}

fn absent_as_none<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_absent() => Ok(None),
        Err(e) => Err(e),
    }
}
