//! Inner equi-join: one row per matching (outer, inner) pair.

use std::rc::Rc;

use crate::enumerable::Enumerable;
use crate::traits::{Elements, Selector, Sequence, Transform};

pub(crate) struct Join<O, I, K, R> {
    outer: Enumerable<O>,
    inner: Enumerable<I>,
    outer_key: Selector<O, K>,
    inner_key: Selector<I, K>,
    result: Transform<(O, I), R>,
}

impl<O, I, K, R> Sequence<R> for Join<O, I, K, R>
where
    O: Clone + 'static,
    I: Clone + 'static,
    K: PartialEq + 'static,
    R: 'static,
{
    fn name(&self) -> &'static str {
        "join"
    }

    fn iterate(&self) -> Elements<'_, R> {
        let inner = &self.inner;
        let inner_key = &self.inner_key;
        let outer_key = &self.outer_key;
        let result = &self.result;
        Box::new(self.outer.iter().flat_map(move |o| {
            let key = outer_key(&o);
            inner
                .iter()
                .filter(move |i| inner_key(i) == key)
                .map(move |i| result((o.clone(), i)))
        }))
    }
}

impl<O: Clone + 'static> Enumerable<O> {
    /// Inner equi-join of `self` (outer) with `inner`.
    ///
    /// An outer element with `k` matches yields `k` rows; with none, no rows.
    pub fn join<I, K, R, OK, IK, F>(
        &self,
        inner: &Enumerable<I>,
        outer_key: OK,
        inner_key: IK,
        result: F,
    ) -> Enumerable<R>
    where
        I: Clone + 'static,
        K: PartialEq + 'static,
        R: Clone + 'static,
        OK: Fn(&O) -> K + 'static,
        IK: Fn(&I) -> K + 'static,
        F: Fn((O, I)) -> R + 'static,
    {
        Enumerable::from_node(Join {
            outer: self.clone(),
            inner: inner.clone(),
            outer_key: Rc::new(outer_key),
            inner_key: Rc::new(inner_key),
            result: Rc::new(result),
        })
    }
}
