//! Group join: exactly one row per outer element, carrying the (possibly
//! empty) group of matching inner elements.

use std::rc::Rc;

use crate::enumerable::Enumerable;
use crate::group::{to_key_names, Grouping};
use crate::traits::{Elements, Selector, Sequence, Transform};

/// Name of the single key field on group-join groupings.
const GROUP_KEY_FIELD: &str = "id";

pub(crate) struct GroupJoin<O, I, K, R> {
    outer: Enumerable<O>,
    inner: Enumerable<I>,
    outer_key: Selector<O, K>,
    inner_key: Selector<I, K>,
    key_names: Rc<[String]>,
    result: Transform<(O, Grouping<K, I>), R>,
}

impl<O, I, K, R> GroupJoin<O, I, K, R>
where
    O: Clone + 'static,
    I: Clone + 'static,
    K: PartialEq + Clone + 'static,
{
    fn row(&self, o: O) -> R {
        let key = (self.outer_key)(&o);
        let inner_key = Rc::clone(&self.inner_key);
        let wanted = key.clone();
        // Members stay lazy; they are only matched when the group is read.
        let members = self.inner.filter(move |i| inner_key(i) == wanted);
        (self.result)((o, Grouping::new(key, Rc::clone(&self.key_names), members)))
    }
}

impl<O, I, K, R> Sequence<R> for GroupJoin<O, I, K, R>
where
    O: Clone + 'static,
    I: Clone + 'static,
    K: PartialEq + Clone + 'static,
    R: 'static,
{
    fn name(&self) -> &'static str {
        "group_join"
    }

    fn iterate(&self) -> Elements<'_, R> {
        Box::new(self.outer.iter().map(move |o| self.row(o)))
    }

    fn length(&self) -> usize {
        self.outer.length()
    }

    fn at(&self, index: usize) -> Option<R> {
        self.outer.get(index).map(|o| self.row(o))
    }
}

impl<O: Clone + 'static> Enumerable<O> {
    /// Pair every outer element with the group of inner elements sharing its
    /// key. Groups are keyed by the outer key, exposed as field `"id"`.
    pub fn group_join<I, K, R, OK, IK, F>(
        &self,
        inner: &Enumerable<I>,
        outer_key: OK,
        inner_key: IK,
        result: F,
    ) -> Enumerable<R>
    where
        I: Clone + 'static,
        K: PartialEq + Clone + 'static,
        R: Clone + 'static,
        OK: Fn(&O) -> K + 'static,
        IK: Fn(&I) -> K + 'static,
        F: Fn((O, Grouping<K, I>)) -> R + 'static,
    {
        Enumerable::from_node(GroupJoin {
            outer: self.clone(),
            inner: inner.clone(),
            outer_key: Rc::new(outer_key),
            inner_key: Rc::new(inner_key),
            key_names: to_key_names(&[GROUP_KEY_FIELD]),
            result: Rc::new(result),
        })
    }
}
