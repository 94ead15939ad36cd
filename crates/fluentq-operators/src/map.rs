//! Projection operators: select and select_many.

use std::rc::Rc;

use crate::enumerable::Enumerable;
use crate::traits::{Elements, Sequence, Transform};

pub(crate) struct Select<T, U> {
    source: Enumerable<T>,
    selector: Transform<T, U>,
}

impl<T: Clone + 'static, U: 'static> Sequence<U> for Select<T, U> {
    fn name(&self) -> &'static str {
        "select"
    }

    fn iterate(&self) -> Elements<'_, U> {
        let selector = &self.selector;
        Box::new(self.source.iter().map(move |e| selector(e)))
    }

    // One output per input, so count and position carry over.
    fn length(&self) -> usize {
        self.source.length()
    }

    fn at(&self, index: usize) -> Option<U> {
        self.source.get(index).map(|e| (self.selector)(e))
    }
}

pub(crate) struct SelectMany<T, U> {
    source: Enumerable<T>,
    selector: Transform<T, Elements<'static, U>>,
}

impl<T: Clone + 'static, U: 'static> Sequence<U> for SelectMany<T, U> {
    fn name(&self) -> &'static str {
        "select_many"
    }

    fn iterate(&self) -> Elements<'_, U> {
        let selector = &self.selector;
        Box::new(self.source.iter().flat_map(move |e| selector(e)))
    }
}

impl<T: Clone + 'static> Enumerable<T> {
    /// Transform every element, preserving order and count.
    pub fn select<U, F>(&self, selector: F) -> Enumerable<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        Enumerable::from_node(Select {
            source: self.clone(),
            selector: Rc::new(selector),
        })
    }

    /// Flatten the sub-sequence produced for each element, element-major.
    pub fn select_many<U, I, F>(&self, selector: F) -> Enumerable<U>
    where
        U: Clone + 'static,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'static,
        F: Fn(T) -> I + 'static,
    {
        let selector: Transform<T, Elements<'static, U>> =
            Rc::new(move |e: T| -> Elements<'static, U> { Box::new(selector(e).into_iter()) });
        Enumerable::from_node(SelectMany {
            source: self.clone(),
            selector,
        })
    }
}
