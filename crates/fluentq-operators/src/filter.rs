//! Predicate-driven operators: filter (where), skip_while, take_while.
//!
//! All three stream over their source and keep no state between traversals.

use std::rc::Rc;

use crate::enumerable::Enumerable;
use crate::traits::{Elements, Predicate, Sequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Where,
    SkipWhile,
    TakeWhile,
}

pub(crate) struct Filter<T> {
    source: Enumerable<T>,
    predicate: Predicate<T>,
    mode: Mode,
}

impl<T: Clone + 'static> Sequence<T> for Filter<T> {
    fn name(&self) -> &'static str {
        match self.mode {
            Mode::Where => "where",
            Mode::SkipWhile => "skip_while",
            Mode::TakeWhile => "take_while",
        }
    }

    fn iterate(&self) -> Elements<'_, T> {
        let predicate = &self.predicate;
        let source = self.source.iter();
        match self.mode {
            Mode::Where => Box::new(source.filter(move |e| predicate(e))),
            // Once the predicate fails, the rest is yielded unconditionally.
            Mode::SkipWhile => Box::new(source.skip_while(move |e| predicate(e))),
            // Once the predicate fails, nothing more is yielded.
            Mode::TakeWhile => Box::new(source.take_while(move |e| predicate(e))),
        }
    }
}

impl<T: Clone + 'static> Enumerable<T> {
    fn with_predicate<P>(&self, predicate: P, mode: Mode) -> Enumerable<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        Enumerable::from_node(Filter {
            source: self.clone(),
            predicate: Rc::new(predicate),
            mode,
        })
    }

    /// Elements for which `predicate` holds, in source order.
    #[doc(alias = "where")]
    pub fn filter<P>(&self, predicate: P) -> Enumerable<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.with_predicate(predicate, Mode::Where)
    }

    /// Bypass leading elements while `predicate` holds, then yield the rest.
    pub fn skip_while<P>(&self, predicate: P) -> Enumerable<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.with_predicate(predicate, Mode::SkipWhile)
    }

    /// Yield leading elements while `predicate` holds, then stop for good.
    pub fn take_while<P>(&self, predicate: P) -> Enumerable<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.with_predicate(predicate, Mode::TakeWhile)
    }
}
