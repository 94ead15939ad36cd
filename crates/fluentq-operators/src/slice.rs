//! Positional operators: skip, take, skip_last, take_last.
//!
//! Counts past the end clamp to the source length. Indexed access maps
//! straight onto the source, so `at` never walks the skipped prefix.

use crate::enumerable::Enumerable;
use crate::traits::{Elements, Sequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Window {
    Skip(usize),
    Take(usize),
    SkipLast(usize),
    TakeLast(usize),
}

pub(crate) struct Slice<T> {
    source: Enumerable<T>,
    window: Window,
}

impl<T: Clone + 'static> Slice<T> {
    /// Resolve the window to `(offset, len)` over the source.
    fn bounds(&self) -> (usize, usize) {
        let total = self.source.length();
        match self.window {
            Window::Skip(n) => {
                let offset = n.min(total);
                (offset, total - offset)
            }
            Window::Take(n) => (0, n.min(total)),
            Window::SkipLast(n) => (0, total.saturating_sub(n)),
            Window::TakeLast(n) => {
                let offset = total.saturating_sub(n);
                (offset, total - offset)
            }
        }
    }
}

impl<T: Clone + 'static> Sequence<T> for Slice<T> {
    fn name(&self) -> &'static str {
        match self.window {
            Window::Skip(_) => "skip",
            Window::Take(_) => "take",
            Window::SkipLast(_) => "skip_last",
            Window::TakeLast(_) => "take_last",
        }
    }

    fn iterate(&self) -> Elements<'_, T> {
        match self.window {
            // Prefix windows stream without counting the source first.
            Window::Skip(n) => Box::new(self.source.iter().skip(n)),
            Window::Take(n) => Box::new(self.source.iter().take(n)),
            Window::SkipLast(_) | Window::TakeLast(_) => {
                let (offset, len) = self.bounds();
                Box::new(self.source.iter().skip(offset).take(len))
            }
        }
    }

    fn length(&self) -> usize {
        self.bounds().1
    }

    fn at(&self, index: usize) -> Option<T> {
        if let Window::Take(n) = self.window {
            if index >= n {
                return None;
            }
            return self.source.get(index);
        }
        let (offset, len) = self.bounds();
        if index >= len {
            return None;
        }
        self.source.get(offset + index)
    }
}

impl<T: Clone + 'static> Enumerable<T> {
    fn window(&self, window: Window) -> Enumerable<T> {
        Enumerable::from_node(Slice {
            source: self.clone(),
            window,
        })
    }

    /// Everything after the first `n` elements.
    pub fn skip(&self, n: usize) -> Enumerable<T> {
        self.window(Window::Skip(n))
    }

    /// The first `n` elements.
    pub fn take(&self, n: usize) -> Enumerable<T> {
        self.window(Window::Take(n))
    }

    /// Everything but the last `n` elements.
    pub fn skip_last(&self, n: usize) -> Enumerable<T> {
        self.window(Window::SkipLast(n))
    }

    /// The last `n` elements.
    pub fn take_last(&self, n: usize) -> Enumerable<T> {
        self.window(Window::TakeLast(n))
    }
}
