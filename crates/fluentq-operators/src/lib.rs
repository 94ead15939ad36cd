#![forbid(unsafe_code)]
//! fluentq-operators: lazy, composable sequence operators.
//!
//! Design intent:
//! - Every pipeline stage is a node implementing `Sequence`; `Enumerable` is a
//!   cheap handle to one. Operators take `&self` and return a new handle.
//! - Evaluation is pull-based and single-threaded. Nothing runs until a
//!   terminal operation, iteration, or indexed access asks for elements.
//! - Eager operators (reverse, order_by, distinct, union, group_by) compute
//!   their backing store once and serve every later traversal from it.

pub mod traits;

pub mod accumulator;
pub mod combine;
pub mod enumerable;
pub mod filter;
pub mod group;
pub mod json;
pub mod map;
pub mod metrics;
pub mod set;
pub mod slice;
pub mod terminal;

pub mod join;
pub mod sort;

pub use accumulator::KeyedAccumulator;
pub use enumerable::Enumerable;
pub use group::Grouping;
pub use sort::{OrderedEnumerable, OrderingDirective};
pub use terminal::Median;
pub use traits::{Elements, Sequence};
