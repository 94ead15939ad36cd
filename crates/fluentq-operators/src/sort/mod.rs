//! Ordering: multi-key, stable, composable sort chains.

pub mod directive;
pub mod ordered;

pub use directive::{compare_keys, OrderingDirective};
pub use ordered::OrderedEnumerable;
