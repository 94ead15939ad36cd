#![forbid(unsafe_code)]
//! fluentq: fluent, lazily evaluated query operators over in-memory sequences.
//!
//! ```
//! use fluentq::prelude::*;
//!
//! let people = Enumerable::new(vec![("ann", 31), ("bob", 25), ("cy", 31)]);
//! let names: Vec<&str> = people
//!     .filter(|p| p.1 > 26)
//!     .order_by(|p| p.0)
//!     .select(|p| p.0)
//!     .to_list();
//! assert_eq!(names, vec!["ann", "cy"]);
//! ```

pub use fluentq_core;
pub use fluentq_operators;

pub use fluentq_core::{config::EngineConfig, Error, Result};
pub use fluentq_operators::{
    Elements, Enumerable, Grouping, KeyedAccumulator, Median, OrderedEnumerable,
    OrderingDirective, Sequence,
};

pub mod prelude {
    pub use fluentq_core::prelude::*;
    pub use fluentq_operators::{
        Enumerable, Grouping, Median, OrderedEnumerable, OrderingDirective, Sequence,
    };
}
