#![forbid(unsafe_code)]
//! fluentq-core: error taxonomy, key descriptors, canonical hashing, and config.
//!
//! Pure data and contracts only. The lazy sequence engine lives in
//! `fluentq-operators`; nothing here holds closures or evaluates pipelines.

pub mod config;
pub mod error;
pub mod hash;
pub mod key;
pub mod prelude;

pub use error::{Error, Result};
