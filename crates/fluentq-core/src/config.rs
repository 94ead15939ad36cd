//! Engine configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on the number of elements drained from a one-shot source.
    /// `None` means unbounded: an infinite source then never finishes draining.
    pub materialize_cap: Option<usize>,

    /// Initial capacity reserved for a drained backing store. Falls back to the
    /// iterator's lower size hint.
    pub drain_capacity_hint: Option<usize>,
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `FLUENTQ_MATERIALIZE_CAP`: max elements drained from a one-shot source
    /// - `FLUENTQ_DRAIN_CAPACITY_HINT`: initial backing store capacity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("FLUENTQ_MATERIALIZE_CAP") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.materialize_cap = Some(v);
            }
        }

        if let Ok(s) = std::env::var("FLUENTQ_DRAIN_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.drain_capacity_hint = Some(v);
            }
        }

        cfg
    }

    pub fn with_materialize_cap(mut self, cap: usize) -> Self {
        self.materialize_cap = Some(cap);
        self
    }

    /// Capacity to reserve before draining an iterator with the given lower bound.
    /// Never exceeds the cap, so a bogus hint cannot over-allocate.
    pub fn initial_capacity(&self, size_hint_lower: usize) -> usize {
        let want = self.drain_capacity_hint.unwrap_or(size_hint_lower);
        match self.materialize_cap {
            Some(cap) => want.min(cap),
            None => want,
        }
    }
}
