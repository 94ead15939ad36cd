//! Tracing hooks for backing-store materialization and source draining.
//!
//! The library never installs a subscriber; wire one up in the binary layer.

#[cfg(feature = "tracing")]
pub fn emit_materialized(node: &'static str, rows: usize) {
    tracing::trace!(node, rows, "materialized backing store");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_materialized(_node: &'static str, _rows: usize) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn emit_drained(rows: usize, cap: Option<usize>) {
    tracing::debug!(rows, ?cap, "drained one-shot source");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_drained(_rows: usize, _cap: Option<usize>) { /* no-op */
}
