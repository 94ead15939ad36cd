//! Canonical key digests for key shapes that are not `Hash`/`Eq` themselves.
//!
//! Canonical form is the compact JSON encoding produced by `serde_json`:
//! struct fields in declaration order, map entries sorted by key (serde_json's
//! map is a `BTreeMap` without the `preserve_order` feature). The bytes are
//! hashed with blake3. Two projections are the same key iff their canonical
//! encodings are byte-identical, so `1` and `1.0` are different keys.
//!
//! Types with a non-deterministic `Serialize` impl (e.g. `HashMap` fields)
//! break this contract. Prefer a plain `Hash + Eq` key where one exists.

use blake3::Hasher;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct CanonicalKey(pub [u8; 32]);

impl CanonicalKey {
    /// Digest any serde-serializable value.
    pub fn of<V: Serialize + ?Sized>(value: &V) -> Result<Self> {
        let bytes = serde_json::to_vec(value)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Digest a JSON value. Infallible: a `Value` always has a canonical encoding.
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self::from_bytes(value.to_string().as_bytes())
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        let mut h = Hasher::new();
        h.update(bytes);
        CanonicalKey(h.finalize().into())
    }

    pub fn to_hex(&self) -> String {
        // blake3 hex(32b) is 64 hex chars
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
