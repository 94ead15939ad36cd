//! Join operators over two sequences.
//!
//! Both are nested-loop joins on key equality (`PartialEq`), no hashing or
//! index. Output is outer-major, inner-minor, in source positional order.

pub mod group;
pub mod inner;
