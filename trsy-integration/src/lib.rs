#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Integration — Shared Collection Utilities
//!
//! Small, dependency-light building blocks reused by every service crate in
//! the treasury trading system: a fast insertion-ordered map keyed by
//! product/trade/inquiry id.

/// Insertion-ordered map using the FNV hasher, matching the
/// `FnvIndexMap`/`FnvIndexSet` aliases used throughout larger trading
/// frameworks for small string/id keys. Every service cache in this system
/// is one of these: insertion order does not matter for cache lookups, but
/// `IndexMap` (vs `HashMap`) keeps iteration deterministic, which is useful
/// when replaying a run's historical output for debugging.
pub type FnvIndexMap<K, V> = indexmap::IndexMap<K, V, fnv::FnvBuildHasher>;
