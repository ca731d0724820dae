//! # Counting Bloom Benchmarks
//!
//! Criterion bodies, registered from `benches/filter_benchmarks.rs`.

pub mod filter_ops;
pub mod hashing;
