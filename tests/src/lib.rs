//! # Counting Bloom Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # criterion benchmark bodies
//! │   ├── hashing.rs
//! │   └── filter_ops.rs
//! │
//! └── integration/      # end-to-end filter behaviour
//!     ├── scenario.rs
//!     ├── false_positive.rs
//!     └── shared_access.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p counting-bloom-tests
//!
//! # By category
//! cargo test -p counting-bloom-tests integration::
//!
//! # Benchmarks
//! cargo bench -p counting-bloom-tests
//! ```

pub mod benchmarks;
