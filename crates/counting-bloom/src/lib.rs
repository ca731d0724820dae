//! # Counting Bloom
//!
//! Approximate membership with removal: a counting Bloom filter keyed by
//! SipHash-2-4.
//!
//! ## Architecture
//!
//! Hexagonal layout (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `CountingBloomFilter`: saturating-counter Bloom filter
//!   - `SipHash24`: keyed 64-bit PRF used to place items
//!   - `FilterConfig` / `FilterConfigBuilder`: validated configuration
//!   - `FilterParameters`: derived k, m, o
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `KeyedHasher`: pluggable hash capability
//!   - `KeySource`: hash key generation
//!
//! - **Adapters Layer** (`adapters/`): Port implementations
//!   - `OsKeySource`: OS CSPRNG keys
//!   - `FixedKeySource`: deterministic keys for tests
//!
//! ## Invariants
//!
//! - **No false negatives**: after `add(x)` succeeds, `contains(x)` is true
//!   until `x` is removed
//! - **Count accuracy**: `len()` == successful adds - successful removes
//! - **No wrap**: counters stay within `[0, max_count]`; a mutation that
//!   would leave the range fails and changes nothing
//!
//! ## Usage Example
//!
//! ```ignore
//! use counting_bloom::CountingBloomFilter;
//!
//! let mut filter = CountingBloomFilter::new(100_000, 0.0001, 255)?;
//! filter.add(b"helloworld")?;
//! assert!(filter.contains(b"helloworld"));
//!
//! filter.remove(b"helloworld")?;
//! assert!(!filter.contains(b"helloworld"));
//! assert_eq!(filter.len(), 0);
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded. Wrap the filter in one `Mutex` when sharing it.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;

// Re-exports for convenience
pub use adapters::{FixedKeySource, OsKeySource};
pub use domain::{
    calculate_fpr, siphash24, CountingBloomFilter, FilterConfig, FilterConfigBuilder,
    FilterParameters, HashKey, SipHash, SipHash13, SipHash24,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{KeySource, KeyedHasher};
