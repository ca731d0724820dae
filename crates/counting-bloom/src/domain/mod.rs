//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - SipHash keyed hash family
//! - Slot selection (double hashing)
//! - Parameter calculations
//! - Saturating counter storage
//! - Configuration
//! - The counting Bloom filter
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod config;
pub mod counter;
pub mod counting_bloom;
pub mod hash_functions;
pub mod parameters;
pub mod siphash;

pub use config::{FilterConfig, FilterConfigBuilder};
pub use counter::CounterArray;
pub use counting_bloom::CountingBloomFilter;
pub use parameters::{calculate_fpr, FilterParameters};
pub use siphash::{siphash24, HashKey, SipHash, SipHash13, SipHash24, KEY_LEN};
