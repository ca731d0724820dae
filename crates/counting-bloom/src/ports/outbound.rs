//! Outbound Ports (Driven Ports)
//!
//! Capabilities the filter consumes but does not implement itself.
//! Production wiring uses `SipHash24` and `OsKeySource`; tests swap in
//! mock hashers and fixed keys.

use crate::domain::siphash::{HashKey, SipHash};
use crate::error::FilterError;

/// Keyed 64-bit hash over an arbitrary byte message.
///
/// Implementations must be deterministic: the same `(message, key)` pair
/// always yields the same digest.
pub trait KeyedHasher: Send + Sync {
    /// Digest `message` under `key`.
    fn hash(&self, message: &[u8], key: &HashKey) -> u64;
}

impl<const C: usize, const D: usize> KeyedHasher for SipHash<C, D> {
    fn hash(&self, message: &[u8], key: &HashKey) -> u64 {
        Self::digest(message, key.as_bytes())
    }
}

/// Source of fresh 16-byte hash keys.
///
/// SECURITY: production keys must come from a CSPRNG; a predictable key
/// lets an adversary pick items that collide on the same slots.
pub trait KeySource: Send + Sync {
    /// Produce a new key.
    fn generate_key(&self) -> Result<HashKey, FilterError>;
}
