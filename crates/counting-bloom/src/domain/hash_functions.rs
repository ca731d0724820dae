//! Slot selection for the counting Bloom filter
//!
//! Uses the double hashing technique on a single keyed digest:
//!
//! ```text
//! h      = hash(item, key)            64 bits
//! h1     = h >> 32                    high half
//! h2     = h & 0xffff_ffff            low half
//! slot_i = (h1 + i * h2) mod o        for i in 0..k
//! pos_i  = slot_i + i * o             absolute counter offset
//! ```
//!
//! Hash function `i` only ever touches partition `[i*o, (i+1)*o)`, so the
//! k positions of one item are always distinct.

use crate::domain::siphash::HashKey;
use crate::ports::KeyedHasher;

/// Split a 64-bit digest into its (high, low) 32-bit halves.
#[inline]
pub fn split_digest(digest: u64) -> (u64, u64) {
    (digest >> 32, digest & 0xffff_ffff)
}

/// Absolute counter offsets for a precomputed digest.
pub fn positions_from_digest(digest: u64, k: usize, slot_span: usize) -> Vec<usize> {
    let (h1, h2) = split_digest(digest);
    let o = slot_span as u64;

    (0..k)
        .map(|i| {
            let slot = (h1 + (i as u64) * h2) % o;
            slot as usize + i * slot_span
        })
        .collect()
}

/// Compute the k counter offsets for `item`.
pub fn compute_hash_positions<H: KeyedHasher + ?Sized>(
    hasher: &H,
    key: &HashKey,
    item: &[u8],
    k: usize,
    slot_span: usize,
) -> Vec<usize> {
    positions_from_digest(hasher.hash(item, key), k, slot_span)
}
