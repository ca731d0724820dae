//! Counting Bloom filter sizing
//!
//! Formulas:
//! - k = ceil(|log2(p)|)                 -- hash functions
//! - m = ceil(|n*ln(p)| / ln(2)^2)       -- total slots
//! - o = ceil(m / k)                     -- slots per hash function
//!
//! Each hash function owns its own partition of `o` slots, so the counter
//! array holds `k * o` slots. Because of the ceilings `k * o >= m`, and the
//! array must be sized to `k * o` or the last partition runs off the end.

use std::f64::consts::LN_2;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Parameters derived once at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    /// Expected number of distinct items (n)
    pub capacity: usize,
    /// Target false positive rate (p)
    pub error_rate: f64,
    /// Saturation ceiling for each counter
    pub max_count: u8,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Reference size in slots (m)
    pub size: usize,
    /// Slots per hash function (o)
    pub slot_span: usize,
}

impl FilterParameters {
    /// Derive `k`, `m` and `o` from the caller's constraints.
    ///
    /// Inputs are assumed validated (see `FilterConfig::validate`). Fails
    /// with `InvalidConfiguration` when `m` or `k * o` does not fit in a
    /// `usize`.
    pub fn derive(capacity: usize, error_rate: f64, max_count: u8) -> Result<Self, FilterError> {
        let hash_count = optimal_hash_count(error_rate);
        let size = optimal_size(capacity, error_rate).ok_or_else(|| {
            FilterError::invalid(format!(
                "capacity {} at error_rate {} needs more than usize::MAX slots",
                capacity, error_rate
            ))
        })?;
        let slot_span = size.div_ceil(hash_count);
        if hash_count.checked_mul(slot_span).is_none() {
            return Err(FilterError::invalid(format!(
                "k * o overflows usize (k={}, o={})",
                hash_count, slot_span
            )));
        }

        Ok(Self {
            capacity,
            error_rate,
            max_count,
            hash_count,
            size,
            slot_span,
        })
    }

    /// Length of the counter array: `k * o`.
    ///
    /// Saturates for hand-built parameters that `derive` would reject.
    pub fn total_slots(&self) -> usize {
        self.hash_count.saturating_mul(self.slot_span)
    }
}

/// k = ceil(|log2(p)|), never below 1.
pub fn optimal_hash_count(error_rate: f64) -> usize {
    (error_rate.log2().abs().ceil() as usize).max(1)
}

/// m = ceil(|n*ln(p)| / ln(2)^2), never below 1.
///
/// `None` if `m` is not finite or does not fit in a `usize`.
pub fn optimal_size(capacity: usize, error_rate: f64) -> Option<usize> {
    let ln2_squared = LN_2 * LN_2;
    let size = (((capacity as f64) * error_rate.ln()).abs() / ln2_squared)
        .ceil()
        .max(1.0);
    // usize::MAX as f64 rounds up to 2^64, so `<` keeps the cast exact.
    if size.is_finite() && size < usize::MAX as f64 {
        Some(size as usize)
    } else {
        None
    }
}

/// Calculate the false positive rate for `n` items in `slots` slots
/// probed by `k` hash functions.
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(slots: usize, n: usize, k: usize) -> f64 {
    if slots == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (slots as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
