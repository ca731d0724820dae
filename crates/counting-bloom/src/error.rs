//! Error types for the counting Bloom filter

use thiserror::Error;

/// Errors that can occur while building or mutating a filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Constructor or config arguments out of range. Not recoverable.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A slot is already at `max_count`; nothing was incremented.
    #[error("Counter overflow at slot {position}: already at max_count {max_count}")]
    CounterOverflow { position: usize, max_count: u8 },

    /// A slot is already zero; nothing was decremented.
    #[error("Counter underflow at slot {position}: already at 0")]
    CounterUnderflow { position: usize },

    #[error("Invalid hash key length: {len} (expected 16 bytes)")]
    InvalidKeyLength { len: usize },

    #[error("Key source error: {0}")]
    KeySource(String),
}

impl FilterError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
