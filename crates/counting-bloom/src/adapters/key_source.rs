//! # Key Source Adapters
//!
//! - `OsKeySource`: operating-system CSPRNG (production)
//! - `FixedKeySource`: constant key for reproducible tests

use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::siphash::{HashKey, KEY_LEN};
use crate::error::FilterError;
use crate::ports::KeySource;

/// Draws keys from the operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsKeySource;

impl OsKeySource {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for OsKeySource {
    fn generate_key(&self) -> Result<HashKey, FilterError> {
        let mut key = [0u8; KEY_LEN];
        OsRng
            .try_fill_bytes(&mut key)
            .map_err(|e| FilterError::KeySource(e.to_string()))?;
        Ok(HashKey::new(key))
    }
}

/// Always hands out the same key.
///
/// Two filters built from the same fixed key place every item on the same
/// slots, which makes test assertions reproducible.
#[derive(Debug, Clone)]
pub struct FixedKeySource {
    key: HashKey,
}

impl FixedKeySource {
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self {
            key: HashKey::new(bytes),
        }
    }

    /// The all-zero key.
    pub fn zeroed() -> Self {
        Self::new([0u8; KEY_LEN])
    }
}

impl KeySource for FixedKeySource {
    fn generate_key(&self) -> Result<HashKey, FilterError> {
        Ok(self.key.clone())
    }
}
