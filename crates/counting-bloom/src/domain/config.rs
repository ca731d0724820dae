//! Counting Bloom filter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use counting_bloom::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .capacity(10_000)
//!     .error_rate(0.001)
//!     .max_count(15)
//!     .build()
//!     .expect("Valid config");
//! ```

use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::FilterError;

/// Filter configuration
///
/// Bounds:
/// - `capacity > 0`
/// - `0 < error_rate < 1`
/// - `0 < max_count <= 255` (the upper bound is the counter width)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Expected number of distinct items (n)
    pub capacity: usize,
    /// Target false positive rate (p)
    pub error_rate: f64,
    /// Per-slot saturation ceiling
    pub max_count: u8,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            capacity: 100_000,
            error_rate: 0.0001, // 0.01% false positive rate
            max_count: u8::MAX,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, error_rate: f64, max_count: u8) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            error_rate,
            max_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.capacity == 0 {
            return Err(FilterError::invalid("capacity must be greater than 0"));
        }

        // Written as a negated range check so NaN is rejected too.
        if !(self.error_rate > 0.0 && self.error_rate < 1.0) {
            return Err(FilterError::invalid(format!(
                "error_rate must be in (0, 1), got {}",
                self.error_rate
            )));
        }

        if self.max_count == 0 {
            return Err(FilterError::invalid("max_count must be in [1, 255], got 0"));
        }

        Ok(())
    }

    /// Load from environment variables on top of the defaults.
    ///
    /// # Environment Variables
    ///
    /// - `CBF_CAPACITY`: expected distinct items (default: 100000)
    /// - `CBF_ERROR_RATE`: target false positive rate (default: 0.0001)
    /// - `CBF_MAX_COUNT`: counter ceiling, 1-255 (default: 255)
    ///
    /// Unparseable values are logged and ignored; range checks happen in
    /// [`FilterConfig::validate`].
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = parse_env("CBF_CAPACITY") {
            config.capacity = capacity;
        }
        if let Some(error_rate) = parse_env("CBF_ERROR_RATE") {
            config.error_rate = error_rate;
        }
        if let Some(max_count) = parse_env("CBF_MAX_COUNT") {
            config.max_count = max_count;
        }

        config
    }

    /// Builder-style method to set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style method to set error rate
    pub fn with_error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = error_rate;
        self
    }

    /// Builder-style method to set the counter ceiling
    pub fn with_max_count(mut self, max_count: u8) -> Self {
        self.max_count = max_count;
        self
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}

/// Builder for FilterConfig with validation
///
/// # Example
///
/// ```ignore
/// let config = FilterConfigBuilder::new()
///     .capacity(1_000)
///     .error_rate(0.01)
///     .build()?;
/// ```
#[derive(Default)]
pub struct FilterConfigBuilder {
    capacity: Option<usize>,
    error_rate: Option<f64>,
    max_count: Option<u8>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected number of distinct items
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set target false positive rate (exclusive range 0..1)
    pub fn error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = Some(error_rate);
        self
    }

    /// Set per-slot counter ceiling (1-255)
    pub fn max_count(mut self, max_count: u8) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            error_rate: self.error_rate.unwrap_or(defaults.error_rate),
            max_count: self.max_count.unwrap_or(defaults.max_count),
        };

        config.validate()?;
        Ok(config)
    }
}
