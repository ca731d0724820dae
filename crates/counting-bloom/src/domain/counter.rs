//! Saturating byte counters
//!
//! Counters live in `[0, max_count]`. A step that would leave that range is
//! reported as an error instead of wrapping: a wrapped counter reads as
//! zero and silently drops every item sharing the slot.

use crate::error::FilterError;

/// Fixed-length array of saturating 8-bit counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterArray {
    counters: Vec<u8>,
    max_count: u8,
}

impl CounterArray {
    /// `len` zeroed counters, each capped at `max_count`.
    ///
    /// Fails with `InvalidConfiguration` if the allocation is refused.
    pub fn new(len: usize, max_count: u8) -> Result<Self, FilterError> {
        let mut counters = Vec::new();
        counters.try_reserve_exact(len).map_err(|e| {
            FilterError::invalid(format!("cannot allocate {} counters: {}", len, e))
        })?;
        counters.resize(len, 0u8);

        Ok(Self {
            counters,
            max_count,
        })
    }

    /// Counter value at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn get(&self, pos: usize) -> u8 {
        self.counters[pos]
    }

    /// Would incrementing `pos` stay within `max_count`?
    #[inline]
    pub fn check_increment(&self, pos: usize) -> Result<(), FilterError> {
        if self.counters[pos] >= self.max_count {
            return Err(FilterError::CounterOverflow {
                position: pos,
                max_count: self.max_count,
            });
        }
        Ok(())
    }

    /// Would decrementing `pos` stay at or above zero?
    #[inline]
    pub fn check_decrement(&self, pos: usize) -> Result<(), FilterError> {
        if self.counters[pos] == 0 {
            return Err(FilterError::CounterUnderflow { position: pos });
        }
        Ok(())
    }

    /// Increment `pos` by one, or fail leaving it untouched.
    #[inline]
    pub fn increment(&mut self, pos: usize) -> Result<(), FilterError> {
        self.check_increment(pos)?;
        self.counters[pos] += 1;
        Ok(())
    }

    /// Decrement `pos` by one, or fail leaving it untouched.
    #[inline]
    pub fn decrement(&mut self, pos: usize) -> Result<(), FilterError> {
        self.check_decrement(pos)?;
        self.counters[pos] -= 1;
        Ok(())
    }

    pub fn max_count(&self) -> u8 {
        self.max_count
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Number of slots currently above zero.
    pub fn nonzero_count(&self) -> usize {
        self.counters.iter().filter(|&&c| c > 0).count()
    }

    /// Reset every counter to zero.
    pub fn clear(&mut self) {
        self.counters.fill(0);
    }
}
