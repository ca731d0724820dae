//! # Counting Bloom Filter
//!
//! Approximate membership with removal and exact net-insert counting.
//!
//! ## Structure
//!
//! Replace bits with saturating byte counters:
//! - Add: Increment counters at hashed positions
//! - Remove: Decrement counters at hashed positions
//! - Membership: True if all counters > 0
//!
//! Positions come from one keyed SipHash-2-4 digest split into two halves
//! (see `hash_functions`). The key is drawn per filter, never shared.
//!
//! ## Failure Policy
//!
//! `add` and `remove` are all-or-nothing. Every one of the k slots is
//! checked before any is touched:
//! - a saturated slot rejects `add` with `CounterOverflow`
//! - an empty slot rejects `remove` with `CounterUnderflow`
//!
//! A rejected call leaves counters and `len()` unchanged. Rejecting
//! underflow keeps a bad remove from zeroing slots shared with other
//! items, which would turn them into false negatives.
//!
//! ## Invariants
//!
//! - Sum of all counters == k * len()
//! - No false negatives: after a successful `add(x)`, `contains(x)` holds
//!   until `x` is removed

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::adapters::OsKeySource;
use crate::domain::config::FilterConfig;
use crate::domain::counter::CounterArray;
use crate::domain::hash_functions::compute_hash_positions;
use crate::domain::parameters::{calculate_fpr, FilterParameters};
use crate::domain::siphash::{HashKey, SipHash24};
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{KeySource, KeyedHasher};

/// Counting Bloom filter over byte-string items.
///
/// Not internally synchronized: share across threads behind a single
/// `Mutex`/`RwLock` around the whole filter.
#[derive(Clone)]
pub struct CountingBloomFilter<H: KeyedHasher = SipHash24> {
    /// `k * o` saturating counters, partitioned per hash function
    counters: CounterArray,
    /// Sizing derived at construction
    params: FilterParameters,
    /// Per-instance SipHash key
    key: HashKey,
    hasher: H,
    /// Net successful adds minus removes
    count: usize,
    metrics: Arc<dyn MetricsRecorder>,
}

impl CountingBloomFilter<SipHash24> {
    /// Create a filter keyed from the OS random source.
    ///
    /// # Arguments
    /// * `capacity` - Expected number of distinct items (n > 0)
    /// * `error_rate` - Target false positive rate, 0 < p < 1
    /// * `max_count` - Per-slot ceiling, 1..=255
    pub fn new(capacity: usize, error_rate: f64, max_count: u8) -> Result<Self, FilterError> {
        let config = FilterConfig::new(capacity, error_rate, max_count)?;
        Self::from_config(&config)
    }

    /// Create a filter from a configuration, keyed from the OS random source.
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::with_key_source(config, &OsKeySource::new())
    }

    /// Create a filter with a key drawn from `source`.
    pub fn with_key_source(
        config: &FilterConfig,
        source: &dyn KeySource,
    ) -> Result<Self, FilterError> {
        let key = source.generate_key()?;
        Self::with_key(config, key)
    }

    /// Create a filter with an explicit key.
    pub fn with_key(config: &FilterConfig, key: HashKey) -> Result<Self, FilterError> {
        Self::with_hasher(config, key, SipHash24::new())
    }
}

impl<H: KeyedHasher> CountingBloomFilter<H> {
    /// Create a filter with an explicit key and hash function.
    pub fn with_hasher(config: &FilterConfig, key: HashKey, hasher: H) -> Result<Self, FilterError> {
        config.validate()?;

        let params =
            FilterParameters::derive(config.capacity, config.error_rate, config.max_count)?;
        let counters = CounterArray::new(params.total_slots(), params.max_count)?;

        debug!(
            k = params.hash_count,
            m = params.size,
            o = params.slot_span,
            slots = counters.len(),
            capacity = params.capacity,
            error_rate = params.error_rate,
            max_count = params.max_count,
            "Counting Bloom filter created"
        );

        Ok(Self {
            counters,
            params,
            key,
            hasher,
            count: 0,
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Attach a metrics recorder. Creation is recorded against it.
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        metrics.record_filter_created(
            self.counters.len(),
            self.params.hash_count,
            self.params.capacity,
        );
        self.metrics = metrics;
        self
    }

    /// The k absolute counter offsets for `item`, one per partition.
    pub fn positions(&self, item: &[u8]) -> Vec<usize> {
        compute_hash_positions(
            &self.hasher,
            &self.key,
            item,
            self.params.hash_count,
            self.params.slot_span,
        )
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be present (could be a false positive)
    /// - `false` if the item is definitely absent
    pub fn contains(&self, item: &[u8]) -> bool {
        let start = self.start_timer();
        let found = self
            .positions(item)
            .iter()
            .all(|&pos| self.counters.get(pos) > 0);
        self.metrics.record_lookup(elapsed(start), found);
        found
    }

    /// Insert an item, incrementing its k counters.
    ///
    /// Fails with `CounterOverflow` if any of the k slots is already at
    /// `max_count`; in that case nothing is modified.
    pub fn add(&mut self, item: &[u8]) -> Result<(), FilterError> {
        let start = self.start_timer();
        let positions = self.positions(item);

        for &pos in &positions {
            if let Err(err) = self.counters.check_increment(pos) {
                warn!(
                    position = pos,
                    max_count = self.params.max_count,
                    items = self.count,
                    "Add rejected: counter saturated"
                );
                self.metrics.record_overflow();
                return Err(err);
            }
        }

        for pos in positions {
            self.counters.increment(pos)?;
        }
        self.count += 1;

        self.metrics.record_add(elapsed(start));
        Ok(())
    }

    /// Remove an item, decrementing its k counters.
    ///
    /// Fails with `CounterUnderflow` if any of the k slots is already zero;
    /// in that case nothing is modified.
    ///
    /// **Note**: Only remove items that were added. Removing a false
    /// positive succeeds and steals counts from the items it collides with.
    pub fn remove(&mut self, item: &[u8]) -> Result<(), FilterError> {
        let positions = self.positions(item);

        for &pos in &positions {
            if let Err(err) = self.counters.check_decrement(pos) {
                warn!(position = pos, items = self.count, "Remove rejected: counter empty");
                self.metrics.record_underflow();
                return Err(err);
            }
        }

        for pos in positions {
            self.counters.decrement(pos)?;
        }
        // Sum of counters == k * count, so nonzero slots imply count > 0.
        self.count -= 1;

        self.metrics.record_remove();
        Ok(())
    }

    /// Clock read only when the recorder wants durations.
    #[inline]
    fn start_timer(&self) -> Option<Instant> {
        self.metrics.is_timed().then(Instant::now)
    }

    /// Net number of items added (successful adds minus successful removes).
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Reset all counters and the item count. The key is kept.
    pub fn clear(&mut self) {
        self.counters.clear();
        self.count = 0;
    }

    /// Number of hash functions (k)
    pub fn hash_count(&self) -> usize {
        self.params.hash_count
    }

    /// Reference size in slots (m)
    pub fn size(&self) -> usize {
        self.params.size
    }

    /// Slots per hash function (o)
    pub fn slot_span(&self) -> usize {
        self.params.slot_span
    }

    /// Length of the counter array (k * o)
    pub fn slots(&self) -> usize {
        self.counters.len()
    }

    /// Expected number of distinct items (n)
    pub fn capacity(&self) -> usize {
        self.params.capacity
    }

    /// Target false positive rate (p)
    pub fn error_rate(&self) -> f64 {
        self.params.error_rate
    }

    pub fn max_count(&self) -> u8 {
        self.params.max_count
    }

    pub fn parameters(&self) -> &FilterParameters {
        &self.params
    }

    /// Counter storage in bytes (one byte per slot)
    pub fn size_bytes(&self) -> usize {
        self.counters.len()
    }

    /// Slots with a nonzero counter
    pub fn occupied_slots(&self) -> usize {
        self.counters.nonzero_count()
    }

    /// Estimated false positive rate at the current load
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k with m = k * o
    pub fn estimated_false_positive_rate(&self) -> f64 {
        calculate_fpr(self.counters.len(), self.count, self.params.hash_count)
    }
}

#[inline]
fn elapsed(start: Option<Instant>) -> Duration {
    start.map_or(Duration::ZERO, |start| start.elapsed())
}

impl<H: KeyedHasher> fmt::Display for CountingBloomFilter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CountingBloomFilter <k:{}, m:{}, n:{}, p:{:.8}>",
            self.params.hash_count, self.params.size, self.params.capacity, self.params.error_rate
        )
    }
}

impl<H: KeyedHasher> fmt::Debug for CountingBloomFilter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingBloomFilter")
            .field("k", &self.params.hash_count)
            .field("m", &self.params.size)
            .field("o", &self.params.slot_span)
            .field("slots", &self.counters.len())
            .field("capacity", &self.params.capacity)
            .field("error_rate", &self.params.error_rate)
            .field("max_count", &self.params.max_count)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
