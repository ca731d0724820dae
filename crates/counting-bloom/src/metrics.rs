//! Metrics hooks for counting Bloom filter operations
//!
//! Provides instrumentation points for monitoring filter load, rejected
//! mutations and operation latencies.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use counting_bloom::{CountingBloomFilter, Metrics};
//!
//! let metrics = Arc::new(Metrics::new());
//! let mut filter = CountingBloomFilter::new(1000, 0.01, 255)?
//!     .with_metrics(metrics.clone());
//!
//! filter.add(b"item")?;
//! assert_eq!(metrics.snapshot().elements_added, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for counting Bloom filter operations
///
/// Thread-safe counters; one collector may be shared by many filters.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total filters created
    pub filters_created: AtomicU64,
    /// Total counter slots allocated (one byte each)
    pub slots_allocated: AtomicU64,
    /// Successful add operations
    pub elements_added: AtomicU64,
    /// Successful remove operations
    pub elements_removed: AtomicU64,
    /// Total lookups performed
    pub lookups_performed: AtomicU64,
    /// Lookups answering "maybe present"
    pub lookups_positive: AtomicU64,
    /// Adds rejected because a slot was saturated
    pub overflows_rejected: AtomicU64,
    /// Removes rejected because a slot was already zero
    pub underflows_rejected: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
    /// Cumulative add time in nanoseconds
    pub add_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_created: self.filters_created.load(Ordering::Relaxed),
            slots_allocated: self.slots_allocated.load(Ordering::Relaxed),
            elements_added: self.elements_added.load(Ordering::Relaxed),
            elements_removed: self.elements_removed.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            overflows_rejected: self.overflows_rejected.load(Ordering::Relaxed),
            underflows_rejected: self.underflows_rejected.load(Ordering::Relaxed),
            avg_lookup_ns: self.avg_lookup_time_ns(),
            avg_add_ns: self.avg_add_time_ns(),
        }
    }

    /// Calculate average lookup time in nanoseconds
    pub fn avg_lookup_time_ns(&self) -> u64 {
        let total = self.lookup_time_ns.load(Ordering::Relaxed);
        let count = self.lookups_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Calculate average add time in nanoseconds
    pub fn avg_add_time_ns(&self) -> u64 {
        let total = self.add_time_ns.load(Ordering::Relaxed);
        let count = self.elements_added.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Ratio of positive lookups to total lookups.
    ///
    /// Includes true positives; only equals the false positive rate when
    /// every probed item is known to be absent.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.lookups_performed.load(Ordering::Relaxed);
        let positive = self.lookups_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        for counter in [
            &self.filters_created,
            &self.slots_allocated,
            &self.elements_added,
            &self.elements_removed,
            &self.lookups_performed,
            &self.lookups_positive,
            &self.overflows_rejected,
            &self.underflows_rejected,
            &self.lookup_time_ns,
            &self.add_time_ns,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub filters_created: u64,
    pub slots_allocated: u64,
    pub elements_added: u64,
    pub elements_removed: u64,
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub overflows_rejected: u64,
    pub underflows_rejected: u64,
    pub avg_lookup_ns: u64,
    pub avg_add_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to integrate with external metrics systems.
pub trait MetricsRecorder: Send + Sync {
    /// Whether `record_add` / `record_lookup` want real durations. When
    /// false the filter skips the clock and passes `Duration::ZERO`.
    fn is_timed(&self) -> bool {
        true
    }

    /// Record filter creation
    fn record_filter_created(&self, slots: usize, hash_count: usize, capacity: usize);

    /// Record a successful add
    fn record_add(&self, duration: Duration);

    /// Record a successful remove
    fn record_remove(&self);

    /// Record lookup operation
    fn record_lookup(&self, duration: Duration, found: bool);

    /// Record an add rejected by a saturated slot
    fn record_overflow(&self);

    /// Record a remove rejected by an empty slot
    fn record_underflow(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Debug, Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn is_timed(&self) -> bool {
        false
    }

    fn record_filter_created(&self, _: usize, _: usize, _: usize) {}
    fn record_add(&self, _: Duration) {}
    fn record_remove(&self) {}
    fn record_lookup(&self, _: Duration, _: bool) {}
    fn record_overflow(&self) {}
    fn record_underflow(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_filter_created(&self, slots: usize, _hash_count: usize, _capacity: usize) {
        self.filters_created.fetch_add(1, Ordering::Relaxed);
        self.slots_allocated.fetch_add(slots as u64, Ordering::Relaxed);
    }

    fn record_add(&self, duration: Duration) {
        self.elements_added.fetch_add(1, Ordering::Relaxed);
        self.add_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    fn record_remove(&self) {
        self.elements_removed.fetch_add(1, Ordering::Relaxed);
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn record_overflow(&self) {
        self.overflows_rejected.fetch_add(1, Ordering::Relaxed);
    }

    fn record_underflow(&self) {
        self.underflows_rejected.fetch_add(1, Ordering::Relaxed);
    }
}
