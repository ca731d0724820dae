//! # Counting Bloom Self-Test
//!
//! Smoke test for the filter and its hash function:
//!
//! 1. Check SipHash-2-4 against the published test vector
//! 2. Build a filter from `FilterConfig::from_env()`
//! 3. Add fixed and random items, checking membership before and after
//! 4. Remove everything and check the filter is empty again
//!
//! Exits non-zero on the first violated expectation.

use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use rand::Rng;
use tracing::info;

use bloom_telemetry::{init_logging, TelemetryConfig};
use counting_bloom::{siphash24, CountingBloomFilter, FilterConfig, Metrics};

/// Number of random 100-byte items added on top of the fixed ones.
const RANDOM_ITEMS: usize = 50;
const RANDOM_ITEM_LEN: usize = 100;

/// SipHash paper vector: message 00..0e, key 00..0f.
const TEST_VECTOR_DIGEST: u64 = 0xa129_ca61_49be_45e5;

fn verify_test_vector() -> Result<()> {
    let message: Vec<u8> = (0u8..15).collect();
    let mut key = [0u8; 16];
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let digest = siphash24(&message, &key);
    ensure!(
        digest == TEST_VECTOR_DIGEST,
        "SipHash-2-4 test vector mismatch: got {:#018x}, expected {:#018x}",
        digest,
        TEST_VECTOR_DIGEST
    );
    info!(digest = %format!("{:#018x}", digest), "SipHash-2-4 test vector OK");
    Ok(())
}

fn build_items() -> Vec<Vec<u8>> {
    let mut rng = rand::thread_rng();
    let mut items: Vec<Vec<u8>> = vec![b"A".to_vec(), Vec::new(), b"helloworld".to_vec()];
    items.extend((0..RANDOM_ITEMS).map(|_| {
        let mut item = vec![0u8; RANDOM_ITEM_LEN];
        rng.fill(&mut item[..]);
        item
    }));
    items
}

fn run_scenario(config: &FilterConfig) -> Result<()> {
    let metrics = Arc::new(Metrics::new());
    let mut filter = CountingBloomFilter::from_config(config)
        .context("Failed to build filter")?
        .with_metrics(metrics.clone());
    info!(filter = %filter, slots = filter.slots(), "Filter ready");

    let items = build_items();
    ensure!(filter.is_empty(), "new filter reports {} items", filter.len());

    for (i, item) in items.iter().enumerate() {
        ensure!(!filter.contains(item), "item {} present before insertion", i);
        filter
            .add(item)
            .with_context(|| format!("Failed to add item {}", i))?;
        ensure!(filter.contains(item), "item {} missing after insertion", i);
    }
    ensure!(
        filter.len() == items.len(),
        "len {} after inserting {} items",
        filter.len(),
        items.len()
    );
    info!(
        items = filter.len(),
        occupied = filter.occupied_slots(),
        estimated_fpr = filter.estimated_false_positive_rate(),
        "Insertion phase OK"
    );

    for (i, item) in items.iter().enumerate() {
        filter
            .remove(item)
            .with_context(|| format!("Failed to remove item {}", i))?;
        ensure!(!filter.contains(item), "item {} present after removal", i);
    }
    ensure!(filter.is_empty(), "len {} after removing everything", filter.len());
    ensure!(
        filter.occupied_slots() == 0,
        "{} slots still occupied after removing everything",
        filter.occupied_slots()
    );

    let snapshot = metrics.snapshot();
    info!(
        added = snapshot.elements_added,
        removed = snapshot.elements_removed,
        lookups = snapshot.lookups_performed,
        avg_add_ns = snapshot.avg_add_ns,
        avg_lookup_ns = snapshot.avg_lookup_ns,
        "Removal phase OK"
    );
    Ok(())
}

fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_logging(&telemetry).context("Failed to initialize logging")?;

    verify_test_vector()?;

    let config = FilterConfig::from_env();
    config.validate().context("Invalid filter configuration")?;
    run_scenario(&config)?;

    info!("Self-test passed");
    Ok(())
}
