//! # False Positive Rate
//!
//! Fills a filter to capacity and probes it with items that were never
//! inserted. The observed rate must land near the configured target.

#[cfg(test)]
mod tests {
    use counting_bloom::{calculate_fpr, CountingBloomFilter, FilterConfig, FixedKeySource};

    const PROBES: u64 = 100_000;

    fn member(i: u64) -> Vec<u8> {
        let mut item = b"member-".to_vec();
        item.extend_from_slice(&i.to_le_bytes());
        item
    }

    fn probe(i: u64) -> Vec<u8> {
        let mut item = b"probe-".to_vec();
        item.extend_from_slice(&i.to_le_bytes());
        item
    }

    fn filled_filter(capacity: usize, error_rate: f64) -> CountingBloomFilter {
        let config = FilterConfig::new(capacity, error_rate, 255).unwrap();
        let mut filter =
            CountingBloomFilter::with_key_source(&config, &FixedKeySource::new([0x5a; 16]))
                .unwrap();
        for i in 0..capacity as u64 {
            filter.add(&member(i)).unwrap();
        }
        filter
    }

    fn observed_rate(filter: &CountingBloomFilter) -> f64 {
        let hits = (0..PROBES).filter(|&i| filter.contains(&probe(i))).count();
        hits as f64 / PROBES as f64
    }

    #[test]
    fn test_observed_rate_near_target_at_capacity() {
        let filter = filled_filter(10_000, 0.01);
        let rate = observed_rate(&filter);

        assert!(rate > 0.005, "observed rate {} suspiciously low", rate);
        assert!(rate < 0.015, "observed rate {} above tolerance", rate);
    }

    #[test]
    fn test_estimate_matches_target_at_capacity() {
        let filter = filled_filter(10_000, 0.01);
        let estimate = filter.estimated_false_positive_rate();

        assert!((estimate - 0.01).abs() < 0.002, "estimate {}", estimate);
        assert_eq!(
            estimate,
            calculate_fpr(filter.slots(), filter.len(), filter.hash_count())
        );
    }

    #[test]
    fn test_tighter_target_gives_fewer_false_positives() {
        let loose = filled_filter(5_000, 0.05);
        let tight = filled_filter(5_000, 0.001);

        assert!(observed_rate(&tight) < observed_rate(&loose));
        assert!(tight.hash_count() > loose.hash_count());
    }

    #[test]
    fn test_members_always_found() {
        let filter = filled_filter(10_000, 0.01);
        assert!((0..10_000u64).all(|i| filter.contains(&member(i))));
    }
}
