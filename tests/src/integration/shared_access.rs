//! # Shared Access
//!
//! The filter takes `&mut self` for mutation and does no locking of its
//! own. Callers that share one instance across threads serialize through a
//! single external lock; these tests check that pattern holds up.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use counting_bloom::{CountingBloomFilter, Metrics};
    use parking_lot::{Mutex, RwLock};

    const THREADS: u32 = 4;
    const PER_THREAD: u32 = 250;

    fn item(thread: u32, i: u32) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&thread.to_le_bytes());
        bytes[4..].copy_from_slice(&i.to_le_bytes());
        bytes
    }

    #[test]
    fn test_concurrent_adds_behind_mutex() {
        let filter = Mutex::new(CountingBloomFilter::new(10_000, 0.001, 255).unwrap());

        thread::scope(|s| {
            for t in 0..THREADS {
                let filter = &filter;
                s.spawn(move || {
                    for i in 0..PER_THREAD {
                        filter.lock().add(&item(t, i)).unwrap();
                    }
                });
            }
        });

        let filter = filter.into_inner();
        assert_eq!(filter.len(), (THREADS * PER_THREAD) as usize);
        for t in 0..THREADS {
            for i in 0..PER_THREAD {
                assert!(filter.contains(&item(t, i)));
            }
        }
    }

    #[test]
    fn test_concurrent_add_remove_balances_out() {
        let metrics = Arc::new(Metrics::new());
        let filter = Mutex::new(
            CountingBloomFilter::new(10_000, 0.001, 255)
                .unwrap()
                .with_metrics(metrics.clone()),
        );

        thread::scope(|s| {
            for t in 0..THREADS {
                let filter = &filter;
                s.spawn(move || {
                    for i in 0..PER_THREAD {
                        let item = item(t, i);
                        let mut guard = filter.lock();
                        guard.add(&item).unwrap();
                        guard.remove(&item).unwrap();
                    }
                });
            }
        });

        let filter = filter.into_inner();
        assert!(filter.is_empty());
        assert_eq!(filter.occupied_slots(), 0);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.elements_added, u64::from(THREADS * PER_THREAD));
        assert_eq!(snapshot.elements_removed, u64::from(THREADS * PER_THREAD));
    }

    #[test]
    fn test_readers_share_populated_filter() {
        let mut filter = CountingBloomFilter::new(1_000, 0.001, 255).unwrap();
        for i in 0..PER_THREAD {
            filter.add(&item(0, i)).unwrap();
        }
        let filter = RwLock::new(filter);

        thread::scope(|s| {
            for _ in 0..THREADS {
                let filter = &filter;
                s.spawn(move || {
                    let guard = filter.read();
                    assert!((0..PER_THREAD).all(|i| guard.contains(&item(0, i))));
                });
            }
        });
    }
}
