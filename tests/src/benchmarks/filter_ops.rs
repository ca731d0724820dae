//! # Filter Operation Benchmarks
//!
//! Add, lookup and remove against a filter sized for 100 000 items at
//! 0.0001, filled to half capacity before measuring.

use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use counting_bloom::CountingBloomFilter;

const CAPACITY: usize = 100_000;
const ERROR_RATE: f64 = 0.0001;

fn random_items(count: usize) -> Vec<[u8; 32]> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let mut item = [0u8; 32];
            rng.fill(&mut item[..]);
            item
        })
        .collect()
}

fn half_full_filter(items: &[[u8; 32]]) -> CountingBloomFilter {
    let mut filter = match CountingBloomFilter::new(CAPACITY, ERROR_RATE, 255) {
        Ok(filter) => filter,
        Err(e) => panic!("benchmark filter parameters rejected: {}", e),
    };
    for item in items {
        let _ = filter.add(item);
    }
    filter
}

pub fn lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter-lookup");
    let members = random_items(CAPACITY / 2);
    let absent = random_items(1_000);
    let filter = half_full_filter(&members);

    group.throughput(Throughput::Elements(1));
    group.bench_function("contains_member", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % members.len();
            black_box(filter.contains(&members[i]))
        })
    });
    group.bench_function("contains_absent", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % absent.len();
            black_box(filter.contains(&absent[i]))
        })
    });

    group.finish();
}

pub fn add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter-mutation");
    let members = random_items(CAPACITY / 2);
    let mut filter = half_full_filter(&members);
    let extra = random_items(1_000);

    group.throughput(Throughput::Elements(1));
    group.bench_function("add_then_remove", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % extra.len();
            let item = &extra[i];
            black_box(filter.add(item).is_ok());
            black_box(filter.remove(item).is_ok());
        })
    });

    group.finish();
}

pub fn bulk_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter-bulk-insert");

    for count in [1_000usize, 10_000] {
        let items = random_items(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter_batched(
                || CountingBloomFilter::new(CAPACITY, ERROR_RATE, 255),
                |filter| {
                    if let Ok(mut filter) = filter {
                        for item in items {
                            let _ = filter.add(item);
                        }
                        black_box(filter.len());
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    lookup(c);
    add_remove(c);
    bulk_insert(c);
}
