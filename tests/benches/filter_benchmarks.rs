//! # Counting Bloom Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Hashing | SipHash-2-4 throughput, SipHash-1-3 comparison, position derivation |
//! | Filter | contains (member / absent), add + remove, bulk insert |

use criterion::{criterion_group, criterion_main, Criterion};

use counting_bloom_tests::benchmarks::{filter_ops, hashing};

fn bench_hashing(c: &mut Criterion) {
    hashing::register_benchmarks(c);
}

fn bench_filter_ops(c: &mut Criterion) {
    filter_ops::register_benchmarks(c);
}

criterion_group!(benches, bench_hashing, bench_filter_ops);
criterion_main!(benches);
