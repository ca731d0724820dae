//! # Hashing Benchmarks
//!
//! - SipHash-2-4 throughput across message sizes
//! - SipHash-1-3 vs SipHash-2-4 on a short key-sized message
//! - Position derivation for k = 7 and k = 14

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use counting_bloom::{siphash24, CountingBloomFilter, SipHash13, SipHash24};

const KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

fn random_message(len: usize) -> Vec<u8> {
    let mut message = vec![0u8; len];
    rand::thread_rng().fill(&mut message[..]);
    message
}

pub fn siphash_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("siphash24-throughput");

    for size in [8usize, 16, 64, 256, 1024, 4096] {
        let message = random_message(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| black_box(siphash24(black_box(message), &KEY)))
        });
    }

    group.finish();
}

pub fn siphash_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("siphash-variants");
    let message = random_message(32);

    group.bench_function("siphash_1_3", |b| {
        b.iter(|| black_box(SipHash13::digest(black_box(&message), &KEY)))
    });
    group.bench_function("siphash_2_4", |b| {
        b.iter(|| black_box(SipHash24::digest(black_box(&message), &KEY)))
    });

    group.finish();
}

pub fn position_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("position-derivation");

    for (capacity, error_rate) in [(10_000usize, 0.01f64), (100_000, 0.0001)] {
        let Ok(filter) = CountingBloomFilter::new(capacity, error_rate, 255) else {
            continue;
        };
        let item = random_message(100);
        group.bench_with_input(
            BenchmarkId::new("k", filter.hash_count()),
            &item,
            |b, item| b.iter(|| black_box(filter.positions(black_box(item)))),
        );
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    siphash_throughput(c);
    siphash_variants(c);
    position_derivation(c);
}
