//! Performance benchmarks for oxicodec-lz78
//!
//! - Compression/decompression throughput across data patterns
//! - Token counts (compression ratio proxy) for bounded and unbounded dictionaries

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxicodec_lz78::{Lz78Config, compress, compress_with, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repetitive pattern
    pub fn repetitive(size: usize) -> Vec<u8> {
        b"TOBEORNOTTOBEORTOBEORNOT"
            .iter()
            .copied()
            .cycle()
            .take(size)
            .collect()
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }
}

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform),
    ("random", test_data::random),
    ("repetitive", test_data::repetitive),
    ("text_like", test_data::text_like),
];

fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz78_compress");

    for (name, generator) in PATTERNS {
        let data = generator(64 * 1024);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data))));
        });
    }

    group.finish();
}

fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz78_decompress");

    for (name, generator) in PATTERNS {
        let data = generator(64 * 1024);
        let tokens = compress(&data);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &tokens, |b, tokens| {
            b.iter(|| black_box(decompress(black_box(tokens)).unwrap()));
        });
    }

    group.finish();
}

fn bench_bounded_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz78_bounded");
    let data = test_data::text_like(256 * 1024);

    for max in [256u64, 4096, 65536] {
        let config = Lz78Config::new(max);
        let tokens = compress_with(&data, config).len();
        println!("max_phrases={max}: {} bytes -> {tokens} tokens", data.len());

        group.bench_with_input(BenchmarkId::from_parameter(max), &data, |b, data| {
            b.iter(|| black_box(compress_with(black_box(data), config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_bounded_dictionary,
);
criterion_main!(benches);
