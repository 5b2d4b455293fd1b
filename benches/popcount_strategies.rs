//! Detailed popcount strategy benchmarks.
//!
//! Compares performance across the four strategies:
//! - scan: bit-at-a-time loop (fixed 32 iterations)
//! - kernighan: bit-clearing loop (iterations = set bits)
//! - table: 256-entry byte lookup
//! - native: count_ones() / hardware POPCNT
//!
//! Run with: `cargo bench --bench popcount_strategies`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bitweight::Strategy;

fn bench_single_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_word");

    // Inputs chosen so Kernighan's data-dependent loop shows its spread
    let inputs = [
        ("zero", 0u32),
        ("sparse", 0x8000_0001),
        ("half", 0xAAAA_AAAA),
        ("dense", 0xFFFF_FFFD),
        ("ones", u32::MAX),
    ];

    for (input_name, value) in inputs {
        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(input_name, strategy.name()),
                &value,
                |b, &value| b.iter(|| strategy.count(black_box(value))),
            );
        }
    }

    group.finish();
}

fn bench_popcount_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("popcount_strategies");

    // Test various data sizes (in u32 words)
    let sizes = [
        ("64B", 16),       // 16 words = 64 bytes (fits in cache)
        ("1KB", 256),      // 256 words = 1KB
        ("32KB", 8192),    // 32KB (typical L1 cache)
        ("256KB", 65536),  // 256KB (L2 cache)
        ("1MB", 262144),   // 1MB (L3 cache)
    ];

    // Different data patterns affect the data-dependent strategies
    type PatternFn = fn(u32) -> u32;
    let patterns: [(&str, PatternFn); 6] = [
        ("zeros", |_| 0u32),
        ("ones", |_| u32::MAX),
        ("sparse", |i| i & 0x0001_0001),
        ("dense", |i| i | 0xF0F0_F0F0),
        ("alternating", |i| {
            if i % 2 == 0 {
                0xAAAA_AAAA
            } else {
                0x5555_5555
            }
        }),
        ("random", |i| i.wrapping_mul(0x9E37_79B9)),
    ];

    for (size_name, word_count) in sizes {
        for (pattern_name, pattern_fn) in &patterns {
            let words: Vec<u32> = (0u32..word_count).map(pattern_fn).collect();

            for strategy in Strategy::ALL {
                group.bench_with_input(
                    BenchmarkId::new(format!("{}/{}", size_name, pattern_name), strategy.name()),
                    &words,
                    |b, words| b.iter(|| strategy.count_all(black_box(words))),
                );
            }
        }
    }

    group.finish();
}

/// Benchmark throughput in GB/s.
///
/// Helps understand real-world performance: "How fast can we process data?"
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.throughput(criterion::Throughput::Bytes(1024 * 1024)); // 1MB in bytes

    // 1MB of data = 262,144 u32 words
    let words: Vec<u32> = (0u32..262144).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();

    for strategy in Strategy::ALL {
        group.bench_function(format!("{}_1MB", strategy.name()), |b| {
            b.iter(|| strategy.count_all(black_box(&words)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_word,
    bench_popcount_strategies,
    bench_throughput
);

criterion_main!(benches);
