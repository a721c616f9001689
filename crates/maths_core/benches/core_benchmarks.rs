//! Criterion benchmarks for maths_core.
//!
//! Covers the conversions used on every seed and binomial draw, plus the
//! on-demand statistics over large data sets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maths_core::binary::{bytes_to_ints, double_to_fixed_point_bits, BitString};
use maths_core::number::Rational;
use maths_core::statistics::DataSet;

/// Benchmark seed-sized byte to word conversion.
fn bench_bytes_to_ints(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes_to_ints");

    for size in [16usize, 20, 16384] {
        let bytes: Vec<u8> = (0..size).map(|i| i as u8).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| bytes_to_ints(black_box(bytes)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark bit string construction and population count.
fn bench_bit_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_string");

    for length in [32usize, 1000, 100_000] {
        group.bench_with_input(BenchmarkId::new("random_count", length), &length, |b, &length| {
            let mut word = 0x9E37_79B9u32;
            b.iter(|| {
                let bits = BitString::random(black_box(length), || {
                    word = word.rotate_left(5).wrapping_mul(0x2545_F491);
                    word
                });
                bits.count_set_bits()
            });
        });
    }

    group.bench_function("fixed_point_bits", |b| {
        b.iter(|| double_to_fixed_point_bits(black_box(0.163)).unwrap());
    });

    group.finish();
}

/// Benchmark on-demand statistics.
fn bench_data_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_set");

    for size in [1000usize, 100_000] {
        let data: DataSet = (0..size).map(|i| ((i * 7919) % size) as f64).collect();
        group.bench_with_input(BenchmarkId::new("median", size), &data, |b, data| {
            b.iter(|| data.median().unwrap());
        });
        group.bench_with_input(
            BenchmarkId::new("sample_standard_deviation", size),
            &data,
            |b, data| {
                b.iter(|| data.sample_standard_deviation().unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark exact fraction arithmetic: the harmonic number H(20).
fn bench_rational(c: &mut Criterion) {
    let terms: Vec<Rational> = (1..=20).map(|k| Rational::new(1, k).unwrap()).collect();
    c.bench_function("rational_harmonic_20", |b| {
        b.iter(|| {
            black_box(&terms)
                .iter()
                .try_fold(Rational::ZERO, |sum, &term| sum.checked_add(term))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_bytes_to_ints,
    bench_bit_string,
    bench_data_set,
    bench_rational
);
criterion_main!(benches);
