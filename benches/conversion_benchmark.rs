// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parse - Numeral validation in isolation
// 2. Full Conversion - End-to-end convert() across radix pairs
// 3. Trace Volume - Cost of trace assembly for digit-heavy inputs
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use radix_convert::prelude::*;

// ============================================================================
// Parse Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for digits in [4usize, 16, 32].iter() {
        let input = "7A".repeat(digits / 2 + 1)[..*digits].to_string();

        group.bench_with_input(BenchmarkId::new("hex", digits), &input, |b, input| {
            b.iter(|| black_box(Numeral::parse(input, Radix::HEXADECIMAL).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Full Conversion Benchmarks
// ============================================================================

fn benchmark_full_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_conversion");

    // Representative radix pairs, including both base-10 pass-throughs
    let cases = [
        ("binary_to_hex", "1011011011111001", Radix::BINARY, Radix::HEXADECIMAL),
        ("hex_to_binary", "B6F9", Radix::HEXADECIMAL, Radix::BINARY),
        ("decimal_to_base36", "46841", Radix::DECIMAL, Radix::new(36).unwrap()),
        ("hex_to_decimal", "B6F9", Radix::HEXADECIMAL, Radix::DECIMAL),
    ];

    for (name, input, source, target) in cases.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| black_box(convert(input, *source, *target).unwrap()));
        });
    }

    // Fractional input exercises the bounded multiplication loop
    group.bench_function("fractional_decimal_to_binary", |b| {
        b.iter(|| black_box(convert("3.14159", Radix::DECIMAL, Radix::BINARY).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Trace Volume Benchmarks
// ============================================================================

fn benchmark_trace_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_volume");

    // Long binary inputs maximize records per conversion
    for digits in [8usize, 24, 48].iter() {
        let input = "10".repeat(*digits / 2);

        group.bench_with_input(
            BenchmarkId::new("binary_to_base36", digits),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(convert(input, Radix::BINARY, Radix::new(36).unwrap()).unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_full_conversion,
    benchmark_trace_volume
);
criterion_main!(benches);
