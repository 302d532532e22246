// ============================================================================
// Decimal Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - checked operations across operand shapes
// 2. Text - parsing and formatting under styles and locales
// 3. Bits - decomposition round trip
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_engine::prelude::*;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let pairs = [
        ("integers", "12345", "678"),
        ("aligned", "123.45", "67.89"),
        ("mixed_scale", "1234567890.123456789", "0.000000001"),
        ("full_width", "7922816251426433759354395033.5", "1.000001"),
    ];

    for (name, a, b) in pairs {
        let left: Decimal = a.parse().unwrap();
        let right: Decimal = b.parse().unwrap();

        group.bench_with_input(
            BenchmarkId::new("add", name),
            &(left, right),
            |bencher, (l, r)| {
                bencher.iter(|| black_box(l.checked_add(*r)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("mul", name),
            &(left, right),
            |bencher, (l, r)| {
                bencher.iter(|| black_box(l.checked_mul(*r)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("div", name),
            &(left, right),
            |bencher, (l, r)| {
                bencher.iter(|| black_box(l.checked_div(*r)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("rem", name),
            &(left, right),
            |bencher, (l, r)| {
                bencher.iter(|| black_box(l.checked_rem(*r)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let rules = NumberFormat::invariant();

    for input in ["123", "123.456", "79228162514264337593543950335", "(1,234.50)"] {
        group.bench_with_input(BenchmarkId::new("parse", input), &input, |bencher, text| {
            bencher.iter(|| black_box(parse_with(text, ParseStyle::ANY, &rules)));
        });
    }

    let value: Decimal = "1234567.891".parse().unwrap();
    for spec in ["G", "F2", "N2", "C"] {
        group.bench_with_input(BenchmarkId::new("format", spec), &spec, |bencher, spec| {
            bencher.iter(|| black_box(format_with(&value, spec, &rules)));
        });
    }

    group.finish();
}

// ============================================================================
// Bit Decomposition Benchmarks
// ============================================================================

fn benchmark_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("bits");
    let value: Decimal = "-7.9228162514264337593543950335".parse().unwrap();

    group.bench_function("to_bits", |bencher| {
        bencher.iter(|| black_box(value.to_bits()));
    });
    group.bench_function("round_trip", |bencher| {
        bencher.iter(|| black_box(Decimal::from_bits(value.to_bits())));
    });

    group.finish();
}

criterion_group!(benches, benchmark_arithmetic, benchmark_text, benchmark_bits);
criterion_main!(benches);
