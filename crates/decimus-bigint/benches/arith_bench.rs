//! Benchmarks for the big integer arithmetic kernels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use decimus_bigint::BigInt;

/// Builds a value with exactly `digits` decimal digits.
fn number_with_digits(digits: usize) -> BigInt {
    let pattern = "123456789".repeat(digits / 9 + 1);
    pattern[..digits].parse().unwrap()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for digits in [90, 900, 9000] {
        let a = number_with_digits(digits);
        let b = number_with_digits(digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b));
        });
    }
    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for digits in [90, 900, 9000] {
        let a = number_with_digits(digits);
        let b = number_with_digits(digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b));
        });
    }
    group.finish();
}

fn bench_div_rem(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_rem");
    group.sample_size(20);
    for digits in [90, 900, 9000] {
        let a = number_with_digits(digits);
        let b = number_with_digits(digits / 2);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a).checked_div_rem(black_box(&b)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_mul, bench_div_rem);
criterion_main!(benches);
