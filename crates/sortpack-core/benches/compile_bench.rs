//! Criterion benchmarks for the sorter compiler.
//!
//! - `compile_small`: 10 groups of 10 items
//! - `compile_large`: 200 groups of 50 items

use criterion::{Criterion, criterion_group, criterion_main};
use sortpack_core::compile;
use sortpack_core::test_utils::generated_config;

fn bench_compile(c: &mut Criterion) {
    let small = generated_config(10, 10);
    c.bench_function("compile_small", |b| b.iter(|| compile(&small)));

    let large = generated_config(200, 50);
    c.bench_function("compile_large", |b| b.iter(|| compile(&large)));
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
