//! Criterion benchmarks for the compact genetic algorithm.
//!
//! Uses OneMax and a deceptive trap function to measure pure algorithm
//! overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::convert::Infallible;
use u_cga::cga::{CgaConfig, CgaProblem, CgaRunner, OneMax};

// ===========================================================================
// Trap-5: concatenated deceptive blocks of five bits
// ===========================================================================

struct Trap5;

impl CgaProblem for Trap5 {
    type Error = Infallible;

    fn evaluate(&self, candidate: &[bool]) -> Result<usize, Infallible> {
        Ok(candidate
            .chunks(5)
            .map(|block| {
                let ones = block.iter().filter(|&&b| b).count();
                if ones == block.len() {
                    block.len()
                } else {
                    block.len() - 1 - ones
                }
            })
            .sum())
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_cga_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("cga_onemax");
    group.sample_size(10);

    for &n in &[20usize, 100, 500] {
        let config = CgaConfig::new(n)
            .with_max_iterations(10 * n)
            .with_population_size(2 * n)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, c| {
            b.iter(|| {
                let result = CgaRunner::run(black_box(&OneMax), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_cga_trap(c: &mut Criterion) {
    let mut group = c.benchmark_group("cga_trap5");
    group.sample_size(10);

    for &blocks in &[4usize, 10] {
        let config = CgaConfig::new(5 * blocks)
            .with_max_iterations(2_000)
            .with_population_size(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &config, |b, c| {
            b.iter(|| {
                let result = CgaRunner::run(black_box(&Trap5), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cga_onemax, bench_cga_trap);
criterion_main!(benches);
