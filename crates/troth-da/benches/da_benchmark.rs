// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use troth_da::da::DaSolver;
use troth_model::generate::InstanceGenerator;
use troth_model::instance::Instance;

const SEED: u64 = 42;
const SIZES: [usize; 4] = [16, 64, 256, 1024];

fn seeded_instance(num_agents: usize) -> Instance {
    InstanceGenerator::new(num_agents)
        .with_seed(SEED)
        .generate()
}

/// Benchmarks a full solve on uniformly random instances of increasing
/// size. Throughput is measured in preference entries, which is the upper
/// bound on proposals and the natural unit of work for the engine.
fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("deferred_acceptance_solve");

    for &n in &SIZES {
        let instance = seeded_instance(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, instance| {
            let mut solver = DaSolver::preallocated(instance.num_agents());
            b.iter(|| solver.solve(black_box(instance)));
        });
    }

    group.finish();
}

/// Benchmarks solver construction plus solve, capturing the allocation
/// cost a fresh solver pays on its first run.
fn bench_cold_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("deferred_acceptance_cold");

    for &n in &SIZES[..2] {
        let instance = seeded_instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, instance| {
            b.iter(|| DaSolver::new().solve(black_box(instance)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve, bench_cold_solve);
criterion_main!(benches);
