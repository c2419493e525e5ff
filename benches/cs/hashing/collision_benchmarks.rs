use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hashsim::{HashFunction, Simulator};

fn generate_names(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..=10);
            (0..len)
                .map(|_| rng.gen_range(b'A'..=b'Z') as char)
                .collect()
        })
        .collect()
}

fn bench_hash_functions(c: &mut Criterion) {
    let names = generate_names(1_000, 42);
    let mut group = c.benchmark_group("name_hash");
    for hash in HashFunction::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(hash), &names, |b, names| {
            b.iter(|| {
                for name in names {
                    black_box(hash.hash(black_box(name), 5_746).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let names = generate_names(5_746, 7);
    let sim = Simulator::new();
    let mut group = c.benchmark_group("simulate");
    for multiplier in [1usize, 2, 10] {
        let capacity = names.len() * multiplier;
        for hash in HashFunction::ALL {
            group.bench_with_input(
                BenchmarkId::new(hash.name(), multiplier),
                &capacity,
                |b, &capacity| b.iter(|| black_box(sim.run(&names, capacity, hash).unwrap())),
            );
        }
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let names = generate_names(5_746, 11);
    let capacities: Vec<usize> = [1, 2, 5, 10].iter().map(|m| m * names.len()).collect();
    let sim = Simulator::new();
    c.bench_function("sweep_sequential", |b| {
        b.iter(|| black_box(sim.sweep(&names, &capacities, false)))
    });
    c.bench_function("sweep_parallel", |b| {
        b.iter(|| black_box(sim.sweep(&names, &capacities, true)))
    });
}

criterion_group!(benches, bench_hash_functions, bench_simulation, bench_sweep);
criterion_main!(benches);
