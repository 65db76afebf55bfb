//! Criterion benchmarks for u-roster.
//!
//! Measures fitness scoring on its own and full searches over rosters of
//! increasing size on the default weekly calendar.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_roster::ga::{generate, FitnessEvaluator, Objective, Scheduler, SearchConfig};
use u_roster::models::{Employee, ShiftSet};

fn roster(n: usize) -> Vec<Employee> {
    (0..n)
        .map(|i| Employee::new(format!("E{i}"), if i % 2 == 0 { "F" } else { "M" }))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_score");
    let shifts = ShiftSet::weekly();
    let evaluator = FitnessEvaluator::new().with_coverage("M");

    for &n in &[4usize, 16, 64] {
        let employees = roster(n);
        let mut rng = StdRng::seed_from_u64(42);
        let population = generate(&employees, &shifts, 100, &mut rng).expect("roster large enough");
        group.bench_with_input(BenchmarkId::from_parameter(n), &population, |b, pop| {
            b.iter(|| {
                for schedule in pop {
                    black_box(evaluator.score(black_box(schedule), &employees, &shifts));
                }
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_search");
    group.sample_size(10);

    for (employees, pop, gen) in [(4usize, 20usize, 50usize), (10, 50, 100), (30, 100, 100)] {
        let config = SearchConfig::default()
            .with_population_size(pop)
            .with_generations(gen)
            .with_elite_size(2)
            .with_mutation_rate(0.05)
            .with_seed(42);
        let scheduler = Scheduler::new(roster(employees), ShiftSet::weekly(), config)
            .expect("valid benchmark setup")
            .with_coverage("M");
        group.bench_with_input(
            BenchmarkId::new(format!("e{}_p{}_g{}", employees, pop, gen), employees),
            &scheduler,
            |b, s| {
                b.iter(|| {
                    let result = black_box(s).run();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_search);
criterion_main!(benches);
