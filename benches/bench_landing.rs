use std::sync::Arc;

use airland::{
    evolution::{Challenge, EvolutionLauncher, EvolutionOptions, LogLevel, PenaltyChallenge},
    population::PopulationInitializer,
    problem::{Aircraft, LandingProblem},
    rng::RandomNumberGenerator,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn problem(size: usize) -> Arc<LandingProblem> {
    let aircraft = (0..size)
        .map(|id| Aircraft {
            id,
            appearance_time: id as i64 * 10,
            earliest_time: id as i64 * 10,
            target_time: id as i64 * 10 + 40,
            latest_time: id as i64 * 10 + 400,
            early_penalty: 10.0,
            late_penalty: 30.0,
            separations: (0..size).map(|o| if o == id { 0 } else { 8 }).collect(),
        })
        .collect();
    Arc::new(LandingProblem::new(aircraft).unwrap())
}

fn bench_initialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialization");
    for threshold in [usize::MAX, 1] {
        let label = if threshold == 1 { "parallel" } else { "sequential" };
        let problem = problem(20);
        let options = EvolutionOptions::builder().parallel_threshold(threshold).build();
        group.bench_function(BenchmarkId::new(label, 2000), |b| {
            let initializer = PopulationInitializer::new(&problem, &options);
            let mut rng = RandomNumberGenerator::from_seed(42);
            b.iter(|| {
                let population = initializer.generate(black_box(2000), &mut rng);
                assert!(population.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_fitness(c: &mut Criterion) {
    let problem = problem(50);
    let options = EvolutionOptions::default();
    let population = PopulationInitializer::new(&problem, &options)
        .generate(500, &mut RandomNumberGenerator::from_seed(1))
        .unwrap();
    let challenge = PenaltyChallenge::new(Arc::clone(&problem));

    c.bench_function("fitness_500x50", |b| {
        b.iter(|| {
            population
                .iter()
                .map(|schedule| challenge.score(black_box(schedule)))
                .sum::<f64>()
        })
    });
}

fn bench_evolve(c: &mut Criterion) {
    let launcher = EvolutionLauncher::for_problem(problem(15));
    let options = EvolutionOptions::new(50, LogLevel::None, 100);

    c.bench_function("evolve_15_aircraft_50_generations", |b| {
        let mut rng = RandomNumberGenerator::from_seed(7);
        b.iter(|| launcher.evolve(black_box(&options), &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_initialization, bench_fitness, bench_evolve);
criterion_main!(benches);
