use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fastrand::Rng;
use swarmnav::{
    algorithms::particles::{SwarmUpdateMethod, PSO},
    core::{Engine, RunConfig},
    objectives::{Bilinear, Navigation},
};

fn engine(config: RunConfig) -> Engine<PSO<Rng>> {
    Engine::new(PSO::new(Rng::with_seed(0)), config).unwrap()
}

fn pso_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("PSO");
    for method in [SwarmUpdateMethod::Synchronous, SwarmUpdateMethod::Asynchronous] {
        for n_particles in [20, 100, 200] {
            group.bench_with_input(
                BenchmarkId::new(format!("Navigation ({:?})", method), n_particles),
                &n_particles,
                |b, n| {
                    let config = RunConfig::default()
                        .with_n_particles(*n)
                        .with_n_steps(100)
                        .with_update_method(method);
                    b.iter_batched(
                        || (engine(config.clone()), Navigation::default()),
                        |(mut engine, problem)| {
                            let result = engine.process(&problem).unwrap();
                            black_box(result);
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.bench_function("Bilinear (demo)", |b| {
        b.iter_batched(
            || engine(RunConfig::bilinear_demo()),
            |mut engine| {
                let result = engine.process(&Bilinear).unwrap();
                black_box(result);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, pso_benchmark);
criterion_main!(benches);
