use fastrand::Rng;
use proptest::prelude::*;
use swarmnav::{
    algorithms::particles::SwarmUpdateMethod,
    core::{Bound, BoundingBox},
    objectives::{Bilinear, Navigation},
    prelude::*,
};

fn run_config() -> impl Strategy<Value = RunConfig> {
    (
        1..20usize,
        1..25usize,
        0.0..1.5 as Float,
        0.0..3.0 as Float,
        0.0..3.0 as Float,
        -100.0..100.0 as Float,
        0.1..50.0 as Float,
        -100.0..100.0 as Float,
        0.1..50.0 as Float,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(n_particles, n_steps, omega, c1, c2, x0, dx, y0, dy, maximize, asynchronous)| {
                RunConfig::default()
                    .with_n_particles(n_particles)
                    .with_n_steps(n_steps)
                    .with_omega(omega)
                    .with_c1(c1)
                    .with_c2(c2)
                    .with_bounds(BoundingBox {
                        x: Bound::from((x0, x0 + dx)),
                        y: Bound::from((y0, y0 + dy)),
                    })
                    .with_direction(if maximize {
                        Direction::Maximize
                    } else {
                        Direction::Minimize
                    })
                    .with_update_method(if asynchronous {
                        SwarmUpdateMethod::Asynchronous
                    } else {
                        SwarmUpdateMethod::Synchronous
                    })
            },
        )
}

fn engine(config: RunConfig, seed: u64) -> Engine<PSO<Rng>> {
    Engine::new(PSO::new(Rng::with_seed(seed)), config).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn positions_never_leave_the_box(config in run_config(), seed in any::<u64>()) {
        let bounds = config.bounds;
        let mut engine = engine(config, seed);
        engine.initialize(&Bilinear).unwrap();
        while engine.state() != EngineState::Completed {
            engine.step(&Bilinear).unwrap();
            for position in engine.status().swarm.positions() {
                prop_assert!(bounds.contains(&position), "{:?} escaped {}", position, bounds);
            }
        }
    }

    #[test]
    fn global_best_never_gets_worse(config in run_config(), seed in any::<u64>()) {
        let direction = config.direction;
        let mut engine = engine(config, seed);
        engine.initialize(&Bilinear).unwrap();
        let mut previous = engine.status().get_best().unwrap().fx;
        while engine.state() != EngineState::Completed {
            engine.step(&Bilinear).unwrap();
            let current = engine.status().get_best().unwrap().fx;
            prop_assert!(!direction.is_better(previous, current));
            previous = current;
        }
    }

    #[test]
    fn personal_best_dominates_history(config in run_config(), seed in any::<u64>()) {
        let direction = config.direction;
        let mut engine = engine(config, seed);
        engine.initialize(&Bilinear).unwrap();
        let mut history: Vec<Vec<Float>> = engine
            .status()
            .swarm
            .particles
            .iter()
            .map(|p| vec![p.value()])
            .collect();
        while engine.state() != EngineState::Completed {
            engine.step(&Bilinear).unwrap();
            for (visited, particle) in history.iter_mut().zip(&engine.status().swarm.particles) {
                visited.push(particle.value());
                prop_assert!(visited.iter().all(|fx| !direction.is_better(*fx, particle.best.fx)));
            }
        }
    }

    #[test]
    fn global_best_matches_personal_bests(config in run_config(), seed in any::<u64>()) {
        let direction = config.direction;
        let mut engine = engine(config, seed);
        engine.initialize(&Bilinear).unwrap();
        while engine.state() != EngineState::Completed {
            let reduced = engine.status().swarm.best(direction).unwrap();
            prop_assert_eq!(engine.status().get_best().unwrap().fx, reduced.fx);
            engine.step(&Bilinear).unwrap();
        }
        let reduced = engine.status().swarm.best(direction).unwrap();
        prop_assert_eq!(engine.status().get_best().unwrap().fx, reduced.fx);
    }

    #[test]
    fn runs_are_reproducible(config in run_config(), seed in any::<u64>()) {
        let first = engine(config.clone(), seed).process(&Bilinear).unwrap();
        let second = engine(config, seed).process(&Bilinear).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scripted_runs_are_reproducible(
        values in proptest::collection::vec(0.0..1.0 as Float, 1..16),
        n_particles in 1..10usize,
    ) {
        let config = RunConfig::default().with_n_particles(n_particles).with_n_steps(20);
        let run = || {
            let mut engine: Engine<_> =
                Engine::new(PSO::new(ScriptedRandom::new(values.clone())), config.clone()).unwrap();
            let summary = engine.process(&Navigation::default());
            (summary, engine.status().swarm.positions())
        };
        let (first, first_positions) = run();
        let (second, second_positions) = run();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_positions, second_positions);
    }
}
