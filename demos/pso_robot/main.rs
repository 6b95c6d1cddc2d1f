use std::error::Error;

use fastrand::Rng;
use swarmnav::algorithms::particles::TrackingObserver;
use swarmnav::objectives::{Navigation, NavigationConfig};
use swarmnav::plot::PlotData;
use swarmnav::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    // Goal at (45, 45), obstacle of radius 5 at (25, 25), robot starting at (2, 2)
    let problem = Navigation::new(NavigationConfig::default())?;

    // 200 particles in [0, 50]² for 3000 iterations
    let config = RunConfig::default();

    // Create a tracker to record the history of the global best
    let tracker = TrackingObserver::build();

    // Create a new engine around a seeded particle swarm optimizer
    let mut engine: Engine<_> = Engine::new(PSO::new(Rng::with_seed(0)), config)?
        .setup(|e| e.with_observer(tracker.clone()));

    // Run the particle swarm optimizer
    let summary = engine.process(&problem)?;
    println!("{}", summary);
    println!(
        "global best improved {} times",
        tracker
            .read()
            .best_history
            .windows(2)
            .filter(|w| w[1].fx < w[0].fx)
            .count()
    );

    // Export the path and the obstacle to a Python .pkl file to visualize via matplotlib
    PlotData::for_navigation(&summary, &problem)?
        .sorted()
        .write_pickle("robot.pkl")?;
    Ok(())
}
