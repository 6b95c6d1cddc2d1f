use std::error::Error;

use fastrand::Rng;
use swarmnav::objectives::Bilinear;
use swarmnav::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    // Five particles in [-5, 5]² for ten iterations, looking for the smallest value of x·y
    let config = RunConfig::bilinear_demo();

    // Create and seed a random number generator
    let rng = Rng::with_seed(0);

    // Create a new engine around a particle swarm optimizer
    let mut engine: Engine<_> = Engine::new(PSO::new(rng), config)?;

    // Run the particle swarm optimizer
    let summary = engine.process(&Bilinear)?;

    // Report the personal bests and the global best
    for (i, p) in summary.trajectory.iter().enumerate() {
        println!("particle {:>2}: x = {:+.5}, y = {:+.5}", i, p.x, p.y);
    }
    println!("global best: {:+.5}", summary.fx);
    println!("{}", summary);
    Ok(())
}
