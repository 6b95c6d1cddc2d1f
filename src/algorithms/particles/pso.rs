use fastrand::Rng;
use tracing::{debug, info, trace};

use crate::{
    algorithms::particles::{Swarm, SwarmStatus, SwarmUpdateMethod},
    core::{PsoError, RunConfig},
    traits::{CostFunction, RandomSource, SwarmAlgorithm},
};

/// Particle Swarm Optimizer
///
/// The PSO algorithm involves an ensemble of particles which are aware of the position of all
/// particles in the swarm. Each iteration updates every particle's velocity as follows:
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}^{t+1}(p^t_i - x^t_i) + c_2 r_{2,i}^{t+1}(g^t - x^t_i)
/// ```
/// where $`r_1`$ and $`r_2`$ are drawn independently from the uniform distribution on $`[0,1)`$
/// for each axis, $`\omega`$ is an inertial weight parameter, $`c_1`$ and $`c_2`$ are cognitive
/// and social weights respectively, $`p_i^t`$ is the particle's personal best position, and
/// $`g^t`$ is the swarm's best position. The new position $`x_i^t + v_i^{t+1}`$ is clamped onto
/// the bounding box one axis at a time. See [^1] for more information.
///
/// [^1]: [Houssein, E. H., Gad, A. G., Hussain, K., & Suganthan, P. N. (2021). Major Advances in Particle Swarm Optimization: Theory, Analysis, and Application. In Swarm and Evolutionary Computation (Vol. 63, p. 100868). Elsevier BV.](https://doi.org/10.1016/j.swevo.2021.100868)
#[derive(Clone, Debug)]
pub struct PSO<R = Rng> {
    rng: R,
}

impl<R: RandomSource> PSO<R> {
    /// Construct a new particle swarm optimizer which draws all of its randomness from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
    /// Consume the optimizer and return its random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl PSO<Rng> {
    /// Construct a new particle swarm optimizer seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self::new(Rng::new())
    }
}

impl<R: RandomSource> PSO<R> {
    fn update_sync<U, E>(
        &mut self,
        config: &RunConfig,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), E>
    where
        E: From<PsoError>,
    {
        let gbest = status.get_best()?.x;
        for (i, particle) in status.swarm.particles.iter_mut().enumerate() {
            let velocity = particle.next_velocity(&gbest, config, &mut self.rng);
            particle.update_position(velocity, &config.bounds, func, user_data)?;
            status.n_f_evals += 1;
            if particle.update_best(config.direction) {
                trace!(particle = i, fx = particle.best.fx, "personal best improved");
            }
        }
        let best = status.swarm.best(config.direction)?;
        if status.offer(&best, config.direction) {
            debug!(fx = best.fx, x = best.x.x, y = best.x.y, "global best improved");
        }
        Ok(())
    }
    fn update_async<U, E>(
        &mut self,
        config: &RunConfig,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), E>
    where
        E: From<PsoError>,
    {
        let mut gbest = status.get_best()?;
        for (i, particle) in status.swarm.particles.iter_mut().enumerate() {
            let velocity = particle.next_velocity(&gbest.x, config, &mut self.rng);
            particle.update_position(velocity, &config.bounds, func, user_data)?;
            status.n_f_evals += 1;
            if config.direction.is_better(particle.value(), gbest.fx) {
                gbest = particle.position;
                debug!(particle = i, fx = gbest.fx, "global best improved");
            }
            if particle.update_best(config.direction) {
                trace!(particle = i, fx = particle.best.fx, "personal best improved");
            }
        }
        status.gbest = Some(gbest);
        Ok(())
    }
}

impl<R, U, E> SwarmAlgorithm<U, E> for PSO<R>
where
    R: RandomSource,
    E: From<PsoError>,
{
    fn initialize(
        &mut self,
        config: &RunConfig,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), E> {
        status.reset();
        status.swarm = Swarm::initialize(config, &mut self.rng, func, user_data)?;
        status.n_f_evals = status.swarm.len();
        status.gbest = Some(status.swarm.best(config.direction)?);
        status.update_message("Initialized");
        info!(
            n_particles = config.n_particles,
            direction = %config.direction,
            fx = status.get_best()?.fx,
            "swarm initialized"
        );
        Ok(())
    }

    fn step(
        &mut self,
        _current_step: usize,
        config: &RunConfig,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), E> {
        match config.update_method {
            SwarmUpdateMethod::Synchronous => self.update_sync(config, func, status, user_data)?,
            SwarmUpdateMethod::Asynchronous => self.update_async(config, func, status, user_data)?,
        }
        status.n_steps += 1;
        Ok(())
    }
}
