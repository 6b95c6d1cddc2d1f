use crate::{
    core::{BoundingBox, Direction, Point, PsoError, PsoResult, RunConfig},
    traits::{CostFunction, RandomSource},
    Float, Position, Velocity,
};
use serde::{Deserialize, Serialize};

/// A swarm of particles used in particle swarm optimization.
///
/// The order of the particles is fixed at initialization, which keeps runs with a scripted
/// [`RandomSource`] reproducible.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Swarm {
    /// A list of the particles in the swarm
    pub particles: Vec<SwarmParticle>,
}

impl Swarm {
    /// Create the particles described by `config` and evaluate `func` at each of them.
    ///
    /// All positions are drawn before any velocity. The [`CostFunction`] and user data are needed
    /// to evaluate the value at each particle's starting position, which also becomes its
    /// personal best.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn initialize<R, U, E>(
        config: &RunConfig,
        rng: &mut R,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Self, E>
    where
        R: RandomSource + ?Sized,
        E: From<PsoError>,
    {
        let positions =
            config
                .position_initializer
                .init_positions(rng, &config.bounds, config.n_particles);
        let velocities = config
            .velocity_initializer
            .init_velocities(rng, config.n_particles);
        let particles = positions
            .into_iter()
            .zip(velocities)
            .map(|(position, velocity)| SwarmParticle::new(position, velocity, func, user_data))
            .collect::<Result<Vec<SwarmParticle>, E>>()?;
        Ok(Self { particles })
    }
    /// The number of particles in the swarm.
    pub fn len(&self) -> usize {
        self.particles.len()
    }
    /// Returns `true` if the swarm holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    /// The best personal best in the swarm under `direction`. On ties the earliest particle wins.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::EmptySwarm`] if the swarm has no particles.
    pub fn best(&self, direction: Direction) -> PsoResult<Point> {
        direction
            .best_of(self.particles.iter().map(|particle| &particle.best))
            .copied()
            .ok_or(PsoError::EmptySwarm)
    }
    /// The current positions of all particles, in swarm order.
    pub fn positions(&self) -> Vec<Position> {
        self.particles.iter().map(|p| p.position.x).collect()
    }
    /// The personal-best positions of all particles, in swarm order.
    pub fn personal_bests(&self) -> Vec<Position> {
        self.particles.iter().map(|p| p.best.x).collect()
    }
}

/// The algorithmic method to propagate the global best within an iteration
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SwarmUpdateMethod {
    /// Steer every particle with the global best from the start of the iteration and reduce the
    /// new global best once all particles have moved. Particle order does not matter.
    #[default]
    Synchronous,
    /// Replace the global best as soon as a particle improves on it, so later particles in the
    /// same pass are steered by earlier ones. Particle order matters.
    Asynchronous,
}

/// Methods to initialize the positions of particles in a swarm.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum SwarmPositionInitializer {
    /// Uniform distribution over the bounding box
    #[default]
    RandomInBounds,
    /// A given position for each particle
    Custom(Vec<Position>),
}
impl SwarmPositionInitializer {
    /// Checks that the initializer can supply `n_particles` positions inside `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InitializerMismatch`] or [`PsoError::PositionOutOfBounds`].
    pub fn validate(&self, n_particles: usize, bounds: &BoundingBox) -> PsoResult<()> {
        if let Self::Custom(positions) = self {
            if positions.len() != n_particles {
                return Err(PsoError::InitializerMismatch {
                    initializer: "position",
                    expected: n_particles,
                    found: positions.len(),
                });
            }
            if let Some(outside) = positions.iter().find(|p| !bounds.contains(p)) {
                return Err(PsoError::PositionOutOfBounds {
                    x: outside.x,
                    y: outside.y,
                });
            }
        }
        Ok(())
    }
    /// Initialize the positions of the particles in the swarm.
    pub fn init_positions<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        bounds: &BoundingBox,
        n_particles: usize,
    ) -> Vec<Position> {
        match self {
            Self::RandomInBounds => (0..n_particles).map(|_| bounds.sample(rng)).collect(),
            Self::Custom(positions) => positions.clone(),
        }
    }
}

/// Methods for setting the initial velocity of particles in a swarm
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum SwarmVelocityInitializer {
    /// Uniform distribution over `[0, 1)²`, independent of the bounding box
    #[default]
    RandomUnit,
    /// A given velocity for each particle
    Custom(Vec<Velocity>),
}
impl SwarmVelocityInitializer {
    /// Checks that the initializer can supply `n_particles` velocities.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InitializerMismatch`] if a custom list has the wrong length.
    pub fn validate(&self, n_particles: usize) -> PsoResult<()> {
        match self {
            Self::Custom(velocities) if velocities.len() != n_particles => {
                Err(PsoError::InitializerMismatch {
                    initializer: "velocity",
                    expected: n_particles,
                    found: velocities.len(),
                })
            }
            _ => Ok(()),
        }
    }
    /// Initialize the velocities of the particles in the swarm.
    pub fn init_velocities<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        n_particles: usize,
    ) -> Vec<Velocity> {
        match self {
            Self::RandomUnit => (0..n_particles)
                .map(|_| {
                    let vx = rng.next_float();
                    let vy = rng.next_float();
                    Velocity::new(vx, vy)
                })
                .collect(),
            Self::Custom(velocities) => velocities.clone(),
        }
    }
}

/// A particle with a position, velocity, and best known position
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SwarmParticle {
    /// The position of the particle and the objective value there
    pub position: Point,
    /// The velocity of the particle
    pub velocity: Velocity,
    /// The best position this particle has visited (its personal best)
    pub best: Point,
}
impl SwarmParticle {
    /// Create a new particle at `position`, evaluating `func` there.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn new<U, E>(
        position: Position,
        velocity: Velocity,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Self, E>
    where
        E: From<PsoError>,
    {
        let position = Point::evaluate(position, func, user_data)?;
        Ok(Self {
            position,
            velocity,
            best: position,
        })
    }
    /// Compute the particle's next velocity
    ///
    /// ```math
    /// v' = \omega v + c_1 r_1 (p - x) + c_2 r_2 (g - x)
    /// ```
    /// drawing four independent samples in the order $`r_{1,x}, r_{2,x}, r_{1,y}, r_{2,y}`$. If
    /// `max_velocity` is set, the result is rescaled onto that magnitude when it exceeds it.
    pub fn next_velocity<R: RandomSource + ?Sized>(
        &self,
        gbest: &Position,
        config: &RunConfig,
        rng: &mut R,
    ) -> Velocity {
        let x = &self.position.x;
        let p = &self.best.x;
        let r1x = rng.next_float();
        let r2x = rng.next_float();
        let vx = config.omega * self.velocity.x
            + config.c1 * r1x * (p.x - x.x)
            + config.c2 * r2x * (gbest.x - x.x);
        let r1y = rng.next_float();
        let r2y = rng.next_float();
        let vy = config.omega * self.velocity.y
            + config.c1 * r1y * (p.y - x.y)
            + config.c2 * r2y * (gbest.y - x.y);
        let velocity = Velocity::new(vx, vy);
        match config.max_velocity {
            Some(vmax) if velocity.norm() > vmax => velocity.scale(vmax / velocity.norm()),
            _ => velocity,
        }
    }
    /// Update the particle's velocity, move it, clamp the new position onto `bounds` and
    /// evaluate `func` there. The velocity is stored as computed, even if the clamp cut the move
    /// short.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn update_position<U, E>(
        &mut self,
        velocity: Velocity,
        bounds: &BoundingBox,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E>
    where
        E: From<PsoError>,
    {
        let new_position = bounds.clamp(&(self.position.x + velocity));
        self.position = Point::evaluate(new_position, func, user_data)?;
        self.velocity = velocity;
        Ok(())
    }
    /// Replace the personal best with the current position if it is strictly better. Returns
    /// `true` if the personal best changed.
    pub fn update_best(&mut self, direction: Direction) -> bool {
        if direction.is_better(self.position.fx, self.best.fx) {
            self.best = self.position;
            true
        } else {
            false
        }
    }
    /// The particle's current objective value.
    pub const fn value(&self) -> Float {
        self.position.fx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::ScriptedRandom, objectives::Bilinear};
    use approx::assert_relative_eq;

    const BILINEAR: &dyn CostFunction = &Bilinear;

    fn particle_at(x: Float, y: Float, vx: Float, vy: Float) -> SwarmParticle {
        SwarmParticle::new(
            Position::new(x, y),
            Velocity::new(vx, vy),
            BILINEAR,
            &mut (),
        )
        .unwrap()
    }

    #[test]
    fn test_new_particle_starts_at_personal_best() {
        let particle = particle_at(2.0, 3.0, 0.5, 0.5);
        assert_eq!(particle.best, particle.position);
        assert_eq!(particle.value(), 6.0);
    }

    #[test]
    fn test_next_velocity_draws_four_samples() {
        let config = RunConfig::bilinear_demo()
            .with_omega(0.5)
            .with_c1(1.0)
            .with_c2(2.0);
        let mut particle = particle_at(0.0, 0.0, 1.0, 1.0);
        particle.best.x = Position::new(1.0, 1.0);
        let mut rng = ScriptedRandom::new([0.1, 0.2, 0.3, 0.4]);
        let v = particle.next_velocity(&Position::new(2.0, 2.0), &config, &mut rng);
        assert_eq!(rng.drawn(), 4);
        assert_relative_eq!(v.x, 0.5 + 0.1 + 2.0 * 0.2 * 2.0);
        assert_relative_eq!(v.y, 0.5 + 0.3 + 2.0 * 0.4 * 2.0);
    }

    #[test]
    fn test_velocity_cap_preserves_direction() {
        let config = RunConfig::bilinear_demo()
            .with_omega(1.0)
            .with_c1(0.0)
            .with_c2(0.0)
            .with_max_velocity(1.0);
        let particle = particle_at(0.0, 0.0, 3.0, 4.0);
        let mut rng = ScriptedRandom::constant(0.5);
        let v = particle.next_velocity(&Position::zeros(), &config, &mut rng);
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(v.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_update_position_clamps_but_keeps_velocity() {
        let bounds = BoundingBox::square(0.0, 50.0).unwrap();
        let mut particle = particle_at(49.0, 49.0, 0.0, 0.0);
        let velocity = Velocity::new(3.0, 2.5);
        particle
            .update_position(velocity, &bounds, BILINEAR, &mut ())
            .unwrap();
        assert_eq!(particle.position.x, Position::new(50.0, 50.0));
        assert_eq!(particle.position.fx, 2500.0);
        assert_eq!(particle.velocity, velocity);
    }

    #[test]
    fn test_update_best_respects_direction() {
        let bounds = BoundingBox::square(-5.0, 5.0).unwrap();
        let mut particle = particle_at(1.0, 1.0, 0.0, 0.0);
        particle
            .update_position(Velocity::new(1.0, 1.0), &bounds, BILINEAR, &mut ())
            .unwrap();
        assert!(!particle.update_best(Direction::Minimize));
        assert_eq!(particle.best.fx, 1.0);
        assert!(particle.update_best(Direction::Maximize));
        assert_eq!(particle.best.fx, 4.0);
    }

    #[test]
    fn test_initialize_draws_positions_before_velocities() {
        let config = RunConfig::bilinear_demo().with_n_particles(2);
        let mut rng = ScriptedRandom::new([0.5, 0.75, 0.25, 0.0, 0.1, 0.2, 0.3, 0.4]);
        let swarm = Swarm::initialize(&config, &mut rng, BILINEAR, &mut ()).unwrap();
        assert_eq!(swarm.len(), 2);
        assert_eq!(swarm.positions()[0], Position::new(0.0, 2.5));
        assert_eq!(swarm.positions()[1], Position::new(-2.5, -5.0));
        assert_eq!(swarm.particles[0].velocity, Velocity::new(0.1, 0.2));
        assert_eq!(swarm.particles[1].velocity, Velocity::new(0.3, 0.4));
    }

    #[test]
    fn test_best_of_empty_swarm() {
        assert_eq!(
            Swarm::default().best(Direction::Minimize),
            Err(PsoError::EmptySwarm)
        );
    }
}
