use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::{SwarmPositionInitializer, SwarmUpdateMethod, SwarmVelocityInitializer},
    core::{Bound, BoundingBox, Direction, PsoError, PsoResult},
    Float,
};

/// The immutable description of a swarm run.
///
/// The defaults reproduce the robot navigation run: 200 particles for 3000 iterations in the
/// square `[0, 50]²` with $`\omega = 0.9`$ and $`c_1 = c_2 = 1.5`$.
///
/// ```rust
/// use swarmnav::prelude::*;
///
/// let config = RunConfig::default()
///     .with_n_particles(50)
///     .with_n_steps(100)
///     .with_direction(Direction::Maximize);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// The number of particles in the swarm
    pub n_particles: usize,
    /// The number of iterations to run after initialization
    pub n_steps: usize,
    /// The inertial weight $`\omega`$
    pub omega: Float,
    /// The cognitive weight $`c_1`$
    pub c1: Float,
    /// The social weight $`c_2`$
    pub c2: Float,
    /// Whether the objective is minimized or maximized
    pub direction: Direction,
    /// The search domain
    pub bounds: BoundingBox,
    /// How the global best is propagated within an iteration
    pub update_method: SwarmUpdateMethod,
    /// An optional cap on the magnitude of a particle's velocity
    pub max_velocity: Option<Float>,
    /// How the initial positions are chosen
    pub position_initializer: SwarmPositionInitializer,
    /// How the initial velocities are chosen
    pub velocity_initializer: SwarmVelocityInitializer,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n_particles: 200,
            n_steps: 3000,
            omega: 0.9,
            c1: 1.5,
            c2: 1.5,
            direction: Direction::Minimize,
            bounds: BoundingBox {
                x: Bound::from((0.0, 50.0)),
                y: Bound::from((0.0, 50.0)),
            },
            update_method: SwarmUpdateMethod::default(),
            max_velocity: None,
            position_initializer: SwarmPositionInitializer::default(),
            velocity_initializer: SwarmVelocityInitializer::default(),
        }
    }
}

impl RunConfig {
    /// The small test-function run: 5 particles for 10 iterations in `[-5, 5]²`, minimizing.
    pub fn bilinear_demo() -> Self {
        Self {
            n_particles: 5,
            n_steps: 10,
            bounds: BoundingBox {
                x: Bound::from((-5.0, 5.0)),
                y: Bound::from((-5.0, 5.0)),
            },
            ..Self::default()
        }
    }
    /// Sets the number of particles in the swarm (default = `200`).
    pub const fn with_n_particles(mut self, value: usize) -> Self {
        self.n_particles = value;
        self
    }
    /// Sets the number of iterations (default = `3000`).
    pub const fn with_n_steps(mut self, value: usize) -> Self {
        self.n_steps = value;
        self
    }
    /// Sets the inertial weight $`\omega`$ (default = `0.9`).
    pub const fn with_omega(mut self, value: Float) -> Self {
        self.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency
    /// to move towards its personal best (default = `1.5`).
    pub const fn with_c1(mut self, value: Float) -> Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency
    /// to move towards the global best (default = `1.5`).
    pub const fn with_c2(mut self, value: Float) -> Self {
        self.c2 = value;
        self
    }
    /// Sets the optimization [`Direction`] (default = [`Direction::Minimize`]).
    pub const fn with_direction(mut self, value: Direction) -> Self {
        self.direction = value;
        self
    }
    /// Sets the search domain (default = `[0, 50]²`).
    pub const fn with_bounds(mut self, value: BoundingBox) -> Self {
        self.bounds = value;
        self
    }
    /// Sets the [`SwarmUpdateMethod`] (default = [`SwarmUpdateMethod::Synchronous`]).
    pub const fn with_update_method(mut self, value: SwarmUpdateMethod) -> Self {
        self.update_method = value;
        self
    }
    /// Caps the magnitude of every particle's velocity (default = no cap).
    pub const fn with_max_velocity(mut self, value: Float) -> Self {
        self.max_velocity = Some(value);
        self
    }
    /// Sets the [`SwarmPositionInitializer`] (default = [`SwarmPositionInitializer::RandomInBounds`]).
    pub fn with_position_initializer(mut self, value: SwarmPositionInitializer) -> Self {
        self.position_initializer = value;
        self
    }
    /// Sets the [`SwarmVelocityInitializer`] (default = [`SwarmVelocityInitializer::RandomUnit`]).
    pub fn with_velocity_initializer(mut self, value: SwarmVelocityInitializer) -> Self {
        self.velocity_initializer = value;
        self
    }
    /// Checks every field of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found: [`PsoError::InvalidBounds`],
    /// [`PsoError::InvalidParticleCount`], [`PsoError::InvalidStepCount`],
    /// [`PsoError::InvalidCoefficient`], [`PsoError::InvalidVelocityCap`],
    /// [`PsoError::InitializerMismatch`] or [`PsoError::PositionOutOfBounds`].
    pub fn validate(&self) -> PsoResult<()> {
        self.bounds.validate()?;
        if self.n_particles == 0 {
            return Err(PsoError::InvalidParticleCount);
        }
        if self.n_steps == 0 {
            return Err(PsoError::InvalidStepCount);
        }
        for (name, value) in [("omega", self.omega), ("c1", self.c1), ("c2", self.c2)] {
            if !value.is_finite() || value < 0.0 {
                return Err(PsoError::InvalidCoefficient { name, value });
            }
        }
        if let Some(vmax) = self.max_velocity {
            if !vmax.is_finite() || vmax <= 0.0 {
                return Err(PsoError::InvalidVelocityCap(vmax));
            }
        }
        self.position_initializer
            .validate(self.n_particles, &self.bounds)?;
        self.velocity_initializer.validate(self.n_particles)
    }
}
