use thiserror::Error;

use crate::{core::EngineState, Float};

/// A [`Result`] specialized to [`PsoError`].
pub type PsoResult<T> = Result<T, PsoError>;

/// Errors which terminate a swarm run.
///
/// Configuration errors are raised before any random sampling happens. Numeric errors are raised
/// as soon as an objective produces a value that cannot be compared safely.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PsoError {
    /// A bounding box axis with `lower >= upper` or a non-finite limit.
    #[error("invalid bounds on the {axis} axis: [{lower}, {upper}]")]
    InvalidBounds {
        /// The name of the offending axis
        axis: &'static str,
        /// The configured lower limit
        lower: Float,
        /// The configured upper limit
        upper: Float,
    },
    /// A swarm configured with no particles.
    #[error("the swarm must contain at least one particle")]
    InvalidParticleCount,
    /// A run configured with no iterations.
    #[error("the iteration budget must be at least one step")]
    InvalidStepCount,
    /// A tuning coefficient which is negative or non-finite.
    #[error("coefficient {name} = {value} must be finite and non-negative")]
    InvalidCoefficient {
        /// The name of the coefficient
        name: &'static str,
        /// The configured value
        value: Float,
    },
    /// A velocity cap which is not finite and positive.
    #[error("velocity cap {0} must be finite and positive")]
    InvalidVelocityCap(Float),
    /// An obstacle radius which is not finite and positive.
    #[error("obstacle radius {0} must be finite and positive")]
    InvalidObstacleRadius(Float),
    /// A custom initializer whose length differs from the swarm size.
    #[error("{expected} particles configured but the {initializer} initializer supplies {found}")]
    InitializerMismatch {
        /// Which initializer disagrees with the swarm size
        initializer: &'static str,
        /// The configured number of particles
        expected: usize,
        /// The number of entries the initializer supplies
        found: usize,
    },
    /// A custom initial position outside of the bounding box.
    #[error("initial position ({x}, {y}) lies outside of the bounding box")]
    PositionOutOfBounds {
        /// The x coordinate
        x: Float,
        /// The y coordinate
        y: Float,
    },
    /// An objective evaluated exactly at one of its singular points.
    #[error("the objective is singular at ({x}, {y})")]
    Singularity {
        /// The x coordinate
        x: Float,
        /// The y coordinate
        y: Float,
    },
    /// An objective which returned `NaN` or an infinity.
    #[error("the objective returned the non-finite value {value} at ({x}, {y})")]
    NonFiniteValue {
        /// The x coordinate
        x: Float,
        /// The y coordinate
        y: Float,
        /// The value returned by the objective
        value: Float,
    },
    /// A swarm without particles has no global best.
    #[error("the swarm has no particles, so no global best exists")]
    EmptySwarm,
    /// An [`Engine`](crate::core::Engine) operation called in the wrong lifecycle state.
    #[error("cannot {operation} while the engine is {state}")]
    InvalidState {
        /// The attempted operation
        operation: &'static str,
        /// The state the engine was in
        state: EngineState,
    },
}

impl PsoError {
    /// Returns `true` for errors caused by an invalid configuration.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidBounds { .. }
                | Self::InvalidParticleCount
                | Self::InvalidStepCount
                | Self::InvalidCoefficient { .. }
                | Self::InvalidVelocityCap(_)
                | Self::InvalidObstacleRadius(_)
                | Self::InitializerMismatch { .. }
                | Self::PositionOutOfBounds { .. }
        )
    }
}
