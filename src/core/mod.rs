/// [`Bound`] and [`BoundingBox`] types for limiting the search domain.
pub mod bound;
/// [`RunConfig`] type describing a swarm run.
pub mod config;
/// [`Direction`] type selecting minimization or maximization.
pub mod direction;
/// [`Engine`] type driving a swarm run.
pub mod engine;
/// [`PsoError`] type for everything that can go wrong during a run.
pub mod error;
/// [`Point`] type for defining a point in the search domain.
pub mod point;
/// [`ScriptedRandom`], a deterministic [`RandomSource`](crate::traits::RandomSource).
pub mod random;
/// [`SwarmSummary`] type for the result of a run.
pub mod summary;

pub use bound::{Bound, BoundingBox};
pub use config::RunConfig;
pub use direction::Direction;
pub use engine::{Engine, EngineState};
pub use error::{PsoError, PsoResult};
pub use point::Point;
pub use random::ScriptedRandom;
pub use summary::SwarmSummary;
