//! `swarmnav` provides a two-dimensional particle swarm optimizer (PSO) along with a small set of
//! objectives, one of which plans a waypoint for a point robot that must reach a goal while
//! steering clear of a circular obstacle. The crate is intended to be as simple as possible: an
//! objective implements the [`CostFunction`](traits::CostFunction) trait, a [`RunConfig`](core::RunConfig)
//! describes the swarm, and an [`Engine`](core::Engine) drives the [`PSO`](algorithms::particles::PSO)
//! for a fixed number of iterations.
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Bounds](#bounds)
//! - [Update Discipline](#update-discipline)
//!
//! # Key Features
//! * One engine for every objective: swapping the cost function or the [`RunConfig`](core::RunConfig)
//!   is the only thing needed to go from a toy function to robot navigation.
//! * Minimization and maximization are a single [`Direction`](core::Direction) flag rather than a
//!   sign convention hidden in the objective.
//! * Randomness is injected through the [`RandomSource`](traits::RandomSource) trait, so runs can
//!   be made bit-for-bit reproducible by scripting the random sequence.
//! * Results can be exported as a Python pickle via [`plot::PlotData`] for plotting with
//!   matplotlib.
//!
//! # Quick Start
//!
//! ```rust
//! use fastrand::Rng;
//! use swarmnav::prelude::*;
//! use swarmnav::objectives::Bilinear;
//!
//! fn main() -> Result<(), PsoError> {
//!     let config = RunConfig::bilinear_demo().with_direction(Direction::Maximize);
//!     let mut engine: Engine<_> = Engine::new(PSO::new(Rng::with_seed(0)), config)?;
//!     let summary = engine.process(&Bilinear)?;
//!     println!("{}", summary);
//!     assert!(summary.fx <= 25.0);
//!     Ok(())
//! }
//! ```
//!
//! # Bounds
//! Every run takes place inside a finite, axis-aligned [`BoundingBox`](core::BoundingBox). After
//! each position update the coordinates are clamped per axis onto the box. The velocity is left
//! as computed, so a particle which hits a wall keeps its excess velocity for the next update
//! unless a velocity cap is configured with [`RunConfig::with_max_velocity`](core::RunConfig::with_max_velocity).
//!
//! # Update Discipline
//! By default the swarm uses [`SwarmUpdateMethod::Synchronous`](algorithms::particles::SwarmUpdateMethod):
//! every particle in an iteration is steered by the global best as it stood at the start of that
//! iteration, and the global best is reduced from the personal bests once all particles have
//! moved. [`SwarmUpdateMethod::Asynchronous`](algorithms::particles::SwarmUpdateMethod) updates the
//! global best as soon as any particle improves on it, so later particles in the same pass are
//! steered by earlier ones.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

use nalgebra::Vector2;

/// Module containing the optimization algorithms.
pub mod algorithms;
/// Module containing the [`Engine`](core::Engine) and the types it operates on.
pub mod core;
/// Module containing the objectives shipped with this crate.
pub mod objectives;
/// Module containing the data handed to plotting front-ends.
pub mod plot;
/// Module containing the traits used to extend this crate.
pub mod traits;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::{
        algorithms::particles::{SwarmStatus, SwarmUpdateMethod, PSO},
        core::{
            BoundingBox, Direction, Engine, EngineState, PsoError, PsoResult, RunConfig,
            ScriptedRandom, SwarmSummary,
        },
        traits::{CostFunction, Observer, RandomSource},
        Float, Position, Velocity,
    };
}

/// The floating-point type used throughout the crate (`f64`, or `f32` with the `f32` feature).
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate (`f64`, or `f32` with the `f32` feature).
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

/// A point `(x, y)` in the search domain.
pub type Position = Vector2<Float>;

/// The velocity `(x, y)` of a particle.
pub type Velocity = Vector2<Float>;
