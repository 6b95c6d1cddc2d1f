use std::{fmt::Debug, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

use crate::algorithms::particles::SwarmStatus;

/// A trait which holds an [`observe`](`Observer::observe`) function that can be used to inspect
/// the [`SwarmStatus`] after every iteration of a run.
///
/// Observers cannot stop a run early; the [`Engine`](crate::core::Engine) always spends its full
/// iteration budget.
pub trait Observer<U = ()> {
    /// A function that is called after every step of the [`Engine`](crate::core::Engine), where
    /// `step` counts the completed iterations (starting at `1`).
    fn observe(&mut self, step: usize, status: &SwarmStatus, user_data: &U);
}

/// A debugging observer which logs the step and status through [`tracing`] at the `DEBUG`
/// level.
///
/// # Usage:
///
/// ```rust
/// use fastrand::Rng;
/// use swarmnav::prelude::*;
/// use swarmnav::objectives::Bilinear;
/// use swarmnav::traits::observer::DebugObserver;
///
/// let config = RunConfig::bilinear_demo();
/// let mut engine: Engine<_> = Engine::new(PSO::new(Rng::with_seed(0)), config)
///     .unwrap()
///     .setup(|e| e.with_observer(DebugObserver::build()));
/// engine.process(&Bilinear).unwrap();
/// // ^ This will emit a debug event for each step
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl<U: Debug> Observer<U> for DebugObserver {
    fn observe(&mut self, step: usize, status: &SwarmStatus, user_data: &U) {
        debug!(
            step,
            gbest = ?status.gbest,
            n_f_evals = status.n_f_evals,
            user_data = ?user_data,
            "swarm step"
        );
    }
}
