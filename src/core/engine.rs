use std::{fmt::Display, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    algorithms::particles::SwarmStatus,
    core::{PsoError, PsoResult, RunConfig, SwarmSummary},
    traits::{CostFunction, Observer, SwarmAlgorithm},
};

/// The lifecycle of an [`Engine`].
///
/// ```text
/// Uninitialized → Initialized → Iterating(t) → Completed
///                      ↓              ↓
///                    Failed ←─────────┘
/// ```
///
/// A failed iteration may have moved some particles but not others, so the swarm is discarded
/// and only [`Engine::initialize`] is accepted afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No swarm exists yet
    #[default]
    Uninitialized,
    /// The swarm has been sampled and evaluated but no iteration has run
    Initialized,
    /// The given number of iterations have completed and budget remains
    Iterating(usize),
    /// The iteration budget is spent
    Completed,
    /// An iteration returned an error and the swarm is no longer consistent
    Failed,
}

impl Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Initialized => write!(f, "initialized"),
            Self::Iterating(t) => write!(f, "iterating (after step {})", t),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// The main struct used for running a [`SwarmAlgorithm`] on a [`CostFunction`].
///
/// The [`RunConfig`] is validated once, in [`Engine::new`], so no random sample is ever drawn for
/// an invalid run. The engine then runs exactly [`RunConfig::n_steps`] iterations; there is no
/// other stopping rule.
///
/// ```rust
/// use fastrand::Rng;
/// use swarmnav::prelude::*;
/// use swarmnav::objectives::Bilinear;
///
/// let mut engine: Engine<_> =
///     Engine::new(PSO::new(Rng::with_seed(1)), RunConfig::bilinear_demo()).unwrap();
/// engine.initialize(&Bilinear).unwrap();
/// while engine.state() != EngineState::Completed {
///     engine.step(&Bilinear).unwrap();
/// }
/// let summary = engine.summarize().unwrap();
/// assert_eq!(summary.n_steps, 10);
/// ```
pub struct Engine<A, U = (), E = PsoError> {
    /// The [`SwarmStatus`] of the algorithm, usually read after a run.
    pub status: SwarmStatus,

    algorithm: A,
    config: RunConfig,
    observers: Vec<Arc<RwLock<dyn Observer<U>>>>,
    user_data: U,
    state: EngineState,
    _error: std::marker::PhantomData<fn() -> E>,
}

impl<A, U, E> Engine<A, U, E>
where
    A: SwarmAlgorithm<U, E>,
    U: Default,
    E: From<PsoError>,
{
    /// Creates a new [`Engine`] with the given [`SwarmAlgorithm`] and [`RunConfig`].
    ///
    /// # Errors
    ///
    /// Returns the first configuration error reported by [`RunConfig::validate`].
    pub fn new(algorithm: A, config: RunConfig) -> PsoResult<Self> {
        config.validate()?;
        Ok(Self {
            status: SwarmStatus::default(),
            algorithm,
            config,
            observers: Vec::default(),
            user_data: U::default(),
            state: EngineState::Uninitialized,
            _error: std::marker::PhantomData,
        })
    }
}

impl<A, U, E> Engine<A, U, E>
where
    A: SwarmAlgorithm<U, E>,
    E: From<PsoError>,
{
    /// Convenience method to use chainable methods to set up the [`Engine`].
    ///
    /// ```rust
    /// use fastrand::Rng;
    /// use swarmnav::prelude::*;
    /// use swarmnav::algorithms::particles::TrackingObserver;
    ///
    /// let tracker = TrackingObserver::build();
    /// let engine: Engine<_> = Engine::new(PSO::new(Rng::with_seed(0)), RunConfig::default())
    ///     .unwrap()
    ///     .setup(|e| e.with_observer(tracker.clone()));
    /// ```
    pub fn setup<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&mut Self) -> &mut Self,
    {
        f(&mut self);
        self
    }

    /// Adds a single [`Observer`] to the [`Engine`]. Observers are called in the order they were
    /// added.
    pub fn with_observer(&mut self, observer: Arc<RwLock<dyn Observer<U>>>) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Set user data for the [`Engine`].
    pub fn with_user_data<T: Into<U>>(&mut self, data: T) -> &mut Self {
        self.user_data = data.into();
        self
    }

    /// The current [`EngineState`].
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// The [`RunConfig`] this engine was built with.
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The [`SwarmStatus`] of the current run.
    pub const fn status(&self) -> &SwarmStatus {
        &self.status
    }

    /// The user data handed to the objective and the observers.
    pub const fn user_data(&self) -> &U {
        &self.user_data
    }

    /// Consume the engine and return its [`SwarmAlgorithm`].
    pub fn into_algorithm(self) -> A {
        self.algorithm
    }

    /// Sample and evaluate a fresh swarm. Allowed before the first run and after a completed or
    /// failed one.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidState`] if a run is in progress, otherwise any error raised while
    /// evaluating `func` (see [`CostFunction::evaluate`]).
    pub fn initialize(&mut self, func: &dyn CostFunction<U, E>) -> Result<(), E> {
        match self.state {
            EngineState::Uninitialized | EngineState::Completed | EngineState::Failed => {}
            state => {
                return Err(PsoError::InvalidState {
                    operation: "initialize",
                    state,
                }
                .into())
            }
        }
        self.state = EngineState::Uninitialized;
        self.algorithm
            .initialize(&self.config, func, &mut self.status, &mut self.user_data)?;
        self.state = EngineState::Initialized;
        Ok(())
    }

    /// Run a single iteration, then call every [`Observer`] with the number of completed
    /// iterations.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidState`] if the engine is not initialized or the budget is spent,
    /// otherwise any error raised while evaluating `func` (see [`CostFunction::evaluate`]). After
    /// such an error the engine is [`EngineState::Failed`].
    pub fn step(&mut self, func: &dyn CostFunction<U, E>) -> Result<(), E> {
        let completed = match self.state {
            EngineState::Initialized => 0,
            EngineState::Iterating(t) => t,
            state => {
                return Err(PsoError::InvalidState {
                    operation: "step",
                    state,
                }
                .into())
            }
        };
        if let Err(err) = self.algorithm.step(
            completed,
            &self.config,
            func,
            &mut self.status,
            &mut self.user_data,
        ) {
            self.state = EngineState::Failed;
            warn!(step = completed + 1, "swarm iteration failed");
            return Err(err);
        }
        let current_step = completed + 1;
        for observer in self.observers.iter() {
            observer
                .write()
                .observe(current_step, &self.status, &self.user_data);
        }
        if current_step >= self.config.n_steps {
            self.status.update_message("MAX STEPS");
            self.state = EngineState::Completed;
            let gbest = self.status.get_best()?;
            info!(
                n_steps = self.status.n_steps,
                n_f_evals = self.status.n_f_evals,
                fx = gbest.fx,
                x = gbest.x.x,
                y = gbest.x.y,
                "swarm run completed"
            );
        } else {
            self.state = EngineState::Iterating(current_step);
        }
        Ok(())
    }

    /// Build the [`SwarmSummary`] of a completed run.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidState`] unless the engine is [`EngineState::Completed`].
    pub fn summarize(&self) -> PsoResult<SwarmSummary> {
        if self.state != EngineState::Completed {
            return Err(PsoError::InvalidState {
                operation: "summarize",
                state: self.state,
            });
        }
        SwarmSummary::from_status(&self.status, &self.config)
    }

    /// Run the whole lifecycle on `func`: initialize, spend the full iteration budget, and
    /// summarize.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidState`] if a run is already in progress, otherwise any error
    /// raised while evaluating `func` (see [`CostFunction::evaluate`]).
    pub fn process(&mut self, func: &dyn CostFunction<U, E>) -> Result<SwarmSummary, E> {
        self.initialize(func)?;
        while self.state != EngineState::Completed {
            self.step(func)?;
        }
        Ok(self.summarize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::particles::{TrackingObserver, PSO},
        core::{Direction, ScriptedRandom},
        objectives::Bilinear,
        Float,
    };
    use fastrand::Rng;

    const BILINEAR: &dyn CostFunction = &Bilinear;

    fn engine(config: RunConfig) -> Engine<PSO<Rng>> {
        Engine::new(PSO::new(Rng::with_seed(42)), config).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result: PsoResult<Engine<PSO<ScriptedRandom>>> = Engine::new(
            PSO::new(ScriptedRandom::constant(0.5)),
            RunConfig::default().with_n_particles(0),
        );
        assert!(matches!(result, Err(PsoError::InvalidParticleCount)));
    }

    #[test]
    fn test_state_machine() {
        let mut engine = engine(RunConfig::bilinear_demo().with_n_steps(2));
        assert_eq!(engine.state(), EngineState::Uninitialized);
        assert_eq!(
            engine.step(BILINEAR),
            Err(PsoError::InvalidState {
                operation: "step",
                state: EngineState::Uninitialized
            })
        );
        assert!(engine.summarize().is_err());
        engine.initialize(BILINEAR).unwrap();
        assert_eq!(engine.state(), EngineState::Initialized);
        assert!(matches!(
            engine.initialize(BILINEAR),
            Err(PsoError::InvalidState { .. })
        ));
        engine.step(BILINEAR).unwrap();
        assert_eq!(engine.state(), EngineState::Iterating(1));
        engine.step(BILINEAR).unwrap();
        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(
            engine.step(BILINEAR),
            Err(PsoError::InvalidState {
                operation: "step",
                state: EngineState::Completed
            })
        );
        let summary = engine.summarize().unwrap();
        assert_eq!(summary.n_steps, 2);
        assert_eq!(summary.cost_evals, 15);
        engine.initialize(BILINEAR).unwrap();
        assert_eq!(engine.status.n_steps, 0);
    }

    #[test]
    fn test_process_reports_personal_bests() {
        let mut engine = engine(RunConfig::bilinear_demo());
        let summary = engine.process(BILINEAR).unwrap();
        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(summary.trajectory.len(), 5);
        assert_eq!(summary.n_steps, 10);
        assert_eq!(summary.direction, Direction::Minimize);
        let best = summary
            .trajectory
            .iter()
            .map(|p| p.x * p.y)
            .fold(Float::INFINITY, Float::min);
        assert_eq!(summary.fx, best);
        assert_eq!(summary.message, "MAX STEPS");
    }

    #[test]
    fn test_process_can_be_repeated() {
        let mut engine = engine(RunConfig::bilinear_demo().with_n_steps(3));
        engine.process(BILINEAR).unwrap();
        let summary = engine.process(BILINEAR).unwrap();
        assert_eq!(summary.n_steps, 3);
    }

    #[test]
    fn test_observers_see_every_step() {
        let tracker = TrackingObserver::build();
        let mut engine = engine(RunConfig::bilinear_demo().with_n_steps(7))
            .setup(|e| e.with_observer(tracker.clone()));
        engine.process(BILINEAR).unwrap();
        let tracker = tracker.read();
        assert_eq!(tracker.history.len(), 7);
        assert_eq!(tracker.best_history.len(), 7);
        assert!(tracker.history.iter().all(|particles| particles.len() == 5));
        assert!(tracker
            .best_history
            .windows(2)
            .all(|w| w[1].fx <= w[0].fx));
    }

    struct FailsAfter(usize);

    impl CostFunction<usize> for FailsAfter {
        fn evaluate(&self, x: &crate::Position, calls: &mut usize) -> Result<Float, PsoError> {
            *calls += 1;
            if *calls > self.0 {
                return Err(PsoError::Singularity { x: x.x, y: x.y });
            }
            Ok(x.x * x.y)
        }
    }

    #[test]
    fn test_failed_step_is_terminal() {
        // 5 particles: the 3rd evaluation of the first iteration fails
        let mut engine: Engine<PSO<Rng>, usize> =
            Engine::new(PSO::new(Rng::with_seed(42)), RunConfig::bilinear_demo()).unwrap();
        engine.initialize(&FailsAfter(7)).unwrap();
        assert!(engine.step(&FailsAfter(7)).is_err());
        assert_eq!(engine.state(), EngineState::Failed);
        assert_eq!(
            engine.step(&FailsAfter(100)),
            Err(PsoError::InvalidState {
                operation: "step",
                state: EngineState::Failed
            })
        );
        assert!(engine.summarize().is_err());
        engine.with_user_data(0usize);
        engine.initialize(&FailsAfter(100)).unwrap();
        assert_eq!(engine.state(), EngineState::Initialized);
        assert_eq!(engine.status.n_steps, 0);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(EngineState::Failed.to_string(), "failed");
        assert_eq!(EngineState::Iterating(3).to_string(), "iterating (after step 3)");
        let err = PsoError::InvalidState {
            operation: "step",
            state: EngineState::Completed,
        };
        assert_eq!(err.to_string(), "cannot step while the engine is completed");
    }
}
