use crate::{
    algorithms::particles::SwarmStatus,
    core::{PsoError, RunConfig},
    traits::CostFunction,
};

/// A trait representing a swarm-based optimization algorithm.
///
/// This trait contains all the methods needed to be run by an [`Engine`](crate::core::Engine).
/// The engine validates the [`RunConfig`] before calling any of them and owns the iteration
/// budget, so implementations never decide when to stop.
pub trait SwarmAlgorithm<U = (), E = PsoError> {
    /// Create the swarm and establish its first global best.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    fn initialize(
        &mut self,
        config: &RunConfig,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), E>;
    /// Move every particle once and refresh the personal and global bests.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    fn step(
        &mut self,
        current_step: usize,
        config: &RunConfig,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), E>;
}
