use crate::{
    algorithms::particles::Swarm,
    core::{Direction, Point, PsoError, PsoResult},
    Position,
};
use serde::{Deserialize, Serialize};

/// A status for particle swarm optimization.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SwarmStatus {
    /// The global best position found by all particles (`None` before initialization)
    pub gbest: Option<Point>,
    /// A message containing information about the condition of the swarm
    pub message: String,
    /// The swarm
    pub swarm: Swarm,
    /// The number of completed iterations
    pub n_steps: usize,
    /// The number of objective evaluations
    pub n_f_evals: usize,
}

impl SwarmStatus {
    /// Get the global best position found by the swarm.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::EmptySwarm`] if no global best has been established.
    pub fn get_best(&self) -> PsoResult<Point> {
        self.gbest.ok_or(PsoError::EmptySwarm)
    }
    /// Replace the global best with `candidate` if it is strictly better under `direction` (or if
    /// there is no global best yet). Returns `true` if the global best changed.
    pub fn offer(&mut self, candidate: &Point, direction: Direction) -> bool {
        match self.gbest {
            Some(current) if !direction.is_better(candidate.fx, current.fx) => false,
            _ => {
                self.gbest = Some(*candidate);
                true
            }
        }
    }
    /// The personal-best positions of every particle, in swarm order.
    pub fn personal_bests(&self) -> Vec<Position> {
        self.swarm.personal_bests()
    }
    /// Resets the status to its default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    /// Sets the message of the status.
    pub fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}
