/// Implementation of Particle Swarm Optimization (PSO) algorithm
pub mod pso;
pub use pso::PSO;

/// [`Swarm`] type for swarm-based optimizers.
pub mod swarm;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
pub use swarm::{
    Swarm, SwarmParticle, SwarmPositionInitializer, SwarmUpdateMethod, SwarmVelocityInitializer,
};

/// [`SwarmStatus`] type for swarm-based optimizers.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;

use crate::{core::Point, traits::Observer};

/// An [`Observer`] which stores the swarm particles' history as well as the
/// history of global best positions.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct TrackingObserver {
    /// The history of the swarm particles
    pub history: Vec<Vec<SwarmParticle>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}

impl TrackingObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl<U> Observer<U> for TrackingObserver {
    fn observe(&mut self, _step: usize, status: &SwarmStatus, _user_data: &U) {
        self.history.push(status.swarm.particles.clone());
        if let Some(gbest) = status.gbest {
            self.best_history.push(gbest);
        }
    }
}
