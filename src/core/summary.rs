use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::SwarmStatus,
    core::{BoundingBox, Direction, PsoResult, RunConfig},
    Float, Position,
};

/// A struct that holds the results of a completed swarm run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwarmSummary {
    /// The global best position
    pub x: Position,
    /// The objective value at [`SwarmSummary::x`]
    pub fx: Float,
    /// Whether the run minimized or maximized the objective
    pub direction: Direction,
    /// The search domain
    pub bounds: BoundingBox,
    /// The personal-best position of every particle, in swarm order
    pub trajectory: Vec<Position>,
    /// The number of completed iterations
    pub n_steps: usize,
    /// The number of objective evaluations
    pub cost_evals: usize,
    /// A message set by the engine
    pub message: String,
}

impl SwarmSummary {
    /// Collect the summary of the run described by `status` and `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::EmptySwarm`](crate::core::PsoError::EmptySwarm) if the status holds no
    /// global best.
    pub fn from_status(status: &SwarmStatus, config: &RunConfig) -> PsoResult<Self> {
        let (x, fx) = status.get_best()?.destructure();
        Ok(Self {
            x,
            fx,
            direction: config.direction,
            bounds: config.bounds,
            trajectory: status.personal_bests(),
            n_steps: status.n_steps,
            cost_evals: status.n_f_evals,
            message: status.message.clone(),
        })
    }
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = format!(
            "╒═══════════════════════════════════════════════════════════════════════════════╕
│{:^79}│",
            "SWARM RESULTS",
        );
        let status = format!(
            "╞════════════════════════════════════════╤══════════════════════════════════════╡
│ Direction: {:<27} │ f(x): {:+12.5E}                   │
│ Steps: {:<31} │ #f(x): {:<29} │",
            self.direction.to_string(),
            self.fx,
            self.n_steps,
            self.cost_evals,
        );
        let message = format!(
            "├────────────────────────────────────────┴──────────────────────────────────────┤
│ Message: {:<68} │",
            self.message,
        );
        let header =
            "├───────╥───────────────────────────╥──────────────┬──────────────┬────────────┤
│ Axis  ║ Value                     ║       -Bound │       +Bound │ At Limit?  │
├───────╫───────────────────────────╫──────────────┼──────────────┼────────────┤"
                .to_string();
        let rows = [("x", self.x.x, &self.bounds.x), ("y", self.x.y, &self.bounds.y)]
            .iter()
            .map(|(axis, value, bound)| {
                format!(
                    "│ {:>5} ║ {:>+25.8E} ║ {:>+12.3E} │ {:>+12.3E} │ {:^10} │",
                    axis,
                    value,
                    bound.lower,
                    bound.upper,
                    if bound.at_bound(*value) { "yes" } else { "" }
                )
            })
            .collect::<Vec<String>>();
        let bottom = "└───────╨───────────────────────────╨──────────────┴──────────────┴────────────┘"
            .to_string();
        let out = [title, status, message, header, rows.join("\n"), bottom].join("\n");
        write!(f, "{}", out)
    }
}
