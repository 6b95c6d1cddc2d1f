use std::{fs::File, io::BufWriter, io::Write, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    core::SwarmSummary,
    objectives::{Navigation, Obstacle},
    Float, Position, PI,
};

/// The angular step, in radians, used to sample obstacle outlines.
pub const DEFAULT_ANGULAR_STEP: Float = 0.01;

/// The smallest accepted angular step, about 63 thousand points per outline.
pub const MIN_ANGULAR_STEP: Float = 1e-4;

/// Errors raised while building or exporting [`PlotData`].
#[derive(Debug, Error)]
pub enum PlotError {
    /// The output could not be written.
    #[error("failed to write plot data: {0}")]
    Io(#[from] std::io::Error),
    /// The data could not be pickled.
    #[error("failed to pickle plot data: {0}")]
    Pickle(#[from] serde_pickle::Error),
    /// An angular step which is not finite or is below [`MIN_ANGULAR_STEP`].
    #[error("angular step {0} must be finite and at least {min}", min = MIN_ANGULAR_STEP)]
    InvalidAngularStep(Float),
}

/// A polyline stored as separate coordinate lists, the layout `matplotlib.pyplot.plot` expects.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Curve {
    /// The x coordinates
    pub x: Vec<Float>,
    /// The y coordinates
    pub y: Vec<Float>,
}

impl Curve {
    /// Split a list of positions into coordinate lists, keeping their order.
    pub fn from_positions(positions: &[Position]) -> Self {
        Self {
            x: positions.iter().map(|p| p.x).collect(),
            y: positions.iter().map(|p| p.y).collect(),
        }
    }
    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.x.len()
    }
    /// Returns `true` if the curve has no vertices.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
    /// A copy with each axis sorted ascending on its own.
    ///
    /// This pairs the `i`-th smallest x with the `i`-th smallest y, which draws an unordered set
    /// of waypoints as a monotone path. The resulting vertices are generally not the original
    /// positions.
    pub fn sorted_axes(&self) -> Self {
        let mut x = self.x.clone();
        let mut y = self.y.clone();
        x.sort_by(|a, b| a.total_cmp(b));
        y.sort_by(|a, b| a.total_cmp(b));
        Self { x, y }
    }
}

/// Sample the circle around `center` with the given `radius` at angles
/// $`-\pi, -\pi + \Delta, \ldots`$ strictly below $`\pi`$.
///
/// # Errors
///
/// Returns [`PlotError::InvalidAngularStep`] if `step` is not finite or is below
/// [`MIN_ANGULAR_STEP`].
pub fn circle(center: &Position, radius: Float, step: Float) -> Result<Curve, PlotError> {
    if !step.is_finite() || step < MIN_ANGULAR_STEP {
        return Err(PlotError::InvalidAngularStep(step));
    }
    let n = (2.0 * PI / step).ceil() as usize;
    let (x, y) = (0..n)
        .map(|i| -PI + i as Float * step)
        .filter(|t| *t < PI)
        .map(|t| (center.x + radius * t.cos(), center.y + radius * t.sin()))
        .unzip();
    Ok(Curve { x, y })
}

/// The data handed to a plotting front-end after a run.
///
/// # Usage:
///
/// ```python
/// import pickle
/// import matplotlib.pyplot as plt
///
/// with open("robot.pkl", "rb") as f:
///     data = pickle.load(f)
/// path = data["trajectory"]
/// plt.plot(path["x"], path["y"])
/// if data["obstacle"] is not None:
///     plt.plot(data["obstacle"]["x"], data["obstacle"]["y"])
/// plt.show()
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlotData {
    /// The personal-best positions of the swarm
    pub trajectory: Curve,
    /// The outline of the obstacle, if any
    pub obstacle: Option<Curve>,
    /// The start of the path, if any
    pub start: Option<(Float, Float)>,
    /// The goal of the path, if any
    pub goal: Option<(Float, Float)>,
}

impl PlotData {
    /// Collect the personal-best trajectory of a run.
    pub fn from_summary(summary: &SwarmSummary) -> Self {
        Self {
            trajectory: Curve::from_positions(&summary.trajectory),
            ..Default::default()
        }
    }
    /// Collect the trajectory of a navigation run along with the obstacle outline (sampled at
    /// [`DEFAULT_ANGULAR_STEP`]), the start and the goal.
    ///
    /// # Errors
    ///
    /// See [`circle`].
    pub fn for_navigation(
        summary: &SwarmSummary,
        navigation: &Navigation,
    ) -> Result<Self, PlotError> {
        let config = navigation.config();
        Ok(Self::from_summary(summary)
            .with_obstacle(&config.obstacle, DEFAULT_ANGULAR_STEP)?
            .with_start(&config.start)
            .with_goal(&config.goal))
    }
    /// Add the outline of `obstacle` sampled every `step` radians.
    ///
    /// # Errors
    ///
    /// See [`circle`].
    pub fn with_obstacle(mut self, obstacle: &Obstacle, step: Float) -> Result<Self, PlotError> {
        self.obstacle = Some(circle(&obstacle.center, obstacle.radius, step)?);
        Ok(self)
    }
    /// Mark the start of the path.
    pub fn with_start(mut self, start: &Position) -> Self {
        self.start = Some((start.x, start.y));
        self
    }
    /// Mark the goal of the path.
    pub fn with_goal(mut self, goal: &Position) -> Self {
        self.goal = Some((goal.x, goal.y));
        self
    }
    /// Replace the trajectory with [`Curve::sorted_axes`].
    pub fn sorted(mut self) -> Self {
        self.trajectory = self.trajectory.sorted_axes();
        self
    }
    /// Pickle the data into `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Pickle`] if serialization or writing fails.
    pub fn to_writer<W: Write>(&self, writer: &mut W) -> Result<(), PlotError> {
        serde_pickle::to_writer(writer, self, Default::default())?;
        Ok(())
    }
    /// Pickle the data into a new file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Io`] if the file cannot be created or flushed, or
    /// [`PlotError::Pickle`] if serialization fails.
    pub fn write_pickle<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
