use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    core::{Direction, PsoError, PsoResult},
    traits::CostFunction,
    Float, Position,
};

/// The unit of the heading term in the [`Navigation`] cost.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AngleUnit {
    /// The heading is measured in radians, in $`(-\pi, \pi]`$
    #[default]
    Radians,
    /// The heading is measured in degrees, in $`(-180, 180]`$
    Degrees,
}

/// What the [`Navigation`] cost does when evaluated exactly at the obstacle center.
///
/// A penalty must be a value the run will never prefer: large and positive when minimizing,
/// large and negative when maximizing. [`SingularityPolicy::penalty_for`] picks the sign.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum SingularityPolicy {
    /// Fail the run with [`PsoError::Singularity`]
    #[default]
    Error,
    /// Replace the whole cost with the given finite value
    Penalty(Float),
}

impl SingularityPolicy {
    /// A [`SingularityPolicy::Penalty`] of size `magnitude` signed so that it is the worst value
    /// in the given [`Direction`].
    pub fn penalty_for(direction: Direction, magnitude: Float) -> Self {
        match direction {
            Direction::Minimize => Self::Penalty(magnitude.abs()),
            Direction::Maximize => Self::Penalty(-magnitude.abs()),
        }
    }
}

/// A circular obstacle.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Obstacle {
    /// The center of the obstacle
    pub center: Position,
    /// The radius of the obstacle
    pub radius: Float,
}

impl Obstacle {
    /// The Euclidean distance from `position` to the obstacle's center.
    pub fn distance(&self, position: &Position) -> Float {
        (self.center - position).norm()
    }
}

/// The weights and geometry of the [`Navigation`] cost.
///
/// The defaults place the robot at `(2, 2)`, the goal at `(45, 45)` and an obstacle of radius `5`
/// at `(25, 25)`, with $`\alpha = (1.9, 1.7, 0.25)`$.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Where the robot starts. Only used to anchor plots of the path.
    pub start: Position,
    /// The point the robot is attracted to
    pub goal: Position,
    /// The obstacle the robot is repelled from
    pub obstacle: Obstacle,
    /// The weight of the distance to the goal
    pub alpha1: Float,
    /// The weight of the inverse distance to the obstacle
    pub alpha2: Float,
    /// The weight of the heading towards the goal
    pub alpha3: Float,
    /// The unit of the heading term
    pub angle_unit: AngleUnit,
    /// The behavior at the obstacle center
    pub singularity: SingularityPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start: Position::new(2.0, 2.0),
            goal: Position::new(45.0, 45.0),
            obstacle: Obstacle {
                center: Position::new(25.0, 25.0),
                radius: 5.0,
            },
            alpha1: 1.9,
            alpha2: 1.7,
            alpha3: 0.25,
            angle_unit: AngleUnit::default(),
            singularity: SingularityPolicy::default(),
        }
    }
}

impl NavigationConfig {
    /// Sets the start position of the robot (default = `(2, 2)`).
    pub const fn with_start(mut self, x: Float, y: Float) -> Self {
        self.start = Position::new(x, y);
        self
    }
    /// Sets the goal position (default = `(45, 45)`).
    pub const fn with_goal(mut self, x: Float, y: Float) -> Self {
        self.goal = Position::new(x, y);
        self
    }
    /// Sets the obstacle center and radius (default = `(25, 25)` and `5`).
    pub const fn with_obstacle(mut self, x: Float, y: Float, radius: Float) -> Self {
        self.obstacle = Obstacle {
            center: Position::new(x, y),
            radius,
        };
        self
    }
    /// Sets the weights $`\alpha_1`$, $`\alpha_2`$ and $`\alpha_3`$ (default = `(1.9, 1.7, 0.25)`).
    pub const fn with_alphas(mut self, alpha1: Float, alpha2: Float, alpha3: Float) -> Self {
        self.alpha1 = alpha1;
        self.alpha2 = alpha2;
        self.alpha3 = alpha3;
        self
    }
    /// Sets the [`AngleUnit`] of the heading term (default = [`AngleUnit::Radians`]).
    pub const fn with_angle_unit(mut self, value: AngleUnit) -> Self {
        self.angle_unit = value;
        self
    }
    /// Sets the [`SingularityPolicy`] (default = [`SingularityPolicy::Error`]).
    pub const fn with_singularity_policy(mut self, value: SingularityPolicy) -> Self {
        self.singularity = value;
        self
    }
    /// Checks the geometry and the weights.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidObstacleRadius`] if the radius is not finite and positive, or
    /// [`PsoError::InvalidCoefficient`] for a non-finite weight, coordinate or penalty.
    pub fn validate(&self) -> PsoResult<()> {
        let radius = self.obstacle.radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PsoError::InvalidObstacleRadius(radius));
        }
        let mut values = vec![
            ("alpha1", self.alpha1),
            ("alpha2", self.alpha2),
            ("alpha3", self.alpha3),
            ("start.x", self.start.x),
            ("start.y", self.start.y),
            ("goal.x", self.goal.x),
            ("goal.y", self.goal.y),
            ("obstacle.x", self.obstacle.center.x),
            ("obstacle.y", self.obstacle.center.y),
        ];
        if let SingularityPolicy::Penalty(p) = self.singularity {
            values.push(("penalty", p));
        }
        match values.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(PsoError::InvalidCoefficient { name, value }),
            None => Ok(()),
        }
    }
}

/// The point-robot navigation cost.
///
/// ```math
/// c(p) = \alpha_1 |p - g| + \frac{\alpha_2}{|p - o|} + r \alpha_3 \theta
/// ```
/// where $`g`$ is the goal, $`o`$ and $`r`$ are the obstacle's center and radius, and
/// $`\theta = \operatorname{atan2}(g_y - p_y, g_x - p_x)`$ is the heading from $`p`$ to the goal.
/// The cost is singular at $`p = o`$; see [`SingularityPolicy`].
///
/// ```rust
/// use swarmnav::objectives::{Navigation, NavigationConfig};
/// use swarmnav::traits::CostFunction;
/// use swarmnav::Position;
///
/// let nav = Navigation::new(NavigationConfig::default()).unwrap();
/// assert!(nav.evaluate(&Position::new(25.0, 25.0), &mut ()).is_err());
/// ```
///
/// Deserialization goes through [`Navigation::new`], so a stored configuration is checked too.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "NavigationConfig", into = "NavigationConfig")]
pub struct Navigation {
    config: NavigationConfig,
}

impl TryFrom<NavigationConfig> for Navigation {
    type Error = PsoError;

    fn try_from(config: NavigationConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<Navigation> for NavigationConfig {
    fn from(value: Navigation) -> Self {
        value.config
    }
}

impl Navigation {
    /// Creates the objective after checking `config`.
    ///
    /// # Errors
    ///
    /// See [`NavigationConfig::validate`].
    pub fn new(config: NavigationConfig) -> PsoResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }
    /// The configuration of the objective.
    pub const fn config(&self) -> &NavigationConfig {
        &self.config
    }
    /// The heading from `position` to the goal in the configured [`AngleUnit`].
    pub fn heading(&self, position: &Position) -> Float {
        let d = self.config.goal - position;
        let angle = d.y.atan2(d.x);
        match self.config.angle_unit {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_degrees(),
        }
    }
    /// Evaluate the cost at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::Singularity`] if `position` is exactly the obstacle center and the
    /// policy is [`SingularityPolicy::Error`].
    pub fn cost(&self, position: &Position) -> PsoResult<Float> {
        let c = &self.config;
        let dr_obs = c.obstacle.distance(position);
        if dr_obs == 0.0 {
            return match c.singularity {
                SingularityPolicy::Error => Err(PsoError::Singularity {
                    x: position.x,
                    y: position.y,
                }),
                SingularityPolicy::Penalty(penalty) => {
                    warn!(
                        x = position.x,
                        y = position.y,
                        penalty,
                        "evaluated at the obstacle center, substituting penalty"
                    );
                    Ok(penalty)
                }
            };
        }
        let dr_goal = (c.goal - position).norm();
        Ok(c.alpha1 * dr_goal
            + c.alpha2 / dr_obs
            + c.obstacle.radius * c.alpha3 * self.heading(position))
    }
}

impl CostFunction for Navigation {
    fn evaluate(&self, x: &Position, _user_data: &mut ()) -> Result<Float, PsoError> {
        self.cost(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_cost_in_radians() {
        let nav = Navigation::default();
        let cost = nav.cost(&Position::new(45.0, 25.0)).unwrap();
        assert_relative_eq!(
            cost,
            1.9 * 20.0 + 1.7 / 20.0 + 5.0 * 0.25 * PI / 2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_cost_in_degrees() {
        let nav =
            Navigation::new(NavigationConfig::default().with_angle_unit(AngleUnit::Degrees))
                .unwrap();
        let cost = nav.cost(&Position::new(45.0, 25.0)).unwrap();
        assert_relative_eq!(cost, 38.0 + 0.085 + 112.5, epsilon = 1e-9);
    }

    #[test]
    fn test_heading_points_at_goal() {
        let nav = Navigation::default();
        assert_relative_eq!(nav.heading(&Position::new(2.0, 2.0)), PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(nav.heading(&Position::new(50.0, 45.0)), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_singularity_is_an_error_by_default() {
        let nav = Navigation::default();
        assert_eq!(
            nav.evaluate(&Position::new(25.0, 25.0), &mut ()),
            Err(PsoError::Singularity { x: 25.0, y: 25.0 })
        );
    }

    #[test]
    fn test_singularity_penalty() {
        let nav = Navigation::new(
            NavigationConfig::default().with_singularity_policy(SingularityPolicy::Penalty(1e6)),
        )
        .unwrap();
        assert_eq!(nav.cost(&Position::new(25.0, 25.0)), Ok(1e6));
        assert!(nav.cost(&Position::new(25.0, 25.5)).unwrap() < 1e6);
    }

    #[test]
    fn test_penalty_for_direction() {
        assert_eq!(
            SingularityPolicy::penalty_for(Direction::Minimize, -1e6),
            SingularityPolicy::Penalty(1e6)
        );
        let nav = Navigation::new(NavigationConfig::default().with_singularity_policy(
            SingularityPolicy::penalty_for(Direction::Maximize, 1e6),
        ))
        .unwrap();
        let center = nav.cost(&Position::new(25.0, 25.0)).unwrap();
        let nearby = nav.cost(&Position::new(25.0, 25.5)).unwrap();
        assert!(Direction::Maximize.is_better(nearby, center));
    }

    #[test]
    fn test_deserialize_validates() {
        let nav = Navigation::new(NavigationConfig::default().with_goal(40.0, 30.0)).unwrap();
        let bytes = serde_pickle::to_vec(&nav, Default::default()).unwrap();
        let loaded: Navigation = serde_pickle::from_slice(&bytes, Default::default()).unwrap();
        assert_eq!(loaded, nav);

        let bad = NavigationConfig::default().with_obstacle(25.0, 25.0, -5.0);
        let bytes = serde_pickle::to_vec(&bad, Default::default()).unwrap();
        assert!(serde_pickle::from_slice::<Navigation>(&bytes, Default::default()).is_err());
        let bad = NavigationConfig::default().with_alphas(Float::NAN, 1.7, 0.25);
        let bytes = serde_pickle::to_vec(&bad, Default::default()).unwrap();
        assert!(serde_pickle::from_slice::<Navigation>(&bytes, Default::default()).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(NavigationConfig::default().validate().is_ok());
        assert_eq!(
            Navigation::new(NavigationConfig::default().with_obstacle(25.0, 25.0, 0.0)),
            Err(PsoError::InvalidObstacleRadius(0.0))
        );
        assert!(matches!(
            NavigationConfig::default()
                .with_alphas(1.0, Float::INFINITY, 1.0)
                .validate(),
            Err(PsoError::InvalidCoefficient { name: "alpha2", .. })
        ));
        assert!(matches!(
            NavigationConfig::default()
                .with_singularity_policy(SingularityPolicy::Penalty(Float::NAN))
                .validate(),
            Err(PsoError::InvalidCoefficient { name: "penalty", .. })
        ));
    }
}
