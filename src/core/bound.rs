use crate::{
    core::{PsoError, PsoResult},
    traits::RandomSource,
    Float, Position,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A closed interval `[lower, upper]` limiting one coordinate of the search domain.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bound {
    /// The lower limit
    pub lower: Float,
    /// The upper limit
    pub upper: Float,
}
impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
impl From<(Float, Float)> for Bound {
    fn from(value: (Float, Float)) -> Self {
        Self {
            lower: value.0,
            upper: value.1,
        }
    }
}

impl Bound {
    /// Checks that the interval is finite and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidBounds`] if `lower >= upper` or either limit is not finite.
    pub fn validate(&self, axis: &'static str) -> PsoResult<()> {
        if self.lower.is_finite() && self.upper.is_finite() && self.lower < self.upper {
            Ok(())
        } else {
            Err(PsoError::InvalidBounds {
                axis,
                lower: self.lower,
                upper: self.upper,
            })
        }
    }
    /// Get a value in the uniform distribution between `lower` and `upper`.
    pub fn get_uniform<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Float {
        // rounding in `range` may step past `upper` on narrow bounds far from zero
        self.clamp(rng.range(self.lower, self.upper))
    }
    /// Checks whether the given `value` is compatible with the bound.
    pub fn contains(&self, value: Float) -> bool {
        value >= self.lower && value <= self.upper
    }
    /// Moves `value` onto the nearest limit if it lies outside of the bound.
    pub fn clamp(&self, value: Float) -> Float {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }
    /// Checks if the given value sits exactly on one of the limits.
    pub fn at_bound(&self, value: Float) -> bool {
        value == self.lower || value == self.upper
    }
}

/// The axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]` which contains every particle.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    /// The limits of the x coordinate
    pub x: Bound,
    /// The limits of the y coordinate
    pub y: Bound,
}
impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}", self.x, self.y)
    }
}

impl BoundingBox {
    /// Create a new [`BoundingBox`] from `(min, max)` pairs for each axis.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidBounds`] if either axis is empty or not finite.
    pub fn new<B: Into<Bound>>(x: B, y: B) -> PsoResult<Self> {
        let bounds = Self {
            x: x.into(),
            y: y.into(),
        };
        bounds.validate()?;
        Ok(bounds)
    }
    /// Create the square `[lower, upper]²`.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidBounds`] if `lower >= upper` or either limit is not finite.
    pub fn square(lower: Float, upper: Float) -> PsoResult<Self> {
        Self::new((lower, upper), (lower, upper))
    }
    /// Checks both axes.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidBounds`] for the first invalid axis.
    pub fn validate(&self) -> PsoResult<()> {
        self.x.validate("x")?;
        self.y.validate("y")
    }
    /// Checks whether `position` lies inside the box (limits included).
    pub fn contains(&self, position: &Position) -> bool {
        self.x.contains(position.x) && self.y.contains(position.y)
    }
    /// Clamps `position` onto the box, one axis at a time.
    pub fn clamp(&self, position: &Position) -> Position {
        Position::new(self.x.clamp(position.x), self.y.clamp(position.y))
    }
    /// Draw a position uniformly from the box. The x coordinate is sampled first.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Position {
        let x = self.x.get_uniform(rng);
        let y = self.y.get_uniform(rng);
        Position::new(x, y)
    }
}
