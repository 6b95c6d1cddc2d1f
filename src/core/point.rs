use crate::{core::PsoError, traits::CostFunction, Float, Position};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An evaluated position in the search domain.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// the point's position
    pub x: Position,
    /// the objective value at `x`
    pub fx: Float,
}
impl Point {
    /// Evaluate `func` at `x` and wrap the result in a [`Point`].
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails, or a [`PsoError::NonFiniteValue`] (converted
    /// into `E`) if the function returns `NaN` or an infinity. Non-finite values would otherwise
    /// win or lose every later comparison regardless of direction.
    pub fn evaluate<U, E>(
        x: Position,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Self, E>
    where
        E: From<PsoError>,
    {
        let fx = func.evaluate(&x, user_data)?;
        if !fx.is_finite() {
            return Err(PsoError::NonFiniteValue {
                x: x.x,
                y: x.y,
                value: fx,
            }
            .into());
        }
        Ok(Self { x, fx })
    }
    /// Convert the [`Point`] into a `Position`-`Float` tuple.
    pub const fn destructure(self) -> (Position, Float) {
        (self.x, self.fx)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: ({}, {}), f(x): {}", self.x.x, self.x.y, self.fx)
    }
}
