use crate::{core::PsoError, traits::CostFunction, Float, Position};

/// The bilinear test function, a saddle with no extremum inside an open domain.
///
/// ```math
/// f(x, y) = x y
/// ```
/// On a box symmetric around the origin, the extrema sit in the corners: the minimum at
/// $`(x_{max}, y_{min})`$ or $`(x_{min}, y_{max})`$ and the maximum at $`(x_{max}, y_{max})`$ or
/// $`(x_{min}, y_{min})`$.
#[derive(Copy, Clone, Debug, Default)]
pub struct Bilinear;

impl CostFunction for Bilinear {
    fn evaluate(&self, x: &Position, _user_data: &mut ()) -> Result<Float, PsoError> {
        Ok(x.x * x.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bilinear() {
        assert_eq!(Bilinear.evaluate(&Position::new(2.0, 3.0), &mut ()), Ok(6.0));
        assert_eq!(Bilinear.evaluate(&Position::new(-5.0, 5.0), &mut ()), Ok(-25.0));
        assert_eq!(Bilinear.evaluate(&Position::new(0.0, 4.0), &mut ()), Ok(0.0));
    }
}
