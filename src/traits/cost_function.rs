use crate::{core::PsoError, Float, Position};

/// A trait which describes an objective $`f(\mathbb{R}^2) \to \mathbb{R}`$
///
/// Such a function may also take a `user_data: &mut U` field which can be used to pass external
/// arguments to the function during optimization.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution. The [`Engine`](crate::core::Engine) reports its own failures through `E`, so `E`
/// must be constructible from a [`PsoError`].
///
/// Whether the swarm looks for the smallest or largest value is decided by the
/// [`Direction`](crate::core::Direction) in the run configuration, never by the sign of the
/// function.
pub trait CostFunction<U = (), E = PsoError> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails, for instance at a singular point of the
    /// function.
    fn evaluate(&self, x: &Position, user_data: &mut U) -> Result<Float, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Paraboloid;
    impl CostFunction for Paraboloid {
        fn evaluate(&self, x: &Position, _: &mut ()) -> Result<Float, PsoError> {
            Ok(x.x.powi(2) + x.y.powi(2) + 1.0)
        }
    }

    struct Offset;
    impl CostFunction<Float> for Offset {
        fn evaluate(&self, x: &Position, user_data: &mut Float) -> Result<Float, PsoError> {
            *user_data += 1.0;
            Ok(x.x + *user_data)
        }
    }

    #[test]
    fn test_cost_function() {
        let y = Paraboloid.evaluate(&Position::new(1.0, 2.0), &mut ()).unwrap();
        assert_eq!(y, 6.0);
    }

    #[test]
    fn test_cost_function_user_data() {
        let mut calls = 0.0;
        let x = Position::new(1.0, 0.0);
        assert_eq!(Offset.evaluate(&x, &mut calls).unwrap(), 2.0);
        assert_eq!(Offset.evaluate(&x, &mut calls).unwrap(), 3.0);
        assert_eq!(calls, 2.0);
    }
}
