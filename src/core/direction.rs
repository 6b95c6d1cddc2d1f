use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{core::Point, Float};

/// Whether the swarm searches for the smallest or the largest objective value.
///
/// This is the only place where the notion of "better" is defined. Every personal-best and
/// global-best comparison in the crate goes through [`Direction::is_better`].
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    /// Search for the smallest value (cost minimization)
    #[default]
    Minimize,
    /// Search for the largest value (fitness maximization)
    Maximize,
}
impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimize => write!(f, "minimize"),
            Self::Maximize => write!(f, "maximize"),
        }
    }
}

impl Direction {
    /// Returns `true` if `candidate` strictly improves on `incumbent`. Ties never count as an
    /// improvement.
    pub fn is_better(&self, candidate: Float, incumbent: Float) -> bool {
        match self {
            Self::Minimize => candidate < incumbent,
            Self::Maximize => candidate > incumbent,
        }
    }
    /// Returns the best of the given points, keeping the earliest one on ties, or `None` if the
    /// iterator is empty.
    pub fn best_of<'a, I>(&self, points: I) -> Option<&'a Point>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points.into_iter().fold(None, |best, point| match best {
            Some(current) if !self.is_better(point.fx, current.fx) => Some(current),
            _ => Some(point),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn point(x: Float, fx: Float) -> Point {
        Point {
            x: Position::new(x, x),
            fx,
        }
    }

    #[test]
    fn test_is_better_is_strict() {
        assert!(Direction::Minimize.is_better(1.0, 2.0));
        assert!(!Direction::Minimize.is_better(2.0, 2.0));
        assert!(Direction::Maximize.is_better(3.0, 2.0));
        assert!(!Direction::Maximize.is_better(2.0, 2.0));
    }

    #[test]
    fn test_best_of() {
        let points = [point(0.0, 4.0), point(1.0, -1.0), point(2.0, 9.0), point(3.0, -1.0)];
        assert_eq!(Direction::Minimize.best_of(&points).unwrap().x.x, 1.0);
        assert_eq!(Direction::Maximize.best_of(&points).unwrap().x.x, 2.0);
        assert!(Direction::Minimize.best_of(std::iter::empty()).is_none());
    }
}
