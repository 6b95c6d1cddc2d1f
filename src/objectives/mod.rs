/// Module containing the bilinear test function.
pub mod bilinear;
pub use bilinear::Bilinear;

/// Module containing the point-robot navigation objective.
pub mod navigation;
pub use navigation::{AngleUnit, Navigation, NavigationConfig, Obstacle, SingularityPolicy};
