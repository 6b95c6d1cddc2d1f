/// Module containing the [`SwarmAlgorithm`] trait.
pub mod algorithm;
/// Module containing the [`CostFunction`] trait.
pub mod cost_function;
/// Module containing the [`Observer`] trait and its implementations.
pub mod observer;
/// Module containing the [`RandomSource`] trait.
pub mod random_source;

pub use algorithm::SwarmAlgorithm;
pub use cost_function::CostFunction;
pub use observer::Observer;
pub use random_source::RandomSource;
