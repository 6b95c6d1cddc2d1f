use crate::{traits::RandomSource, Float};

/// A [`RandomSource`] which replays a fixed sequence of samples, starting over once it runs out.
///
/// ```rust
/// use swarmnav::prelude::*;
///
/// let mut rng = ScriptedRandom::constant(0.5);
/// assert_eq!(rng.next_float(), 0.5);
/// assert_eq!(rng.range(0.0, 10.0), 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<Float>,
    cursor: usize,
    drawn: usize,
}

impl ScriptedRandom {
    /// Create a new [`ScriptedRandom`] which cycles through `values`.
    ///
    /// # Panics
    ///
    /// This method will panic if `values` is empty or if any value lies outside of `[0, 1)`.
    pub fn new<I: IntoIterator<Item = Float>>(values: I) -> Self {
        let values: Vec<Float> = values.into_iter().collect();
        assert!(!values.is_empty(), "A scripted sequence needs at least one value");
        for value in &values {
            assert!(
                (0.0..1.0).contains(value),
                "Scripted value {} is outside of [0, 1)",
                value
            );
        }
        Self {
            values,
            cursor: 0,
            drawn: 0,
        }
    }
    /// Create a [`ScriptedRandom`] which always returns `value`.
    ///
    /// # Panics
    ///
    /// This method will panic if `value` lies outside of `[0, 1)`.
    pub fn constant(value: Float) -> Self {
        Self::new([value])
    }
    /// The total number of samples drawn so far.
    pub const fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for ScriptedRandom {
    fn next_float(&mut self) -> Float {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.drawn += 1;
        value
    }
}
