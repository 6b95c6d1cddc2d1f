use fastrand::Rng;

use crate::Float;

/// A source of independent samples from the uniform distribution on `[0, 1)`.
///
/// The [`PSO`](crate::algorithms::particles::PSO) only ever draws randomness through this trait,
/// so any implementation can be injected, including the deterministic
/// [`ScriptedRandom`](crate::core::ScriptedRandom) used in tests.
pub trait RandomSource {
    /// Draw the next sample from `[0, 1)`.
    fn next_float(&mut self) -> Float;
    /// Draw a sample from `[low, high)` as `low + next_float() * (high - low)`.
    fn range(&mut self, low: Float, high: Float) -> Float {
        low + self.next_float() * (high - low)
    }
}

impl RandomSource for Rng {
    #[cfg(not(feature = "f32"))]
    fn next_float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn next_float(&mut self) -> Float {
        self.f32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_float(&mut self) -> Float {
        (**self).next_float()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_float(&mut self) -> Float {
        (**self).next_float()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_samples_unit_interval() {
        let mut rng = Rng::with_seed(0);
        for _ in 0..10_000 {
            let u = rng.next_float();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_range_maps_unit_interval() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..10_000 {
            let u = rng.range(-5.0, 5.0);
            assert!((-5.0..5.0).contains(&u));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        let xs: Vec<Float> = (0..16).map(|_| a.next_float()).collect();
        let ys: Vec<Float> = (0..16).map(|_| b.next_float()).collect();
        assert_eq!(xs, ys);
    }
}
