//! Random source - the seam through which all randomness flows
//!
//! Production code draws from a `rand` generator; tests can substitute a
//! scripted source to get exact, repeatable descriptors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Color;

/// Bounded random draws
pub trait RandomSource: Send {
    /// Draw a scalar in the half-open range [min, max)
    ///
    /// Implementations return `min` when the range is empty or inverted.
    fn range(&mut self, min: f32, max: f32) -> f32;

    /// Draw a color with each channel uniform in [0, 255]
    fn color(&mut self) -> Color;

    /// Pick an index uniformly in [0, len)
    ///
    /// Default implementation is built on `range`. Returns 0 for `len == 0`.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let raw = self.range(0.0, len as f32);
        (raw.max(0.0) as usize).min(len - 1)
    }
}

/// A boxed random source for dynamic dispatch
pub type BoxedRandom = Box<dyn RandomSource>;

/// Adapter from any `rand` generator
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        // gen_range panics on empty ranges
        if !(max > min) {
            return min;
        }
        let value = self.rng.gen_range(min..max);
        // Float rounding can land exactly on the upper bound
        if value >= max {
            min
        } else {
            value
        }
    }

    fn color(&mut self) -> Color {
        Color::rgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedSource;
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.range(-5.0, 5.0), b.range(-5.0, 5.0));
            assert_eq!(a.color(), b.color());
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut source = RngSource::seeded(1);
        for _ in 0..1000 {
            let v = source.range(100.0, 300.0);
            assert!((100.0..300.0).contains(&v));
        }
    }

    #[test]
    fn test_empty_range_returns_min() {
        let mut source = RngSource::seeded(1);
        assert_eq!(source.range(3.0, 3.0), 3.0);
        assert_eq!(source.range(5.0, -5.0), 5.0);
        assert!(source.range(f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_pick_stays_in_bounds() {
        let mut scripted = ScriptedSource::new(vec![0.0, 0.5, 0.999_999]);
        assert_eq!(scripted.pick(6), 0);
        assert_eq!(scripted.pick(6), 3);
        assert_eq!(scripted.pick(6), 5);
        assert_eq!(scripted.pick(0), 0);
    }
}
