//! Random source for bounce jitter
//!
//! The physics never reaches for a global RNG. Anything that jitters takes a
//! `&mut impl JitterSource`: a seeded `Pcg32` in play, a scripted source in tests.

use rand::{Rng, RngCore};

/// Uniform random numbers in [0, 1)
pub trait JitterSource {
    /// Next sample in [0, 1)
    fn unit(&mut self) -> f32;

    /// Uniform sample in [lo, hi)
    #[inline]
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit()
    }

    /// Uniform sample centered on zero, in [-half_width, half_width)
    #[inline]
    fn centered(&mut self, half_width: f32) -> f32 {
        self.range(-half_width, half_width)
    }
}

impl<R: RngCore + ?Sized> JitterSource for R {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Multiplicative speed jitter: `1 + U(-1, 1) * fraction`
#[inline]
pub fn speed_factor(rng: &mut impl JitterSource, fraction: f32) -> f32 {
    1.0 + rng.centered(1.0) * fraction
}

/// Sideways kick magnitude: `U(-0.5, 0.5) * scale`
#[inline]
pub fn tangential_kick(rng: &mut impl JitterSource, scale: f32) -> f32 {
    rng.centered(0.5) * scale
}
