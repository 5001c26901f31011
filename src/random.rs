//! Random sources for mocked document inspection.
//!
//! The validator never touches a global generator. Every draw goes through a
//! [`RandomSource`] owned by the caller, so a fixed seed replays a run exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the random draws a validation makes.
pub trait RandomSource {
    /// Draw a check outcome that passes with the given probability.
    fn passes(&mut self, probability: f64) -> bool;

    /// Draw a uniform risk adjustment in `[-spread, spread]`.
    fn adjustment(&mut self, spread: i32) -> i32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn passes(&mut self, probability: f64) -> bool {
        (**self).passes(probability)
    }

    fn adjustment(&mut self, spread: i32) -> i32 {
        (**self).adjustment(spread)
    }
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Seeded source. ChaCha8 output is stable across platforms and releases.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RngSource<StdRng> {
    /// Unseeded source for ordinary runs.
    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn passes(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    fn adjustment(&mut self, spread: i32) -> i32 {
        let spread = i32::try_from(spread.unsigned_abs()).unwrap_or(i32::MAX);
        self.rng.random_range(-spread..=spread)
    }
}
