//! Randomness sources
//!
//! Every roll takes its randomness as an explicit `&mut` [`RandomSource`]
//! so resolution can be replayed from a seed or scripted in tests.

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed floats in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter turning any `rand` generator into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Reproducible source: the same seed always yields the same rolls
pub type SeededSource = RngSource<ChaCha8Rng>;

impl RngSource<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Source backed by the thread-local generator
pub fn thread_source() -> RngSource<ThreadRng> {
    RngSource::new(rand::thread_rng())
}

/// Replays a fixed script of unit floats, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        ScriptedSource {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Script exact die faces as `(value, sides)` pairs.
    ///
    /// Each pair maps to the midpoint of that face's interval, so
    /// `ceil(unit * sides)` lands on `value`.
    pub fn faces(faces: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self::new(
            faces
                .into_iter()
                .map(|(value, sides)| (value as f64 - 0.5) / sides as f64),
        )
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.draws % self.values.len()]
        };
        self.draws += 1;
        value
    }
}
