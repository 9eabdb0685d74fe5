//! Randomness used by the opponent's tie-breaks.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform choices.
///
/// The opponent only ever needs "pick one of `len` options", so this is the
/// whole interface. Tests substitute a stub to make tie-breaks deterministic.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Uses the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Uses a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeds from the operating system. Unlike [`RngSource::thread`] the
    /// result is `Send`, so it can move into a spawned task.
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Always picks the same slot, clamped to the number of options.
///
/// Handy when a caller wants the opponent to be fully predictable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPick(pub usize);

impl RandomSource for FixedPick {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
