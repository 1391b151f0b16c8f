//! Random draws used by mission resolution.
//!
//! Resolution only needs two kinds of draw, so they sit behind a small trait
//! that tests can replace with a scripted sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait RandomSource {
    /// True with probability `p`
    fn bernoulli(&mut self, p: f64) -> bool;
    /// Uniform integer in `lo..=hi`
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn bernoulli(&mut self, p: f64) -> bool {
        (**self).bernoulli(p)
    }

    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).uniform_int(lo, hi)
    }
}

/// `rand`-backed source
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    /// Out-of-range `p` saturates to 0 or 1; NaN never succeeds.
    fn bernoulli(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays queued outcomes in order.
///
/// When a queue runs dry, `bernoulli` answers true and `uniform_int` answers
/// the lower bound. Queued integers are clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    outcomes: VecDeque<bool>,
    ints: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcomes(mut self, outcomes: impl IntoIterator<Item = bool>) -> Self {
        self.outcomes.extend(outcomes);
        self
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub fn push_outcome(&mut self, outcome: bool) {
        self.outcomes.push_back(outcome);
    }

    pub fn push_int(&mut self, value: u32) {
        self.ints.push_back(value);
    }

    /// Draws still queued
    pub fn remaining(&self) -> usize {
        self.outcomes.len() + self.ints.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn bernoulli(&mut self, _p: f64) -> bool {
        self.outcomes.pop_front().unwrap_or(true)
    }

    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.ints
            .pop_front()
            .map(|v| v.clamp(lo, hi.max(lo)))
            .unwrap_or(lo)
    }
}
