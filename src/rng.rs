//! Gameplay randomness, injected explicitly so problem and distractor
//! generation is reproducible from a fixed seed in tests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct GameRng {
    inner: StdRng,
}

impl GameRng {
    /// Deterministic RNG for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Entropy-backed RNG for normal play (browser entropy on wasm32).
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Uniform integer in `[min, max]` inclusive. Degenerate ranges collapse
    /// to `min`.
    pub fn range_i64(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// True with probability `p` (clamped to `0.0..=1.0`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p.clamp(0.0, 1.0))
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
