//! Injectable randomness.
//!
//! Every function in the crate that needs a random draw takes a
//! [`RandomSource`]. Production callers use [`SeededRandom`]; tests pin draws
//! with [`FixedRandom`] or [`ScriptedRandom`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait RandomSource {
    /// Uniform draw in `[0, 1]`. Real generators never return `1.0`; scripted
    /// sources may, to model the maximum draw.
    fn next_f64(&mut self) -> f64;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform integer in `[min, max]`, inclusive on both ends.
    fn rand_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = (hi - lo + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i64;
        (lo + offset).clamp(lo, hi)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Weighted draw using a single uniform value scaled to the total weight.
/// Negative weights count as zero; a non-positive total falls back to the first entry.
pub fn weighted_pick<'a, T, R>(items: &'a [(T, f64)], rng: &mut R) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    let (first, _) = items.first()?;
    let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
    if !(total > 0.0) {
        return Some(first);
    }
    let mut remaining = rng.next_f64() * total;
    for (value, weight) in items {
        let weight = weight.max(0.0);
        if remaining < weight {
            return Some(value);
        }
        remaining -= weight;
    }
    items.last().map(|(value, _)| value)
}

/// `SmallRng`-backed source for reproducible simulations.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Returns the same draw forever.
#[derive(Clone, Copy, Debug)]
pub struct FixedRandom(pub f64);

impl FixedRandom {
    pub fn max() -> Self {
        FixedRandom(1.0)
    }

    pub fn min() -> Self {
        FixedRandom(0.0)
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.clamp(0.0, 1.0)
    }
}

/// Replays a fixed sequence of draws, then keeps repeating the last one.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    last: f64,
    consumed: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            last: 0.0,
            consumed: 0,
        }
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if let Some(next) = self.draws.pop_front() {
            self.last = next.clamp(0.0, 1.0);
        }
        self.consumed += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_int_covers_both_ends() {
        assert_eq!(FixedRandom::min().rand_int(2, 5), 2);
        assert_eq!(FixedRandom::max().rand_int(2, 5), 5);
        assert_eq!(FixedRandom(0.5).rand_int(0, 5), 3);
        assert_eq!(FixedRandom(0.3).rand_int(7, 7), 7);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let mut a = SeededRandom::new(99);
        let mut b = SeededRandom::new(99);
        for _ in 0..32 {
            let draw = a.next_f64();
            assert_eq!(draw, b.next_f64());
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn scripted_repeats_last_draw() {
        let mut rng = ScriptedRandom::new([0.1, 0.9]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.9);
        assert_eq!(rng.next_f64(), 0.9);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn weighted_pick_scans_cumulative_weights() {
        let items = [("a", 60.0), ("b", 30.0), ("c", 10.0)];
        assert_eq!(weighted_pick(&items, &mut FixedRandom(0.0)), Some(&"a"));
        assert_eq!(weighted_pick(&items, &mut FixedRandom(0.65)), Some(&"b"));
        assert_eq!(weighted_pick(&items, &mut FixedRandom(0.95)), Some(&"c"));
        assert_eq!(weighted_pick(&items, &mut FixedRandom::max()), Some(&"c"));
    }

    #[test]
    fn weighted_pick_degrades_on_zero_total() {
        let items = [("a", 0.0), ("b", -3.0)];
        assert_eq!(weighted_pick(&items, &mut FixedRandom(0.7)), Some(&"a"));
        let empty: [(&str, f64); 0] = [];
        assert_eq!(weighted_pick(&empty, &mut FixedRandom(0.7)), None);
    }
}
