//! # Seeded Sequence
//!
//! A tiny linear congruential generator producing fractions in `[0, 1)`.
//!
//! ```text
//! state₀ = seed
//! stateₙ = (stateₙ₋₁ × 9301 + 49297) mod 233280
//! drawₙ  = stateₙ / 233280
//! ```
//!
//! Entertainment grade only. The period is at most 233280 and the output
//! is trivially predictable, which is exactly what makes a palpite
//! reproducible for a whole day.

use crate::seed::Seed;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233_280;

/// A deterministic stream of fractions in `[0, 1)`.
///
/// Each instance owns its state, so two sequences built from the same seed
/// never interfere and always yield the same draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSequence {
    state: u64,
}

impl SeededSequence {
    /// Creates a sequence starting at `seed`.
    ///
    /// The seed is reduced modulo 233280 first. Every draw depends only on
    /// the state modulo 233280, so the sequence is unchanged.
    pub fn new(seed: Seed) -> Self {
        SeededSequence {
            state: seed.value() % MODULUS,
        }
    }

    /// Advances the state and returns the next fraction.
    ///
    /// ## Example
    /// ```rust
    /// use dinho_core::{Seed, SeededSequence};
    ///
    /// let mut seq = SeededSequence::new(Seed::new(0));
    /// assert_eq!(seq.next_fraction(), 49297.0 / 233280.0);
    /// ```
    pub fn next_fraction(&mut self) -> f64 {
        // state < MODULUS, so the product fits in a u64.
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Draws `floor(next × bound)`, an index in `0..bound`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_fraction() * bound as f64).floor() as usize
    }
}

/// Infinite iterator over the draws.
impl Iterator for SeededSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_draw_from_zero() {
        let mut seq = SeededSequence::new(Seed::new(0));
        let first = seq.next_fraction();
        assert_eq!(first, 49297.0 / 233280.0);
        assert!((first - 0.211_321).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        for seed in [0u64, 1, 42, 233_279, 999_999_999, u64::from(u32::MAX)] {
            let a: Vec<f64> = SeededSequence::new(Seed::new(seed)).take(500).collect();
            let b: Vec<f64> = SeededSequence::new(Seed::new(seed)).take(500).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_draws_in_unit_interval() {
        let mut seq = SeededSequence::new(Seed::new(2_147_483_648));
        for _ in 0..10_000 {
            let v = seq.next_fraction();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_huge_seeds_reduce_to_same_draws() {
        for seed in [u64::MAX, u64::MAX / 1000, 1 << 62] {
            let mut big = SeededSequence::new(Seed::new(seed));
            let mut reduced = SeededSequence::new(Seed::new(seed % MODULUS));
            for _ in 0..100 {
                let v = big.next_fraction();
                assert!((0.0..1.0).contains(&v));
                assert_eq!(v, reduced.next_fraction());
            }
        }

        let mut seq = SeededSequence::new(Seed::new(u64::MAX));
        let expected = ((u64::MAX % MODULUS) * MULTIPLIER + INCREMENT) % MODULUS;
        assert_eq!(seq.next_fraction(), expected as f64 / MODULUS as f64);
    }

    #[test]
    fn test_next_index_bounds() {
        let mut seq = SeededSequence::new(Seed::new(12_345));
        for _ in 0..10_000 {
            assert!(seq.next_index(25) < 25);
            assert!(seq.next_index(4) < 4);
        }
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = SeededSequence::new(Seed::new(7));
        let mut b = a.clone();
        a.next_fraction();
        a.next_fraction();
        let third_a = a.next_fraction();
        b.next_fraction();
        b.next_fraction();
        assert_eq!(third_a, b.next_fraction());
    }
}
