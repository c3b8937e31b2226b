//! # Seed Derivation
//!
//! Turns arbitrary text into a reproducible seed.
//!
//! ## The Hash
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  acc = 0                                                                │
//! │  for each UTF-16 unit u of the text:                                    │
//! │      acc = acc * 31 + u        (signed 32-bit, wraps on overflow)       │
//! │  seed = |acc|                  (i32::MIN becomes 2147483648)            │
//! │                                                                         │
//! │  "17/4/1990-10/2/2024"  ──►  1952677469                                 │
//! │  ""                     ──►  0                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wrap must happen at every step. Hashing with wider integers and
//! truncating at the end gives the same bits only by accident of the
//! modulus, so the code uses `wrapping_*` on `i32` directly.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::RANDOM_SEED_BOUND;

// =============================================================================
// Normalization
// =============================================================================

/// How the text is prepared before hashing.
///
/// Two call sites use the hash: the daily palpite key (never normalized)
/// and the dream text (lower-cased and trimmed, so that "Sonhei com COBRA "
/// and "sonhei com cobra" land on the same seed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedNormalization {
    /// Hash the text exactly as given.
    #[default]
    Raw,

    /// Lower-case and trim surrounding whitespace first.
    LowercaseTrim,
}

/// Derives a non-negative 32-bit seed from `text`.
///
/// ## Example
/// ```rust
/// use dinho_core::seed::{derive_seed, SeedNormalization};
///
/// assert_eq!(derive_seed("", SeedNormalization::Raw), 0);
/// assert_eq!(derive_seed("a", SeedNormalization::Raw), 97);
/// assert_eq!(
///     derive_seed("  Sonhei com CACHORRO ", SeedNormalization::LowercaseTrim),
///     derive_seed("sonhei com cachorro", SeedNormalization::Raw),
/// );
/// ```
pub fn derive_seed(text: &str, normalization: SeedNormalization) -> u32 {
    match normalization {
        SeedNormalization::Raw => hash_utf16(text),
        SeedNormalization::LowercaseTrim => hash_utf16(&text.trim().to_lowercase()),
    }
}

fn hash_utf16(text: &str) -> u32 {
    let acc = text.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    acc.unsigned_abs()
}

// =============================================================================
// Seed Type
// =============================================================================

/// A seed for [`SeededSequence`](crate::sequence::SeededSequence).
///
/// ## Where Seeds Come From
/// ```text
/// Daily palpite:  birth date + today ──► key text ──► derive_seed ──► Seed
/// Extra palpite:  rand::thread_rng() ──► [0, 1_000_000_000)      ──► Seed
/// Dream request:  dream text (normalized) ──► derive_seed ──► AI seed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seed(u64);

impl Seed {
    /// Wraps a raw seed value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Seed(value)
    }

    /// Hashes text into a seed.
    pub fn from_text(text: &str, normalization: SeedNormalization) -> Self {
        Seed(u64::from(derive_seed(text, normalization)))
    }

    /// Draws a fresh seed uniformly from `[0, 1_000_000_000)`.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Draws a seed from a caller-supplied generator.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Seed(rng.gen_range(0..RANDOM_SEED_BOUND))
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed(u64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(derive_seed("", SeedNormalization::Raw), 0);
        assert_eq!(derive_seed("", SeedNormalization::LowercaseTrim), 0);
        assert_eq!(derive_seed("   \t\n", SeedNormalization::LowercaseTrim), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(derive_seed("Cachorro", SeedNormalization::Raw), 368_528_573);
        assert_eq!(
            derive_seed("Cachorro", SeedNormalization::LowercaseTrim),
            433_172_701
        );
        assert_eq!(
            derive_seed("17/4/1990-10/2/2024", SeedNormalization::Raw),
            1_952_677_469
        );
    }

    #[test]
    fn test_normalization_only_applies_when_asked() {
        let shouted = "  Sonhei com CACHORRO  ";
        assert_eq!(derive_seed(shouted, SeedNormalization::Raw), 1_090_344_680);
        assert_eq!(
            derive_seed(shouted, SeedNormalization::LowercaseTrim),
            841_893_624
        );
    }

    #[test]
    fn test_wraparound_at_every_step() {
        // Long enough to overflow i32 many times over.
        let text = "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz";
        let mut acc: i64 = 0;
        for unit in text.encode_utf16() {
            acc = (acc * 31 + i64::from(unit)) as i32 as i64;
        }
        assert_eq!(
            derive_seed(text, SeedNormalization::Raw),
            acc.unsigned_abs() as u32
        );
    }

    #[test]
    fn test_deterministic() {
        for text in ["", "a", "Águia", "sonhei com dente caindo", "1/0/2000-1/0/2000"] {
            assert_eq!(
                derive_seed(text, SeedNormalization::Raw),
                derive_seed(text, SeedNormalization::Raw)
            );
        }
    }

    #[test]
    fn test_random_seed_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(Seed::random_with(&mut rng).value() < RANDOM_SEED_BOUND);
        }
        assert!(Seed::random().value() < RANDOM_SEED_BOUND);
    }
}
