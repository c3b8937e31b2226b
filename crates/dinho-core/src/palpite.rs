//! # Palpite Generator
//!
//! Builds a [`Guess`] from a birth date.
//!
//! ## Two Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Palpite Modes                                   │
//! │                                                                         │
//! │  DAILY (first submission)                                              │
//! │  ────────────────────────                                              │
//! │  key  = "17/4/1990-10/2/2024"   (day/month0/year of birth and today)   │
//! │  seed = derive_seed(key, Raw)                                          │
//! │  • Same birth date ⇒ same palpite all day                              │
//! │  • New calendar day ⇒ new palpite automatically                        │
//! │                                                                         │
//! │  EXTRA ("Gerar Extras")                                                │
//! │  ──────────────────────                                                │
//! │  seed = uniform in [0, 1_000_000_000)                                  │
//! │  • Different result on every request                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Draw Order
//! ```text
//! draw ──► animal index   floor(v × 25)
//! repeat 5×:
//!   draw ──► digit1       floor(v × 10)
//!   draw ──► digit2       floor(v × 10)
//!   draw ──► ten index    floor(v × 4)
//! thousand = digit1·1000 + digit2·100 + ten
//! ```
//! Reordering the three draws changes every result for a given seed.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::animal::ANIMALS;
use crate::seed::{Seed, SeedNormalization};
use crate::sequence::SeededSequence;
use crate::types::Guess;
use crate::THOUSANDS_PER_DRAW;

/// How the seed for a guess is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessMode {
    /// Deterministic for the pair (birth date, `today`).
    Daily { today: NaiveDate },

    /// Fresh random seed on every call.
    Extra,
}

/// Builds the key text hashed in daily mode.
///
/// Months are 0-based and nothing is zero-padded.
///
/// ```rust
/// use chrono::NaiveDate;
/// use dinho_core::daily_seed_key;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// assert_eq!(daily_seed_key(birth, today), "17/4/1990-10/2/2024");
/// ```
pub fn daily_seed_key(birth_date: NaiveDate, today: NaiveDate) -> String {
    format!("{}-{}", date_key(birth_date), date_key(today))
}

fn date_key(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month0(), date.year())
}

/// Generates a guess for `birth_date`.
///
/// Total over every date; plausibility of the birth date is checked by
/// [`validation`](crate::validation), not here.
pub fn generate_guess(birth_date: NaiveDate, mode: GuessMode) -> Guess {
    let seed = match mode {
        GuessMode::Daily { today } => {
            let key = daily_seed_key(birth_date, today);
            Seed::from_text(&key, SeedNormalization::Raw)
        }
        GuessMode::Extra => Seed::random(),
    };
    trace!(%seed, ?mode, "generating palpite");
    generate_guess_from_seed(seed)
}

/// Runs the draw procedure for a known seed.
pub fn generate_guess_from_seed(seed: Seed) -> Guess {
    let mut seq = SeededSequence::new(seed);

    let animal = &ANIMALS[seq.next_index(ANIMALS.len())];

    let mut thousands = [0u16; THOUSANDS_PER_DRAW];
    for slot in thousands.iter_mut() {
        let digit1 = seq.next_index(10) as u16;
        let digit2 = seq.next_index(10) as u16;
        let ten = animal.tens[seq.next_index(animal.tens.len())];
        *slot = digit1 * 1000 + digit2 * 100 + u16::from(ten);
    }

    Guess {
        animal_name: animal.name.to_string(),
        group_id: animal.id,
        tens: animal.tens,
        thousands,
    }
}
