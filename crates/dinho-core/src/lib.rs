//! # dinho-core: Pure Numerology for Mestre Dinho
//!
//! This crate is the **heart** of Mestre Dinho. It turns a birth date and a
//! calendar day into Jogo do Bicho suggestions using pure functions only.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Mestre Dinho Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     apps/cli (dinho)                            │   │
//! │  │   palpite ──► cruz ──► tabela ──► oraculo ──► sonho            │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────────┐  ┌────────────▼────────────────┐  │
//! │  │   ★ dinho-core (THIS CRATE) ★   │  │   dinho-oracle              │  │
//! │  │                                 │  │   Gemini client, prompts,   │  │
//! │  │  animal   seed   sequence       │  │   fallback messages         │  │
//! │  │  palpite  cruz   validation     │  └─────────────────────────────┘  │
//! │  │                                 │                                    │
//! │  │  NO I/O • NO CLOCK • PURE       │                                    │
//! │  └─────────────────────────────────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`animal`] - The static 25-animal table
//! - [`seed`] - 32-bit string hash used as a seed
//! - [`sequence`] - Linear congruential sequence over [0, 1)
//! - [`palpite`] - Daily and extra guesses
//! - [`cruz`] - The Cruz do Dia
//! - [`types`] - Output DTOs and number formatting
//! - [`validation`] - Parsing of user-supplied dates and dream text
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dinho_core::{generate_daily_cross, generate_guess, GuessMode};
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//!
//! let guess = generate_guess(birth, GuessMode::Daily { today });
//! assert_eq!(guess, generate_guess(birth, GuessMode::Daily { today }));
//!
//! let cross = generate_daily_cross(today);
//! assert_eq!(cross.arms, [3, 6, 9, 2]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod animal;
pub mod cruz;
pub mod error;
pub mod palpite;
pub mod seed;
pub mod sequence;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use animal::{AnimalEntry, ANIMALS};
pub use cruz::generate_daily_cross;
pub use error::{CoreError, CoreResult, ValidationError};
pub use palpite::{daily_seed_key, generate_guess, generate_guess_from_seed, GuessMode};
pub use seed::{derive_seed, Seed, SeedNormalization};
pub use sequence::SeededSequence;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of thousands produced by every guess and every daily cross.
pub const THOUSANDS_PER_DRAW: usize = 5;

/// Exclusive upper bound for randomly drawn seeds.
pub const RANDOM_SEED_BOUND: u64 = 1_000_000_000;
