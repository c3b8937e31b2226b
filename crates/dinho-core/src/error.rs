//! # Error Types
//!
//! Domain-specific error types for dinho-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dinho-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  dinho-oracle errors (separate crate)                                  │
//! │  └── OracleError      - AI service failures (never reach the core)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (CLI) → stderr             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The generators themselves are total; these errors only come from
//! parsing what the user typed.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Group id outside 1..=25.
    #[error("Unknown animal group: {0}")]
    UnknownGroup(u8),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Date lies after the reference day.
    #[error("{field} {date} is in the future")]
    InFuture { field: String, date: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
