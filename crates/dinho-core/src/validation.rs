//! # Validation Module
//!
//! Parsing of user-supplied input before it reaches the generators.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument parsing (clap)                                  │
//! │  └── Presence of arguments                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Date format (YYYY-MM-DD or DD/MM/YYYY)                            │
//! │  ├── Birth date not after today                                        │
//! │  └── Dream text non-empty, bounded length                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Generators (total, no checks)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::animal::{by_group, AnimalEntry};
use crate::error::{CoreError, CoreResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest dream description forwarded to the interpreter.
pub const MAX_DREAM_CHARS: usize = 500;

/// Parses a calendar date written as `YYYY-MM-DD` or `DD/MM/YYYY`.
///
/// ```rust
/// use dinho_core::validation::parse_date;
///
/// assert!(parse_date("1990-05-17", "nascimento").is_ok());
/// assert!(parse_date("17/05/1990", "nascimento").is_ok());
/// assert!(parse_date("1990-02-30", "nascimento").is_err());
/// ```
pub fn parse_date(text: &str, field: &str) -> ValidationResult<NaiveDate> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%d/%m/%Y"))
        .map_err(|e| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("expected YYYY-MM-DD or DD/MM/YYYY ({})", e),
        })
}

/// Parses a birth date and rejects dates after `today`.
pub fn parse_birth_date(text: &str, today: NaiveDate) -> ValidationResult<NaiveDate> {
    let date = parse_date(text, "nascimento")?;

    if date > today {
        return Err(ValidationError::InFuture {
            field: "nascimento".to_string(),
            date: date.to_string(),
        });
    }

    Ok(date)
}

/// Validates a dream description and returns it trimmed.
pub fn validate_dream_text(text: &str) -> ValidationResult<&str> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "sonho".to_string(),
        });
    }

    if text.chars().count() > MAX_DREAM_CHARS {
        return Err(ValidationError::TooLong {
            field: "sonho".to_string(),
            max: MAX_DREAM_CHARS,
        });
    }

    Ok(text)
}

/// Resolves a group id to its table entry.
pub fn require_group(id: u8) -> CoreResult<&'static AnimalEntry> {
    by_group(id).ok_or(CoreError::UnknownGroup(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_parse_both_formats() {
        let iso = parse_date("1990-05-17", "nascimento").unwrap();
        let br = parse_date(" 17/05/1990 ", "nascimento").unwrap();
        assert_eq!(iso, br);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_date("", "nascimento"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_date("ontem", "nascimento"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_birth_date_not_in_future() {
        assert!(parse_birth_date("2024-03-10", today()).is_ok());
        assert!(matches!(
            parse_birth_date("2024-03-11", today()),
            Err(ValidationError::InFuture { .. })
        ));
    }

    #[test]
    fn test_dream_text() {
        assert_eq!(validate_dream_text("  sonhei com cobra ").unwrap(), "sonhei com cobra");
        assert!(validate_dream_text("   ").is_err());
        assert!(validate_dream_text(&"a".repeat(MAX_DREAM_CHARS + 1)).is_err());
    }

    #[test]
    fn test_require_group() {
        assert_eq!(require_group(1).unwrap().name, "Avestruz");
        assert!(matches!(require_group(26), Err(CoreError::UnknownGroup(26))));
    }
}
