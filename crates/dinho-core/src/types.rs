//! # Domain Types
//!
//! Output types produced by the generators and consumed by the front ends.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Guess       │   │   DailyCross    │   │  DreamReading   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  animal_name    │   │  head_digit     │   │  bicho          │       │
//! │  │  group_id       │   │  arms [4]       │   │  grupo          │       │
//! │  │  tens [4]       │   │  thousands [5]  │   │  dezenas        │       │
//! │  │  thousands [5]  │   │                 │   │  milhar         │       │
//! │  └─────────────────┘   └─────────────────┘   │  explicacao     │       │
//! │                                              └─────────────────┘       │
//! │  Guess and DailyCross are built by dinho-core.                         │
//! │  DreamReading is whatever the AI returned, parsed as-is.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Thousands are stored as integers, so a leading zero collapses
//! (`0123` becomes `123`). Use [`format_thousand`] when displaying them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::animal::AnimalEntry;
use crate::THOUSANDS_PER_DRAW;

// =============================================================================
// Guess (Palpite)
// =============================================================================

/// One generated recommendation: an animal and five thousands ending in
/// one of its tens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Guess {
    /// Name of the selected animal.
    pub animal_name: String,

    /// Group id of the selected animal (1..=25).
    pub group_id: u8,

    /// The four tens of the selected animal, in table order.
    pub tens: [u8; 4],

    /// Five thousands (0..=9999).
    pub thousands: [u16; THOUSANDS_PER_DRAW],
}

impl Guess {
    /// Returns the thousands formatted with four digits.
    pub fn formatted_thousands(&self) -> Vec<String> {
        self.thousands.iter().map(|&m| format_thousand(m)).collect()
    }

    /// Returns the tens formatted with two digits ("00" for zero).
    pub fn formatted_tens(&self) -> Vec<String> {
        self.tens.iter().map(|&t| format_ten(t)).collect()
    }

    /// Returns true if every thousand ends in one of the animal's tens.
    pub fn is_consistent(&self) -> bool {
        self.thousands
            .iter()
            .all(|&m| self.tens.contains(&((m % 100) as u8)))
    }
}

// =============================================================================
// Daily Cross (Cruz do Dia)
// =============================================================================

/// The Cruz do Dia: four arm digits and five permutations of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailyCross {
    /// Day of the month (1..=31).
    pub head_digit: u8,

    /// `[n1, n2, n3, n4]`, each a single digit.
    pub arms: [u8; 4],

    /// Five thousands built from the arms.
    pub thousands: [u16; THOUSANDS_PER_DRAW],
}

/// Where each arm digit is drawn on the cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmLayout {
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
    pub left: u8,
}

impl DailyCross {
    /// Maps the arm sequence onto the four visual positions.
    ///
    /// Top is `arms[0]`, right `arms[1]`, bottom `arms[2]`, left `arms[3]`.
    /// This is a rendering aid only; `arms` keeps the computed order.
    pub fn arm_layout(&self) -> ArmLayout {
        ArmLayout {
            top: self.arms[0],
            right: self.arms[1],
            bottom: self.arms[2],
            left: self.arms[3],
        }
    }

    /// Returns the thousands formatted with four digits.
    pub fn formatted_thousands(&self) -> Vec<String> {
        self.thousands.iter().map(|&m| format_thousand(m)).collect()
    }
}

// =============================================================================
// Dream Reading
// =============================================================================

/// The structured answer of the AI dream interpreter.
///
/// Field names are the wire names of the JSON schema sent to the model.
/// Values are not checked against the animal table; the reading is shown
/// as the model returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DreamReading {
    pub bicho: String,
    pub grupo: i64,
    pub dezenas: Vec<i64>,
    pub milhar: String,
    pub explicacao: String,
}

// =============================================================================
// Table Row DTO
// =============================================================================

/// Owned copy of an [`AnimalEntry`] for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnimalRow {
    pub id: u8,
    pub name: String,
    pub tens: [u8; 4],
}

impl From<&AnimalEntry> for AnimalRow {
    fn from(entry: &AnimalEntry) -> Self {
        AnimalRow {
            id: entry.id,
            name: entry.name.to_string(),
            tens: entry.tens,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a ten with two digits. `0` renders as `"00"`.
///
/// ```rust
/// use dinho_core::types::format_ten;
///
/// assert_eq!(format_ten(0), "00");
/// assert_eq!(format_ten(7), "07");
/// assert_eq!(format_ten(42), "42");
/// ```
pub fn format_ten(ten: u8) -> String {
    format!("{:02}", ten)
}

/// Formats a thousand with four digits.
///
/// ```rust
/// use dinho_core::types::format_thousand;
///
/// assert_eq!(format_thousand(123), "0123");
/// assert_eq!(format_thousand(9236), "9236");
/// ```
pub fn format_thousand(thousand: u16) -> String {
    format!("{:04}", thousand)
}

/// Formats a group id with two digits.
pub fn format_group(group_id: u8) -> String {
    format!("{:02}", group_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_guess() -> Guess {
        Guess {
            animal_name: "Vaca".to_string(),
            group_id: 25,
            tens: [97, 98, 99, 0],
            thousands: [1200, 97, 4599, 3398, 100],
        }
    }

    #[test]
    fn test_formatting() {
        let guess = sample_guess();
        assert_eq!(
            guess.formatted_thousands(),
            vec!["1200", "0097", "4599", "3398", "0100"]
        );
        assert_eq!(guess.formatted_tens(), vec!["97", "98", "99", "00"]);
        assert_eq!(format_group(5), "05");
    }

    #[test]
    fn test_consistency_check() {
        let mut guess = sample_guess();
        assert!(guess.is_consistent());
        guess.thousands[0] = 1234;
        assert!(!guess.is_consistent());
    }

    #[test]
    fn test_guess_serializes_camel_case() {
        let json = serde_json::to_value(sample_guess()).unwrap();
        assert_eq!(json["animalName"], "Vaca");
        assert_eq!(json["groupId"], 25);
        assert_eq!(json["thousands"][1], 97);
    }

    #[test]
    fn test_arm_layout() {
        let cross = DailyCross {
            head_digit: 10,
            arms: [3, 6, 9, 2],
            thousands: [3692, 6923, 9236, 2369, 3926],
        };
        let layout = cross.arm_layout();
        assert_eq!((layout.top, layout.right, layout.bottom, layout.left), (3, 6, 9, 2));
    }

    #[test]
    fn test_dream_reading_wire_names() {
        let json = r#"{
            "bicho": "Cachorro",
            "grupo": 5,
            "dezenas": [17, 18, 19, 20],
            "milhar": "4518",
            "explicacao": "Cão fiel, sorte fiel."
        }"#;
        let reading: DreamReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.grupo, 5);
        assert_eq!(reading.dezenas, vec![17, 18, 19, 20]);
    }
}
