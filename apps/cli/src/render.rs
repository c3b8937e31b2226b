//! Plain-text rendering for terminal output.
//!
//! Each view borrows a value and implements `Display`, so callers write
//! `print!("{}", render::cross(&cross))`.
//!
//! ```text
//!   Cruz do Dia (dia 10)
//!
//!            3
//!        2  10  6
//!            9
//!
//!   Milhares: 3692  6923  9236  2369  3926
//! ```

use std::fmt;

use dinho_core::types::{format_group, format_ten};
use dinho_core::{AnimalRow, DailyCross, DreamReading, Guess};

// =============================================================================
// Views
// =============================================================================

pub struct GuessView<'a> {
    title: &'a str,
    guess: &'a Guess,
}

pub struct CrossView<'a>(&'a DailyCross);

pub struct TableView<'a>(&'a [AnimalRow]);

pub struct DreamView<'a>(&'a DreamReading);

pub struct OracleView<'a>(&'a str);

/// Renders a guess under `title`.
pub fn guess<'a>(title: &'a str, guess: &'a Guess) -> GuessView<'a> {
    GuessView { title, guess }
}

/// Renders the Cruz do Dia with its arms in visual position.
pub fn cross(cross: &DailyCross) -> CrossView<'_> {
    CrossView(cross)
}

/// Renders the animal table, one group per line.
pub fn table(rows: &[AnimalRow]) -> TableView<'_> {
    TableView(rows)
}

/// Renders a dream interpretation.
pub fn dream(reading: &DreamReading) -> DreamView<'_> {
    DreamView(reading)
}

/// Renders an oracle message.
pub fn oracle(message: &str) -> OracleView<'_> {
    OracleView(message)
}

// =============================================================================
// Display Implementations
// =============================================================================

impl fmt::Display for GuessView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.guess;
        writeln!(f, "  {}", self.title)?;
        writeln!(
            f,
            "  Bicho:    {} (grupo {})",
            g.animal_name,
            format_group(g.group_id)
        )?;
        writeln!(f, "  Dezenas:  {}", g.formatted_tens().join(" "))?;
        writeln!(f, "  Milhares: {}", g.formatted_thousands().join("  "))
    }
}

impl fmt::Display for CrossView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cross = self.0;
        let arms = cross.arm_layout();
        writeln!(f, "  Cruz do Dia (dia {})", cross.head_digit)?;
        writeln!(f)?;
        writeln!(f, "           {}", arms.top)?;
        writeln!(f, "       {} {:^4} {}", arms.left, cross.head_digit, arms.right)?;
        writeln!(f, "           {}", arms.bottom)?;
        writeln!(f)?;
        writeln!(f, "  Milhares: {}", cross.formatted_thousands().join("  "))
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0 {
            let tens: Vec<String> = row.tens.iter().map(|&t| format_ten(t)).collect();
            writeln!(
                f,
                "  {}  {:<12} {}",
                format_group(row.id),
                row.name,
                tens.join(" ")
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DreamView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reading = self.0;
        let tens: Vec<String> = reading.dezenas.iter().map(|d| format!("{:02}", d)).collect();
        writeln!(f, "  Livro dos Sonhos")?;
        writeln!(f, "  Bicho:   {} (grupo {:02})", reading.bicho, reading.grupo)?;
        writeln!(f, "  Dezenas: {}", tens.join(" "))?;
        writeln!(f, "  Milhar:  {}", reading.milhar)?;
        writeln!(f, "  {}", reading.explicacao)
    }
}

impl fmt::Display for OracleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  🔮 {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinho_core::animal::ANIMALS;

    #[test]
    fn test_guess_pads_numbers() {
        let g = Guess {
            animal_name: "Vaca".into(),
            group_id: 25,
            tens: [97, 98, 99, 0],
            thousands: [1200, 97, 4599, 3398, 100],
        };
        let text = guess("Palpite do Dia", &g).to_string();
        assert!(text.starts_with("  Palpite do Dia\n"));
        assert!(text.contains("Vaca (grupo 25)"));
        assert!(text.contains("97 98 99 00"));
        assert!(text.contains("1200  0097  4599  3398  0100"));
    }

    #[test]
    fn test_cross_places_arms() {
        let c = DailyCross {
            head_digit: 10,
            arms: [3, 6, 9, 2],
            thousands: [3692, 6923, 9236, 2369, 3926],
        };
        let text = cross(&c).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2].trim(), "3");
        assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), ["2", "10", "6"]);
        assert_eq!(lines[4].trim(), "9");
        assert!(text.contains("3692  6923  9236  2369  3926"));
    }

    #[test]
    fn test_table_lists_every_group() {
        let rows: Vec<AnimalRow> = ANIMALS.iter().map(AnimalRow::from).collect();
        let text = table(&rows).to_string();
        assert_eq!(text.lines().count(), 25);
        assert!(text.lines().next().unwrap().contains("01  Avestruz"));
        assert!(text.lines().last().unwrap().ends_with("97 98 99 00"));
    }

    #[test]
    fn test_dream_rendering() {
        let reading = DreamReading {
            bicho: "Cobra".into(),
            grupo: 9,
            dezenas: vec![33, 34, 35, 36],
            milhar: "1234".into(),
            explicacao: "Cobra é traição ou cura.".into(),
        };
        let text = dream(&reading).to_string();
        assert!(text.contains("Cobra (grupo 09)"));
        assert!(text.contains("33 34 35 36"));
    }

    #[test]
    fn test_oracle_line() {
        assert_eq!(oracle("A sorte chega.").to_string(), "  🔮 A sorte chega.\n");
    }
}
