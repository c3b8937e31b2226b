//! # Commands
//!
//! One module per subcommand. Each `run` function parses its own input,
//! calls into `dinho-core` / `dinho-oracle`, and prints to stdout.
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── Shared helpers (today, oracle, JSON output)
//! ├── palpite.rs  ◄─── Daily and extra guesses
//! ├── cruz.rs     ◄─── Cruz do Dia
//! ├── tabela.rs   ◄─── Animal table
//! ├── oraculo.rs  ◄─── Oracle message
//! ├── sonho.rs    ◄─── Dream book
//! ├── sessao.rs   ◄─── Home screen: cross + guess + oracle
//! └── config.rs   ◄─── Show / save oracle.toml
//! ```

pub mod config;
pub mod cruz;
pub mod oraculo;
pub mod palpite;
pub mod sessao;
pub mod sonho;
pub mod tabela;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use dinho_core::validation::{parse_birth_date, parse_date};
use dinho_oracle::{Oracle, OracleConfig};
use serde::Serialize;

use crate::cli::DayArgs;

/// Resolves the reference day: `--hoje` if given, else the local date.
pub fn resolve_today(day: &DayArgs) -> Result<NaiveDate> {
    match &day.hoje {
        Some(text) => Ok(parse_date(text, "hoje")?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parses `--nascimento` against the reference day.
pub fn resolve_birth(text: &str, today: NaiveDate) -> Result<NaiveDate> {
    Ok(parse_birth_date(text, today)?)
}

/// Builds the oracle from the layered configuration.
///
/// Configuration problems leave the oracle unavailable; they never stop
/// a command.
pub fn load_oracle(config_path: Option<PathBuf>) -> Oracle {
    let config = OracleConfig::load_or_default(config_path);
    Oracle::from_config(&config)
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_today() {
        let day = DayArgs {
            hoje: Some("10/03/2024".into()),
        };
        assert_eq!(
            resolve_today(&day).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );

        let bad = DayArgs {
            hoje: Some("ontem".into()),
        };
        assert!(resolve_today(&bad).is_err());
    }

    #[test]
    fn test_birth_after_today_is_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert!(resolve_birth("1990-05-17", today).is_ok());
        let err = resolve_birth("2030-01-01", today).unwrap_err();
        assert!(err.to_string().contains("nascimento"));
    }
}
