//! `dinho sessao`: the home screen in one go.
//!
//! The oracle request and the numerology run side by side; the numbers
//! are printed whatever the oracle does.

use std::path::PathBuf;

use anyhow::Result;
use dinho_core::{generate_daily_cross, generate_guess, GuessMode};

use super::{load_oracle, resolve_birth, resolve_today};
use crate::cli::DayArgs;
use crate::render;

pub async fn run(config_path: Option<PathBuf>, nascimento: &str, day: &DayArgs) -> Result<()> {
    let today = resolve_today(day)?;
    let birth = resolve_birth(nascimento, today)?;
    let oracle = load_oracle(config_path);

    let numbers = async {
        (
            generate_daily_cross(today),
            generate_guess(birth, GuessMode::Daily { today }),
        )
    };
    let ((cross, guess), message) = tokio::join!(numbers, oracle.reading_for(birth));

    print!("{}", render::cross(&cross));
    println!();
    print!("{}", render::guess("Palpite do Dia", &guess));
    println!();
    print!("{}", render::oracle(&message));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dinho_oracle::CLOUDED_MESSAGE;

    fn broken_config_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dinho-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, "[api]\nkey = \"x\"\nbase_url = \"not a url\"\n").unwrap();
        path
    }

    #[tokio::test]
    async fn test_broken_oracle_config_still_prints_numbers() {
        let path = broken_config_file("sessao");
        let day = DayArgs {
            hoje: Some("2024-03-10".into()),
        };

        let result = run(Some(path.clone()), "1990-05-17", &day).await;
        let _ = std::fs::remove_file(&path);
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_broken_oracle_config_gives_fallback_message() {
        let path = broken_config_file("oracle");
        let oracle = load_oracle(Some(path.clone()));
        let _ = std::fs::remove_file(&path);

        assert!(!oracle.is_awake());
        let birth = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        assert_eq!(oracle.reading_for(birth).await, CLOUDED_MESSAGE);
    }
}
