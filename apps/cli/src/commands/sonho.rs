//! `dinho sonho`: dream interpretation.

use std::path::PathBuf;

use anyhow::Result;
use dinho_core::validation::validate_dream_text;
use tracing::info;

use super::{load_oracle, print_json};
use crate::render;

/// Shown when no interpretation came back.
const NO_READING: &str = "O Livro dos Sonhos está fechado agora. Tente novamente mais tarde.";

pub async fn run(config_path: Option<PathBuf>, texto: &str, json: bool) -> Result<()> {
    let text = validate_dream_text(texto)?;

    let oracle = load_oracle(config_path);
    let reading = oracle.interpret_dream(text).await;
    info!(found = reading.is_some(), "Dream interpreted");

    if json {
        return print_json(&reading);
    }

    match reading {
        Some(reading) => print!("{}", render::dream(&reading)),
        None => println!("  {}", NO_READING),
    }
    Ok(())
}
