//! `dinho oraculo`: the oracle's luck message.

use std::path::PathBuf;

use anyhow::Result;

use super::{load_oracle, resolve_birth, resolve_today};
use crate::cli::DayArgs;
use crate::render;

pub async fn run(config_path: Option<PathBuf>, nascimento: &str, day: &DayArgs) -> Result<()> {
    let today = resolve_today(day)?;
    let birth = resolve_birth(nascimento, today)?;

    let oracle = load_oracle(config_path);
    let message = oracle.reading_for(birth).await;

    print!("{}", render::oracle(&message));
    Ok(())
}
