//! `dinho palpite`: daily or extra guess for a birth date.

use anyhow::Result;
use dinho_core::{generate_guess, GuessMode};
use tracing::debug;

use super::{print_json, resolve_birth, resolve_today};
use crate::cli::DayArgs;
use crate::render;

pub fn run(nascimento: &str, extra: bool, day: &DayArgs, json: bool) -> Result<()> {
    let today = resolve_today(day)?;
    let birth = resolve_birth(nascimento, today)?;

    let mode = if extra {
        GuessMode::Extra
    } else {
        GuessMode::Daily { today }
    };
    debug!(%birth, ?mode, "Generating guess");

    let guess = generate_guess(birth, mode);

    if json {
        return print_json(&guess);
    }

    let title = if extra { "Palpite Extra" } else { "Palpite do Dia" };
    print!("{}", render::guess(title, &guess));
    Ok(())
}
