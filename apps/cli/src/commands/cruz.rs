//! `dinho cruz`: the Cruz do Dia.

use anyhow::Result;
use dinho_core::generate_daily_cross;

use super::{print_json, resolve_today};
use crate::cli::DayArgs;
use crate::render;

pub fn run(day: &DayArgs, json: bool) -> Result<()> {
    let cross = generate_daily_cross(resolve_today(day)?);

    if json {
        return print_json(&cross);
    }

    print!("{}", render::cross(&cross));
    Ok(())
}
