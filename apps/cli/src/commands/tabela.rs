//! `dinho tabela`: the 25-animal table.

use anyhow::Result;
use dinho_core::validation::require_group;
use dinho_core::{AnimalRow, ANIMALS};

use super::print_json;
use crate::render;

/// Rows to show: the whole table, or one group.
pub fn rows(grupo: Option<u8>) -> Result<Vec<AnimalRow>> {
    match grupo {
        Some(id) => Ok(vec![AnimalRow::from(require_group(id)?)]),
        None => Ok(ANIMALS.iter().map(AnimalRow::from).collect()),
    }
}

pub fn run(grupo: Option<u8>, json: bool) -> Result<()> {
    let rows = rows(grupo)?;

    if json {
        return print_json(&rows);
    }

    print!("{}", render::table(&rows));
    Ok(())
}
