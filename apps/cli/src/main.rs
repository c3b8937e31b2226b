//! # Mestre Dinho CLI Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          dinho (bin)                                    │
//! │                                                                         │
//! │  main.rs ─────► Sets up logging, parses arguments, dispatches          │
//! │                                                                         │
//! │  cli.rs ──────► clap definitions                                       │
//! │                                                                         │
//! │  commands/ ───► palpite, cruz, tabela, oraculo, sonho, sessao, config  │
//! │                                                                         │
//! │  render.rs ───► Terminal formatting                                    │
//! │                                                                         │
//! │  stdout: results only            stderr: tracing logs                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse arguments
//! 3. Run the command; oracle commands load `oracle.toml` first

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod render;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Palpite {
            nascimento,
            extra,
            day,
            json,
        } => commands::palpite::run(&nascimento, extra, &day, json),
        Commands::Cruz { day, json } => commands::cruz::run(&day, json),
        Commands::Tabela { grupo, json } => commands::tabela::run(grupo, json),
        Commands::Oraculo { nascimento, day } => {
            commands::oraculo::run(cli.config, &nascimento, &day).await
        }
        Commands::Sonho { texto, json } => commands::sonho::run(cli.config, &texto, json).await,
        Commands::Sessao { nascimento, day } => {
            commands::sessao::run(cli.config, &nascimento, &day).await
        }
        Commands::Config { salvar } => commands::config::run(cli.config, salvar),
    }
}

/// Logs go to stderr so stdout carries only results.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,dinho=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
