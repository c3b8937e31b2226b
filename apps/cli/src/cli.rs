//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dinho")]
#[command(author, version, about = "Mestre Dinho: palpites do Jogo do Bicho")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Oracle configuration file (oracle.toml)
    #[arg(long, global = true, env = "DINHO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that depends on "today".
#[derive(Debug, Clone, Args)]
pub struct DayArgs {
    /// Reference day (YYYY-MM-DD or DD/MM/YYYY). Defaults to the local date.
    #[arg(long)]
    pub hoje: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a guess from a birth date
    Palpite {
        /// Birth date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        nascimento: String,

        /// Fresh random guess instead of the daily one
        #[arg(long)]
        extra: bool,

        #[command(flatten)]
        day: DayArgs,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the Cruz do Dia
    Cruz {
        #[command(flatten)]
        day: DayArgs,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the 25-animal table
    #[command(alias = "bichos")]
    Tabela {
        /// Show only this group (1-25)
        #[arg(long)]
        grupo: Option<u8>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the oracle for today's luck message
    Oraculo {
        /// Birth date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        nascimento: String,

        #[command(flatten)]
        day: DayArgs,
    },

    /// Interpret a dream with the Livro dos Sonhos
    Sonho {
        /// What you dreamed about
        texto: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Cruz do Dia, daily guess and oracle message together
    Sessao {
        /// Birth date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        nascimento: String,

        #[command(flatten)]
        day: DayArgs,
    },

    /// Show or write the oracle configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        salvar: bool,
    },
}
