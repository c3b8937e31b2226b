//! `dinho config`: show or save the oracle configuration.
//!
//! Saving writes the effective settings, but an API key that only came
//! from the environment stays out of the file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use dinho_oracle::OracleConfig;
use tracing::debug;

/// What happened to the API key when saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNote {
    /// No key anywhere.
    None,
    /// The key from the config file was written back.
    Saved,
    /// The key came from the environment and was left out.
    SkippedFromEnv,
}

impl KeyNote {
    fn message(self) -> Option<&'static str> {
        match self {
            KeyNote::None => None,
            KeyNote::Saved => Some("Atenção: a chave de API foi gravada em texto puro."),
            KeyNote::SkippedFromEnv => {
                Some("A chave de API veio do ambiente e não foi gravada no arquivo.")
            }
        }
    }
}

/// Builds the configuration to write: effective settings, with the key
/// taken only from the file.
pub fn config_to_save(effective: &OracleConfig, file: &OracleConfig) -> (OracleConfig, KeyNote) {
    let mut to_save = effective.clone();
    to_save.api.key = file.api_key().map(str::to_string);

    let note = match (to_save.has_credentials(), effective.has_credentials()) {
        (true, _) => KeyNote::Saved,
        (false, true) => KeyNote::SkippedFromEnv,
        (false, false) => KeyNote::None,
    };
    (to_save, note)
}

pub fn run(config_path: Option<PathBuf>, salvar: bool) -> Result<()> {
    debug!(?config_path, "config command");
    let config = OracleConfig::load(config_path.clone()).context("failed to load oracle config")?;

    if salvar {
        let file = OracleConfig::load_file(config_path.clone())?;
        let (to_save, note) = config_to_save(&config, &file);
        let path = to_save.save(config_path)?;
        println!("  Configuração salva em {}", path.display());
        if let Some(message) = note.message() {
            println!("  {}", message);
        }
        return Ok(());
    }

    if let Some(path) = config_path.or_else(OracleConfig::default_config_path) {
        println!("# {}", path.display());
    }
    print!("{}", config.redacted().to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: Option<&str>) -> OracleConfig {
        let mut config = OracleConfig::default();
        config.api.key = key.map(str::to_string);
        config
    }

    #[test]
    fn test_env_key_is_not_saved() {
        let mut effective = with_key(Some("from-env"));
        effective.request.max_retries = 5;
        let file = with_key(None);

        let (to_save, note) = config_to_save(&effective, &file);
        assert_eq!(to_save.api_key(), None);
        assert_eq!(to_save.request.max_retries, 5);
        assert_eq!(note, KeyNote::SkippedFromEnv);
        assert!(!to_save.to_toml().unwrap().contains("from-env"));
    }

    #[test]
    fn test_file_key_is_kept_and_reported() {
        let effective = with_key(Some("from-env"));
        let file = with_key(Some("from-file"));

        let (to_save, note) = config_to_save(&effective, &file);
        assert_eq!(to_save.api_key(), Some("from-file"));
        assert_eq!(note, KeyNote::Saved);
        assert!(note.message().is_some());
    }

    #[test]
    fn test_no_key_no_note() {
        let (_, note) = config_to_save(&with_key(None), &with_key(None));
        assert_eq!(note, KeyNote::None);
        assert!(note.message().is_none());
    }
}
