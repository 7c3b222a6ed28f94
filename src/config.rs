use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shuffle::ShuffleMode;
use crate::symbol::Symbol;

pub const CONFIG_ENV_VAR: &str = "PAIRS_CONFIG";
pub const REVERT_DELAY_MS: u64 = 1000;
pub const DEFAULT_COLUMNS: u32 = 5;
pub const MAX_COLUMNS: u32 = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Distinct symbols in play; each is dealt twice.
    pub symbols: Vec<Symbol>,
    /// How long a mismatched pair stays face-up.
    pub revert_delay_ms: u64,
    pub shuffle: ShuffleMode,
    /// Fixed seed for reproducible deals.
    pub seed: Option<u64>,
    pub columns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            symbols: Symbol::ALL.to_vec(),
            revert_delay_ms: REVERT_DELAY_MS,
            shuffle: ShuffleMode::Uniform,
            seed: None,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl GameConfig {
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        let mut seen = HashSet::new();
        for &symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
        }
        if self.columns == 0 || self.columns > MAX_COLUMNS {
            return Err(ConfigError::InvalidColumns);
        }
        Ok(())
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `PAIRS_CONFIG`, or `None` when it is unset.
    pub fn from_env() -> Option<Result<Self, ConfigError>> {
        let path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)?;
        Some(Self::load(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.symbols.len(), 5);
        assert_eq!(config.revert_delay(), Duration::from_millis(1000));
        assert_eq!(config.shuffle, ShuffleMode::Uniform);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config =
            GameConfig::from_json_str(r#"{ "symbols": ["red", "blue"], "seed": 9 }"#).unwrap();
        assert_eq!(config.symbols, vec![Symbol::Red, Symbol::Blue]);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.revert_delay_ms, REVERT_DELAY_MS);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn cyclic_shuffle_is_selectable() {
        let config = GameConfig::from_json_str(r#"{ "shuffle": "cyclic" }"#).unwrap();
        assert_eq!(config.shuffle, ShuffleMode::Cyclic);
    }

    #[test]
    fn rejects_empty_palette() {
        let err = GameConfig::from_json_str(r#"{ "symbols": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoSymbols));
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let err = GameConfig::from_json_str(r#"{ "symbols": ["red", "blue", "red"] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSymbol(Symbol::Red)));
    }

    #[test]
    fn rejects_zero_columns() {
        let err = GameConfig::from_json_str(r#"{ "columns": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColumns));
    }

    #[test]
    fn rejects_oversized_columns() {
        let err = GameConfig::from_json_str(r#"{ "columns": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColumns));
        let config = GameConfig::from_json_str(r#"{ "columns": 64 }"#).unwrap();
        assert_eq!(config.columns, MAX_COLUMNS);
    }

    #[test]
    fn rejects_unknown_fields_and_symbols() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "lives": 3 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "symbols": ["teal"] }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let path = Path::new("/nonexistent/pairs/config.json");
        match GameConfig::load(path) {
            Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_a_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "symbols": ["red"], "revert_delay_ms": 5 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.symbols, vec![Symbol::Red]);
        assert_eq!(config.revert_delay(), Duration::from_millis(5));
    }

    // Only test that touches PAIRS_CONFIG.
    #[test]
    fn from_env_follows_the_config_variable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "symbols": ["red"], "revert_delay_ms": 5 }}"#).unwrap();

        unsafe { std::env::set_var(CONFIG_ENV_VAR, file.path()) };
        let loaded = GameConfig::from_env();
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

        let config = loaded.expect("variable is set").unwrap();
        assert_eq!(config.revert_delay_ms, 5);
        let game = crate::game::Game::new(config).unwrap();
        assert_eq!(game.board().len(), 2);

        assert!(GameConfig::from_env().is_none());
    }
}
