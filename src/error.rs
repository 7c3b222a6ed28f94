use std::path::PathBuf;

use thiserror::Error;

use crate::symbol::Symbol;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config lists no symbols")]
    NoSymbols,
    #[error("symbol `{0}` is listed more than once")]
    DuplicateSymbol(Symbol),
    #[error("board needs between 1 and {} columns", crate::config::MAX_COLUMNS)]
    InvalidColumns,
}

/// Failures that stop the game from starting at all.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("board container `{0}` does not exist")]
    MissingContainer(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
