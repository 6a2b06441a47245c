//! Error types for widget configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `miner-config` element held malformed JSON.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed config with a value outside its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
