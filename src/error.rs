//! Error type shared by the library.
//!
//! Every variant is a startup-time failure: once the simulation is running
//! nothing in the core can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A field needs at least one row and one column
    #[error("field dimensions must be non-zero, got {width}x{height}")]
    EmptyField { width: usize, height: usize },

    /// Preset name outside the built-in set
    #[error("unknown preset: {0:?} (expected one of: empty, stable_squares)")]
    UnknownPreset(String),

    /// Configuration parsed but holds values the simulation cannot run with
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
