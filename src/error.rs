use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unknown manufacturer: {0}")]
    UnknownManufacturer(String),

    #[error("Status must be one of [GREEN, YELLOW, RED, SAFETY_CAR], got '{0}'")]
    InvalidStatus(String),

    #[error("Unknown circuit: {0} (expected monaco or monza)")]
    UnknownCircuit(String),

    #[error("Unknown team: {0} (expected ferrari or mercedes)")]
    UnknownTeam(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {source}")]
    Invalid {
        field: &'static str,
        #[source]
        source: PatternError,
    },
}

impl ConfigError {
    pub fn invalid(field: &'static str, source: PatternError) -> Self {
        Self::Invalid { field, source }
    }
}
