use std::path::PathBuf;

use thiserror::Error;

use crate::formation::FormationSetName;

/// Errors raised while answering per-cycle queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TacticsError {
    #[error("Unknown roster slot: {0} (expected 1..=11)")]
    UnknownSlot(u8),

    #[error("Position table not computed yet: run a cycle first")]
    NotReady,
}

/// Errors raised while loading configuration and formation data.
///
/// All of these are startup-fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown formation set: {0}")]
    UnknownFormationSet(String),

    #[error("Formation set {0} is not loaded in the catalog")]
    MissingFormationSet(FormationSetName),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid formation {path}: {reason}")]
    InvalidFormation { path: PathBuf, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid_formation(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidFormation { path: path.into(), reason: reason.into() }
    }
}

pub type Result<T, E = TacticsError> = std::result::Result<T, E>;
