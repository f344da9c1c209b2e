//! Error types for the configuration store.
//!
//! Two tiers are kept apart: [`ConfigInitError`] covers startup preconditions
//! the binary cannot run without, [`ConfigError`] covers everything a command
//! reports back to the user.

use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable startup failures while locating or creating the kaftaconfig file.
#[derive(Error, Debug)]
pub enum ConfigInitError {
    /// The current user's home directory could not be resolved.
    #[error("Failed to resolve the home directory of the current user")]
    HomeDirUnavailable,

    /// Failed to create the directory holding the kaftaconfig file.
    #[error("Failed to create config directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to open or create the kaftaconfig file.
    #[error("Failed to open config file {path:?}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors reported while loading, persisting or querying the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the kaftaconfig file from disk.
    #[error("Failed to read config file at {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the kaftaconfig file to disk.
    #[error("Failed to write config file at {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The kaftaconfig file is not valid YAML or does not match the schema.
    #[error("Failed to parse config file at {path:?}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The in-memory configuration could not be serialized.
    #[error("Failed to serialize config for {path:?}: {source}")]
    YamlSerialize {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Neither `--context` nor `current-context` names a context.
    #[error("No context found: no context selected, use `--context` or `config use-context`")]
    NoContextSelected,

    /// The selected context name is not a key of the contexts map.
    #[error("No context found: context {0:?} does not exist")]
    ContextNotFound(String),
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
