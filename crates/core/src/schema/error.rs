//! Error types for schema registry operations.

use crate::configuration::error::ConfigError;
use thiserror::Error;

/// Result type for schema registry operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while talking to the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The active context could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The active context has no `schema-registry` URL.
    #[error("Context {0:?} has no schema registry configured")]
    RegistryNotConfigured(String),

    /// The configured registry URL cannot be used.
    #[error("Invalid schema registry URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Building the client or sending the request failed.
    #[error("Schema registry request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body could not be read.
    #[error("Failed to read schema registry response: {0}")]
    BodyRead(#[source] std::io::Error),

    /// The response body is not the expected JSON document.
    #[error("Failed to decode schema registry response: {0}")]
    Decode(#[source] serde_json::Error),
}
