//! Models for the kaftaconfig file (`~/.kafta/config`).
//!
//! The file is YAML with kebab-case keys. It stores every known context
//! (connection profile), the name of the current one, and a connection block
//! shared by all contexts.

use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Root of the kaftaconfig file.
///
/// # Example
///
/// ```yaml
/// current-context: local
/// contexts:
///   local:
///     bootstrap-servers:
///       - localhost:9092
///     schema-registry: http://localhost:8081
/// connection:
///   timeout-secs: 10
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct KaftaConfig {
    /// Name of the context used when no `--context` override is given.
    ///
    /// Empty when no context has been selected yet.
    #[serde(default)]
    pub current_context: String,

    /// All known contexts, keyed by name.
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,

    /// Connection settings shared by every context.
    #[serde(default)]
    pub connection: ConnectionConfig,
}

/// A named connection profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Context {
    /// Seed brokers of the cluster.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bootstrap_servers: Vec<String>,

    /// Base URL of the schema registry (e.g. `http://localhost:8081`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_registry: Option<String>,

    /// Basic auth credentials for the schema registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_registry_auth: Option<SchemaRegistryAuth>,
}

/// Basic auth credentials for the schema registry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistryAuth {
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Connection-level settings consumed by the request builders.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ConnectionConfig {
    /// Request timeout, in seconds.
    #[serde(default = "ConnectionConfig::default_timeout_secs")]
    pub timeout_secs: u64,

    /// Overrides the `User-Agent` header sent to HTTP services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ConnectionConfig {
    fn default_timeout_secs() -> u64 {
        10
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Self::default_timeout_secs(),
            user_agent: None,
        }
    }
}
