//! Test fixtures for configurations and kaftaconfig files.

use kafta_core::configuration::Configuration;
use kafta_protocol::kaftaconfig_models::Context;
use kafta_protocol::kaftaconfig_models::SchemaRegistryAuth;
use tempfile::TempDir;

/// A kaftaconfig document with two contexts, `local` being current.
#[allow(dead_code)]
pub const TWO_CONTEXTS_YAML: &str = r#"current-context: local
contexts:
  local:
    bootstrap-servers:
      - localhost:9092
    schema-registry: http://localhost:8081
  prod:
    bootstrap-servers:
      - kafka-1.prod:9092
connection:
  timeout-secs: 5
"#;

/// Create a temporary home directory with an initialized configuration.
///
/// Returns the TempDir, which must be kept alive for the test duration.
#[allow(dead_code)]
pub fn initialized_home() -> (TempDir, Configuration) {
    let home = tempfile::tempdir().expect("Failed to create temp home");
    let config =
        Configuration::initialize_in("kafta", home.path()).expect("Failed to initialize");
    (home, config)
}

/// Create a configuration whose only context points at `registry_url`.
#[allow(dead_code)]
pub fn registry_configuration(
    registry_url: &str,
    auth: Option<(&str, &str)>,
) -> (TempDir, Configuration) {
    let (home, mut config) = initialized_home();
    config.ensure_config().expect("Failed to ensure config");
    config.set_context(
        "test",
        Context {
            bootstrap_servers: vec!["localhost:9092".to_string()],
            schema_registry: Some(registry_url.to_string()),
            schema_registry_auth: auth.map(|(username, password)| SchemaRegistryAuth {
                username: username.to_string(),
                password: password.to_string(),
            }),
        },
    );
    config.kafta_data.connection.timeout_secs = 5;
    (home, config)
}
