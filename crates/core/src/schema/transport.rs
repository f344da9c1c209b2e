//! Request building and transport for the schema registry.
//!
//! A [`RegistryTransport`] issues one GET per call and hands back an owned
//! [`ResponseBody`]. The body holds the connection until it is dropped.

use crate::configuration::Configuration;
use crate::schema::error::SchemaError;
use crate::schema::error::SchemaResult;
use async_trait::async_trait;
use kafta_protocol::kaftaconfig_models::SchemaRegistryAuth;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Media type the schema registry REST API answers with.
pub const SCHEMA_REGISTRY_MEDIA_TYPE: &str = "application/vnd.schemaregistry.v1+json";

/// A response body that is read at most once and released on drop.
#[async_trait]
pub trait ResponseBody: Send {
    /// Reads the whole body into memory.
    async fn read_all(&mut self) -> SchemaResult<Vec<u8>>;
}

/// Issues GET requests relative to the schema registry base URL.
#[async_trait]
pub trait RegistryTransport: Send + Sync {
    async fn get(&self, path: &str) -> SchemaResult<Box<dyn ResponseBody>>;
}

/// HTTP transport built from the active context and connection settings.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    auth: Option<SchemaRegistryAuth>,
}

impl HttpTransport {
    /// Builds a transport for the active context of `config`.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::Config`] if no context resolves
    /// - [`SchemaError::RegistryNotConfigured`] if the context has no registry URL
    /// - [`SchemaError::InvalidUrl`] if the URL is not an http(s) URL
    pub fn from_configuration(config: &Configuration) -> SchemaResult<Self> {
        let context = config.get_context()?;
        let base = context.schema_registry.as_deref().ok_or_else(|| {
            SchemaError::RegistryNotConfigured(
                config.resolved_context_name().unwrap_or_default().to_string(),
            )
        })?;

        let connection = config.connection_config();
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(SCHEMA_REGISTRY_MEDIA_TYPE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if connection.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(connection.timeout_secs));
        }
        let user_agent = connection
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("{}/{}", config.app_name, env!("CARGO_PKG_VERSION")));
        builder = builder.user_agent(user_agent);

        Ok(Self {
            client: builder.build()?,
            base_url: parse_base_url(base)?,
            auth: context.schema_registry_auth.clone(),
        })
    }

    /// Resolves `path` against the registry base URL.
    ///
    /// The base is treated as a directory, so `http://host/registry` plus
    /// `subjects` gives `http://host/registry/subjects`.
    pub fn url_for(&self, path: &str) -> SchemaResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SchemaError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl RegistryTransport for HttpTransport {
    async fn get(&self, path: &str) -> SchemaResult<Box<dyn ResponseBody>> {
        let url = self.url_for(path)?;
        debug!(%url, "schema registry GET");

        let mut request = self.client.get(url);
        if let Some(auth) = &self.auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }
        let response = request.send().await?;

        debug!(status = %response.status(), "schema registry responded");
        Ok(Box::new(HttpBody {
            response: Some(response),
        }))
    }
}

/// Body of an HTTP response; dropping it releases the connection.
struct HttpBody {
    response: Option<reqwest::Response>,
}

#[async_trait]
impl ResponseBody for HttpBody {
    async fn read_all(&mut self) -> SchemaResult<Vec<u8>> {
        let response = self.response.take().ok_or_else(|| {
            SchemaError::BodyRead(std::io::Error::other("response body already consumed"))
        })?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SchemaError::BodyRead(std::io::Error::other(e)))?;
        Ok(bytes.to_vec())
    }
}

/// Issues `GET <registry>/<path>` for the active context of `config`.
pub async fn build_get_request_schema_registry(
    config: &Configuration,
    path: &str,
) -> SchemaResult<Box<dyn ResponseBody>> {
    HttpTransport::from_configuration(config)?.get(path).await
}

fn parse_base_url(base: &str) -> SchemaResult<Url> {
    let invalid = |reason: String| SchemaError::InvalidUrl {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kafta_protocol::kaftaconfig_models::Context;
    use kafta_protocol::kaftaconfig_models::KaftaConfig;
    use std::path::PathBuf;

    fn configuration(registry: Option<&str>) -> Configuration {
        let mut kafta_data = KaftaConfig {
            current_context: "local".to_string(),
            ..Default::default()
        };
        kafta_data.contexts.insert(
            "local".to_string(),
            Context {
                schema_registry: registry.map(str::to_string),
                ..Default::default()
            },
        );
        Configuration {
            debug_mode: false,
            app_name: "kafta".to_string(),
            active_context: String::new(),
            kaftaconfig_file: PathBuf::from("/nonexistent/config"),
            kafta_data,
        }
    }

    #[test]
    fn test_url_for_plain_host() {
        let transport = HttpTransport::from_configuration(&configuration(Some(
            "http://localhost:8081",
        )))
        .expect("Failed to build transport");

        let url = transport.url_for("subjects").expect("Failed to join URL");

        assert_eq!(url.as_str(), "http://localhost:8081/subjects");
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let transport = HttpTransport::from_configuration(&configuration(Some(
            "https://gateway.example.com/registry",
        )))
        .expect("Failed to build transport");

        let url = transport.url_for("/subjects").expect("Failed to join URL");

        assert_eq!(url.as_str(), "https://gateway.example.com/registry/subjects");
    }

    #[test]
    fn test_missing_registry_url() {
        let result = HttpTransport::from_configuration(&configuration(None));

        match result {
            Err(SchemaError::RegistryNotConfigured(name)) => assert_eq!(name, "local"),
            other => panic!("Expected RegistryNotConfigured, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_scheme() {
        let result = HttpTransport::from_configuration(&configuration(Some("ftp://registry")));

        assert!(matches!(result, Err(SchemaError::InvalidUrl { .. })));
    }

    #[test]
    fn test_unresolvable_context() {
        let mut config = configuration(Some("http://localhost:8081"));
        config.active_context = "missing".to_string();

        let result = HttpTransport::from_configuration(&config);

        assert!(matches!(
            result,
            Err(SchemaError::Config(
                crate::configuration::ConfigError::ContextNotFound(_)
            ))
        ));
    }
}
