//! Listing subjects from the schema registry.

use crate::configuration::Configuration;
use crate::schema::error::SchemaError;
use crate::schema::error::SchemaResult;
use crate::schema::transport::build_get_request_schema_registry;
use crate::schema::transport::RegistryTransport;
use crate::schema::transport::ResponseBody;
use kafta_protocol::schema_models::Subjects;
use serde::de::DeserializeOwned;

/// Registry path listing every subject.
pub const SUBJECTS_PATH: &str = "subjects";

/// Fetches the subject names from the registry of the active context.
///
/// One GET, no retry, no caching: every call goes to the network.
///
/// # Example
///
/// ```rust,no_run
/// use kafta_core::configuration::Configuration;
/// use kafta_core::schema::list_subjects;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = Configuration::initialize("kafta")?;
/// config.ensure_config()?;
/// for subject in list_subjects(&config).await? {
///     println!("{subject}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn list_subjects(config: &Configuration) -> SchemaResult<Subjects> {
    let response = build_get_request_schema_registry(config, SUBJECTS_PATH).await?;
    read_json(response).await
}

/// Same as [`list_subjects`], over an explicit transport.
pub async fn list_subjects_with<T>(transport: &T) -> SchemaResult<Subjects>
where
    T: RegistryTransport + ?Sized,
{
    let response = transport.get(SUBJECTS_PATH).await?;
    read_json(response).await
}

/// Reads the whole body, releases it, then decodes it.
async fn read_json<T: DeserializeOwned>(mut response: Box<dyn ResponseBody>) -> SchemaResult<T> {
    let body = response.read_all().await;
    drop(response);
    serde_json::from_slice(&body?).map_err(SchemaError::Decode)
}
