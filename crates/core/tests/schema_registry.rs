//! Integration tests for subject listing over real HTTP.

mod common;

use common::*;
use kafta_core::schema::list_subjects;
use kafta_core::schema::SchemaError;

#[tokio::test]
async fn test_list_subjects_over_http() {
    let registry = start_mock_registry(200, r#"["orders-value","orders-key","users-value"]"#).await;
    let (_home, config) = registry_configuration(&registry.url(), None);

    let subjects = list_subjects(&config).await.expect("Failed to list subjects");

    assert_eq!(subjects, vec!["orders-value", "orders-key", "users-value"]);

    let requests = registry.requests().await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("GET /subjects HTTP/1.1"));
    assert!(requests[0]
        .to_ascii_lowercase()
        .contains("accept: application/vnd.schemaregistry.v1+json"));
}

#[tokio::test]
async fn test_list_subjects_sends_basic_auth() {
    let registry = start_mock_registry(200, "[]").await;
    let (_home, config) = registry_configuration(&registry.url(), Some(("user", "pass")));

    let subjects = list_subjects(&config).await.expect("Failed to list subjects");

    assert!(subjects.is_empty());
    let requests = registry.requests().await;
    // base64("user:pass")
    assert!(requests[0].contains("dXNlcjpwYXNz"));
}

#[tokio::test]
async fn test_error_body_is_decode_error() {
    let registry =
        start_mock_registry(401, r#"{"error_code":40101,"message":"Unauthorized"}"#).await;
    let (_home, config) = registry_configuration(&registry.url(), None);

    let result = list_subjects(&config).await;

    assert!(matches!(result, Err(SchemaError::Decode(_))));
}

#[tokio::test]
async fn test_list_subjects_without_context() {
    let (_home, mut config) = initialized_home();
    config.ensure_config().expect("Failed to ensure config");

    let result = list_subjects(&config).await;

    assert!(matches!(result, Err(SchemaError::Config(_))));
}

#[tokio::test]
async fn test_list_subjects_unreachable_registry() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let (_home, config) = registry_configuration(&format!("http://127.0.0.1:{port}"), None);

    let result = list_subjects(&config).await;

    assert!(matches!(result, Err(SchemaError::Request(_))));
}
