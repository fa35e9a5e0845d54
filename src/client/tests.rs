//! Tests for the API client module

use super::*;
use crate::error::Error;
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query_params(query: &str) -> HashMap<String, String> {
    HashMap::from([("query".to_string(), query.to_string())])
}

fn envelope_body(total: &str, titles: &[&str]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = titles
        .iter()
        .map(|t| serde_json::json!({"dc:title": t}))
        .collect();
    serde_json::json!({
        "search-results": {
            "opensearch:totalResults": total,
            "entry": entries,
            "link": []
        }
    })
}

#[test]
fn test_client_config_defaults() {
    let config = ClientConfig::new("key-123");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api_key, "key-123");
    assert!(config.inst_token.is_none());
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.user_agent.starts_with("elsevier-search/"));
}

#[test]
fn test_client_config_builder() {
    let config = ClientConfig::new("key-123")
        .base_url("https://api.example.org")
        .inst_token("inst-456")
        .user_agent("test-agent/1.0")
        .timeout(Duration::from_secs(60));

    assert_eq!(config.base_url, "https://api.example.org");
    assert_eq!(config.inst_token, Some("inst-456".to_string()));
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert_eq!(config.timeout, Duration::from_secs(60));
}

#[tokio::test]
async fn test_execute_with_params_sends_auth_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/search/scopus"))
        .and(query_param("query", "graphene"))
        .and(header("X-ELS-APIKey", "key-123"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope_body("2", &["First", "Second"])),
        )
        .mount(&mock_server)
        .await;

    let client = ElsevierClient::with_config(
        ClientConfig::new("key-123").base_url(mock_server.uri()),
    );
    let envelope = client
        .execute_with_params("content/search/scopus", &query_params("graphene"))
        .await
        .unwrap();

    assert_eq!(envelope.search_results.total_results, "2");
    assert_eq!(envelope.search_results.entry.len(), 2);
}

#[tokio::test]
async fn test_inst_token_header_sent_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/search/scopus"))
        .and(header("X-ELS-APIKey", "key-123"))
        .and(header("X-ELS-Insttoken", "inst-456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body("0", &[])))
        .mount(&mock_server)
        .await;

    let client = ElsevierClient::with_config(
        ClientConfig::new("key-123")
            .base_url(mock_server.uri())
            .inst_token("inst-456"),
    );
    let envelope = client
        .execute_with_params("content/search/scopus", &query_params("anything"))
        .await
        .unwrap();

    assert_eq!(envelope.search_results.entry.len(), 0);
}

#[tokio::test]
async fn test_user_agent_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/search/scopus"))
        .and(header("user-agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body("0", &[])))
        .mount(&mock_server)
        .await;

    let client = ElsevierClient::with_config(
        ClientConfig::new("key-123")
            .base_url(mock_server.uri())
            .user_agent("test-agent/1.0"),
    );
    let result = client
        .execute_with_params("content/search/scopus", &query_params("anything"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_execute_fetches_absolute_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/search/scopus"))
        .and(query_param("start", "25"))
        .and(header("X-ELS-APIKey", "key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body("30", &["Page two"])))
        .mount(&mock_server)
        .await;

    let client = ElsevierClient::with_config(
        ClientConfig::new("key-123").base_url("https://unused.example.org"),
    );
    let envelope = client
        .execute(&format!(
            "{}/content/search/scopus?start=25",
            mock_server.uri()
        ))
        .await
        .unwrap();

    assert_eq!(envelope.search_results.entry.len(), 1);
}

#[tokio::test]
async fn test_error_status_includes_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/search/scopus"))
        .respond_with(ResponseTemplate::new(401).set_body_string("APIKey invalid"))
        .mount(&mock_server)
        .await;

    let client =
        ElsevierClient::with_config(ClientConfig::new("bad-key").base_url(mock_server.uri()));
    let err = client
        .execute_with_params("content/search/scopus", &query_params("anything"))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "APIKey invalid");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/search/scopus"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client =
        ElsevierClient::with_config(ClientConfig::new("key-123").base_url(mock_server.uri()));
    let err = client
        .execute_with_params("content/search/scopus", &query_params("anything"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_body_without_envelope_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/search/scopus"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": true})),
        )
        .mount(&mock_server)
        .await;

    let client =
        ElsevierClient::with_config(ClientConfig::new("key-123").base_url(mock_server.uri()));
    let err = client
        .execute_with_params("content/search/scopus", &query_params("anything"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_invalid_base_url_is_url_error() {
    let client =
        ElsevierClient::with_config(ClientConfig::new("key-123").base_url("not a url"));
    let err = client
        .execute_with_params("content/search/scopus", &query_params("anything"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_client_debug_elides_api_key() {
    let client = ElsevierClient::with_config(
        ClientConfig::new("secret-key").inst_token("secret-token"),
    );
    let debug_str = format!("{client:?}");

    assert!(debug_str.contains("ElsevierClient"));
    assert!(debug_str.contains("has_inst_token"));
    assert!(!debug_str.contains("secret-key"));
    assert!(!debug_str.contains("secret-token"));
}
