//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::config::ServiceConfig;
use crate::error::Error;
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ServiceConfig::builder()
        .service_url(format!("{}/v1", server.uri()))
        .build();
    HttpClient::new(&config).unwrap()
}

#[test]
fn test_request_config_builder() {
    let mut extra = std::collections::HashMap::new();
    extra.insert("X-Extra".to_string(), "1".to_string());

    let config = RequestConfig::new()
        .query("limit", "10")
        .query_opt("start", Some("abc"))
        .query_opt("version", None::<&str>)
        .header("X-Request-Id", "abc123")
        .headers(&extra)
        .json(json!({"key": "value"}))
        .content_type("application/json-patch+json")
        .timeout_opt(Some(Duration::from_secs(10)));

    assert_eq!(
        config.query,
        vec![
            ("limit".to_string(), "10".to_string()),
            ("start".to_string(), "abc".to_string()),
        ]
    );
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert_eq!(config.headers.get("X-Extra"), Some(&"1".to_string()));
    assert!(config.body.is_some());
    assert_eq!(
        config.content_type.as_deref(),
        Some("application/json-patch+json")
    );
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    assert_eq!(RequestConfig::new().timeout_opt(None).timeout, None);
}

#[test]
fn test_endpoint_appends_encoded_segments() {
    let config = ServiceConfig::builder()
        .service_url("https://dpx.example.com/data_product_exchange/v1/")
        .build();
    let client = HttpClient::new(&config).unwrap();

    let url = client.endpoint(&["data_products", "a b/c", "drafts"]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://dpx.example.com/data_product_exchange/v1/data_products/a%20b%2Fc/drafts"
    );
}

#[test]
fn test_new_rejects_non_base_url() {
    let config = ServiceConfig::builder()
        .service_url("mailto:someone@example.com")
        .build();
    assert!(HttpClient::new(&config).is_err());
}

#[tokio::test]
async fn test_get_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/data_products"))
        .and(query_param("limit", "2"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data_products": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.endpoint(&["data_products"]).unwrap();
    let body: serde_json::Value = client
        .get_json(url, RequestConfig::new().query("limit", "2"))
        .await
        .unwrap();

    assert_eq!(body, json!({"data_products": []}));
}

#[tokio::test]
async fn test_post_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/data_products"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"drafts": []})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "p1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.endpoint(&["data_products"]).unwrap();
    let body: serde_json::Value = client
        .request_json(
            Method::POST,
            url,
            RequestConfig::new().json(json!({"drafts": []})),
        )
        .await
        .unwrap();

    assert_eq!(body["id"], "p1");
}

#[tokio::test]
async fn test_auth_header_applied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ServiceConfig::builder()
        .service_url(format!("{}/v1", server.uri()))
        .auth(AuthConfig::bearer("secret"))
        .build();
    let client = HttpClient::new(&config).unwrap();
    let url = client.endpoint(&["ping"]).unwrap();

    let _: serde_json::Value = client.get_json(url, RequestConfig::new()).await.unwrap();
}

#[tokio::test]
async fn test_request_empty_on_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/items/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.endpoint(&["items", "1"]).unwrap();
    client
        .request_empty(Method::DELETE, url, RequestConfig::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/flaky"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.endpoint(&["flaky"]).unwrap();
    let err = client
        .get_json::<serde_json::Value>(url, RequestConfig::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_error_message_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "Data product not found"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.endpoint(&["missing"]).unwrap();
    let err = client
        .get_json::<serde_json::Value>(url, RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::Service { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Data product not found");
        }
        other => panic!("Expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.endpoint(&["broken"]).unwrap();
    let err = client
        .get_json::<serde_json::Value>(url, RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.endpoint(&["slow"]).unwrap();
    let err = client
        .get_json::<serde_json::Value>(
            url,
            RequestConfig::new().timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
    assert!(err.is_retryable());
}
