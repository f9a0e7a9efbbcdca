//! Integration tests for the raw query endpoint.

mod common;

use biblio_business::{ApiError, RawQueryRequest};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

#[tokio::test]
async fn test_raw_query_round_trip() {
    let mock_server = backend().await;

    Mock::given(method("POST"))
        .and(path("/api/extra-query/raw"))
        .and(body_json(serde_json::json!({
            "query": "SELECT id, title FROM books"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "title": "Dune"}
        ])))
        .mount(&mock_server)
        .await;

    let body = RawQueryRequest {
        query: "SELECT id, title FROM books".to_string(),
    };
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/extra-query/raw", mock_server.uri()))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    // Results are schemaless rows; the client pretty-prints whatever arrives.
    let value: serde_json::Value = response.json().await.expect("Failed to parse response");
    let pretty = serde_json::to_string_pretty(&value).expect("Failed to pretty-print");
    assert!(pretty.contains("\"title\": \"Dune\""));
}

#[tokio::test]
async fn test_raw_query_syntax_error_surfaces_backend_message() {
    let mock_server = backend().await;

    Mock::given(method("POST"))
        .and(path("/api/extra-query/raw"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "syntax error at or near \"SELEC\""
        })))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/extra-query/raw", mock_server.uri()))
        .json(&RawQueryRequest {
            query: "SELEC 1".to_string(),
        })
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let bytes = response.bytes().await.expect("Failed to read body");
    let err = ApiError::from_response(400, &bytes, "Failed to execute query");
    assert_eq!(err.to_string(), "syntax error at or near \"SELEC\"");
}

#[tokio::test]
async fn test_missing_endpoint_message_is_exact() {
    let mock_server = backend().await;

    Mock::given(method("POST"))
        .and(path("/api/extra-query/raw"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "not found"
        })))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/extra-query/raw", mock_server.uri()))
        .json(&RawQueryRequest {
            query: "SELECT 1".to_string(),
        })
        .send()
        .await
        .expect("Failed to send request");

    let bytes = response.bytes().await.expect("Failed to read body");
    let err = ApiError::from_response(404, &bytes, "Failed to execute query");
    assert_eq!(err.to_string(), "not found");
}
