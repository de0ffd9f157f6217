mod common;

use serde_json::Value;

use common::spawn_app;

const GREETING: &str = "Hello from the AWS-native DevSecOps demo platform";

async fn greet(identity: Option<&str>) -> reqwest::Response {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let mut request = client
        .get(format!("{address}/"))
        .header("Accept", "application/json");
    if let Some(identity) = identity {
        request = request.header("x-amzn-oidc-identity", identity);
    }

    request.send().await.expect("Failed to execute request")
}

async fn greet_json(identity: Option<&str>) -> Value {
    let response = greet(identity).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.expect("Failed to parse JSON response")
}

#[tokio::test]
async fn root_returns_greeting() {
    let response = greet(None).await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], GREETING);
    assert!(body["message"].as_str().unwrap().contains("DevSecOps"));
}

#[tokio::test]
async fn missing_identity_header_omits_user() {
    let body = greet_json(None).await;
    assert!(body.get("authenticatedUser").is_none());
}

#[tokio::test]
async fn empty_identity_header_omits_user() {
    let body = greet_json(Some("")).await;
    assert!(body.get("authenticatedUser").is_none());
}

#[tokio::test]
async fn valid_identity_is_echoed() {
    let body = greet_json(Some("user@example.com")).await;
    assert_eq!(body["authenticatedUser"], "user@example.com");
}

#[tokio::test]
async fn identity_is_sanitized() {
    let body = greet_json(Some("user<>@example.com!!")).await;
    assert_eq!(body["authenticatedUser"], "user@example.com");
}

#[tokio::test]
async fn identity_sanitized_to_empty_is_omitted() {
    let body = greet_json(Some("!!!")).await;
    assert!(body.get("authenticatedUser").is_none());
}

#[tokio::test]
async fn oversized_identity_is_omitted() {
    let long = "a".repeat(257);
    let body = greet_json(Some(&long)).await;
    assert!(body.get("authenticatedUser").is_none());
}

#[tokio::test]
async fn identity_at_limit_is_echoed() {
    let exact = "b".repeat(256);
    let body = greet_json(Some(&exact)).await;
    assert_eq!(body["authenticatedUser"], exact.as_str());
}

#[tokio::test]
async fn timestamp_is_rfc3339() {
    let body = greet_json(None).await;
    let timestamp = body["timestamp"].as_str().expect("timestamp should be a string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn response_has_expected_structure() {
    let body = greet_json(Some("user@example.com")).await;
    let object = body.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["authenticatedUser", "message", "timestamp"]);
}

#[tokio::test]
async fn greeting_is_not_cacheable_and_carries_request_id() {
    let response = greet(Some("user@example.com")).await;

    assert_eq!(response.headers()["cache-control"], "no-store");
    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}
