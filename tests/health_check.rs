mod common;

use common::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/healthz"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn health_check_ignores_headers() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/healthz"))
        .header("x-amzn-oidc-identity", "user<>@example.com!!")
        .header("x-amzn-trace-id", "Root=1-67891233-abcdef012345678912345678")
        .header("Accept", "application/json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "no-store");
    assert_eq!(response.text().await.unwrap(), "ok");
}
