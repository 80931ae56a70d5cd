use reqwest::Client;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn backend_health_working() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api/health", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Cannot read response body.");
    let json_response: serde_json::Value = serde_json::from_str(&body).expect("Cannot turn into a json.");

    assert_eq!(json_response["status"], "OK");
    assert!(json_response["timestamp"].is_string());
    assert!(json_response["environment"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api/does-not-exist", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
    let json_response: serde_json::Value = response.json().await.expect("Cannot turn into a json.");
    assert_eq!(json_response, serde_json::json!({ "error": "route not found" }));
}
