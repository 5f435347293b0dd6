mod common;

use serde_json::Value;

// test me: cargo t --test index -- --nocapture --show-output
#[tokio::test]
async fn index_reports_metadata_and_live_count() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["total_products"], 0);
    assert_eq!(body["endpoints"]["products"]["list"], "GET /products");

    // count is live
    client
        .post(&format!("{}/reset", &app.address))
        .send()
        .await
        .unwrap();

    let response = client
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total_products"], 5);
}

#[tokio::test]
async fn unmatched_route_returns_404_with_path() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/does/not/exist", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["path"], "/does/not/exist");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn responses_carry_permissive_cors_headers() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/products", &app.address))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_some());
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
}
