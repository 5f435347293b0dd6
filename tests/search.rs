mod common;

use serde_json::Value;

async fn seed(client: &reqwest::Client, address: &str) {
    let response = client
        .post(&format!("{}/reset", address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
}

// test me: cargo t --test search -- --nocapture --show-output
#[tokio::test]
async fn search_matches_name_case_insensitively() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    seed(&client, &app.address).await;

    let response = client
        .get(&format!("{}/search?q=notebook", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "notebook");
    assert_eq!(body["count"], 1);

    let products = body["products"].as_array().unwrap();
    for product in products {
        let name = product["name"].as_str().unwrap().to_lowercase();
        let description = product["description"]
            .as_str()
            .unwrap_or("")
            .to_lowercase();
        assert!(name.contains("notebook") || description.contains("notebook"));
    }
}

#[tokio::test]
async fn search_matches_description() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    seed(&client, &app.address).await;

    let response = client
        .get(&format!("{}/search?q=1080p", &app.address))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["products"][0]["name"], "Webcam Full HD");
}

#[tokio::test]
async fn search_upper_case_query_finds_the_same_rows() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    seed(&client, &app.address).await;

    let response = client
        .get(&format!("{}/search?q=MOUSE", &app.address))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["products"][0]["name"], "Mouse Logitech");
}

#[tokio::test]
async fn search_with_no_match_returns_empty_list() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    seed(&client, &app.address).await;

    let response = client
        .get(&format!("{}/search?q=zzzzzz", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn empty_query_is_rejected_with_400() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    seed(&client, &app.address).await;

    let response = client
        .get(&format!("{}/search?q=", &app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);

    let response = client
        .get(&format!("{}/search", &app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}
