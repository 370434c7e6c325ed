//! API integration tests
//!
//! Require a running server with a seeded catalog database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_labels_single_barcode() {
    let client = Client::new();

    let response = client
        .post(format!("{}/labels", BASE_URL))
        .json(&json!({
            "barcode_num": "39001000001234"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["labels"].is_array());
    assert!(body["total"].is_number());

    for label in body["labels"].as_array().unwrap() {
        assert!(label["barcode"].is_string());
        assert!(label["classification"].is_string());
        assert!(label["author_mark"].is_string());
    }
}

#[tokio::test]
#[ignore]
async fn test_labels_numeric_range() {
    let client = Client::new();

    let response = client
        .post(format!("{}/labels", BASE_URL))
        .json(&json!({
            "barcode_start": "100",
            "barcode_end": "250"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["labels"].as_array().unwrap().len(),
        body["total"].as_u64().unwrap() as usize
    );
}

#[tokio::test]
#[ignore]
async fn test_labels_mismatched_prefix_range_is_empty() {
    let client = Client::new();

    let response = client
        .post(format!("{}/labels", BASE_URL))
        .json(&json!({
            "barcode_start": "A100",
            "barcode_end": "B200"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 0);
    assert_eq!(body["labels"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_labels_empty_request_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/labels", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
