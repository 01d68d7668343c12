//! Integration tests for the premium classifier API

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

fn predict_body() -> String {
    json!({
        "age": 30,
        "weight": 60.0,
        "height": 1.7,
        "smoker": false,
        "income_lpa": 20.0,
        "occupation": "retired",
        "city": "Kolhapur"
    })
    .to_string()
}

#[tokio::test]
async fn test_predict_returns_a_known_label() {
    let app = TestApp::premium();

    let (status, body) = app.post("/predict", &predict_body()).await;
    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&body).unwrap();
    let label = response["predicted_premium"].as_str().unwrap();
    assert!(["Low", "Medium", "High"].contains(&label));
}

#[tokio::test]
async fn test_predict_is_repeatable() {
    let app = TestApp::premium();

    let (_, first) = app.post("/predict", &predict_body()).await;
    let (_, second) = app.post("/predict", &predict_body()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_occupation_rejected() {
    let app = TestApp::premium();

    let body = json!({
        "age": 30,
        "weight": 60.0,
        "height": 1.7,
        "smoker": false,
        "income_lpa": 20.0,
        "occupation": "astronaut",
        "city": "Pune"
    })
    .to_string();

    // Unknown enum values are rejected at deserialization
    let (status, _) = app.post("/predict", &body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_zero_height_rejected() {
    let app = TestApp::premium();

    let body = json!({
        "age": 30,
        "weight": 60.0,
        "height": 0.0,
        "smoker": false,
        "income_lpa": 20.0,
        "occupation": "student",
        "city": "Pune"
    })
    .to_string();

    let (status, body) = app.post("/predict", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_negative_income_rejected() {
    let app = TestApp::premium();

    let body = json!({
        "age": 30,
        "weight": 60.0,
        "height": 1.7,
        "smoker": false,
        "income_lpa": -5.0,
        "occupation": "employed",
        "city": "Pune"
    })
    .to_string();

    let (status, _) = app.post("/predict", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_city_is_accepted_as_tier_3() {
    let app = TestApp::premium();

    let body = json!({
        "age": 52,
        "weight": 88.0,
        "height": 1.65,
        "smoker": true,
        "income_lpa": 3.5,
        "occupation": "business_owner",
        "city": "Atlantis"
    })
    .to_string();

    let (status, body) = app.post("/predict", &body).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert!(response["predicted_premium"].as_str().is_some());
}
