//! Router-level integration tests for the JSON API.
//!
//! These drive the axum router directly with `tower::ServiceExt::oneshot`,
//! so they exercise routing, extraction, validation, and response shapes
//! without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use medmatch::web::server::create_router;
use medmatch::{DiseaseTable, Matcher};

fn app() -> axum::Router {
    create_router(Matcher::new(DiseaseTable::fallback_seed()))
}

fn predict_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_predict_returns_ranked_diseases() {
    let response = app()
        .oneshot(predict_request(
            r#"{"symptoms": ["fever", "body aches", "fatigue"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    assert_eq!(body["total_symptoms"], 3);
    assert!(body["processing_time"].is_number());

    let diseases = body["diseases"].as_array().unwrap();
    assert!(!diseases.is_empty());
    assert!(diseases.len() <= 5);
    assert_eq!(diseases[0]["name"], "Influenza");
    assert_eq!(diseases[0]["confidence"], 100.0);
    assert_eq!(diseases[0]["severity"], "High");
    assert_eq!(
        diseases[0]["matching_symptoms"],
        serde_json::json!(["fever", "body aches", "fatigue"])
    );

    // Ranked descending
    let confidences: Vec<f64> = diseases
        .iter()
        .map(|d| d["confidence"].as_f64().unwrap())
        .collect();
    for pair in confidences.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn test_predict_unmatched_symptoms_get_advisory_pair() {
    let response = app()
        .oneshot(predict_request(r#"{"symptoms": ["glowing toes"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let diseases = body["diseases"].as_array().unwrap();
    assert_eq!(diseases.len(), 2);
    assert_eq!(diseases[0]["name"], "General Health Consultation");
    assert_eq!(diseases[0]["confidence"], 60.0);
    assert_eq!(diseases[1]["name"], "Symptomatic Care");
    assert_eq!(diseases[1]["confidence"], 40.0);
}

#[tokio::test]
async fn test_predict_empty_list_is_rejected() {
    let response = app()
        .oneshot(predict_request(r#"{"symptoms": []}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error_type"], "missing_symptoms");
}

#[tokio::test]
async fn test_predict_blank_only_list_is_rejected() {
    let response = app()
        .oneshot(predict_request(r#"{"symptoms": ["   ", ""]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_oversized_list_is_rejected() {
    let symptoms: Vec<String> = (0..51).map(|i| format!("symptom {i}")).collect();
    let body = serde_json::json!({ "symptoms": symptoms }).to_string();

    let response = app().oneshot(predict_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error_type"], "too_many_symptoms");
}

#[tokio::test]
async fn test_predict_is_case_insensitive() {
    let upper = app()
        .oneshot(predict_request(r#"{"symptoms": ["FEVER"]}"#))
        .await
        .unwrap();
    let lower = app()
        .oneshot(predict_request(r#"{"symptoms": ["fever"]}"#))
        .await
        .unwrap();

    let upper_body = json_body(upper).await;
    let lower_body = json_body(lower).await;
    assert_eq!(upper_body["diseases"], lower_body["diseases"]);
}

#[tokio::test]
async fn test_diseases_listing() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/diseases")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    assert_eq!(body["count"], 12);
    let diseases = body["diseases"].as_array().unwrap();
    assert_eq!(diseases[0]["name"], "Common Cold");
    assert_eq!(diseases[0]["symptom_count"], 3);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["service"], "medmatch");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], 12);
}

#[tokio::test]
async fn test_security_headers_present() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = app()
        .oneshot(predict_request(r#"{"symptoms": "#))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
