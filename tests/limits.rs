use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use aushadhi_api::{
    config::AppConfig,
    dto::ai::Suggestion,
    routes::create_app,
    services::{
        IntegrationError, ai_service::SuggestionEngine, email_service::LogMailSender,
        ocr_service::StaticOcrEngine,
    },
    state::AppState,
};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::sync::Notify;
use tower::ServiceExt;

/// Holds every call until released, announcing when it has started.
struct GatedEngine {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl SuggestionEngine for GatedEngine {
    fn name(&self) -> &str {
        "gated"
    }

    async fn suggest(&self, _symptoms: &str) -> Result<Vec<Suggestion>, IntegrationError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(Vec::new())
    }
}

fn small_body_app() -> Router {
    let config = AppConfig {
        body_limit: 16,
        ..AppConfig::default()
    };
    create_app(AppState::default(), &config).expect("app")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn health() -> Request<Body> {
    Request::builder().uri("/api/health").body(Body::empty()).unwrap()
}

fn suggest() -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/ai/suggest")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "symptoms": "" }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn json_over_body_limit_is_413_with_detail_and_cors() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::from(
            json!({ "email": "demo@aushadhi360.com", "password": "demo123" }).to_string(),
        ))
        .unwrap();
    let response = small_body_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn upload_over_body_limit_is_413() {
    let boundary = "limit-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"bill.png\"\r\n\r\n{}\r\n--{boundary}--\r\n",
        "x".repeat(256)
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/ocr/process")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(small_body_app(), request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["detail"].is_string());
}

// `{"symptoms":""}` is 15 bytes.
#[tokio::test]
async fn body_under_limit_is_accepted() {
    let (status, _) = send(small_body_app(), suggest()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn concurrency_limit_covers_every_route() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let state = AppState::new(
        Arc::new(GatedEngine {
            entered: entered.clone(),
            release: release.clone(),
        }),
        Arc::new(StaticOcrEngine),
        Arc::new(LogMailSender),
    );
    let config = AppConfig {
        concurrency_limit: 1,
        ..AppConfig::default()
    };
    let app = create_app(state, &config).unwrap();

    let held = tokio::spawn(app.clone().oneshot(suggest()));
    entered.notified().await;

    let blocked =
        tokio::time::timeout(Duration::from_millis(100), app.clone().oneshot(health())).await;
    assert!(blocked.is_err(), "health was served while the only slot was taken");

    release.notify_one();
    let response = held.await.unwrap().unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = send(app, health()).await;
    assert_eq!(status, StatusCode::OK);
}
