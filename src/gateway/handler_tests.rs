use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::evaluation::EvaluationContext;
use crate::gateway::create_router_with_state;
use crate::gateway::error::{ErrorResponse, GatewayError};
use crate::gateway::handler::BatchResponse;
use crate::gateway::state::HandlerState;
use crate::gateway::status::*;
use crate::gateway::{ReadyResponse, HealthResponse};
use crate::generation::{BackendError, GenerationError, MockBackend, SummaryController};
use crate::pipeline::{Pipeline, ResultRecord};
use crate::risk::RiskLevel;
use crate::storage::{DirectorySource, ResultStore};

const HEALTH_ARTICLE: &str = "A randomized controlled trial of 300 patients found the new vaccine \
reduced infection rates. The study, published by researchers at the hospital, reported 85% \
efficacy and few adverse events. Public health officials said the treatment could lower \
mortality among chronic disease patients.";

const SPORTS_ARTICLE: &str = "The football team played a thrilling match on Saturday afternoon. \
Fans cheered loudly as the striker scored twice in the second half. The coach praised the \
defense and said the squad will travel north next weekend for the final game of the season.";

const CLEAN_SUMMARY: &str = "A trial of 300 patients found the vaccine cut infection rates. It \
showed 85% efficacy and few side effects. Health officials say it could lower deaths in chronic \
disease patients.";

struct TestApp {
    router: Router,
    store: Arc<ResultStore>,
    articles_dir: std::path::PathBuf,
    _dir: TempDir,
}

fn create_test_app(backend: MockBackend) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = ResultStore::new(dir.path().join("results"));
    store.ensure_dirs().expect("Failed to create results dir");
    let articles_dir = dir.path().join("articles");

    let pipeline = Pipeline::new(
        SummaryController::new(backend),
        Arc::new(EvaluationContext::default()),
    );
    let state = HandlerState::new(pipeline, store, DirectorySource::new(&articles_dir));
    let store = Arc::clone(&state.store);

    TestApp {
        router: create_router_with_state(state),
        store,
        articles_dir,
        _dir: dir,
    }
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

fn status_header(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(HEALSUMM_STATUS_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

// =============================================================================
// GatewayError
// =============================================================================

#[tokio::test]
async fn test_error_response_shape() {
    let response = GatewayError::InputTooShort("too short".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(status_header(&response), "input_too_short");

    let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.error, "too short");
    assert_eq!(body.code, 422);
    assert_eq!(body.kind, "input_too_short");
}

#[test]
fn test_error_status_mapping() {
    let cases = [
        (GatewayError::InvalidRequest(String::new()), StatusCode::BAD_REQUEST),
        (GatewayError::InputTooShort(String::new()), StatusCode::UNPROCESSABLE_ENTITY),
        (GatewayError::NotHealthContent(String::new()), StatusCode::UNPROCESSABLE_ENTITY),
        (GatewayError::NoArticles(String::new()), StatusCode::NOT_FOUND),
        (GatewayError::BackendFailed(String::new()), StatusCode::BAD_GATEWAY),
        (GatewayError::StorageFailed(String::new()), StatusCode::INTERNAL_SERVER_ERROR),
        (GatewayError::InternalError(String::new()), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (err, status) in cases {
        assert_eq!(err.status_code(), status, "{err:?}");
    }
}

#[test]
fn test_generation_error_conversion() {
    let rejected: GatewayError = GenerationError::InputTooShort {
        word_count: 4,
        minimum: 30,
    }
    .into();
    assert!(
        matches!(rejected, GatewayError::InputTooShort(ref m) if m.contains("at least 30 words"))
    );

    let off_domain: GatewayError = GenerationError::NotHealthContent {
        keyword_hits: 0,
        required: 5,
    }
    .into();
    assert!(matches!(off_domain, GatewayError::NotHealthContent(_)));
    assert_eq!(off_domain.status_label(), "not_health_content");

    let backend: GatewayError =
        GenerationError::Backend(BackendError::Status { status: 503 }).into();
    assert_eq!(backend.to_string(), "generation backend error: backend returned HTTP 503");
}

// =============================================================================
// Static routes
// =============================================================================

#[tokio::test]
async fn test_index_serves_page() {
    let app = create_test_app(MockBackend::new());
    let response = app.router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("/api/summarize"));
    assert!(body.contains("/api/batch"));
}

#[tokio::test]
async fn test_healthz() {
    let app = create_test_app(MockBackend::new());
    let response = app.router.oneshot(get("/healthz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status_header(&response), HEALSUMM_STATUS_HEALTHY);
    let body: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.status, "ok");
}

#[tokio::test]
async fn test_ready_reports_components() {
    let app = create_test_app(MockBackend::new());
    let response = app.router.oneshot(get("/ready")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: ReadyResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.status, "ok");
    assert_eq!(body.components.storage, HEALSUMM_STATUS_READY);
    assert_eq!(body.components.backend, "mock");
    assert_eq!(body.components.entity_extractor, "pattern");
    assert_eq!(body.components.domain_extractor, "disabled");
}

#[tokio::test]
async fn test_ready_without_results_dir() {
    let app = create_test_app(MockBackend::new());
    fs::remove_dir_all(app.store.results_dir()).unwrap();

    let response = app.router.oneshot(get("/ready")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(status_header(&response), HEALSUMM_STATUS_NOT_READY);
    let body: ReadyResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.components.storage, HEALSUMM_STATUS_ERROR);
}

// =============================================================================
// /api/summarize
// =============================================================================

#[tokio::test]
async fn test_summarize_success_appends_record() {
    let backend = MockBackend::always(CLEAN_SUMMARY);
    let app = create_test_app(backend.clone());

    let response = app
        .router
        .clone()
        .oneshot(json_post("/api/summarize", serde_json::json!({ "text": HEALTH_ARTICLE })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status_header(&response), HEALSUMM_STATUS_STORED);
    let record: ResultRecord = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(record.article_id, "interactive");
    assert_eq!(record.summary, CLEAN_SUMMARY);
    assert_eq!(record.risk_level, RiskLevel::Low);
    assert_eq!(backend.call_count(), 1);

    app.router
        .oneshot(json_post("/api/summarize", serde_json::json!({ "text": HEALTH_ARTICLE })))
        .await
        .unwrap();
    assert_eq!(app.store.load().unwrap().len(), 2);
}

#[tokio::test]
async fn test_summarize_trims_text_and_accepts_reference() {
    let app = create_test_app(MockBackend::always(CLEAN_SUMMARY));
    let body = serde_json::json!({
        "text": format!("\n\n  {HEALTH_ARTICLE}  \n"),
        "reference": CLEAN_SUMMARY,
    });

    let response = app.router.oneshot(json_post("/api/summarize", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let record: ResultRecord = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(record.target_range, "25-30");
}

#[tokio::test]
async fn test_summarize_missing_text() {
    for body in [
        serde_json::json!({}),
        serde_json::json!({ "text": "" }),
        serde_json::json!({ "text": "   \n\t " }),
    ] {
        let app = create_test_app(MockBackend::new());
        let response = app.router.oneshot(json_post("/api/summarize", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "invalid_request");
        let err: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(err.error, "No text provided.");
        assert_eq!(err.code, 400);
        assert_eq!(err.kind, "invalid_request");
    }
}

#[tokio::test]
async fn test_summarize_malformed_json() {
    let app = create_test_app(MockBackend::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/summarize")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let err: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(err.error.starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_summarize_too_short() {
    let backend = MockBackend::always(CLEAN_SUMMARY);
    let app = create_test_app(backend.clone());

    let response = app
        .router
        .oneshot(json_post("/api/summarize", serde_json::json!({ "text": "Vaccines help patients recover." })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(status_header(&response), "input_too_short");
    let err: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(err.error, "Article must be at least 30 words (got 4).");
    assert_eq!(err.kind, "input_too_short");
    assert_eq!(backend.call_count(), 0);
    assert!(app.store.load().unwrap().is_empty());
}

#[tokio::test]
async fn test_summarize_off_domain() {
    let backend = MockBackend::always(CLEAN_SUMMARY);
    let app = create_test_app(backend.clone());

    let response = app
        .router
        .oneshot(json_post("/api/summarize", serde_json::json!({ "text": SPORTS_ARTICLE })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(status_header(&response), "not_health_content");
    let err: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(err.error.contains("health/medical"));
    assert_eq!(err.kind, "not_health_content");
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_summarize_backend_failure() {
    let backend = MockBackend::new();
    backend.push_error(BackendError::Timeout { secs: 120 });
    let app = create_test_app(backend);

    let response = app
        .router
        .oneshot(json_post("/api/summarize", serde_json::json!({ "text": HEALTH_ARTICLE })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(status_header(&response), "backend_error");
    assert!(!app.store.summaries_path().exists());
}

// =============================================================================
// /api/batch and /api/results
// =============================================================================

#[tokio::test]
async fn test_batch_without_articles() {
    let app = create_test_app(MockBackend::new());

    let response = app.router.oneshot(json_post("/api/batch", serde_json::json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let err: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(err.error.starts_with("No .txt files in "), "{}", err.error);
    assert_eq!(err.code, 404);
    assert_eq!(err.kind, "no_articles");
}

#[tokio::test]
async fn test_batch_processes_and_persists() {
    let backend = MockBackend::always(CLEAN_SUMMARY);
    let app = create_test_app(backend.clone());
    fs::create_dir_all(&app.articles_dir).unwrap();
    fs::write(app.articles_dir.join("a_vaccine.txt"), HEALTH_ARTICLE).unwrap();
    fs::write(app.articles_dir.join("b_football.txt"), SPORTS_ARTICLE).unwrap();
    app.router
        .clone()
        .oneshot(json_post("/api/summarize", serde_json::json!({ "text": HEALTH_ARTICLE })))
        .await
        .unwrap();
    assert_eq!(app.store.load().unwrap().len(), 1);

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().method("POST").uri("/api/batch").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let batch: BatchResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(batch.count, 1);
    assert_eq!(batch.records[0].article_id, "a_vaccine");
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].article_id, "b_football");
    assert_eq!(backend.call_count(), 2);

    assert!(app.store.evaluation_path().exists());
    let response = app.router.oneshot(get("/api/results")).await.unwrap();
    let stored: Vec<ResultRecord> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(stored, batch.records);
}

#[tokio::test]
async fn test_results_empty() {
    let app = create_test_app(MockBackend::new());
    let response = app.router.oneshot(get("/api/results")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"[]");
}
