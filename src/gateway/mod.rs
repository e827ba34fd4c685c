//! HTTP gateway (Axum) for interactive and batch summarization.
//!
//! | Route | Method | Purpose |
//! |-------|--------|---------|
//! | `/` | GET | Single-page UI |
//! | `/api/summarize` | POST | Summarize one text, append to the store |
//! | `/api/batch` | POST | Process the articles directory, replace stored results |
//! | `/api/results` | GET | Stored records (`[]` when none) |
//! | `/healthz` | GET | Liveness |
//! | `/ready` | GET | Component readiness |

pub mod error;
pub mod handler;
pub mod page;
pub mod state;
pub mod status;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, GatewayError};
pub use handler::{
    BatchResponse, SummarizeRequest, batch_handler, index_handler, results_handler,
    summarize_handler,
};
pub use state::HandlerState;
pub use status::*;

use crate::generation::GenerationBackend;

pub fn create_router_with_state<B>(state: HandlerState<B>) -> Router
where
    B: GenerationBackend + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/api/summarize", post(summarize_handler::<B>))
        .route("/api/batch", post(batch_handler::<B>))
        .route("/api/results", get(results_handler::<B>))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<B>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ComponentStatus {
    pub http: String,
    pub storage: String,
    pub backend: String,
    pub entity_extractor: String,
    pub domain_extractor: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        HEALSUMM_STATUS_HEADER,
        HeaderValue::from_static(HEALSUMM_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
        .into_response()
}

/// Ready once the results directory exists.
///
/// The domain extractor is optional, so its absence is reported but does not
/// block readiness.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<B>(State(state): State<HandlerState<B>>) -> Response
where
    B: GenerationBackend + 'static,
{
    let results_dir = state.store.results_dir();
    let storage_ready = results_dir.exists() && results_dir.is_dir();

    let context = state.pipeline.context();
    let components = ComponentStatus {
        http: HEALSUMM_STATUS_READY.to_string(),
        storage: if storage_ready {
            HEALSUMM_STATUS_READY
        } else {
            HEALSUMM_STATUS_ERROR
        }
        .to_string(),
        backend: state.backend_kind().to_string(),
        entity_extractor: context.primary_name().to_string(),
        domain_extractor: if context.has_domain_extractor() {
            "enabled"
        } else {
            "disabled"
        }
        .to_string(),
    };

    let (status_code, status_msg) = if storage_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, HEALSUMM_STATUS_NOT_READY)
    };

    let mut headers = HeaderMap::new();
    headers.insert(HEALSUMM_STATUS_HEADER, HeaderValue::from_static(status_msg));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg.to_string(),
            components,
        }),
    )
        .into_response()
}
