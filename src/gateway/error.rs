use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::gateway::status::{HEALSUMM_STATUS_ERROR, HEALSUMM_STATUS_HEADER};
use crate::generation::GenerationError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Malformed body or missing text.
    #[error("{0}")]
    InvalidRequest(String),

    /// Article below the minimum word count.
    #[error("{0}")]
    InputTooShort(String),

    /// Article refused by the health-content gate.
    #[error("{0}")]
    NotHealthContent(String),

    #[error("{0}")]
    NoArticles(String),

    #[error("generation backend error: {0}")]
    BackendFailed(String),

    #[error("storage error: {0}")]
    StorageFailed(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<GenerationError> for GatewayError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InputTooShort { .. } => GatewayError::InputTooShort(err.to_string()),
            GenerationError::NotHealthContent { .. } => {
                GatewayError::NotHealthContent(err.to_string())
            }
            GenerationError::Backend(inner) => GatewayError::BackendFailed(inner.to_string()),
        }
    }
}

impl From<StorageError> for GatewayError {
    fn from(err: StorageError) -> Self {
        GatewayError::StorageFailed(err.to_string())
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Same value as the `X-HealSumm-Status` header.
    pub kind: String,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::InputTooShort(_) | GatewayError::NotHealthContent(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            GatewayError::NoArticles(_) => StatusCode::NOT_FOUND,
            GatewayError::BackendFailed(_) => StatusCode::BAD_GATEWAY,
            GatewayError::StorageFailed(_) | GatewayError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "invalid_request",
            GatewayError::InputTooShort(_) => "input_too_short",
            GatewayError::NotHealthContent(_) => "not_health_content",
            GatewayError::NoArticles(_) => "no_articles",
            GatewayError::BackendFailed(_) => "backend_error",
            GatewayError::StorageFailed(_) => "storage_error",
            GatewayError::InternalError(_) => "internal_error",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut headers = HeaderMap::new();
        headers.insert(
            HEALSUMM_STATUS_HEADER,
            HeaderValue::from_str(self.status_label())
                .unwrap_or(HeaderValue::from_static(HEALSUMM_STATUS_ERROR)),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
            kind: self.status_label().to_string(),
        });

        (status, headers, body).into_response()
    }
}
