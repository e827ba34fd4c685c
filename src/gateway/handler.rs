use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::constants::INTERACTIVE_ARTICLE_ID;
use crate::gateway::error::GatewayError;
use crate::gateway::page::INDEX_HTML;
use crate::gateway::state::HandlerState;
use crate::gateway::status::{HEALSUMM_STATUS_HEADER, HEALSUMM_STATUS_STORED};
use crate::generation::GenerationBackend;
use crate::pipeline::{Article, ResultRecord, SkippedArticle};
use crate::storage::ArticleSource;

/// Body of `POST /api/summarize`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,

    /// Optional human reference summary for overlap scores.
    #[serde(default)]
    pub reference: Option<String>,
}

/// Body returned by `POST /api/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub count: usize,
    pub records: Vec<ResultRecord>,
    pub skipped: Vec<SkippedArticle>,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[instrument(skip_all, fields(words = tracing::field::Empty))]
pub async fn summarize_handler<B>(
    State(state): State<HandlerState<B>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    B: GenerationBackend + 'static,
{
    let Json(request) =
        payload.map_err(|e| GatewayError::InvalidRequest(format!("Invalid request body: {e}")))?;

    let text = request.text.trim();
    if text.is_empty() {
        return Err(GatewayError::InvalidRequest("No text provided.".to_string()));
    }

    let article = Article::new(INTERACTIVE_ARTICLE_ID, text);
    tracing::Span::current().record("words", article.word_count);

    let reference = request
        .reference
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());
    let record = state.pipeline.process(&article, reference).await?;

    let store = state.store.clone();
    let stored = record.clone();
    let total = tokio::task::spawn_blocking(move || store.append(stored))
        .await
        .map_err(|e| GatewayError::InternalError(format!("store task failed: {e}")))??;

    info!(total, risk_level = %record.risk_level, "Interactive summary stored");

    let mut headers = HeaderMap::new();
    headers.insert(
        HEALSUMM_STATUS_HEADER,
        HeaderValue::from_static(HEALSUMM_STATUS_STORED),
    );
    Ok((StatusCode::OK, headers, Json(record)).into_response())
}

#[instrument(skip_all)]
pub async fn batch_handler<B>(
    State(state): State<HandlerState<B>>,
) -> Result<Json<BatchResponse>, GatewayError>
where
    B: GenerationBackend + 'static,
{
    let source = state.articles.clone();
    let articles = tokio::task::spawn_blocking(move || source.load())
        .await
        .map_err(|e| GatewayError::InternalError(format!("article loader failed: {e}")))??;

    if articles.is_empty() {
        warn!(dir = %state.articles.dir().display(), "Batch requested with no articles");
        return Err(GatewayError::NoArticles(format!(
            "No .txt files in {}",
            state.articles.dir().display()
        )));
    }

    let report = state.pipeline.process_batch(&articles).await?;

    let store = state.store.clone();
    let records = report.records.clone();
    tokio::task::spawn_blocking(move || {
        store.save_all(&records)?;
        store.save_evaluation_csv(&records)
    })
    .await
    .map_err(|e| GatewayError::InternalError(format!("store task failed: {e}")))??;

    Ok(Json(BatchResponse {
        count: report.count(),
        records: report.records,
        skipped: report.skipped,
    }))
}

#[instrument(skip_all)]
pub async fn results_handler<B>(
    State(state): State<HandlerState<B>>,
) -> Result<Json<Vec<ResultRecord>>, GatewayError>
where
    B: GenerationBackend + 'static,
{
    let store = state.store.clone();
    let records = tokio::task::spawn_blocking(move || store.load())
        .await
        .map_err(|e| GatewayError::InternalError(format!("store task failed: {e}")))??;
    Ok(Json(records))
}
