//! Per-article orchestration: generate, evaluate, assess risk.
//!
//! [`Pipeline::process`] runs one article through the
//! [`SummaryController`](crate::generation::SummaryController),
//! [`evaluate`](crate::evaluation::evaluate) and
//! [`compute_risk`](crate::risk::compute_risk) and folds the results into a
//! [`ResultRecord`].
//!
//! # Batches
//!
//! [`Pipeline::process_batch`] processes articles with bounded concurrency and
//! keeps input order. Gate rejections are skipped and reported; a backend
//! error aborts the whole batch.

pub mod types;


pub use types::{Article, BatchReport, ResultRecord, SkippedArticle};

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream;
use tracing::{info, instrument, warn};

use crate::evaluation::{EvaluationContext, evaluate};
use crate::generation::{GenerationBackend, GenerationResult, SummaryController};
use crate::risk::{RiskPolicy, compute_risk};

/// Composes generation, evaluation and risk aggregation.
#[derive(Debug)]
pub struct Pipeline<B: GenerationBackend> {
    controller: SummaryController<B>,
    context: Arc<EvaluationContext>,
    risk_policy: RiskPolicy,
    concurrency: usize,
}

impl<B: GenerationBackend> Pipeline<B> {
    pub fn new(controller: SummaryController<B>, context: Arc<EvaluationContext>) -> Self {
        Self {
            controller,
            context,
            risk_policy: RiskPolicy::default(),
            concurrency: 1,
        }
    }

    pub fn with_risk_policy(mut self, risk_policy: RiskPolicy) -> Self {
        self.risk_policy = risk_policy;
        self
    }

    /// Articles in flight at once during a batch (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn controller(&self) -> &SummaryController<B> {
        &self.controller
    }

    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Summarizes, evaluates and risk-scores one article.
    #[instrument(skip(self, article, reference), fields(article_id = %article.id, words = article.word_count))]
    pub async fn process(
        &self,
        article: &Article,
        reference: Option<&str>,
    ) -> GenerationResult<ResultRecord> {
        let summary = self.controller.summarize(&article.text).await?;
        let evaluation = evaluate(&self.context, &article.text, &summary.text, reference);
        let risk = compute_risk(
            &self.risk_policy,
            &evaluation,
            summary.word_count,
            summary.target.min_words,
            summary.target.max_words,
        );

        info!(
            retries = summary.retries,
            word_count = summary.word_count,
            risk_level = %risk.risk_level,
            escalate = risk.escalate,
            "Article processed"
        );

        Ok(ResultRecord::new(
            article.id.clone(),
            &summary,
            &evaluation,
            &risk,
        ))
    }

    /// Processes `articles` in order, skipping gate rejections.
    #[instrument(skip_all, fields(articles = articles.len(), concurrency = self.concurrency))]
    pub async fn process_batch(&self, articles: &[Article]) -> GenerationResult<BatchReport> {
        let pending: Vec<_> = articles.iter().map(|a| self.process_tagged(a)).collect();
        let mut outcomes = stream::iter(pending).buffered(self.concurrency);

        let mut report = BatchReport::default();
        while let Some((article, outcome)) = outcomes.next().await {
            match outcome {
                Ok(record) => report.records.push(record),
                Err(e) if e.is_rejection() => {
                    warn!(article_id = %article.id, reason = %e, "Skipping article");
                    report.skipped.push(SkippedArticle {
                        article_id: article.id.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            processed = report.records.len(),
            skipped = report.skipped.len(),
            "Batch complete"
        );

        Ok(report)
    }

    async fn process_tagged<'a>(
        &self,
        article: &'a Article,
    ) -> (&'a Article, GenerationResult<ResultRecord>) {
        (article, self.process(article, None).await)
    }
}
