use serde::{Deserialize, Serialize};

use crate::evaluation::EvaluationResult;
use crate::generation::Summary;
use crate::risk::{RiskAssessment, RiskLevel};
use crate::text::count_words;

/// Source text with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub text: String,
    pub word_count: usize,
}

impl Article {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            word_count: count_words(&text),
            text,
        }
    }
}

/// Persisted and returned unit: one summarized, evaluated, risk-scored article.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub article_id: String,
    pub summary: String,
    pub word_count: usize,
    /// `"lo-hi"`.
    pub target_range: String,
    pub retries: u32,
    pub fkgl: f64,
    pub fre: f64,
    pub entity_coverage: f64,
    pub missing_numbers: bool,
    pub hallucination_flag: bool,
    pub hallucinated_entities: Vec<String>,
    pub risk_level: RiskLevel,
    pub escalate: bool,
}

impl ResultRecord {
    pub fn new(
        article_id: impl Into<String>,
        summary: &Summary,
        evaluation: &EvaluationResult,
        risk: &RiskAssessment,
    ) -> Self {
        Self {
            article_id: article_id.into(),
            summary: summary.text.clone(),
            word_count: summary.word_count,
            target_range: summary.target.to_string(),
            retries: summary.retries,
            fkgl: evaluation.fkgl,
            fre: evaluation.fre,
            entity_coverage: evaluation.entity_coverage,
            missing_numbers: evaluation.missing_numbers(),
            hallucination_flag: evaluation.hallucination_flag(),
            hallucinated_entities: evaluation.hallucinated_entities().to_vec(),
            risk_level: risk.risk_level,
            escalate: risk.escalate,
        }
    }
}

/// Article left out of a batch by the content gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedArticle {
    pub article_id: String,
    pub reason: String,
}

/// Output of [`Pipeline::process_batch`](super::Pipeline::process_batch), in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub records: Vec<ResultRecord>,
    pub skipped: Vec<SkippedArticle>,
}

impl BatchReport {
    pub fn count(&self) -> usize {
        self.records.len()
    }
}
