use tracing::debug;

use super::types::{RiskAssessment, RiskFlags, RiskLevel};
use crate::constants::{
    ESCALATION_COVERAGE_THRESHOLD, FKGL_ESCALATION_THRESHOLD, FKGL_HARD_THRESHOLD,
};
use crate::evaluation::EvaluationResult;

/// Thresholds owned by the risk aggregator.
///
/// The coverage flag threshold lives in
/// [`EvaluationThresholds`](crate::evaluation::EvaluationThresholds); this
/// policy only reads the resulting `entity_coverage_low` flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskPolicy {
    /// FKGL strictly above this raises `hard_readability`.
    pub fkgl_hard: f64,
    /// FKGL strictly above this escalates.
    pub fkgl_escalation: f64,
    /// Coverage strictly below this escalates.
    pub escalation_coverage: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            fkgl_hard: FKGL_HARD_THRESHOLD,
            fkgl_escalation: FKGL_ESCALATION_THRESHOLD,
            escalation_coverage: ESCALATION_COVERAGE_THRESHOLD,
        }
    }
}

/// Folds evaluation metrics and summary length into a [`RiskAssessment`].
pub fn compute_risk(
    policy: &RiskPolicy,
    evaluation: &EvaluationResult,
    word_count: usize,
    target_min: usize,
    target_max: usize,
) -> RiskAssessment {
    let length_violation = !(target_min..=target_max).contains(&word_count);

    let flags = RiskFlags {
        missing_numbers: evaluation.missing_numbers(),
        low_entity_coverage: evaluation.entity_coverage_low,
        hard_readability: evaluation.fkgl > policy.fkgl_hard,
        hallucination: evaluation.hallucination_flag(),
        toxicity: false,
        length_violation,
    };

    let risk_score = flags.score();
    let risk_level = RiskLevel::from_score(risk_score);

    let escalate = risk_level == RiskLevel::High
        || evaluation.entity_coverage < policy.escalation_coverage
        || flags.length_violation
        || flags.hallucination
        || evaluation.fkgl > policy.fkgl_escalation;

    debug!(
        risk_score,
        risk_level = %risk_level,
        escalate,
        word_count,
        "Computed risk"
    );

    RiskAssessment {
        flags,
        risk_score,
        risk_level,
        escalate,
    }
}
