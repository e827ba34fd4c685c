use std::collections::BTreeSet;

use tracing::debug;

use super::context::EvaluationContext;
use super::overlap::overlap_scores;
use super::types::{EvaluationResult, HallucinationReport, NumericReport};
use crate::extraction::Readability;
use crate::text::{extract_numbers, round_to};

/// Scores `summary` against `original` (and `reference`, when given).
pub fn evaluate(
    ctx: &EvaluationContext,
    original: &str,
    summary: &str,
    reference: Option<&str>,
) -> EvaluationResult {
    let readability = readability_scores(ctx, summary);

    let original_entities = ctx.entity_set(original);
    let summary_entities = ctx.entity_set(summary);

    let coverage = coverage_of(&original_entities, &summary_entities, summary);
    let hallucination = hallucinations_of(&original_entities, &summary_entities, original);
    let numeric = numeric_consistency(original, summary);
    let overlap = reference.and_then(|r| overlap_scores(summary, r));

    debug!(
        fkgl = readability.fkgl,
        coverage,
        original_entities = original_entities.len(),
        hallucinated = hallucination.count,
        missing_numbers = numeric.missing_numbers.len(),
        "Evaluated summary"
    );

    EvaluationResult {
        fkgl: readability.fkgl,
        fre: readability.fre,
        entity_coverage: coverage,
        entity_coverage_low: ctx.thresholds().is_low_coverage(coverage),
        hallucination,
        numeric,
        overlap,
    }
}

/// Readability of `text`, rounded to two decimals.
pub fn readability_scores(ctx: &EvaluationContext, text: &str) -> Readability {
    let raw = ctx.readability().score(text);
    Readability {
        fkgl: round_to(raw.fkgl, 2),
        fre: round_to(raw.fre, 2),
    }
}

/// Fraction of the original's entities that reappear in the summary.
///
/// Returns `1.0` when the original has no qualifying entities.
pub fn entity_coverage(ctx: &EvaluationContext, original: &str, summary: &str) -> f64 {
    coverage_of(&ctx.entity_set(original), &ctx.entity_set(summary), summary)
}

/// Summary entities absent from the original's entities and text.
pub fn hallucination_check(
    ctx: &EvaluationContext,
    original: &str,
    summary: &str,
) -> HallucinationReport {
    hallucinations_of(&ctx.entity_set(original), &ctx.entity_set(summary), original)
}

/// Numeric tokens of `original` that do not appear verbatim in `summary`.
pub fn numeric_consistency(original: &str, summary: &str) -> NumericReport {
    let original_numbers = extract_numbers(original);
    let summary_numbers = extract_numbers(summary);
    let missing: Vec<String> = original_numbers
        .difference(&summary_numbers)
        .cloned()
        .collect();

    NumericReport {
        has_missing: !missing.is_empty(),
        original_numbers: original_numbers.into_iter().collect(),
        summary_numbers: summary_numbers.into_iter().collect(),
        missing_numbers: missing,
    }
}

fn coverage_of(original: &BTreeSet<String>, summary: &BTreeSet<String>, summary_text: &str) -> f64 {
    if original.is_empty() {
        return 1.0;
    }

    let summary_lower = summary_text.to_lowercase();
    let covered = original
        .iter()
        .filter(|e| summary.contains(*e) || summary_lower.contains(e.as_str()))
        .count();

    round_to(covered as f64 / original.len() as f64, 4)
}

fn hallucinations_of(
    original: &BTreeSet<String>,
    summary: &BTreeSet<String>,
    original_text: &str,
) -> HallucinationReport {
    let original_lower = original_text.to_lowercase();
    let extra: Vec<String> = summary
        .iter()
        .filter(|e| !original.contains(*e) && !original_lower.contains(e.as_str()))
        .cloned()
        .collect();

    HallucinationReport::from_extra(extra)
}
