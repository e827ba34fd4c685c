//! Summary evaluation: readability, entity coverage, hallucination, numeric
//! consistency and optional reference overlap.
//!
//! Every metric is a pure function of `(original, summary)` plus the immutable
//! [`EvaluationContext`], which owns the extractor and scorer handles. The
//! context is built once at startup and shared by reference.
//!
//! # Entity Sets
//!
//! Entities from the primary extractor are kept when their label is one of
//! [`EntityLabel::KEY_LABELS`](crate::extraction::EntityLabel::KEY_LABELS).
//! Entities from the optional secondary (domain) extractor are always kept.
//! All spans are compared after [`normalize_entity`](crate::text::normalize_entity).

pub mod context;
pub mod engine;
pub mod overlap;
pub mod types;


pub use context::{EvaluationContext, EvaluationThresholds};
pub use engine::{
    entity_coverage, evaluate, hallucination_check, numeric_consistency, readability_scores,
};
pub use overlap::{overlap_scores, tokenize_for_overlap};
pub use types::{EvaluationResult, HallucinationReport, NumericReport, OverlapScores};
