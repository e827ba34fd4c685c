//! Cross-cutting, shared constants.
//!
//! Policy structs ([`RangePolicy`](crate::generation::RangePolicy),
//! [`GateConfig`](crate::gate::GateConfig),
//! [`EvaluationThresholds`](crate::evaluation::EvaluationThresholds),
//! [`RiskPolicy`](crate::risk::RiskPolicy)) take their defaults from here.
//!
//! # Threshold Pairs
//!
//! Coverage and readability each have two thresholds: a looser one that raises a
//! risk flag and a stricter one that forces escalation on its own. They are
//! independent values and must stay that way.

/// Lower summary length as a fraction of the input word count.
pub const SUMMARY_RATIO_LOW: f64 = 0.30;
/// Upper summary length as a fraction of the input word count.
pub const SUMMARY_RATIO_HIGH: f64 = 0.50;
/// Smallest allowed lower bound for a summary, in words.
pub const SUMMARY_FLOOR: usize = 25;
/// Largest allowed bound for a summary, in words.
pub const SUMMARY_CEILING: usize = 200;
/// Minimum gap between the lower and upper target before ceiling clamping.
pub const SUMMARY_MIN_SPAN: usize = 5;

/// Extra generation attempts after the first (total calls = `MAX_RETRIES + 1`).
pub const MAX_RETRIES: u32 = 2;

/// Articles shorter than this (whitespace tokens) are rejected.
pub const MIN_INPUT_WORDS: usize = 30;
/// Distinct health terms required to admit an article.
pub const MIN_HEALTH_KEYWORD_HITS: usize = 5;

/// Coverage below this raises the `low_entity_coverage` flag.
pub const ENTITY_COVERAGE_THRESHOLD: f64 = 0.6;
/// Coverage below this escalates regardless of risk level.
pub const ESCALATION_COVERAGE_THRESHOLD: f64 = 0.5;
/// FKGL above this raises the `hard_readability` flag.
pub const FKGL_HARD_THRESHOLD: f64 = 10.0;
/// FKGL above this escalates regardless of risk level.
pub const FKGL_ESCALATION_THRESHOLD: f64 = 12.0;

/// Default generation model (Ollama tag).
pub const DEFAULT_MODEL: &str = "gemma3:4b";
/// Default Ollama endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
/// Per-request generation timeout.
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 400;

/// Article id used for interactive (single-text) requests.
pub const INTERACTIVE_ARTICLE_ID: &str = "interactive";

/// Fixed health vocabulary for the content gate.
///
/// Entries are matched literally against lowercased text; plural forms only
/// match when listed.
pub const HEALTH_KEYWORDS: &[&str] = &[
    "patient",
    "patients",
    "clinical",
    "treatment",
    "therapy",
    "disease",
    "diagnosis",
    "symptom",
    "symptoms",
    "medical",
    "health",
    "healthcare",
    "hospital",
    "physician",
    "doctor",
    "surgery",
    "drug",
    "drugs",
    "medication",
    "medicine",
    "vaccine",
    "vaccination",
    "immunization",
    "infection",
    "virus",
    "chronic",
    "acute",
    "mortality",
    "prevalence",
    "incidence",
    "epidemic",
    "pandemic",
    "cancer",
    "tumor",
    "diabetes",
    "cardiovascular",
    "cardiac",
    "stroke",
    "respiratory",
    "pulmonary",
    "neurological",
    "psychiatric",
    "mental",
    "depression",
    "anxiety",
    "obesity",
    "hypertension",
    "insulin",
    "antibiotic",
    "chemotherapy",
    "transplant",
    "biomarker",
    "pharmacology",
    "efficacy",
    "adverse",
    "placebo",
    "randomized",
    "controlled",
    "trial",
    "cohort",
    "epidemiology",
    "public health",
    "who",
    "cdc",
    "nih",
    "fda",
    "blood",
    "cell",
    "cells",
    "organ",
    "tissue",
    "protein",
    "gene",
    "immune",
    "immunity",
    "inflammation",
    "disorder",
    "syndrome",
    "hospitalization",
    "icu",
    "telehealth",
    "screening",
    "study",
    "studies",
    "research",
    "participants",
];
