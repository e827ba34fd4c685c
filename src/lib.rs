//! HealSumm library crate (used by the server binary and integration tests).
//!
//! Summarizes health articles with a local or hosted LLM, enforces a target
//! length through bounded retries, and scores each summary for readability,
//! entity coverage, hallucinated entities and dropped numbers before folding
//! the signals into a risk level.
//!
//! # Public API Surface
//!
//! ## Generation
//! - [`SummaryController`] - Admission gate plus the length-enforcing retry loop
//! - [`GenerationBackend`], [`Backend`], [`OllamaBackend`], [`GenaiBackend`] - LLM backends
//! - [`summary_bounds`], [`TargetRange`] - Target length computation
//!
//! ## Evaluation & Risk
//! - [`evaluate`], [`EvaluationContext`] - Readability, coverage, hallucination and numeric checks
//! - [`compute_risk`], [`RiskLevel`] - Flag aggregation and escalation
//!
//! ## Orchestration & Persistence
//! - [`Pipeline`] - Per-article and batch processing
//! - [`ResultStore`], [`load_articles`] - JSON/CSV results and article input
//!
//! ## Test/Mock Support
//! [`MockBackend`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod evaluation;
pub mod extraction;
pub mod gate;
pub mod gateway;
pub mod generation;
pub mod pipeline;
pub mod risk;
pub mod storage;
pub mod text;

pub use config::{Config, ConfigError};
pub use evaluation::{
    EvaluationContext, EvaluationResult, EvaluationThresholds, entity_coverage, evaluate,
    hallucination_check, numeric_consistency,
};
pub use extraction::{
    Entity, EntityExtractor, EntityLabel, FleschScorer, LexiconEntityExtractor,
    PatternEntityExtractor, ReadabilityScorer,
};
pub use gate::{AdmissionDecision, ContentGate, GateConfig};
pub use gateway::{GatewayError, HandlerState, create_router_with_state};
#[cfg(any(test, feature = "mock"))]
pub use generation::MockBackend;
pub use generation::{
    Backend, BackendConfig, BackendError, BackendKind, GenaiBackend, GenerationBackend,
    GenerationError, OllamaBackend, Summary, SummaryController, TargetRange, summary_bounds,
};
pub use pipeline::{Article, BatchReport, Pipeline, ResultRecord};
pub use risk::{RiskAssessment, RiskLevel, RiskPolicy, compute_risk};
pub use storage::{ArticleSource, DirectorySource, ResultStore, StorageError, load_articles};
pub use text::{count_words, extract_numbers};
