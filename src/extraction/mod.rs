//! Entity extraction and readability scoring.
//!
//! The evaluation engine only sees the [`EntityExtractor`] and
//! [`ReadabilityScorer`] traits. Built-in implementations:
//!
//! - [`PatternEntityExtractor`]: rule-based NER (dates, percentages, money,
//!   quantities, cardinals, capitalized spans for organizations, places and people).
//! - [`LexiconEntityExtractor`]: domain terms loaded from a file; used as the
//!   optional secondary extractor.
//! - [`FleschScorer`]: Flesch-Kincaid grade and Flesch reading ease.

pub mod error;
pub mod lexicon;
pub mod pattern;
pub mod readability;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ExtractionError;
pub use lexicon::LexiconEntityExtractor;
pub use pattern::PatternEntityExtractor;
pub use readability::FleschScorer;
pub use types::{Entity, EntityLabel, Readability};

/// Named-entity extraction over raw text.
///
/// Implementations return entities in document order and must not fail; an
/// extractor that cannot process a text returns an empty list.
pub trait EntityExtractor: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs and readiness output.
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str) -> Vec<Entity>;
}

/// Readability scoring over raw text.
pub trait ReadabilityScorer: Send + Sync + std::fmt::Debug {
    fn score(&self, text: &str) -> Readability;
}
