//! Content gate: admission check run before any generation call.
//!
//! The gate is a keyword heuristic, not a classifier. An article is admitted when
//! it has at least [`GateConfig::min_input_words`] whitespace tokens and matches at
//! least [`GateConfig::min_keyword_hits`] distinct terms of the health vocabulary.
//!
//! # Matching
//!
//! A term counts once if it appears either as a whole whitespace-delimited word
//! or anywhere as a substring of the lowercased text. Substring matching means
//! short terms such as `"who"` or `"cell"` also hit inside longer words
//! (`"whole"`, `"excellent"`). Plurals and stems are only matched when the
//! vocabulary lists them. Both effects are accepted: borderline texts may be
//! over- or under-admitted.

pub mod config;
pub mod types;


pub use config::GateConfig;
pub use types::AdmissionDecision;

use std::collections::HashSet;

use tracing::debug;

use crate::text::count_words;

/// Keyword-based admission gate.
#[derive(Debug, Clone, Default)]
pub struct ContentGate {
    config: GateConfig,
}

impl ContentGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Classifies `text` as admitted, too short, or off-domain.
    pub fn admit(&self, text: &str) -> AdmissionDecision {
        let word_count = count_words(text);
        if word_count < self.config.min_input_words {
            debug!(
                word_count,
                minimum = self.config.min_input_words,
                "Rejected: input too short"
            );
            return AdmissionDecision::RejectedTooShort {
                word_count,
                minimum: self.config.min_input_words,
            };
        }

        let keyword_hits = self.keyword_hits(text);
        if keyword_hits < self.config.min_keyword_hits {
            debug!(
                keyword_hits,
                required = self.config.min_keyword_hits,
                "Rejected: not health content"
            );
            return AdmissionDecision::RejectedOffDomain {
                keyword_hits,
                required: self.config.min_keyword_hits,
            };
        }

        AdmissionDecision::Admitted {
            word_count,
            keyword_hits,
        }
    }

    /// Number of distinct vocabulary terms found in `text`.
    pub fn keyword_hits(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        let words: HashSet<&str> = lower.split_whitespace().collect();

        self.config
            .vocabulary
            .iter()
            .filter(|term| words.contains(term.as_str()) || lower.contains(term.as_str()))
            .count()
    }
}
