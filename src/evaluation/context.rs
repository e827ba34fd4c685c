use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use crate::constants::ENTITY_COVERAGE_THRESHOLD;
use crate::extraction::{
    EntityExtractor, FleschScorer, LexiconEntityExtractor, PatternEntityExtractor,
    ReadabilityScorer,
};
use crate::text::normalize_entity;

/// Thresholds applied while evaluating (the looser half of each risk pair).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationThresholds {
    /// Coverage strictly below this sets `entity_coverage_low`.
    pub entity_coverage: f64,
}

impl Default for EvaluationThresholds {
    fn default() -> Self {
        Self {
            entity_coverage: ENTITY_COVERAGE_THRESHOLD,
        }
    }
}

impl EvaluationThresholds {
    pub fn is_low_coverage(&self, coverage: f64) -> bool {
        coverage < self.entity_coverage
    }
}

/// Extractor and scorer handles shared by every evaluation.
///
/// Whether a domain extractor is present is fixed at construction; evaluations
/// never probe for it again.
#[derive(Debug)]
pub struct EvaluationContext {
    primary: Box<dyn EntityExtractor>,
    secondary: Option<Box<dyn EntityExtractor>>,
    readability: Box<dyn ReadabilityScorer>,
    thresholds: EvaluationThresholds,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new(
            Box::new(PatternEntityExtractor::new()),
            Box::new(FleschScorer::new()),
        )
    }
}

impl EvaluationContext {
    pub fn new(primary: Box<dyn EntityExtractor>, readability: Box<dyn ReadabilityScorer>) -> Self {
        Self {
            primary,
            secondary: None,
            readability,
            thresholds: EvaluationThresholds::default(),
        }
    }

    /// Default extractors, plus the domain lexicon at `lexicon` when it loads.
    ///
    /// A missing or unreadable lexicon is logged and leaves the domain
    /// extractor disabled.
    pub fn with_optional_lexicon(lexicon: Option<&Path>) -> Self {
        let context = Self::default();
        let Some(path) = lexicon else {
            info!("No domain lexicon configured, domain extractor disabled");
            return context;
        };

        match LexiconEntityExtractor::load(path) {
            Ok(extractor) => context.with_secondary(Box::new(extractor)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Domain extractor unavailable");
                context
            }
        }
    }

    pub fn with_secondary(mut self, secondary: Box<dyn EntityExtractor>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_thresholds(mut self, thresholds: EvaluationThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> &EvaluationThresholds {
        &self.thresholds
    }

    pub fn has_domain_extractor(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn primary_name(&self) -> &'static str {
        self.primary.name()
    }

    pub fn readability(&self) -> &dyn ReadabilityScorer {
        self.readability.as_ref()
    }

    /// Normalized entity texts of `text` that take part in coverage checks.
    pub fn entity_set(&self, text: &str) -> BTreeSet<String> {
        let mut set: BTreeSet<String> = self
            .primary
            .extract(text)
            .into_iter()
            .filter(|e| e.label.is_key())
            .map(|e| normalize_entity(&e.text))
            .collect();

        if let Some(secondary) = &self.secondary {
            set.extend(
                secondary
                    .extract(text)
                    .into_iter()
                    .map(|e| normalize_entity(&e.text)),
            );
        }

        set.retain(|e| !e.is_empty());
        set
    }
}
