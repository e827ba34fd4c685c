use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::{debug, info};

use super::EntityExtractor;
use super::error::ExtractionError;
use super::types::{Entity, EntityLabel};

/// Domain-term extractor backed by a plain-text lexicon.
///
/// The lexicon has one term per line; blank lines and lines starting with `#`
/// are ignored. Matching is case-insensitive on word boundaries and prefers the
/// longest term at each position. Every match is labelled
/// [`EntityLabel::Domain`].
#[derive(Debug, Clone)]
pub struct LexiconEntityExtractor {
    pattern: Regex,
    term_count: usize,
}

impl LexiconEntityExtractor {
    /// Loads the lexicon file at `path`.
    pub fn load(path: &Path) -> Result<Self, ExtractionError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ExtractionError::LexiconRead {
                path: path.to_path_buf(),
                source,
            })?;

        let terms: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if terms.is_empty() {
            return Err(ExtractionError::EmptyLexicon {
                path: path.to_path_buf(),
            });
        }

        let extractor = Self::from_terms(terms)?;
        info!(
            path = %path.display(),
            terms = extractor.term_count,
            "Loaded domain lexicon"
        );
        Ok(extractor)
    }

    /// Builds an extractor from an in-memory term list.
    pub fn from_terms<I, S>(terms: I) -> Result<Self, ExtractionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        terms.dedup();

        if terms.is_empty() {
            return Err(ExtractionError::NoTerms);
        }

        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()?;

        debug!(terms = terms.len(), "Compiled lexicon pattern");

        Ok(Self {
            pattern,
            term_count: terms.len(),
        })
    }

    pub fn term_count(&self) -> usize {
        self.term_count
    }
}

impl EntityExtractor for LexiconEntityExtractor {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn extract(&self, text: &str) -> Vec<Entity> {
        self.pattern
            .find_iter(text)
            .map(|m| Entity::new(m.as_str(), EntityLabel::Domain))
            .collect()
    }
}
