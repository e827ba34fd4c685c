use crate::constants::{HEALTH_KEYWORDS, MIN_HEALTH_KEYWORD_HITS, MIN_INPUT_WORDS};

/// Thresholds and vocabulary for [`ContentGate`](super::ContentGate).
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub min_input_words: usize,

    pub min_keyword_hits: usize,

    /// Lowercase terms; duplicates are removed on construction.
    pub vocabulary: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_input_words: MIN_INPUT_WORDS,
            min_keyword_hits: MIN_HEALTH_KEYWORD_HITS,
            vocabulary: HEALTH_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl GateConfig {
    pub fn with_min_input_words(mut self, min_input_words: usize) -> Self {
        self.min_input_words = min_input_words;
        self
    }

    pub fn with_min_keyword_hits(mut self, min_keyword_hits: usize) -> Self {
        self.min_keyword_hits = min_keyword_hits;
        self
    }

    pub fn with_vocabulary<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        vocabulary.sort();
        vocabulary.dedup();
        self.vocabulary = vocabulary;
        self
    }
}
