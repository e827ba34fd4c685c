use serde::{Deserialize, Serialize};

/// Summary entities that cannot be traced back to the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallucinationReport {
    /// Normalized entity texts, sorted.
    pub extra_entities: Vec<String>,
    pub count: usize,
    pub hallucination_flag: bool,
}

impl HallucinationReport {
    pub fn from_extra(extra_entities: Vec<String>) -> Self {
        let count = extra_entities.len();
        Self {
            extra_entities,
            count,
            hallucination_flag: count > 0,
        }
    }
}

/// Numeric tokens of both texts and the ones the summary dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericReport {
    pub original_numbers: Vec<String>,
    pub summary_numbers: Vec<String>,
    pub missing_numbers: Vec<String>,
    pub has_missing: bool,
}

/// ROUGE F-measures of the summary against a reference summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapScores {
    pub rouge1_f: f64,
    #[serde(rename = "rougeL_f")]
    pub rouge_l_f: f64,
}

/// All evaluation metrics for one `(original, summary)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Flesch-Kincaid grade of the summary, two decimals.
    pub fkgl: f64,
    /// Flesch reading ease of the summary, two decimals.
    pub fre: f64,
    /// Fraction of original entities present in the summary, four decimals.
    pub entity_coverage: f64,
    pub entity_coverage_low: bool,
    pub hallucination: HallucinationReport,
    pub numeric: NumericReport,
    /// Present only when a reference summary was supplied.
    pub overlap: Option<OverlapScores>,
}

impl EvaluationResult {
    pub fn hallucination_flag(&self) -> bool {
        self.hallucination.hallucination_flag
    }

    pub fn hallucinated_entities(&self) -> &[String] {
        &self.hallucination.extra_entities
    }

    pub fn missing_numbers(&self) -> bool {
        self.numeric.has_missing
    }
}
