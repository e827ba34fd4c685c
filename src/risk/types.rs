use serde::{Deserialize, Serialize};

/// Aggregate risk band derived from the flag count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `0 → Low`, `1 → Medium`, `2+ → High`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => RiskLevel::Low,
            1 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six risk flags. Every flag is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlags {
    pub missing_numbers: bool,
    pub low_entity_coverage: bool,
    pub hard_readability: bool,
    pub hallucination: bool,
    /// No toxicity classifier is wired in; always `false`.
    pub toxicity: bool,
    pub length_violation: bool,
}

impl RiskFlags {
    /// Number of raised flags.
    pub fn score(&self) -> u8 {
        [
            self.missing_numbers,
            self.low_entity_coverage,
            self.hard_readability,
            self.hallucination,
            self.toxicity,
            self.length_violation,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count() as u8
    }
}

/// Flags, score, level and escalation verdict for one summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub flags: RiskFlags,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub escalate: bool,
}

impl RiskAssessment {
    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match (self.risk_level, self.escalate) {
            (RiskLevel::Low, false) => "LOW",
            (RiskLevel::Low, true) => "LOW_ESCALATED",
            (RiskLevel::Medium, false) => "MEDIUM",
            (RiskLevel::Medium, true) => "MEDIUM_ESCALATED",
            (RiskLevel::High, _) => "HIGH_ESCALATED",
        }
    }
}
