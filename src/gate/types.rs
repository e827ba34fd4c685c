use serde::Serialize;

/// Outcome of [`ContentGate::admit`](super::ContentGate::admit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AdmissionDecision {
    /// Long enough and on-domain.
    Admitted {
        word_count: usize,
        keyword_hits: usize,
    },
    /// Fewer whitespace tokens than required.
    RejectedTooShort { word_count: usize, minimum: usize },
    /// Not enough distinct health terms.
    RejectedOffDomain {
        keyword_hits: usize,
        required: usize,
    },
}

impl AdmissionDecision {
    /// Returns `true` if admitted.
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionDecision::Admitted { .. })
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            AdmissionDecision::Admitted { .. } => "ADMITTED",
            AdmissionDecision::RejectedTooShort { .. } => "TOO_SHORT",
            AdmissionDecision::RejectedOffDomain { .. } => "OFF_DOMAIN",
        }
    }
}

impl std::fmt::Display for AdmissionDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdmissionDecision::Admitted {
                word_count,
                keyword_hits,
            } => write!(f, "ADMITTED ({} words, {} terms)", word_count, keyword_hits),
            AdmissionDecision::RejectedTooShort {
                word_count,
                minimum,
            } => write!(f, "TOO_SHORT ({} < {} words)", word_count, minimum),
            AdmissionDecision::RejectedOffDomain {
                keyword_hits,
                required,
            } => write!(f, "OFF_DOMAIN ({} < {} terms)", keyword_hits, required),
        }
    }
}
