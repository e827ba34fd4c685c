use serde::{Deserialize, Serialize};

use super::target::TargetRange;

/// One backend call and its cleaned output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationAttempt {
    /// 0-based ordinal.
    pub attempt: u32,
    pub text: String,
    pub word_count: usize,
}

/// How the controller finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// An attempt landed inside the target range.
    Accepted,
    /// Every attempt missed; the last one is returned as best effort.
    Exhausted,
}

/// Final summary returned by [`SummaryController::summarize`](super::SummaryController::summarize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub word_count: usize,
    /// Index of the attempt that produced `text`.
    pub retries: u32,
    pub target: TargetRange,
    pub outcome: SummaryOutcome,
}

impl Summary {
    pub fn from_attempt(attempt: GenerationAttempt, target: TargetRange, outcome: SummaryOutcome) -> Self {
        Self {
            text: attempt.text,
            word_count: attempt.word_count,
            retries: attempt.attempt,
            target,
            outcome,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome == SummaryOutcome::Accepted
    }
}

/// Retry loop state.
///
/// `Init → Attempting(0) → Accepted | Attempting(n + 1) | Exhausted`.
/// Terminal states carry the attempt that ended the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
    Init,
    Attempting { attempt: u32 },
    Accepted(GenerationAttempt),
    Exhausted(GenerationAttempt),
}

impl ControllerState {
    /// Transition after `generated` was produced by the current attempt.
    pub fn after_attempt(generated: GenerationAttempt, target: TargetRange, max_retries: u32) -> Self {
        if target.contains(generated.word_count) {
            ControllerState::Accepted(generated)
        } else if generated.attempt < max_retries {
            ControllerState::Attempting {
                attempt: generated.attempt + 1,
            }
        } else {
            ControllerState::Exhausted(generated)
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ControllerState::Accepted(_) | ControllerState::Exhausted(_)
        )
    }
}
