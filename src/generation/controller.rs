use tracing::{debug, info, instrument, warn};

use super::backend::GenerationBackend;
use super::error::{GenerationError, GenerationResult};
use super::prompt::{SYSTEM_PROMPT, build_prompt};
use super::target::{RangePolicy, TargetRange};
use super::types::{ControllerState, GenerationAttempt, Summary, SummaryOutcome};
use crate::constants::MAX_RETRIES;
use crate::gate::{AdmissionDecision, ContentGate};
use crate::text::{count_words, strip_markup};

/// Drives the length-enforcing retry loop against a [`GenerationBackend`].
#[derive(Debug, Clone)]
pub struct SummaryController<B: GenerationBackend> {
    backend: B,
    gate: ContentGate,
    range_policy: RangePolicy,
    max_retries: u32,
}

impl<B: GenerationBackend> SummaryController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            gate: ContentGate::default(),
            range_policy: RangePolicy::default(),
            max_retries: MAX_RETRIES,
        }
    }

    pub fn with_gate(mut self, gate: ContentGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn gate(&self) -> &ContentGate {
        &self.gate
    }

    pub fn range_policy(&self) -> &RangePolicy {
        &self.range_policy
    }

    /// Summarizes `article`, retrying while the word count misses the target.
    ///
    /// Gate rejections return before any backend call. A backend error aborts
    /// immediately. When every attempt misses, the last attempt is returned
    /// with [`SummaryOutcome::Exhausted`].
    #[instrument(skip_all, fields(backend = self.backend.kind()))]
    pub async fn summarize(&self, article: &str) -> GenerationResult<Summary> {
        let input_words = self.admit(article)?;
        let target = self.range_policy.bounds(input_words);

        debug!(input_words, target = %target, "Article admitted");

        let mut state = ControllerState::Init;
        loop {
            state = match state {
                ControllerState::Init => ControllerState::Attempting { attempt: 0 },
                ControllerState::Attempting { attempt } => {
                    let generated = self.run_attempt(article, target, attempt).await?;
                    ControllerState::after_attempt(generated, target, self.max_retries)
                }
                ControllerState::Accepted(generated) => {
                    info!(
                        retries = generated.attempt,
                        word_count = generated.word_count,
                        "Summary accepted"
                    );
                    return Ok(Summary::from_attempt(generated, target, SummaryOutcome::Accepted));
                }
                ControllerState::Exhausted(generated) => {
                    warn!(
                        retries = generated.attempt,
                        word_count = generated.word_count,
                        target = %target,
                        "Retries exhausted, returning last attempt"
                    );
                    return Ok(Summary::from_attempt(generated, target, SummaryOutcome::Exhausted));
                }
            };
        }
    }

    fn admit(&self, article: &str) -> GenerationResult<usize> {
        match self.gate.admit(article) {
            AdmissionDecision::Admitted { word_count, .. } => Ok(word_count),
            AdmissionDecision::RejectedTooShort {
                word_count,
                minimum,
            } => {
                debug!(word_count, minimum, "Rejected: too short");
                Err(GenerationError::InputTooShort {
                    word_count,
                    minimum,
                })
            }
            AdmissionDecision::RejectedOffDomain {
                keyword_hits,
                required,
            } => {
                debug!(keyword_hits, required, "Rejected: off domain");
                Err(GenerationError::NotHealthContent {
                    keyword_hits,
                    required,
                })
            }
        }
    }

    async fn run_attempt(
        &self,
        article: &str,
        target: TargetRange,
        attempt: u32,
    ) -> GenerationResult<GenerationAttempt> {
        let prompt = build_prompt(article, target, attempt);
        let raw = self.backend.generate(SYSTEM_PROMPT, &prompt).await?;
        let text = strip_markup(&raw);
        let word_count = count_words(&text);

        debug!(
            attempt,
            word_count,
            min_words = target.min_words,
            max_words = target.max_words,
            "Generation attempt"
        );

        Ok(GenerationAttempt {
            attempt,
            text,
            word_count,
        })
    }
}
