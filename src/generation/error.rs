use thiserror::Error;

/// Failure of a single backend call.
///
/// Any of these aborts the summarization; the length retry loop never absorbs
/// them.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("backend transport error: {0}")]
    Transport(String),

    #[error("backend returned HTTP {status}")]
    Status { status: u16 },

    #[error("invalid backend response: {reason}")]
    InvalidResponse { reason: String },

    #[error("provider error: {0}")]
    Provider(String),

    #[error("failed to build backend client: {0}")]
    Client(String),
}

impl BackendError {
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            BackendError::Timeout { secs: timeout_secs }
        } else if let Some(status) = error.status() {
            BackendError::Status {
                status: status.as_u16(),
            }
        } else if error.is_decode() {
            BackendError::InvalidResponse {
                reason: error.to_string(),
            }
        } else {
            BackendError::Transport(error.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Article must be at least {minimum} words (got {word_count}).")]
    InputTooShort { word_count: usize, minimum: usize },

    #[error(
        "This doesn't look like a health/medical article. The system only processes health-related content."
    )]
    NotHealthContent { keyword_hits: usize, required: usize },

    #[error("generation backend error: {0}")]
    Backend(#[from] BackendError),
}

impl GenerationError {
    /// Returns `true` for gate rejections (no backend call was made).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GenerationError::InputTooShort { .. } | GenerationError::NotHealthContent { .. }
        )
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;
