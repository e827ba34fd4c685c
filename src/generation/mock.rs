//! Scripted in-memory backend for tests.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use super::backend::GenerationBackend;
use super::error::BackendError;

/// One recorded `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
}

#[derive(Debug, Default)]
struct MockState {
    script: VecDeque<Result<String, BackendError>>,
    fallback: Option<String>,
    calls: Vec<RecordedCall>,
}

/// Backend that replays scripted replies and records every call.
///
/// Clones share state, so a test can keep a handle after moving the backend
/// into a controller. Once the script runs out the fallback reply is used; with
/// no fallback the call fails with [`BackendError::InvalidResponse`].
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answers with `reply`.
    pub fn always(reply: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.state.lock().fallback = Some(reply.into());
        backend
    }

    /// Answers with `replies` in order.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = Self::new();
        for reply in replies {
            backend.push_reply(reply);
        }
        backend
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        self.state.lock().script.push_back(Ok(reply.into()));
    }

    pub fn push_error(&self, error: BackendError) {
        self.state.lock().script.push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }
}

impl GenerationBackend for MockBackend {
    fn kind(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, BackendError> {
        let mut state = self.state.lock();
        state.calls.push(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });

        match state.script.pop_front() {
            Some(reply) => reply,
            None => state
                .fallback
                .clone()
                .ok_or_else(|| BackendError::InvalidResponse {
                    reason: "mock script exhausted".to_string(),
                }),
        }
    }
}
