use std::time::Duration;

use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use tracing::debug;

use super::backend::GenerationBackend;
use super::config::BackendConfig;
use super::error::BackendError;

/// Chat-completion backend over the `genai` multi-provider client.
///
/// Provider credentials come from the provider's usual environment variables.
#[derive(Clone)]
pub struct GenaiBackend {
    client: Client,
    model: String,
    options: ChatOptions,
    timeout_secs: u64,
}

impl std::fmt::Debug for GenaiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiBackend")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GenaiBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: Client::default(),
            model: config.model.clone(),
            options: ChatOptions::default()
                .with_temperature(f64::from(config.temperature))
                .with_max_tokens(config.max_tokens),
            timeout_secs: config.timeout_secs,
        }
    }
}

impl GenerationBackend for GenaiBackend {
    fn kind(&self) -> &'static str {
        "genai"
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, BackendError> {
        let request = ChatRequest::new(vec![ChatMessage::system(system), ChatMessage::user(prompt)]);

        debug!(model = %self.model, "Calling chat provider");

        let response = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            self.client
                .exec_chat(&self.model, request, Some(&self.options)),
        )
        .await
        .map_err(|_| BackendError::Timeout {
            secs: self.timeout_secs,
        })?
        .map_err(|e| BackendError::Provider(e.to_string()))?;

        response
            .first_text()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| BackendError::InvalidResponse {
                reason: "response has no text content".to_string(),
            })
    }
}
