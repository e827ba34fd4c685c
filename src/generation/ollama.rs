use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::backend::GenerationBackend;
use super::config::BackendConfig;
use super::error::BackendError;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Non-streaming client for Ollama's `/api/generate`.
///
/// The system prompt is prepended to the user prompt, separated by a blank
/// line. A missing `response` field reads as an empty completion.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout_secs: u64,
}

impl OllamaBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GenerationBackend for OllamaBackend {
    fn kind(&self) -> &'static str {
        "ollama"
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, BackendError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: format!("{}\n\n{}", system, prompt),
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: self.max_tokens,
            },
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "Calling Ollama");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(e, self.timeout_secs))?
            .error_for_status()
            .map_err(|e| BackendError::from_reqwest(e, self.timeout_secs))?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::from_reqwest(e, self.timeout_secs))?;

        Ok(body.response.trim().to_string())
    }
}
