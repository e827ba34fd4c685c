use tracing::info;

use super::config::{BackendConfig, BackendKind};
use super::error::BackendError;
use super::chat::GenaiBackend;
use super::ollama::OllamaBackend;

/// Minimal async interface to a text-generation model.
pub trait GenerationBackend: Send + Sync {
    /// Short identifier used in logs and readiness output.
    fn kind(&self) -> &'static str;

    /// Generates a completion for `prompt` under the `system` instructions.
    fn generate(
        &self,
        system: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, BackendError>> + Send;
}

/// Backend selected at startup from [`BackendConfig::kind`].
#[derive(Debug)]
pub enum Backend {
    Ollama(OllamaBackend),
    Genai(GenaiBackend),
}

impl Backend {
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        let backend = match config.kind {
            BackendKind::Ollama => Backend::Ollama(OllamaBackend::new(config)?),
            BackendKind::Genai => Backend::Genai(GenaiBackend::new(config)),
        };

        info!(
            kind = backend.kind(),
            model = %config.model,
            timeout_secs = config.timeout_secs,
            "Generation backend configured"
        );

        Ok(backend)
    }
}

impl GenerationBackend for Backend {
    fn kind(&self) -> &'static str {
        match self {
            Backend::Ollama(b) => b.kind(),
            Backend::Genai(b) => b.kind(),
        }
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, BackendError> {
        match self {
            Backend::Ollama(b) => b.generate(system, prompt).await,
            Backend::Genai(b) => b.generate(system, prompt).await,
        }
    }
}
