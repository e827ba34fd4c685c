use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::config::ConfigError;
use crate::constants::{
    DEFAULT_GENERATION_TIMEOUT_SECS, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_OLLAMA_URL,
    DEFAULT_TEMPERATURE,
};

/// Which concrete backend serves generation calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Local Ollama server (`POST /api/generate`).
    #[default]
    Ollama,
    /// Multi-provider chat client; the provider is inferred from the model name.
    Genai,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Ollama => "ollama",
            BackendKind::Genai => "genai",
        }
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(BackendKind::Ollama),
            "genai" => Ok(BackendKind::Genai),
            _ => Err(ConfigError::UnknownBackend {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation backend settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Default: [`BackendKind::Ollama`].
    pub kind: BackendKind,
    /// Ollama base URL. Default: `http://localhost:11434`.
    pub base_url: String,
    /// Model identifier. Default: `gemma3:4b`.
    pub model: String,
    /// Per-request timeout in seconds. Default: `120`.
    pub timeout_secs: u64,
    /// Sampling temperature. Default: `0.3`.
    pub temperature: f32,
    /// Maximum generated tokens. Default: `400`.
    pub max_tokens: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_GENERATION_TIMEOUT_SECS,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl BackendConfig {
    pub const ENV_BACKEND: &'static str = "HEALSUMM_BACKEND";
    pub const ENV_OLLAMA_URL: &'static str = "HEALSUMM_OLLAMA_URL";
    pub const ENV_MODEL: &'static str = "HEALSUMM_MODEL";
    pub const ENV_TIMEOUT_SECS: &'static str = "HEALSUMM_TIMEOUT_SECS";
    pub const ENV_TEMPERATURE: &'static str = "HEALSUMM_TEMPERATURE";
    pub const ENV_MAX_TOKENS: &'static str = "HEALSUMM_MAX_TOKENS";

    /// Loads backend settings from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let kind = match env::var(Self::ENV_BACKEND) {
            Ok(value) => value.parse()?,
            Err(_) => defaults.kind,
        };

        Ok(Self {
            kind,
            base_url: env::var(Self::ENV_OLLAMA_URL)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: env::var(Self::ENV_MODEL).unwrap_or(defaults.model),
            timeout_secs: Self::parse_number(Self::ENV_TIMEOUT_SECS, defaults.timeout_secs)?,
            temperature: Self::parse_number(Self::ENV_TEMPERATURE, defaults.temperature)?,
            max_tokens: Self::parse_number(Self::ENV_MAX_TOKENS, defaults.max_tokens)?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn parse_number<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name, value }),
            Err(_) => Ok(default),
        }
    }
}
