//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Batch concurrency must be a positive integer.
    #[error("invalid batch concurrency '{value}': must be a positive integer")]
    InvalidConcurrency { value: String },

    /// Generation backend name is not one of the supported kinds.
    #[error("unknown generation backend '{value}' (expected 'ollama' or 'genai')")]
    UnknownBackend { value: String },

    /// A numeric backend setting could not be parsed.
    #[error("invalid value '{value}' for {name}")]
    InvalidNumber { name: &'static str, value: String },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
