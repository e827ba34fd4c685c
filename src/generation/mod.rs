//! Summary generation with length enforcement.
//!
//! [`SummaryController`] admits an article through the
//! [`ContentGate`](crate::gate::ContentGate), derives a [`TargetRange`] from its
//! length and calls a [`GenerationBackend`] up to `MAX_RETRIES + 1` times until
//! the cleaned output lands inside the range.
//!
//! # Backends
//!
//! - [`OllamaBackend`]: local Ollama server over HTTP.
//! - [`GenaiBackend`]: hosted providers through `genai`.
//! - `MockBackend`: scripted replies, behind `#[cfg(any(test, feature = "mock"))]`.
//!
//! [`Backend`] selects one of the real backends from [`BackendConfig`].

pub mod backend;
pub mod chat;
pub mod config;
pub mod controller;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod ollama;
pub mod prompt;
pub mod target;
pub mod types;


pub use backend::{Backend, GenerationBackend};
pub use chat::GenaiBackend;
pub use config::{BackendConfig, BackendKind};
pub use controller::SummaryController;
pub use error::{BackendError, GenerationError, GenerationResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBackend, RecordedCall};
pub use ollama::OllamaBackend;
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use target::{RangePolicy, TargetRange, summary_bounds};
pub use types::{ControllerState, GenerationAttempt, Summary, SummaryOutcome};
