use serde_json::Value;
use thiserror::Error;

use crate::domain::types::BlockReason;

/// Rendering request assembled by the visual from one host update. Created
/// fresh per update cycle and consumed immediately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderRequest {
    /// Raw value bound by the host, expected to be an HTML fragment.
    pub raw_content: Option<Value>,
    /// Current position of the user-controlled risk gate.
    pub risk_accepted: bool,
}

impl RenderRequest {
    pub fn new(raw_content: Option<Value>, risk_accepted: bool) -> Self {
        Self {
            raw_content,
            risk_accepted,
        }
    }
}

/// Per-call result handed back to the caller. Every path returns a value;
/// nothing is re-raised across the host boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Sanitised HTML was injected into the content region.
    Rendered(String),
    /// The gate is closed; the warning region is showing instead.
    Blocked(BlockReason),
    /// The call failed; the variant records which recovery was applied.
    Failed(RenderError),
}

/// Structured errors surfaced by a render call. Both variants are recovered:
/// invalid input preserves the previous render, sanitiser faults surface as
/// inline diagnostic text in the content region.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid content value: {message}")]
    InvalidInput { message: String },
    #[error("sanitisation failed: {message}")]
    Sanitisation { message: String },
}

/// Error raised by a [`SanitizeService`] implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("sanitiser rejected input: {message}")]
pub struct SanitizeError {
    pub message: String,
}

impl SanitizeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Contract of the sanitisation collaborator: given arbitrary markup, return
/// markup containing no executable script and no attribute-based script
/// vectors, preserving benign tags. Implementations must be pure and
/// deterministic: the same input yields the same output or error.
pub trait SanitizeService: Send + Sync {
    fn sanitize(&self, html: &str) -> Result<String, SanitizeError>;
}
