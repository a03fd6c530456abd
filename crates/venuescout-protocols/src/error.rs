//! Render engine errors.

use thiserror::Error;

/// Errors raised at the render engine boundary.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Browsing context closed")]
    ContextClosed,

    #[error("{0}")]
    Other(String),
}

impl RenderError {
    /// Whether the error is a timeout, as opposed to a hard failure.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RenderError::Timeout(_))
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Evaluation(format!("Unexpected result shape: {}", e))
    }
}
