//! CDP error types.

use thiserror::Error;
use venuescout_protocols::RenderError;

/// CDP client errors.
#[derive(Debug, Error)]
pub enum CdpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Nothing answers `/json/version` on the endpoint.
    #[error("Chrome not available at {0}. Start Chrome with: chrome --remote-debugging-port=9222")]
    ChromeNotAvailable(String),

    #[error("Chrome executable not found; set browser.chrome_path")]
    ChromeNotFound,

    #[error("Failed to launch Chrome: {0}")]
    LaunchFailed(String),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("CDP error: {message} (code: {code})")]
    Protocol { code: i64, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("JavaScript error: {0}")]
    JavaScript(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Session closed")]
    SessionClosed,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<tokio_tungstenite::tungstenite::Error> for CdpError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        CdpError::WebSocket(e.to_string())
    }
}

impl From<reqwest::Error> for CdpError {
    fn from(e: reqwest::Error) -> Self {
        CdpError::Http(e.to_string())
    }
}

impl From<url::ParseError> for CdpError {
    fn from(e: url::ParseError) -> Self {
        CdpError::ConnectionFailed(format!("Invalid URL: {}", e))
    }
}

impl From<CdpError> for RenderError {
    fn from(e: CdpError) -> Self {
        match e {
            CdpError::ChromeNotFound | CdpError::LaunchFailed(_) => {
                RenderError::LaunchFailed(e.to_string())
            }
            CdpError::ConnectionFailed(_)
            | CdpError::ChromeNotAvailable(_)
            | CdpError::WebSocket(_)
            | CdpError::Http(_) => RenderError::ConnectionFailed(e.to_string()),
            CdpError::NavigationFailed(msg) => RenderError::NavigationFailed(msg),
            CdpError::Timeout(msg) => RenderError::Timeout(msg),
            CdpError::SessionClosed => RenderError::ContextClosed,
            CdpError::Protocol { .. }
            | CdpError::Serialization(_)
            | CdpError::JavaScript(_)
            | CdpError::InvalidResponse(_) => RenderError::Evaluation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_stays_timeout() {
        let err: RenderError = CdpError::Timeout("Page.navigate".to_string()).into();
        assert!(err.is_timeout());
    }

    #[test]
    fn test_session_closed_maps_to_context_closed() {
        let err: RenderError = CdpError::SessionClosed.into();
        assert!(matches!(err, RenderError::ContextClosed));
    }

    #[test]
    fn test_protocol_error_is_evaluation() {
        let err: RenderError = CdpError::Protocol {
            code: -32000,
            message: "No node with given id found".to_string(),
        }
        .into();
        match err {
            RenderError::Evaluation(msg) => assert!(msg.contains("-32000")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unreachable_chrome_is_connection_failure() {
        let err: RenderError = CdpError::ChromeNotAvailable("http://localhost:9222".to_string()).into();
        assert!(matches!(err, RenderError::ConnectionFailed(_)));
    }
}
