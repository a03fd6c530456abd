//! Pipeline errors.

use thiserror::Error;
use venuescout_config::ConfigError;
use venuescout_protocols::RenderError;

#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Invalid pattern for {field}: {message}")]
    Pattern { field: String, message: String },

    #[error("Link discovery failed: {0}")]
    Discovery(#[source] RenderError),

    #[error("Render engine error: {0}")]
    Render(#[from] RenderError),
}

impl ScoutError {
    pub(crate) fn selector(selector: &str, message: impl ToString) -> Self {
        ScoutError::Selector {
            selector: selector.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn pattern(field: &str, message: impl ToString) -> Self {
        ScoutError::Pattern {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Parse a CSS selector, keeping the offending text in the error.
pub(crate) fn parse_selector(selector: &str) -> Result<scraper::Selector, ScoutError> {
    scraper::Selector::parse(selector).map_err(|e| ScoutError::selector(selector, e))
}

/// Compile a configured regex, naming the config field on failure.
pub(crate) fn compile_pattern(field: &str, pattern: &str) -> Result<regex::Regex, ScoutError> {
    regex::Regex::new(pattern).map_err(|e| ScoutError::pattern(field, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ScoutError::InvalidInput("keywords must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: keywords must not be empty");
    }

    #[test]
    fn test_parse_selector_error_names_selector() {
        let err = parse_selector("h2[").unwrap_err();
        assert!(matches!(err, ScoutError::Selector { .. }));
        assert!(err.to_string().contains("h2["));
    }

    #[test]
    fn test_compile_pattern_error_names_field() {
        let err = compile_pattern("heuristics.map_address_pattern", "(").unwrap_err();
        assert!(err.to_string().contains("heuristics.map_address_pattern"));
    }

    #[test]
    fn test_render_error_from() {
        let err = ScoutError::from(RenderError::ContextClosed);
        assert!(matches!(err, ScoutError::Render(_)));
    }
}
