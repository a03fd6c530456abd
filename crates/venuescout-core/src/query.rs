//! Request/response envelope of the query operation.

use serde::{Deserialize, Serialize};
use venuescout_protocols::Venue;

use crate::error::ScoutError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub keywords: Vec<String>,
}

impl QueryRequest {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Lower-cased, non-blank keywords. Fails when none are left.
    pub fn normalized_keywords(&self) -> Result<Vec<String>, ScoutError> {
        let keywords: Vec<String> = self
            .keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
            .collect();
        if keywords.is_empty() {
            return Err(ScoutError::InvalidInput(
                "keywords must be a non-empty list of strings".to_string(),
            ));
        }
        Ok(keywords)
    }
}

/// `{ "data": [...] }` or `{ "error": "...", "details": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Success {
        data: Vec<String>,
    },
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl QueryResponse {
    pub fn success(venues: &[Venue]) -> Self {
        QueryResponse::Success {
            data: venues.iter().map(|v| v.name.clone()).collect(),
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<String>) -> Self {
        QueryResponse::Failure {
            error: error.into(),
            details,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryResponse::Success { .. })
    }
}

impl From<&ScoutError> for QueryResponse {
    fn from(err: &ScoutError) -> Self {
        match err {
            ScoutError::InvalidInput(msg) => {
                QueryResponse::failure("invalid input", Some(msg.clone()))
            }
            ScoutError::Discovery(source) => {
                QueryResponse::failure("link discovery failed", Some(source.to_string()))
            }
            ScoutError::Config(_) | ScoutError::Selector { .. } | ScoutError::Pattern { .. } => {
                QueryResponse::failure("invalid configuration", Some(err.to_string()))
            }
            ScoutError::Render(source) => {
                QueryResponse::failure("render engine error", Some(source.to_string()))
            }
        }
    }
}
