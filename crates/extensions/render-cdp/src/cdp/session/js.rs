//! JavaScript evaluation.

use serde_json::{json, Value};

use crate::cdp::error::CdpError;
use crate::cdp::protocol::EvaluateResult;

use super::core::PageSession;

impl PageSession {
    /// Evaluate an expression and return its JSON value. `undefined` becomes `null`.
    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let raw = self
            .call(
                "Runtime.evaluate",
                Some(json!({
                    "expression": expression,
                    "returnByValue": true,
                    "awaitPromise": true,
                })),
            )
            .await?;

        let evaluated: EvaluateResult = serde_json::from_value(raw)?;
        if let Some(exception) = evaluated.exception_details {
            return Err(CdpError::JavaScript(exception.message()));
        }
        Ok(evaluated.result.value.unwrap_or(Value::Null))
    }
}
