//! Navigation and readiness polling.

use std::time::Duration;

use serde_json::json;
use tokio::time::Instant;
use tracing::debug;
use venuescout_protocols::WaitUntil;

use crate::cdp::error::CdpError;

use super::core::PageSession;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Quiet period without new resource entries that counts as network idle.
const NETWORK_IDLE_WINDOW: Duration = Duration::from_millis(500);

const RESOURCE_COUNT: &str = "performance.getEntriesByType('resource').length";

impl PageSession {
    /// Navigate and wait for `wait_until`, all within `timeout`.
    pub async fn navigate(
        &self,
        url: &str,
        wait_until: WaitUntil,
        timeout: Duration,
    ) -> Result<(), CdpError> {
        let navigation = async {
            let result = self
                .call("Page.navigate", Some(json!({ "url": url })))
                .await?;
            if let Some(error) = result.get("errorText").and_then(|e| e.as_str()) {
                if !error.is_empty() {
                    return Err(CdpError::NavigationFailed(format!("{}: {}", url, error)));
                }
            }
            self.wait_for_ready(wait_until).await
        };

        tokio::time::timeout(timeout, navigation)
            .await
            .map_err(|_| CdpError::Timeout(format!("Navigation to {} exceeded {:?}", url, timeout)))??;

        debug!(url, ?wait_until, "Navigated");
        Ok(())
    }

    /// Poll `document.readyState`, then optionally wait for the network to settle.
    pub async fn wait_for_ready(&self, wait_until: WaitUntil) -> Result<(), CdpError> {
        loop {
            let state = self.evaluate("document.readyState").await?;
            let ready = match (wait_until, state.as_str()) {
                (WaitUntil::DomContentLoaded, Some("interactive" | "complete")) => true,
                (_, Some("complete")) => true,
                _ => false,
            };
            if ready {
                break;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }

        if wait_until == WaitUntil::NetworkIdle {
            self.wait_for_network_idle().await?;
        }
        Ok(())
    }

    /// Wait until no new resource has been fetched for [`NETWORK_IDLE_WINDOW`].
    async fn wait_for_network_idle(&self) -> Result<(), CdpError> {
        let mut last_count = self.evaluate(RESOURCE_COUNT).await?.as_u64().unwrap_or(0);
        let mut quiet_since = Instant::now();

        loop {
            tokio::time::sleep(POLL_INTERVAL).await;
            let count = self.evaluate(RESOURCE_COUNT).await?.as_u64().unwrap_or(0);
            if count != last_count {
                last_count = count;
                quiet_since = Instant::now();
            } else if quiet_since.elapsed() >= NETWORK_IDLE_WINDOW {
                return Ok(());
            }
        }
    }
}
