//! `PageHandle` over a CDP page session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::Instant;
use tracing::debug;
use venuescout_protocols::{
    ClickTarget, ElementText, NavOptions, PageHandle, RenderError, WaitCondition,
};

use crate::cdp::{CdpClient, CdpError, PageSession};
use crate::scripts;

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A page living in its own browser context.
pub struct CdpPage {
    url: String,
    session: PageSession,
    context_id: String,
    client: Arc<CdpClient>,
    closed: AtomicBool,
}

impl CdpPage {
    pub(crate) fn new(
        url: &str,
        session: PageSession,
        context_id: String,
        client: Arc<CdpClient>,
    ) -> Self {
        Self {
            url: url.to_string(),
            session,
            context_id,
            client,
            closed: AtomicBool::new(false),
        }
    }

    pub(crate) async fn load(&self, viewport: (u32, u32), nav: &NavOptions) -> Result<(), CdpError> {
        self.session.set_viewport(viewport.0, viewport.1).await?;
        self.session
            .navigate(&self.url, nav.wait_until, nav.timeout)
            .await
    }

    fn ensure_open(&self) -> Result<(), RenderError> {
        if self.closed.load(Ordering::SeqCst) {
            Err(RenderError::ContextClosed)
        } else {
            Ok(())
        }
    }

    async fn count(&self, selector: &str) -> Result<usize, RenderError> {
        let value = self.session.evaluate(&scripts::count_elements(selector)).await?;
        Ok(value.as_u64().unwrap_or(0) as usize)
    }
}

#[async_trait]
impl PageHandle for CdpPage {
    fn url(&self) -> &str {
        &self.url
    }

    async fn title(&self) -> Result<String, RenderError> {
        self.ensure_open()?;
        Ok(self.session.get_title().await?)
    }

    async fn content(&self) -> Result<String, RenderError> {
        self.ensure_open()?;
        Ok(self.session.get_content().await?)
    }

    async fn query(&self, selector: &str) -> Result<Vec<ElementText>, RenderError> {
        self.ensure_open()?;
        let value = self.session.evaluate(&scripts::query_elements(selector)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn evaluate(&self, expression: &str) -> Result<Value, RenderError> {
        self.ensure_open()?;
        Ok(self.session.evaluate(expression).await?)
    }

    async fn click(&self, target: &ClickTarget) -> Result<bool, RenderError> {
        self.ensure_open()?;
        let script = match target {
            ClickTarget::Selector(selector) => scripts::click_selector(selector),
            ClickTarget::TextMatch {
                candidates,
                pattern,
            } => scripts::click_text_match(candidates, pattern),
        };
        let clicked = self.session.evaluate(&script).await?;
        Ok(clicked.as_bool().unwrap_or(false))
    }

    async fn wait_for(&self, condition: &WaitCondition, timeout: Duration) -> Result<(), RenderError> {
        self.ensure_open()?;
        let (selector, above) = match condition {
            WaitCondition::Selector(selector) => (selector.as_str(), 0),
            WaitCondition::CountAbove { selector, count } => (selector.as_str(), *count),
        };

        let deadline = Instant::now() + timeout;
        loop {
            if self.count(selector).await? > above {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(RenderError::Timeout(format!(
                    "more than {} '{}' within {:?}",
                    above, selector, timeout
                )));
            }
            tokio::time::sleep(WAIT_POLL_INTERVAL).await;
        }
    }

    /// Closes the target and disposes its browser context. Idempotent.
    async fn close(&self) -> Result<(), RenderError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        let target = self.client.close_target(self.session.target_id()).await;
        let context = self.client.dispose_context(&self.context_id).await;
        debug!(url = %self.url, context = %self.context_id, "Closed page");
        target?;
        context?;
        Ok(())
    }
}
