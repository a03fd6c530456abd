//! Render engine interface.
//!
//! The browser is the one dependency that cannot run in a unit test, so the
//! pipeline only ever talks to it through these two traits. A CDP-backed
//! implementation lives in `venuescout-render-cdp`; tests use hand-written fakes.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RenderError;

/// When a navigation counts as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitUntil {
    /// The `load` event fired.
    Load,
    /// The DOM is parsed; subresources may still be loading.
    DomContentLoaded,
    /// The page loaded and network activity has settled.
    #[default]
    NetworkIdle,
}

/// Navigation options passed to [`RenderEngine::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOptions {
    pub wait_until: WaitUntil,
    pub timeout: Duration,
}

impl NavOptions {
    pub fn network_idle(timeout: Duration) -> Self {
        Self {
            wait_until: WaitUntil::NetworkIdle,
            timeout,
        }
    }
}

impl Default for NavOptions {
    fn default() -> Self {
        Self::network_idle(Duration::from_millis(60_000))
    }
}

/// Text and link target of a queried element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementText {
    pub text: String,
    /// Resolved `href`, present for anchors.
    #[serde(default)]
    pub href: Option<String>,
}

/// What to click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// First element matching a CSS selector.
    Selector(String),
    /// First element among `candidates` whose text matches the regex `pattern`.
    TextMatch { candidates: String, pattern: String },
}

/// A condition polled by [`PageHandle::wait_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitCondition {
    /// At least one element matches the selector.
    Selector(String),
    /// Strictly more than `count` elements match the selector.
    CountAbove { selector: String, count: usize },
}

/// A rendering backend able to open isolated pages.
#[async_trait]
pub trait RenderEngine: Send + Sync {
    /// Open a fresh browsing context and navigate it to `url`.
    ///
    /// On navigation failure the implementation closes the context it created
    /// before returning the error.
    async fn open(&self, url: &str, nav: &NavOptions) -> Result<Box<dyn PageHandle>, RenderError>;

    /// Release the underlying browser. Calling it twice is a no-op.
    async fn shutdown(&self) -> Result<(), RenderError>;
}

/// One rendered page inside its own browsing context.
#[async_trait]
pub trait PageHandle: Send + Sync {
    /// URL the page was opened with.
    fn url(&self) -> &str;

    async fn title(&self) -> Result<String, RenderError>;

    /// Serialized rendered DOM (`document.documentElement.outerHTML`).
    async fn content(&self) -> Result<String, RenderError>;

    /// Text and `href` of every element matching `selector`, in document order.
    async fn query(&self, selector: &str) -> Result<Vec<ElementText>, RenderError>;

    /// Evaluate a script expression and return its JSON value.
    async fn evaluate(&self, expression: &str) -> Result<Value, RenderError>;

    /// Click the target. Returns `false` when nothing matched.
    async fn click(&self, target: &ClickTarget) -> Result<bool, RenderError>;

    /// Poll until `condition` holds or `timeout` expires with [`RenderError::Timeout`].
    async fn wait_for(&self, condition: &WaitCondition, timeout: Duration)
        -> Result<(), RenderError>;

    /// Close the page and its browsing context.
    async fn close(&self) -> Result<(), RenderError>;
}

/// Evaluate an expression and deserialize the result.
pub async fn evaluate_as<T: DeserializeOwned>(
    page: &dyn PageHandle,
    expression: &str,
) -> Result<T, RenderError> {
    let value = page.evaluate(expression).await?;
    Ok(serde_json::from_value(value)?)
}
