//! Hand-written render engine fake shared by the unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use venuescout_protocols::{
    ClickTarget, ElementText, NavOptions, PageHandle, RenderEngine, RenderError, WaitCondition,
};

pub(crate) fn anchor(text: &str, href: &str) -> ElementText {
    ElementText {
        text: text.to_string(),
        href: Some(href.to_string()),
    }
}

/// Tracks how many pages are open at once.
#[derive(Debug, Default)]
pub(crate) struct ActiveCounter {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl ActiveCounter {
    fn enter(&self) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }

    pub(crate) fn current(&self) -> usize {
        self.current.load(Ordering::SeqCst)
    }

    pub(crate) fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// What the fake serves for a URL.
#[derive(Debug, Clone)]
pub(crate) enum PageFixture {
    Html { title: String, html: String },
    Listing {
        anchors: Vec<ElementText>,
        /// Each successful "load more" click appends the next batch.
        batches: Vec<Vec<ElementText>>,
        load_more: bool,
    },
    FailNavigation(String),
    FailContent,
}

pub(crate) struct FakePage {
    url: String,
    title: String,
    html: String,
    anchors: Mutex<Vec<ElementText>>,
    batches: Mutex<VecDeque<Vec<ElementText>>>,
    load_more: bool,
    fail_content: bool,
    content_delay: Duration,
    clicks: AtomicUsize,
    closed: AtomicBool,
    active: Arc<ActiveCounter>,
}

impl FakePage {
    fn from_fixture(url: &str, fixture: PageFixture, content_delay: Duration, active: Arc<ActiveCounter>) -> Self {
        let mut page = Self {
            url: url.to_string(),
            title: String::new(),
            html: String::new(),
            anchors: Mutex::new(Vec::new()),
            batches: Mutex::new(VecDeque::new()),
            load_more: false,
            fail_content: false,
            content_delay,
            clicks: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
            active,
        };
        match fixture {
            PageFixture::Html { title, html } => {
                page.title = title;
                page.html = html;
            }
            PageFixture::Listing {
                anchors,
                batches,
                load_more,
            } => {
                page.anchors = Mutex::new(anchors);
                page.batches = Mutex::new(batches.into());
                page.load_more = load_more;
            }
            PageFixture::FailContent => page.fail_content = true,
            PageFixture::FailNavigation(_) => {}
        }
        page.active.enter();
        page
    }

    /// Standalone listing page, outside any engine.
    pub(crate) fn listing(
        anchors: Vec<ElementText>,
        batches: Vec<Vec<ElementText>>,
        load_more: bool,
    ) -> Self {
        Self::from_fixture(
            "https://example.com/",
            PageFixture::Listing {
                anchors,
                batches,
                load_more,
            },
            Duration::ZERO,
            Arc::new(ActiveCounter::default()),
        )
    }

    pub(crate) fn clicks(&self) -> usize {
        self.clicks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageHandle for FakePage {
    fn url(&self) -> &str {
        &self.url
    }

    async fn title(&self) -> Result<String, RenderError> {
        Ok(self.title.clone())
    }

    async fn content(&self) -> Result<String, RenderError> {
        if !self.content_delay.is_zero() {
            tokio::time::sleep(self.content_delay).await;
        }
        if self.fail_content {
            return Err(RenderError::Evaluation("document is gone".to_string()));
        }
        Ok(self.html.clone())
    }

    async fn query(&self, _selector: &str) -> Result<Vec<ElementText>, RenderError> {
        Ok(self.anchors.lock().clone())
    }

    async fn evaluate(&self, _expression: &str) -> Result<Value, RenderError> {
        Ok(Value::Null)
    }

    async fn click(&self, _target: &ClickTarget) -> Result<bool, RenderError> {
        if !self.load_more {
            return Ok(false);
        }
        self.clicks.fetch_add(1, Ordering::SeqCst);
        if let Some(batch) = self.batches.lock().pop_front() {
            self.anchors.lock().extend(batch);
        }
        Ok(true)
    }

    async fn wait_for(&self, condition: &WaitCondition, _timeout: Duration) -> Result<(), RenderError> {
        let len = self.anchors.lock().len();
        let satisfied = match condition {
            WaitCondition::Selector(_) => len > 0,
            WaitCondition::CountAbove { count, .. } => len > *count,
        };
        if satisfied {
            Ok(())
        } else {
            Err(RenderError::Timeout("no new elements".to_string()))
        }
    }

    async fn close(&self) -> Result<(), RenderError> {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.active.exit();
        }
        Ok(())
    }
}

/// Engine serving fixtures by URL and recording every call.
#[derive(Default)]
pub(crate) struct FakeEngine {
    pages: Mutex<HashMap<String, PageFixture>>,
    opened: Mutex<Vec<String>>,
    shutdowns: AtomicUsize,
    content_delay: Duration,
    pub(crate) active: Arc<ActiveCounter>,
}

impl FakeEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Slow every `content()` call down so that pages overlap in time.
    pub(crate) fn with_content_delay(mut self, delay: Duration) -> Self {
        self.content_delay = delay;
        self
    }

    pub(crate) fn with_page(self, url: &str, fixture: PageFixture) -> Self {
        self.pages.lock().insert(url.to_string(), fixture);
        self
    }

    pub(crate) fn with_html(self, url: &str, title: &str, html: &str) -> Self {
        self.with_page(
            url,
            PageFixture::Html {
                title: title.to_string(),
                html: html.to_string(),
            },
        )
    }

    pub(crate) fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }

    pub(crate) fn shutdowns(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }

    /// True if nothing at all was asked of the engine.
    pub(crate) fn untouched(&self) -> bool {
        self.opened.lock().is_empty() && self.shutdowns() == 0
    }
}

#[async_trait]
impl RenderEngine for FakeEngine {
    async fn open(&self, url: &str, _nav: &NavOptions) -> Result<Box<dyn PageHandle>, RenderError> {
        self.opened.lock().push(url.to_string());
        tokio::task::yield_now().await;

        let fixture = self.pages.lock().get(url).cloned();
        match fixture {
            None => Err(RenderError::NavigationFailed(format!("no fixture for {}", url))),
            Some(PageFixture::FailNavigation(reason)) => Err(RenderError::Timeout(reason)),
            Some(fixture) => Ok(Box::new(FakePage::from_fixture(
                url,
                fixture,
                self.content_delay,
                self.active.clone(),
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), RenderError> {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
