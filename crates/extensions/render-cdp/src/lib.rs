//! # venuescout-render-cdp
//!
//! A [`RenderEngine`](venuescout_protocols::RenderEngine) that drives Chrome
//! over the DevTools protocol.
//!
//! Chrome is reused when something already listens on the configured debug
//! port; otherwise it is launched on first use. Every opened page gets its
//! own browser context, so cookies and storage never leak between articles.
//!
//! ```rust,ignore
//! let engine = ChromeEngine::new(BrowserConfig::default());
//! let page = engine.open("https://ny.eater.com/", &NavOptions::default()).await?;
//! let html = page.content().await?;
//! page.close().await?;
//! engine.shutdown().await?;
//! ```

pub mod cdp;
mod engine;
mod page;
mod scripts;

pub use cdp::CdpError;
pub use engine::ChromeEngine;
pub use page::CdpPage;
