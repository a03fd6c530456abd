//! Bounded concurrent crawl over discovered article links.
//!
//! A fixed set of workers shares one atomic cursor into the link list. Each
//! worker claims the next index, renders and parses that article in its own
//! browsing context, and hands back `(index, venues)`. Results are written
//! into pre-sized slots, so output order always matches input order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};
use venuescout_config::ScoutConfig;
use venuescout_protocols::{NavOptions, RenderEngine, RenderError, Venue};

use crate::classify::Classifier;
use crate::parser::ArticleParser;

/// Everything a worker needs, shared across the pool.
struct CrawlContext {
    engine: Arc<dyn RenderEngine>,
    parser: Arc<ArticleParser>,
    classifier: Arc<Classifier>,
    nav: NavOptions,
}

/// A single crawl worker.
struct CrawlWorker {
    id: usize,
    completed: usize,
    failed: usize,
}

impl CrawlWorker {
    fn new(id: usize) -> Self {
        Self {
            id,
            completed: 0,
            failed: 0,
        }
    }

    /// Claim links until the cursor runs past the end.
    async fn run(
        mut self,
        ctx: Arc<CrawlContext>,
        links: Arc<[String]>,
        cursor: Arc<AtomicUsize>,
    ) -> Vec<(usize, Vec<Venue>)> {
        let mut results = Vec::new();
        loop {
            let index = cursor.fetch_add(1, Ordering::SeqCst);
            let Some(url) = links.get(index) else {
                break;
            };
            let venues = self.process(&ctx, url).await;
            results.push((index, venues));
        }
        debug!(
            worker = self.id,
            completed = self.completed,
            failed = self.failed,
            "Crawl worker finished"
        );
        results
    }

    /// Any failure yields no venues for this link.
    async fn process(&mut self, ctx: &CrawlContext, url: &str) -> Vec<Venue> {
        match fetch_venues(ctx, url).await {
            Ok(venues) => {
                self.completed += 1;
                info!(worker = self.id, url, venues = venues.len(), "Parsed article");
                venues
            }
            Err(e) => {
                self.failed += 1;
                warn!(worker = self.id, url, error = %e, "Article failed, skipping");
                Vec::new()
            }
        }
    }
}

async fn fetch_venues(ctx: &CrawlContext, url: &str) -> Result<Vec<Venue>, RenderError> {
    let page = ctx.engine.open(url, &ctx.nav).await?;
    let parsed = ctx.parser.parse_page(page.as_ref()).await;
    if let Err(e) = page.close().await {
        debug!(url, error = %e, "Failed to close page");
    }
    let parsed = parsed?;
    Ok(parsed
        .records
        .into_iter()
        .map(|record| ctx.classifier.to_venue(record))
        .collect())
}

/// Fans article links out to a bounded worker pool.
pub struct CrawlDriver {
    ctx: Arc<CrawlContext>,
    concurrency: usize,
}

impl CrawlDriver {
    pub fn new(
        engine: Arc<dyn RenderEngine>,
        parser: Arc<ArticleParser>,
        classifier: Arc<Classifier>,
        config: &ScoutConfig,
    ) -> Self {
        Self {
            ctx: Arc::new(CrawlContext {
                engine,
                parser,
                classifier,
                nav: NavOptions::network_idle(config.timeouts.article_nav()),
            }),
            concurrency: config.crawl.concurrency.max(1),
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Venues per link, positionally aligned with `links`.
    pub async fn crawl(&self, links: &[String]) -> Vec<Vec<Venue>> {
        let mut slots: Vec<Vec<Venue>> = vec![Vec::new(); links.len()];
        if links.is_empty() {
            return slots;
        }

        let links: Arc<[String]> = links.into();
        let cursor = Arc::new(AtomicUsize::new(0));
        let workers = self.concurrency.min(links.len());
        info!(links = links.len(), workers, "Starting crawl");

        let mut pool = JoinSet::new();
        for id in 0..workers {
            let worker = CrawlWorker::new(id);
            pool.spawn(worker.run(self.ctx.clone(), links.clone(), cursor.clone()));
        }

        while let Some(joined) = pool.join_next().await {
            match joined {
                Ok(results) => {
                    for (index, venues) in results {
                        slots[index] = venues;
                    }
                }
                Err(e) => error!(error = %e, "Crawl worker aborted"),
            }
        }

        slots
    }
}

#[cfg(test)]
#[path = "crawl_tests.rs"]
mod tests;
