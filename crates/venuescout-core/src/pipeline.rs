//! The query operation: discovery, crawl, filtering, dedup.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};
use venuescout_config::{ConfigValidator, ScoutConfig};
use venuescout_protocols::{NavOptions, RenderEngine, Venue};

use crate::classify::Classifier;
use crate::crawl::CrawlDriver;
use crate::discovery::LinkDiscovery;
use crate::error::ScoutError;
use crate::parser::ArticleParser;
use crate::postprocess::{deduplicate, JunkFilter};
use crate::query::{QueryRequest, QueryResponse};

/// Venue search over one listing site, backed by a render engine.
pub struct VenueScout {
    config: ScoutConfig,
    engine: Arc<dyn RenderEngine>,
    discovery: LinkDiscovery,
    crawler: CrawlDriver,
    junk: JunkFilter,
}

impl VenueScout {
    /// Validate the config and compile every selector and pattern up front.
    pub fn new(config: ScoutConfig, engine: Arc<dyn RenderEngine>) -> Result<Self, ScoutError> {
        let warnings = ConfigValidator::validate(&config).into_result()?;
        for w in &warnings {
            warn!(field = %w.path, "{}", w.message);
        }

        let parser = Arc::new(ArticleParser::new(&config)?);
        let classifier = Arc::new(Classifier::new(&config.heuristics));
        let crawler = CrawlDriver::new(engine.clone(), parser, classifier, &config);

        Ok(Self {
            discovery: LinkDiscovery::new(&config),
            junk: JunkFilter::new(&config.heuristics),
            crawler,
            engine,
            config,
        })
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Full venue records for the keywords.
    ///
    /// Blank keyword lists are rejected before the engine is touched. Once the
    /// engine has been used it is shut down, whatever the outcome.
    pub async fn search(&self, keywords: &[String]) -> Result<Vec<Venue>, ScoutError> {
        let keywords = QueryRequest::new(keywords.iter().cloned()).normalized_keywords()?;
        let result = self.run(&keywords).await;
        if let Err(e) = self.engine.shutdown().await {
            warn!(error = %e, "Render engine shutdown failed");
        }
        result
    }

    async fn run(&self, keywords: &[String]) -> Result<Vec<Venue>, ScoutError> {
        let seed_url = &self.config.site.seed_url;
        let nav = NavOptions::network_idle(self.config.timeouts.seed_load());

        let seed = match self.engine.open(seed_url, &nav).await {
            Ok(page) => page,
            Err(e) => {
                error!(url = %seed_url, error = %e, "Failed to load seed page");
                return Ok(Vec::new());
            }
        };

        let discovered = self.discovery.discover(seed.as_ref(), keywords).await;
        if let Err(e) = seed.close().await {
            warn!(url = %seed_url, error = %e, "Failed to close seed page");
        }
        let links = discovered.map_err(ScoutError::Discovery)?;
        if links.is_empty() {
            info!(?keywords, "No matching articles");
            return Ok(Vec::new());
        }

        let venues: Vec<Venue> = self.crawler.crawl(&links).await.into_iter().flatten().collect();
        let raw = venues.len();
        let venues = deduplicate(self.junk.filter(venues));
        info!(
            articles = links.len(),
            raw,
            venues = venues.len(),
            "Venue search finished"
        );
        Ok(venues)
    }

    /// Names-only envelope.
    pub async fn query(&self, request: &QueryRequest) -> QueryResponse {
        match self.search(&request.keywords).await {
            Ok(venues) => QueryResponse::success(&venues),
            Err(e) => {
                warn!(error = %e, "Query failed");
                QueryResponse::from(&e)
            }
        }
    }

    /// Like [`query`](Self::query), but malformed requests also get the failure envelope.
    pub async fn query_value(&self, request: Value) -> QueryResponse {
        match serde_json::from_value::<QueryRequest>(request) {
            Ok(request) => self.query(&request).await,
            Err(e) => QueryResponse::failure("invalid input", Some(e.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
