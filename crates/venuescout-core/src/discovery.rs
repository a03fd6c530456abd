//! Keyword-filtered article link discovery with "load more" pagination.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, info, warn};
use venuescout_config::ScoutConfig;
use venuescout_protocols::{ClickTarget, PageHandle, RenderError, WaitCondition};

/// Collects article links whose anchor text mentions a keyword.
#[derive(Debug, Clone)]
pub struct LinkDiscovery {
    article_link: String,
    load_more: ClickTarget,
    result_cap: usize,
    iteration_cap: usize,
    settle_timeout: Duration,
}

impl LinkDiscovery {
    pub fn new(config: &ScoutConfig) -> Self {
        Self {
            article_link: config.selectors.article_link.clone(),
            load_more: ClickTarget::TextMatch {
                candidates: config.selectors.load_more_candidates.clone(),
                pattern: config.selectors.load_more_pattern.clone(),
            },
            result_cap: config.discovery.result_cap,
            iteration_cap: config.discovery.iteration_cap,
            settle_timeout: config.timeouts.pagination_settle(),
        }
    }

    pub fn with_caps(mut self, result_cap: usize, iteration_cap: usize) -> Self {
        self.result_cap = result_cap;
        self.iteration_cap = iteration_cap;
        self
    }

    /// Walk the listing page, clicking "load more" until a cap is hit or the
    /// control disappears. Links come back in discovery order.
    ///
    /// A settle wait that times out is logged and the loop carries on; any
    /// other page error aborts discovery.
    pub async fn discover(
        &self,
        page: &dyn PageHandle,
        keywords: &[String],
    ) -> Result<Vec<String>, RenderError> {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut links: Vec<String> = Vec::new();
        let mut iterations = 0;

        while links.len() < self.result_cap && iterations < self.iteration_cap {
            let anchors = page.query(&self.article_link).await?;
            let initial_count = anchors.len();

            for anchor in anchors {
                let Some(href) = anchor.href.filter(|h| !h.is_empty()) else {
                    continue;
                };
                if matches_keyword(&anchor.text, &keywords) && seen.insert(href.clone()) {
                    links.push(href);
                }
            }
            debug!(
                iteration = iterations,
                anchors = initial_count,
                links = links.len(),
                "Scanned listing page"
            );

            if !page.click(&self.load_more).await? {
                debug!(iteration = iterations, "No load-more control, stopping");
                break;
            }

            let grown = WaitCondition::CountAbove {
                selector: self.article_link.clone(),
                count: initial_count,
            };
            if let Err(e) = page.wait_for(&grown, self.settle_timeout).await {
                warn!(iteration = iterations, error = %e, "Listing did not grow after load-more");
            }

            iterations += 1;
        }

        links.truncate(self.result_cap);
        info!(links = links.len(), iterations, "Link discovery finished");
        Ok(links)
    }
}

/// Case-insensitive substring match; `keywords` must already be lower-cased.
fn matches_keyword(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(k.as_str()))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
