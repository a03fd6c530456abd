//! Configuration schema definitions.
//!
//! Every section deserializes with defaults, so an empty document yields the
//! stock Eater NY setup.

use std::time::Duration;

use serde::{Deserialize, Serialize};

mod schema_heuristics;
mod schema_infra;

pub use schema_heuristics::*;
pub use schema_infra::*;

pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub selectors: SelectorsConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub crawl: CrawlConfig,

    #[serde(default)]
    pub timeouts: TimeoutsConfig,

    #[serde(default)]
    pub heuristics: HeuristicsConfig,

    #[serde(default)]
    pub browser: BrowserConfig,
}

/// The site being crawled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Listing page that link discovery starts from.
    #[serde(default = "default_seed_url")]
    pub seed_url: String,
}

fn default_seed_url() -> String {
    "https://ny.eater.com/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            seed_url: default_seed_url(),
        }
    }
}

/// CSS selectors describing the site's markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorsConfig {
    /// Article links on the listing page.
    #[serde(default = "default_article_link")]
    pub article_link: String,

    /// Elements that may act as the "load more" control.
    #[serde(default = "default_load_more_candidates")]
    pub load_more_candidates: String,

    /// Regex the "load more" control's text must match.
    #[serde(default = "default_load_more_pattern")]
    pub load_more_pattern: String,

    /// One structured venue card.
    #[serde(default = "default_map_card")]
    pub map_card: String,

    /// Heading inside a card carrying the venue name.
    #[serde(default = "default_map_heading")]
    pub map_heading: String,

    /// Class marking a card paragraph as an address.
    #[serde(default = "default_map_address_class")]
    pub map_address_class: String,

    /// Venue headings inside the narrative content container.
    #[serde(default = "default_article_heading")]
    pub article_heading: String,
}

fn default_article_link() -> String {
    "h2.c-entry-box--compact__title a".to_string()
}

fn default_load_more_candidates() -> String {
    "button, a".to_string()
}

fn default_load_more_pattern() -> String {
    "(?i)more stories".to_string()
}

fn default_map_card() -> String {
    "section.c-mapstack__card".to_string()
}

fn default_map_heading() -> String {
    "h1, h2, h3, h4".to_string()
}

fn default_map_address_class() -> String {
    "c-mapstack__address".to_string()
}

fn default_article_heading() -> String {
    "div.c-entry-content > h2".to_string()
}

impl Default for SelectorsConfig {
    fn default() -> Self {
        Self {
            article_link: default_article_link(),
            load_more_candidates: default_load_more_candidates(),
            load_more_pattern: default_load_more_pattern(),
            map_card: default_map_card(),
            map_heading: default_map_heading(),
            map_address_class: default_map_address_class(),
            article_heading: default_article_heading(),
        }
    }
}

/// Link discovery limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Maximum number of article links returned.
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,

    /// Maximum number of "load more" rounds.
    #[serde(default = "default_iteration_cap")]
    pub iteration_cap: usize,
}

fn default_result_cap() -> usize {
    40
}

fn default_iteration_cap() -> usize {
    10
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            result_cap: default_result_cap(),
            iteration_cap: default_iteration_cap(),
        }
    }
}

/// Crawl driver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Number of article pages processed at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_concurrency() -> usize {
    4
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

/// Timeouts, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    /// Seed page navigation. Expiry aborts the run.
    #[serde(default = "default_nav_ms")]
    pub seed_load_ms: u64,

    /// Per-article navigation. Expiry only drops that article.
    #[serde(default = "default_nav_ms")]
    pub article_nav_ms: u64,

    /// Wait for new links after clicking "load more". Expiry is logged only.
    #[serde(default = "default_pagination_settle_ms")]
    pub pagination_settle_ms: u64,
}

fn default_nav_ms() -> u64 {
    60_000
}

fn default_pagination_settle_ms() -> u64 {
    15_000
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            seed_load_ms: default_nav_ms(),
            article_nav_ms: default_nav_ms(),
            pagination_settle_ms: default_pagination_settle_ms(),
        }
    }
}

impl TimeoutsConfig {
    pub fn seed_load(&self) -> Duration {
        Duration::from_millis(self.seed_load_ms)
    }

    pub fn article_nav(&self) -> Duration {
        Duration::from_millis(self.article_nav_ms)
    }

    pub fn pagination_settle(&self) -> Duration {
        Duration::from_millis(self.pagination_settle_ms)
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
