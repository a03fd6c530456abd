//! # venuescout core
//!
//! The crawl-and-extraction pipeline: keyword-filtered link discovery on a
//! listing page, a bounded crawl over the matched articles, dual-mode parsing
//! of each article, heuristic classification, and junk filtering with
//! name-keyed deduplication.
//!
//! ```text
//! keywords -> LinkDiscovery -> CrawlDriver -> ArticleParser -> Classifier
//!                                                   |
//!                           JunkFilter + deduplicate <-
//! ```

pub mod classify;
pub mod crawl;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod parser;
pub mod pipeline;
pub mod postprocess;
pub mod query;

#[cfg(test)]
pub(crate) mod testing;

pub use classify::Classifier;
pub use crawl::CrawlDriver;
pub use discovery::LinkDiscovery;
pub use error::ScoutError;
pub use extract::ClassExtractor;
pub use parser::{ArticleParser, PageMode, ParsedPage};
pub use pipeline::VenueScout;
pub use postprocess::{deduplicate, JunkFilter};
pub use query::{QueryRequest, QueryResponse};
