//! Dual-mode article parser.
//!
//! Pages built from repeated venue cards ("map" layout) are parsed card by
//! card; everything else is treated as a narrative listicle where each venue
//! is introduced by a heading followed by paragraphs. Both modes work on the
//! rendered HTML snapshot, so they are plain functions over a string.

mod article;
mod map;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use venuescout_config::ScoutConfig;
use venuescout_protocols::{PageHandle, RawVenueRecord, RenderError};

use crate::error::{compile_pattern, parse_selector, ScoutError};

/// Structural layout detected on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Map,
    Article,
}

/// Records extracted from one page.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    pub mode: PageMode,
    pub records: Vec<RawVenueRecord>,
}

/// Parser with selectors and patterns compiled once.
#[derive(Debug)]
pub struct ArticleParser {
    map_card: Selector,
    map_heading: Selector,
    map_address_class: String,
    map_address: Regex,
    map_exclusion: Regex,
    copy_link: Regex,
    rank_marker: Regex,
    article_heading: Selector,
    article_address: Regex,
    paragraph: Selector,
    anchor: Selector,
}

impl ArticleParser {
    pub fn new(config: &ScoutConfig) -> Result<Self, ScoutError> {
        let s = &config.selectors;
        let h = &config.heuristics;
        Ok(Self {
            map_card: parse_selector(&s.map_card)?,
            map_heading: parse_selector(&s.map_heading)?,
            map_address_class: s.map_address_class.clone(),
            map_address: compile_pattern("heuristics.map_address_pattern", &h.map_address_pattern)?,
            map_exclusion: compile_pattern("heuristics.map_name_exclusion", &h.map_name_exclusion)?,
            copy_link: compile_pattern("copy_link", map::COPY_LINK_PATTERN)?,
            rank_marker: compile_pattern("rank_marker", map::RANK_MARKER_PATTERN)?,
            article_heading: parse_selector(&s.article_heading)?,
            article_address: compile_pattern(
                "heuristics.article_address_pattern",
                &h.article_address_pattern,
            )?,
            paragraph: parse_selector("p")?,
            anchor: parse_selector("a")?,
        })
    }

    /// Card layout if at least one card is present.
    pub fn detect_mode(&self, doc: &Html) -> PageMode {
        if doc.select(&self.map_card).next().is_some() {
            PageMode::Map
        } else {
            PageMode::Article
        }
    }

    /// Parse an HTML snapshot. Malformed cards or headings are skipped.
    pub fn parse_html(&self, html: &str, title: &str) -> ParsedPage {
        let doc = Html::parse_document(html);
        let mode = self.detect_mode(&doc);
        let records = match mode {
            PageMode::Map => self.parse_map(&doc, title),
            PageMode::Article => self.parse_article(&doc, title),
        };
        ParsedPage { mode, records }
    }

    /// Snapshot a rendered page and parse it.
    pub async fn parse_page(&self, page: &dyn PageHandle) -> Result<ParsedPage, RenderError> {
        let title = page.title().await?;
        let html = page.content().await?;
        let parsed = self.parse_html(&html, &title);
        debug!(
            url = page.url(),
            mode = ?parsed.mode,
            records = parsed.records.len(),
            "Parsed article page"
        );
        Ok(parsed)
    }
}

/// Concatenated text content with whitespace runs collapsed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
