//! Narrative layout: a heading per venue, then descriptive paragraphs.

use scraper::{ElementRef, Html};
use venuescout_protocols::{RawVenueRecord, Source};

use super::{element_text, ArticleParser};

const VENUE_SEPARATOR: &str = " at ";

impl ArticleParser {
    pub(super) fn parse_article(&self, doc: &Html, title: &str) -> Vec<RawVenueRecord> {
        doc.select(&self.article_heading)
            .filter_map(|heading| {
                let name = self.heading_venue_name(heading);
                if name.is_empty() {
                    return None;
                }
                let description = self.section_text(heading);
                Some(
                    RawVenueRecord::new(name, description, Source::Article)
                        .with_context_title(title),
                )
            })
            .collect()
    }

    /// Anchor text, else the part after the last " at ", else the whole heading.
    fn heading_venue_name(&self, heading: ElementRef<'_>) -> String {
        if let Some(anchor) = heading.select(&self.anchor).next() {
            return element_text(anchor);
        }
        let text = element_text(heading);
        match text.rsplit_once(VENUE_SEPARATOR) {
            Some((_, venue)) => venue.trim().to_string(),
            None => text,
        }
    }

    /// Paragraph text between this heading and the next one of the same level.
    fn section_text(&self, heading: ElementRef<'_>) -> String {
        let heading_tag = heading.value().name();
        let mut siblings = heading
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .peekable();

        let leads_with_address = siblings.peek().is_some_and(|first| {
            first.value().name() == "p" && self.article_address.is_match(&element_text(*first))
        });
        if leads_with_address {
            siblings.next();
        }

        siblings
            .take_while(|el| el.value().name() != heading_tag)
            .filter(|el| el.value().name() == "p")
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
