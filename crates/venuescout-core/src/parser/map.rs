//! Card ("map") layout: one venue per card.

use scraper::Html;
use venuescout_protocols::{RawVenueRecord, Source};

use super::{element_text, ArticleParser};

/// Label the site renders inside every card heading.
pub(super) const COPY_LINK_PATTERN: &str = "(?i)copy link";
/// Leading rank marker such as "# 14 ".
pub(super) const RANK_MARKER_PATTERN: &str = r"^#\s*\d*\s*";

const COPY_LINK: &str = "Copy Link";

impl ArticleParser {
    pub(super) fn parse_map(&self, doc: &Html, title: &str) -> Vec<RawVenueRecord> {
        let mut records = Vec::new();

        for card in doc.select(&self.map_card) {
            let Some(heading) = card.select(&self.map_heading).next() else {
                continue;
            };

            let heading_text = element_text(heading);
            let without_label = self.copy_link.replacen(&heading_text, 1, "");
            let name = self.rank_marker.replacen(&without_label, 1, "");
            let name = name.trim();
            if name.is_empty() || self.map_exclusion.is_match(name) {
                continue;
            }

            let description = card
                .select(&self.paragraph)
                .filter(|p| {
                    !p.value()
                        .classes()
                        .any(|class| class == self.map_address_class)
                })
                .map(element_text)
                .filter(|text| {
                    !text.is_empty() && text != COPY_LINK && !self.map_address.is_match(text)
                })
                .collect::<Vec<_>>()
                .join(" ");

            records.push(
                RawVenueRecord::new(name, description, Source::Map).with_context_title(title),
            );
        }

        records
    }
}
