//! Class-name-keyed text extraction.
//!
//! A generic alternative to [`ArticleParser`](crate::parser::ArticleParser)
//! for pages without card or heading structure: each output key maps to a
//! CSS class, and every element carrying that class contributes its text.

use std::collections::BTreeMap;

use scraper::{Html, Selector};

use crate::error::{parse_selector, ScoutError};

/// Extracted values per key. A key with no matching element maps to an empty vec.
pub type Extracted = BTreeMap<String, Vec<String>>;

#[derive(Debug)]
pub struct ClassExtractor {
    fields: Vec<(String, Selector)>,
}

impl ClassExtractor {
    /// `mapping` is output key -> class name (without the leading dot).
    pub fn new(mapping: BTreeMap<String, String>) -> Result<Self, ScoutError> {
        let fields = mapping
            .into_iter()
            .map(|(key, class)| {
                let selector = parse_selector(&format!(".{}", class.trim()))?;
                Ok((key, selector))
            })
            .collect::<Result<Vec<_>, ScoutError>>()?;
        Ok(Self { fields })
    }

    /// Values for every key across the whole document.
    pub fn extract(&self, html: &str) -> Extracted {
        let doc = Html::parse_document(html);
        self.fields
            .iter()
            .map(|(key, selector)| {
                let values = doc.select(selector).map(trimmed_text).collect();
                (key.clone(), values)
            })
            .collect()
    }

    /// Values per item block. Items where no key matched are dropped.
    pub fn extract_multiple(
        &self,
        html: &str,
        item_selector: &str,
    ) -> Result<Vec<Extracted>, ScoutError> {
        if html.trim().is_empty() || item_selector.trim().is_empty() {
            return Ok(Vec::new());
        }
        let item = parse_selector(item_selector)?;
        let doc = Html::parse_document(html);

        let items = doc
            .select(&item)
            .filter_map(|block| {
                let mut any = false;
                let record: Extracted = self
                    .fields
                    .iter()
                    .map(|(key, selector)| {
                        let values: Vec<String> = block.select(selector).map(trimmed_text).collect();
                        any |= !values.is_empty();
                        (key.clone(), values)
                    })
                    .collect();
                any.then_some(record)
            })
            .collect();
        Ok(items)
    }
}

fn trimmed_text(el: scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
