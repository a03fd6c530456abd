//! Heuristic venue-type and cuisine classification.
//!
//! Everything here is pure: no I/O, no failure path. Unknown inputs resolve
//! to [`VenueType::Unknown`] or the `"unknown"` cuisine label.

use venuescout_config::HeuristicsConfig;
use venuescout_protocols::{RawVenueRecord, Venue, VenueType};

/// Cuisine label used when no hint matches.
pub const UNKNOWN_CUISINE: &str = "unknown";

/// Keyword tables for classification, lower-cased at construction.
#[derive(Debug, Clone)]
pub struct Classifier {
    cuisine_hints: Vec<String>,
    bar_keywords: Vec<String>,
    bar_context: Vec<String>,
    restaurant_keywords: Vec<String>,
    restaurant_context: Vec<String>,
}

fn lowered(table: &[String]) -> Vec<String> {
    table
        .iter()
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.to_lowercase())
        .collect()
}

/// Uppercase the first character, leave the rest alone.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Classifier {
    pub fn new(tables: &HeuristicsConfig) -> Self {
        Self {
            cuisine_hints: lowered(&tables.cuisine_hints),
            bar_keywords: lowered(&tables.bar_keywords),
            bar_context: lowered(&tables.bar_context),
            restaurant_keywords: lowered(&tables.restaurant_keywords),
            restaurant_context: lowered(&tables.restaurant_context),
        }
    }

    /// Decide bar vs restaurant from the name, description and page title.
    ///
    /// Keywords are looked up in all three; context phrases only in the
    /// description. When both sides hit, a name containing "bar" wins for bar.
    pub fn classify(&self, name: &str, description: &str, context_title: &str) -> VenueType {
        let name_lower = name.to_lowercase();
        let desc_lower = description.to_lowercase();
        let combined = format!(
            " {} {} {} ",
            name_lower,
            desc_lower,
            context_title.to_lowercase()
        );

        let hits = |keywords: &[String], context: &[String]| {
            keywords.iter().any(|k| combined.contains(k.as_str()))
                || context.iter().any(|k| desc_lower.contains(k.as_str()))
        };
        let bar_hit = hits(&self.bar_keywords, &self.bar_context);
        let rest_hit = hits(&self.restaurant_keywords, &self.restaurant_context);

        match (bar_hit, rest_hit) {
            (true, false) => VenueType::Bar,
            (false, true) => VenueType::Restaurant,
            (true, true) if name_lower.contains("bar") => VenueType::Bar,
            (true, true) => VenueType::Restaurant,
            (false, false) => VenueType::Unknown,
        }
    }

    /// First cuisine hint found in the description, capitalized.
    pub fn guess_cuisine(&self, description: &str) -> String {
        let desc_lower = description.to_lowercase();
        self.cuisine_hints
            .iter()
            .find(|hint| desc_lower.contains(hint.as_str()))
            .map(|hint| capitalize(hint))
            .unwrap_or_else(|| UNKNOWN_CUISINE.to_string())
    }

    /// Turn a parsed record into a final venue. The description is dropped.
    pub fn to_venue(&self, record: RawVenueRecord) -> Venue {
        let context_title = record.context_title.as_deref().unwrap_or("");
        let venue_type = self.classify(&record.name, &record.description, context_title);
        Venue {
            cuisine: self.guess_cuisine(&record.description),
            venue_type,
            source: record.source,
            name: record.name,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&HeuristicsConfig::default())
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
