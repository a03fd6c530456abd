//! Venue data model.

use serde::{Deserialize, Serialize};

/// Where a venue mention was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Structured card layout.
    Map,
    /// Narrative heading-and-paragraph layout.
    Article,
    Unknown,
}

/// Heuristic venue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Bar,
    Restaurant,
    Unknown,
}

impl std::fmt::Display for VenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VenueType::Bar => "bar",
            VenueType::Restaurant => "restaurant",
            VenueType::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A classified venue mention.
///
/// Built once by the classification step and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub name: String,
    pub cuisine: String,
    pub source: Source,
    pub venue_type: VenueType,
}

/// A venue mention straight out of the parser, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVenueRecord {
    pub name: String,
    pub description: String,
    /// Page title, used as extra classification context.
    pub context_title: Option<String>,
    pub source: Source,
}

impl RawVenueRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>, source: Source) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            context_title: None,
            source,
        }
    }

    pub fn with_context_title(mut self, title: impl Into<String>) -> Self {
        self.context_title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_serializes_camel_case() {
        let venue = Venue {
            name: "Sunny's".to_string(),
            cuisine: "unknown".to_string(),
            source: Source::Article,
            venue_type: VenueType::Bar,
        };
        let json = serde_json::to_value(&venue).unwrap();
        assert_eq!(json["venueType"], "bar");
        assert_eq!(json["source"], "article");
        assert_eq!(json["name"], "Sunny's");
    }

    #[test]
    fn test_raw_record_builder() {
        let record = RawVenueRecord::new("Lucali", "pizza in carroll gardens", Source::Map)
            .with_context_title("The Best Pizza in NYC");
        assert_eq!(record.context_title.as_deref(), Some("The Best Pizza in NYC"));
        assert_eq!(record.source, Source::Map);
    }

    #[test]
    fn test_venue_type_display() {
        assert_eq!(VenueType::Restaurant.to_string(), "restaurant");
        assert_eq!(VenueType::Unknown.to_string(), "unknown");
    }
}
