//! Junk filtering and name-keyed deduplication.

use std::collections::HashMap;

use venuescout_config::HeuristicsConfig;
use venuescout_protocols::Venue;

/// Drops names that are site chrome or implausibly short or long.
#[derive(Debug, Clone)]
pub struct JunkFilter {
    phrases: Vec<String>,
    min_len: usize,
    max_len: usize,
}

impl JunkFilter {
    pub fn new(tables: &HeuristicsConfig) -> Self {
        Self {
            phrases: tables
                .junk_phrases
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| p.to_lowercase())
                .collect(),
            min_len: tables.min_name_len,
            max_len: tables.max_name_len,
        }
    }

    /// Length is counted in characters on the trimmed name.
    pub fn is_junk(&self, name: &str) -> bool {
        let len = name.trim().chars().count();
        if len < self.min_len || len > self.max_len {
            return true;
        }
        let lower = name.to_lowercase();
        self.phrases.iter().any(|p| lower.contains(p.as_str()))
    }

    pub fn filter(&self, venues: Vec<Venue>) -> Vec<Venue> {
        venues.into_iter().filter(|v| !self.is_junk(&v.name)).collect()
    }
}

impl Default for JunkFilter {
    fn default() -> Self {
        Self::new(&HeuristicsConfig::default())
    }
}

/// Collapse venues sharing an exact name.
///
/// A name keeps the position of its first occurrence; the record stored there
/// is the last one seen.
pub fn deduplicate(venues: Vec<Venue>) -> Vec<Venue> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(venues.len());
    let mut out: Vec<Venue> = Vec::with_capacity(venues.len());

    for venue in venues {
        match slots.get(&venue.name) {
            Some(&idx) => out[idx] = venue,
            None => {
                slots.insert(venue.name.clone(), out.len());
                out.push(venue);
            }
        }
    }
    out
}
