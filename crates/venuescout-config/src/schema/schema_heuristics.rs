//! Keyword tables and text patterns used to classify and filter venues.

use serde::{Deserialize, Serialize};

/// Declarative heuristic tables.
///
/// Order matters for `cuisine_hints`: the first hint found in a description wins.
/// Keyword entries are matched as substrings of lower-cased text, so the leading
/// space in `" bar"` keeps it from matching inside "crowbar".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicsConfig {
    #[serde(default = "default_cuisine_hints")]
    pub cuisine_hints: Vec<String>,

    /// Matched against name, description and page title together.
    #[serde(default = "default_bar_keywords")]
    pub bar_keywords: Vec<String>,

    /// Matched against the description only.
    #[serde(default = "default_bar_context")]
    pub bar_context: Vec<String>,

    #[serde(default = "default_restaurant_keywords")]
    pub restaurant_keywords: Vec<String>,

    #[serde(default = "default_restaurant_context")]
    pub restaurant_context: Vec<String>,

    /// Site chrome and navigation text that is never a venue name.
    #[serde(default = "default_junk_phrases")]
    pub junk_phrases: Vec<String>,

    #[serde(default = "default_min_name_len")]
    pub min_name_len: usize,

    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,

    /// Card headings that are section furniture rather than venues.
    #[serde(default = "default_map_name_exclusion")]
    pub map_name_exclusion: String,

    /// Card paragraph that is a street address.
    #[serde(default = "default_map_address_pattern")]
    pub map_address_pattern: String,

    /// Paragraph right after an article heading that is a street address.
    #[serde(default = "default_article_address_pattern")]
    pub article_address_pattern: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_cuisine_hints() -> Vec<String> {
    strings(&[
        "ramen",
        "sushi",
        "omakase",
        "pizza",
        "taco",
        "burger",
        "dumpling",
        "dim sum",
        "bagel",
        "barbecue",
        "bbq",
        "steak",
        "seafood",
        "oyster",
        "noodle",
        "korean",
        "japanese",
        "chinese",
        "sichuan",
        "cantonese",
        "taiwanese",
        "thai",
        "vietnamese",
        "filipino",
        "indian",
        "pakistani",
        "mexican",
        "peruvian",
        "colombian",
        "caribbean",
        "italian",
        "french",
        "spanish",
        "greek",
        "turkish",
        "lebanese",
        "israeli",
        "middle eastern",
        "mediterranean",
        "ethiopian",
        "west african",
        "georgian",
        "polish",
        "american",
        "southern",
        "vegan",
        "vegetarian",
        "deli",
        "bakery",
        "coffee",
    ])
}

fn default_bar_keywords() -> Vec<String> {
    strings(&[" bar", " pub", " tavern", " saloon", " taproom", " dive"])
}

fn default_bar_context() -> Vec<String> {
    strings(&["cocktail", "cheap drinks", "happy hour", "jukebox", "pint"])
}

fn default_restaurant_keywords() -> Vec<String> {
    strings(&[
        " restaurant",
        " steakhouse",
        " bistro",
        " cafe",
        " diner",
        " trattoria",
        " ristorante",
        " kitchen",
    ])
}

fn default_restaurant_context() -> Vec<String> {
    strings(&["chef", "menu", "dining room", "tasting", "course", "dish"])
}

fn default_junk_phrases() -> Vec<String> {
    strings(&[
        "newsletter",
        "sign up",
        "subscribe",
        "log in",
        "terms of",
        "privacy notice",
        "cookie policy",
        "about eater",
        "contact us",
        "community guidelines",
        "vox media",
        "follow eater",
        "site search",
        "more from",
        "most read",
        "the latest",
        "archive",
        "comment",
        "advertise",
        "jobs @",
        "press room",
        "masthead",
        "ethics",
        "licensing",
        "platform status",
        "methodology",
        "faq",
        "skip to main content",
        "log in or sign up",
        "site map",
        "accessibility",
        "cookie settings",
        "send us a tip",
        "eater.com",
        "eater ny",
    ])
}

fn default_min_name_len() -> usize {
    3
}

fn default_max_name_len() -> usize {
    30
}

fn default_map_name_exclusion() -> String {
    r"(?i)^(more in maps|related maps?|related|map points)".to_string()
}

fn default_map_address_pattern() -> String {
    r"^\d{2,4}\s+\w+".to_string()
}

fn default_article_address_pattern() -> String {
    r"(?i)^\d+\s.+\b(?:St|Street|Ave|Avenue|Road|Rd|Blvd|Boulevard|NYC?)\b".to_string()
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            cuisine_hints: default_cuisine_hints(),
            bar_keywords: default_bar_keywords(),
            bar_context: default_bar_context(),
            restaurant_keywords: default_restaurant_keywords(),
            restaurant_context: default_restaurant_context(),
            junk_phrases: default_junk_phrases(),
            min_name_len: default_min_name_len(),
            max_name_len: default_max_name_len(),
            map_name_exclusion: default_map_name_exclusion(),
            map_address_pattern: default_map_address_pattern(),
            article_address_pattern: default_article_address_pattern(),
        }
    }
}

impl HeuristicsConfig {
    /// Named regex patterns, for validation and compilation.
    pub fn patterns(&self) -> [(&'static str, &str); 3] {
        [
            ("heuristics.map_name_exclusion", &self.map_name_exclusion),
            ("heuristics.map_address_pattern", &self.map_address_pattern),
            ("heuristics.article_address_pattern", &self.article_address_pattern),
        ]
    }
}
