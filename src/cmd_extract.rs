//! `extract` command.

use std::collections::BTreeMap;
use std::path::Path;

use venuescout_core::ClassExtractor;

use crate::cmd_search::print_json;

pub(crate) fn run_extract(
    html_path: &Path,
    item: Option<&str>,
    mappings: Vec<(String, String)>,
    pretty: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let html = std::fs::read_to_string(html_path)?;
    let extractor = ClassExtractor::new(mappings.into_iter().collect::<BTreeMap<_, _>>())?;

    match item {
        Some(selector) => print_json(&extractor.extract_multiple(&html, selector)?, pretty)?,
        None => print_json(&extractor.extract(&html), pretty)?,
    }
    Ok(true)
}
