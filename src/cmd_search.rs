//! `search` and `query` commands.

use std::io::Read;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use venuescout_config::ScoutConfig;
use venuescout_core::{QueryRequest, QueryResponse, VenueScout};
use venuescout_render_cdp::ChromeEngine;

fn scout(config: ScoutConfig) -> Result<VenueScout, Box<dyn std::error::Error>> {
    let engine = Arc::new(ChromeEngine::new(config.browser.clone()));
    Ok(VenueScout::new(config, engine)?)
}

pub(crate) fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

/// Returns whether the run succeeded.
pub(crate) async fn run_search(
    config: ScoutConfig,
    keywords: Vec<String>,
    full: bool,
    pretty: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scout = scout(config)?;
    info!(?keywords, "Starting venue search");

    if !full {
        let response = scout.query(&QueryRequest::new(keywords)).await;
        print_json(&response, pretty)?;
        return Ok(response.is_success());
    }

    match scout.search(&keywords).await {
        Ok(venues) => {
            print_json(&venues, pretty)?;
            Ok(true)
        }
        Err(e) => {
            print_json(&QueryResponse::from(&e), pretty)?;
            Ok(false)
        }
    }
}

/// Answer one JSON request read from stdin.
pub(crate) async fn run_query(
    config: ScoutConfig,
    pretty: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let response = match serde_json::from_str::<serde_json::Value>(&input) {
        Ok(request) => scout(config)?.query_value(request).await,
        Err(e) => QueryResponse::failure("invalid input", Some(e.to_string())),
    };
    print_json(&response, pretty)?;
    Ok(response.is_success())
}
