//! CLI definitions for venuescout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// venuescout CLI.
#[derive(Parser)]
#[command(name = "venuescout")]
#[command(about = "Find bars and restaurants mentioned in Eater NY list articles")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to config/default.toml when present)
    #[arg(short, long, global = true, env = "VENUESCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Search article titles for keywords and list the venues they mention
    Search {
        /// Keywords matched against article link text (case-insensitive)
        #[arg(required = true)]
        keywords: Vec<String>,

        /// Print full venue records instead of names only
        #[arg(long)]
        full: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Read a `{"keywords": [...]}` request from stdin and answer it
    Query {
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Extract text by CSS class from a saved HTML file
    Extract {
        /// HTML file to read
        #[arg(long)]
        html: PathBuf,

        /// Selector for repeated item blocks; extract per item when set
        #[arg(long)]
        item: Option<String>,

        /// Output key to class name mappings
        #[arg(required = true, value_parser = parse_mapping)]
        mappings: Vec<(String, String)>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Validate the effective configuration
    Check,

    /// Print the effective configuration as TOML
    Show,
}

/// Parse `key=class`.
pub(crate) fn parse_mapping(s: &str) -> Result<(String, String), String> {
    let (key, class) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=CLASS, got '{}'", s))?;
    let (key, class) = (key.trim(), class.trim());
    if key.is_empty() || class.is_empty() {
        return Err(format!("expected KEY=CLASS, got '{}'", s));
    }
    Ok((key.to_string(), class.to_string()))
}
