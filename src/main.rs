//! venuescout - venue discovery over Eater NY list articles
//!
//! Main entry point for the venuescout CLI.

mod cli;
mod cmd_config;
mod cmd_extract;
mod cmd_search;

use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};

/// `~/.venuescout`, or `./.venuescout` without a home directory.
fn venuescout_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".venuescout")
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = venuescout_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("venuescout")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Flushes the file writer on exit.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        // Console on stderr; stdout is reserved for JSON results
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(true),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = cmd_config::load_config(cli.config.as_deref())?;

    let succeeded = match cli.command {
        Commands::Search {
            keywords,
            full,
            pretty,
        } => cmd_search::run_search(config, keywords, full, pretty).await?,
        Commands::Query { pretty } => cmd_search::run_query(config, pretty).await?,
        Commands::Extract {
            html,
            item,
            mappings,
            pretty,
        } => cmd_extract::run_extract(&html, item.as_deref(), mappings, pretty)?,
        Commands::Config { action } => cmd_config::run_config(action, &config)?,
    };

    if !succeeded {
        error!("Command finished with a failure result");
        std::process::exit(1);
    }
    Ok(())
}
